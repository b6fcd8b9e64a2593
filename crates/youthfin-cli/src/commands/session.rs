//! Session command implementations (route, reset)

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use youthfin_core::{route, RouteTarget, SessionStore};

pub fn cmd_route(data_dir: &Path, path: &str) -> Result<()> {
    let store = SessionStore::in_dir(data_dir);
    let session = store
        .load()
        .with_context(|| format!("Failed to read session from {}", store.path().display()))?;

    match route(&session, path) {
        RouteTarget::Render(view) => println!("render {}", view),
        RouteTarget::Redirect(view) => println!("redirect {}", view),
        RouteTarget::NotFound => println!("not found"),
    }

    Ok(())
}

pub fn cmd_reset(data_dir: &Path, yes: bool) -> Result<()> {
    let store = SessionStore::in_dir(data_dir);

    if !yes {
        print!("⚠️  This will forget that onboarding was completed.\n\n");
        print!("Are you sure? [y/N] ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    store
        .clear()
        .with_context(|| format!("Failed to clear session at {}", store.path().display()))?;
    println!("✅ Session reset. Protected views now redirect to onboarding.");

    Ok(())
}
