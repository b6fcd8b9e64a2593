//! Session state and route gating
//!
//! The only state that survives between runs is whether onboarding has been
//! completed. Routing is a pure function of that state and the requested path.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};

const SESSION_FILE: &str = "session.json";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub onboarding_complete: bool,
}

impl SessionState {
    pub fn completed() -> Self {
        Self {
            onboarding_complete: true,
        }
    }
}

/// Named views of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Root,
    Onboarding,
    YouthDashboard,
    ParentDashboard,
    SavingsGoals,
    TransactionHistory,
    ProfileHub,
}

impl Route {
    pub fn all() -> &'static [Route] {
        &[
            Self::Root,
            Self::Onboarding,
            Self::YouthDashboard,
            Self::ParentDashboard,
            Self::SavingsGoals,
            Self::TransactionHistory,
            Self::ProfileHub,
        ]
    }

    pub fn path(&self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::Onboarding => "/onboarding-process",
            Self::YouthDashboard => "/youth-dashboard",
            Self::ParentDashboard => "/parent-dashboard",
            Self::SavingsGoals => "/savings-goals-manager",
            Self::TransactionHistory => "/transaction-history-and-insights",
            Self::ProfileHub => "/profile-and-parental-hub",
        }
    }

    /// Match a request path; a trailing slash is ignored
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };
        Self::all().iter().copied().find(|r| r.path() == normalized)
    }

    /// Views that require completed onboarding
    pub fn is_protected(&self) -> bool {
        !matches!(self, Self::Root | Self::Onboarding)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// What the host should do with a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "action", content = "route")]
pub enum RouteTarget {
    Render(Route),
    Redirect(Route),
    NotFound,
}

/// Decide which view a path resolves to for the given session
pub fn route(session: &SessionState, path: &str) -> RouteTarget {
    let Some(requested) = Route::from_path(path) else {
        return RouteTarget::NotFound;
    };

    match requested {
        Route::Root if session.onboarding_complete => RouteTarget::Redirect(Route::YouthDashboard),
        Route::Root => RouteTarget::Redirect(Route::Onboarding),
        Route::Onboarding => RouteTarget::Render(Route::Onboarding),
        r if session.onboarding_complete => RouteTarget::Render(r),
        _ => RouteTarget::Redirect(Route::Onboarding),
    }
}

/// Session flag persisted as a small JSON file
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store inside a data directory
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(SESSION_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored state; a missing file means onboarding has not happened
    pub fn load(&self) -> Result<SessionState> {
        if !self.path.exists() {
            debug!("No session file at {}", self.path.display());
            return Ok(SessionState::default());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Write the state atomically (temp file in the same dir, then rename)
    pub fn save(&self, state: &SessionState) -> Result<()> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)?;

        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, state)?;
        tmp.write_all(b"\n")?;
        tmp.persist(&self.path).map_err(|e| Error::Io(e.error))?;

        info!(
            "Saved session (onboarding_complete={}) to {}",
            state.onboarding_complete,
            self.path.display()
        );
        Ok(())
    }

    pub fn mark_complete(&self) -> Result<()> {
        self.save(&SessionState::completed())
    }

    /// Forget the stored state
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            info!("Cleared session at {}", self.path.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_redirects_by_state() {
        assert_eq!(
            route(&SessionState::default(), "/"),
            RouteTarget::Redirect(Route::Onboarding)
        );
        assert_eq!(
            route(&SessionState::completed(), "/"),
            RouteTarget::Redirect(Route::YouthDashboard)
        );
    }

    #[test]
    fn test_protected_routes_gate_on_onboarding() {
        for route_ in Route::all().iter().filter(|r| r.is_protected()) {
            assert_eq!(
                route(&SessionState::default(), route_.path()),
                RouteTarget::Redirect(Route::Onboarding)
            );
            assert_eq!(
                route(&SessionState::completed(), route_.path()),
                RouteTarget::Render(*route_)
            );
        }
    }

    #[test]
    fn test_onboarding_always_renders() {
        for state in [SessionState::default(), SessionState::completed()] {
            assert_eq!(
                route(&state, "/onboarding-process"),
                RouteTarget::Render(Route::Onboarding)
            );
        }
    }

    #[test]
    fn test_unknown_path_not_found() {
        assert_eq!(route(&SessionState::completed(), "/nope"), RouteTarget::NotFound);
        assert_eq!(route(&SessionState::default(), ""), RouteTarget::NotFound);
    }

    #[test]
    fn test_trailing_slash() {
        assert_eq!(Route::from_path("/youth-dashboard/"), Some(Route::YouthDashboard));
        assert_eq!(Route::from_path("/"), Some(Route::Root));
    }

    #[test]
    fn test_store_roundtrip_and_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::in_dir(&dir.path().join("nested"));

        assert_eq!(store.load().unwrap(), SessionState::default());
        store.mark_complete().unwrap();
        assert!(store.load().unwrap().onboarding_complete);

        store.clear().unwrap();
        assert!(!store.path().exists());
        assert!(!store.load().unwrap().onboarding_complete);
        // Clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_store_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::in_dir(dir.path());
        fs::write(store.path(), "not json").unwrap();
        assert!(matches!(store.load(), Err(Error::Json(_))));
    }
}
