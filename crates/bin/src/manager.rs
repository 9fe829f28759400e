//! Session manager creation and CLI authentication.

use tracker::{OwnerMode, SessionHandle, SessionManager, TrackerConfig};

use crate::cli::{CredentialArgs, StoreArgs};

/// Build the session manager described by the store arguments.
pub fn create_manager(args: &StoreArgs) -> SessionManager {
    let config = TrackerConfig::new(&args.data_dir)
        .with_owner_mode(args.mode.into())
        .with_password_scheme(args.password_scheme.into());
    tracing::debug!(
        data_dir = %config.data_dir().display(),
        mode = %config.owner_mode,
        "using data directory"
    );
    SessionManager::new(config)
}

/// Open the records a CLI command operates on.
///
/// Single-owner mode ignores credentials. Multi-user mode requires both a
/// username and a password.
pub fn open_session(
    manager: &SessionManager,
    credentials: &CredentialArgs,
) -> Result<SessionHandle, Box<dyn std::error::Error>> {
    match manager.config().owner_mode {
        OwnerMode::Single => Ok(manager.open_global()?),
        OwnerMode::Multi => {
            let (Some(user), Some(password)) = (&credentials.user, &credentials.password) else {
                return Err(
                    "multi-user mode requires --user and --password (or TRACKER_USER and TRACKER_PASSWORD)"
                        .into(),
                );
            };
            Ok(manager.log_in(user, password)?)
        }
    }
}
