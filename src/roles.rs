//! The two role operations: assignment and verification.
//!
//! Both are single-call wrappers over the capability traits in
//! [`crate::backend`]; the caller supplies the store/session handles and
//! sequences awaits. Assignment surfaces backend failures to the caller;
//! verification swallows them and reports `None`.

use chrono::Utc;

use crate::backend::{BackendError, SessionProvider, UserRecordStore};
use crate::models::{Role, RoleCheck, RolePatch};

/// Assign a role (and optionally a department) to a user record.
///
/// Performs one merge-write against the `users` collection: the document is
/// created when absent, and fields not named by the patch keep their prior
/// values. A blank department is treated as absent, so it is never written.
///
/// # Errors
///
/// Any backend failure is logged and returned to the caller unwrapped.
pub async fn setup_user_role<S: UserRecordStore>(
    store: &S,
    uid: &str,
    role: Role,
    department: Option<&str>,
) -> Result<(), BackendError> {
    let department = department
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string);

    let patch = RolePatch {
        role,
        department,
        updated_at: Utc::now().to_rfc3339(),
    };

    match store.merge(uid, &patch).await {
        Ok(()) => {
            tracing::info!("Assigned role '{}' to user {}", role, uid);
            Ok(())
        }
        Err(e) => {
            tracing::error!(%e, "Failed to assign role '{}' to user {}", role, uid);
            Err(e)
        }
    }
}

/// Look up the current session's role.
///
/// Returns `None` when no session is active, and `Some` with the session's
/// uid otherwise — with `role`/`department` unset when the user has no
/// document yet. Backend failures are logged and reported as `None`, never
/// as an error.
pub async fn verify_current_user_role<P, S>(session: &P, store: &S) -> Option<RoleCheck>
where
    P: SessionProvider,
    S: UserRecordStore,
{
    let uid = match session.current_user_id().await {
        Ok(Some(uid)) => uid,
        Ok(None) => {
            tracing::info!("No active session");
            return None;
        }
        Err(e) => {
            tracing::error!(%e, "Failed to read current session");
            return None;
        }
    };

    match store.get(&uid).await {
        Ok(Some(record)) => {
            tracing::info!(
                "User {} has role '{}'",
                uid,
                record.role.map(|r| r.to_string()).unwrap_or_else(|| "(none)".to_string())
            );
            Some(RoleCheck {
                uid,
                role: record.role,
                department: record.department,
            })
        }
        Ok(None) => {
            tracing::info!("User {} has no role document", uid);
            Some(RoleCheck {
                uid,
                role: None,
                department: None,
            })
        }
        Err(e) => {
            tracing::error!(%e, "Failed to fetch role document for user {}", uid);
            None
        }
    }
}
