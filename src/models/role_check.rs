use serde::{Deserialize, Serialize};

use super::role::Role;

/// Result of looking up the current session's role.
///
/// `role` and `department` are both `None` when the session's user has no
/// document yet; that is a valid outcome, not an error.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoleCheck {
    pub uid: String,
    pub role: Option<Role>,
    pub department: Option<String>,
}
