pub mod role;
pub mod role_check;
pub mod user_role_record;

// Re-export commonly used types
pub use role::Role;
pub use role_check::RoleCheck;
pub use user_role_record::{RolePatch, UserRoleRecord};
