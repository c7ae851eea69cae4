use serde::{Deserialize, Serialize};

use super::role::Role;

/// A user document as stored in the `users` collection.
///
/// Documents are created by merge-writes, so every field is optional: a
/// document written by another client may carry any subset of these.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UserRoleRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// The typed partial record sent by a role assignment.
///
/// `department` is omitted from the wire entirely when `None`, so a merge
/// never clears a previously written department.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RolePatch {
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_omits_absent_department() {
        let patch = RolePatch {
            role: Role::GeneralUser,
            department: None,
            updated_at: "2024-01-01T00:00:00+00:00".to_string(),
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert!(json.get("department").is_none());
        assert_eq!(json["role"], "generaluser");
        assert_eq!(json["updatedAt"], "2024-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_patch_includes_department_when_set() {
        let patch = RolePatch {
            role: Role::DepartmentAdmin,
            department: Some("water".to_string()),
            updated_at: "2024-01-01T00:00:00+00:00".to_string(),
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json["department"], "water");
    }

    #[test]
    fn test_record_tolerates_missing_fields() {
        let rec: UserRoleRecord = serde_json::from_str("{}").unwrap();
        assert!(rec.role.is_none());
        assert!(rec.department.is_none());
        assert!(rec.updated_at.is_none());
    }
}
