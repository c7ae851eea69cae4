use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Permission tier stored on a user document.
///
/// The wire representation matches the tags the backend stores:
/// `generaluser`, `departmentadmin` and `overalladmin`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    GeneralUser,
    DepartmentAdmin,
    OverallAdmin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::GeneralUser => "generaluser",
            Role::DepartmentAdmin => "departmentadmin",
            Role::OverallAdmin => "overalladmin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "generaluser" => Ok(Role::GeneralUser),
            "departmentadmin" => Ok(Role::DepartmentAdmin),
            "overalladmin" => Ok(Role::OverallAdmin),
            other => Err(format!(
                "unknown role '{}' (expected generaluser, departmentadmin or overalladmin)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_through_str() {
        for role in [Role::GeneralUser, Role::DepartmentAdmin, Role::OverallAdmin] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_role_parse_is_case_insensitive() {
        assert_eq!("OverallAdmin".parse::<Role>().unwrap(), Role::OverallAdmin);
        assert_eq!("  generaluser ".parse::<Role>().unwrap(), Role::GeneralUser);
    }

    #[test]
    fn test_role_parse_rejects_unknown() {
        assert!("superuser".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_serializes_to_wire_tag() {
        let json = serde_json::to_string(&Role::DepartmentAdmin).unwrap();
        assert_eq!(json, "\"departmentadmin\"");
    }
}
