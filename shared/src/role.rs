//! Role Model
//!
//! The role set is closed: four roles inherited from the legacy HR system,
//! each mapping to a fixed capability set. The sidebar menu is derived from
//! the role alone, so menu construction is a pure function and testable
//! without any server state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed set of user roles
///
/// Serialized with the legacy wire names so existing seed data and clients
/// keep working (`NhanVien` = employee, `TruongBoPhan` = supervisor,
/// `QuanLyNhanSu` / `BoPhanTuyenDung` = HR roles).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "NhanVien")]
    Employee,
    #[serde(rename = "TruongBoPhan")]
    Supervisor,
    #[serde(rename = "QuanLyNhanSu")]
    HrManager,
    #[serde(rename = "BoPhanTuyenDung")]
    Recruiter,
}

/// Error when parsing an unknown role string
#[derive(Debug, Error)]
#[error("unknown role: {0}")]
pub struct RoleParseError(pub String);

impl Role {
    /// Legacy wire name of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "NhanVien",
            Role::Supervisor => "TruongBoPhan",
            Role::HrManager => "QuanLyNhanSu",
            Role::Recruiter => "BoPhanTuyenDung",
        }
    }

    /// Capabilities granted to this role
    ///
    /// Base operations (login, menu, own profile) need no capability;
    /// everything else is gated on one of these.
    pub fn capabilities(&self) -> &'static [&'static str] {
        match self {
            Role::Employee => &["leave:submit"],
            Role::Supervisor => &["leave:approve"],
            Role::HrManager | Role::Recruiter => &["contracts:view"],
        }
    }

    /// Check whether the role grants a capability
    pub fn has_capability(&self, capability: &str) -> bool {
        self.capabilities().contains(&capability)
    }
}

impl std::str::FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NhanVien" => Ok(Role::Employee),
            "TruongBoPhan" => Ok(Role::Supervisor),
            "QuanLyNhanSu" => Ok(Role::HrManager),
            "BoPhanTuyenDung" => Ok(Role::Recruiter),
            other => Err(RoleParseError(other.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One sidebar menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub id: &'static str,
    pub label: &'static str,
}

/// Fixed base entry, always present
const MENU_HOME: MenuEntry = MenuEntry {
    id: "home",
    label: "Trang chủ",
};

/// Derive the sidebar menu for a role
///
/// Pure function: a fixed base entry plus the role-gated entries. Views with
/// no granted capability never appear.
pub fn menu_for_role(role: Role) -> Vec<MenuEntry> {
    let mut menu = vec![MENU_HOME];

    match role {
        Role::Employee => menu.push(MenuEntry {
            id: "leave-submission",
            label: "Xin Nghỉ Phép",
        }),
        Role::Supervisor => menu.push(MenuEntry {
            id: "leave-approval",
            label: "Duyệt Nghỉ Phép",
        }),
        Role::HrManager | Role::Recruiter => menu.push(MenuEntry {
            id: "contracts",
            label: "Hợp Đồng & Báo Cáo",
        }),
    }

    menu
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_role_round_trip() {
        for role in [
            Role::Employee,
            Role::Supervisor,
            Role::HrManager,
            Role::Recruiter,
        ] {
            assert_eq!(Role::from_str(role.as_str()).unwrap(), role);
        }
        assert!(Role::from_str("Admin").is_err());
    }

    #[test]
    fn test_employee_menu() {
        let ids: Vec<_> = menu_for_role(Role::Employee)
            .iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec!["home", "leave-submission"]);
    }

    #[test]
    fn test_supervisor_menu_excludes_other_views() {
        let ids: Vec<_> = menu_for_role(Role::Supervisor)
            .iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec!["home", "leave-approval"]);
        assert!(!ids.contains(&"leave-submission"));
        assert!(!ids.contains(&"contracts"));
    }

    #[test]
    fn test_hr_roles_share_contract_menu() {
        for role in [Role::HrManager, Role::Recruiter] {
            let ids: Vec<_> = menu_for_role(role).iter().map(|m| m.id).collect();
            assert_eq!(ids, vec!["home", "contracts"]);
        }
    }

    #[test]
    fn test_capabilities_are_disjoint_per_role() {
        assert!(Role::Employee.has_capability("leave:submit"));
        assert!(!Role::Employee.has_capability("leave:approve"));
        assert!(!Role::Employee.has_capability("contracts:view"));

        assert!(Role::Supervisor.has_capability("leave:approve"));
        assert!(!Role::Supervisor.has_capability("leave:submit"));

        assert!(Role::HrManager.has_capability("contracts:view"));
        assert!(Role::Recruiter.has_capability("contracts:view"));
    }
}
