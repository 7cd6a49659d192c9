//! Role registry and capability resolver.
//!
//! Each role is granted the union of a few permission bundles plus individual tags.
//! Capability checks and navigation visibility are both answered from that set, so the
//! two can never disagree. Everything here is a pure function of the role.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::auth::models::{Permission, PermissionSet, Role};
use crate::services::views::{View, CATALOG};

use Permission::*;

const EVENT_PLANNING: &[Permission] = &[ViewEvents, CreateEvents];
const EVENT_LOGISTICS: &[Permission] = &[ManageVendors, ManageVenues];
const FINANCE: &[Permission] = &[ViewBudgets, EditBudgets, ManageInvoices];
const SPONSOR_SALES: &[Permission] = &[ViewSponsorships, ManageSponsorships, ContactsFull];
const OVERSIGHT: &[Permission] = &[ViewReports, ExportData, ViewAuditLogs];
const CREATIVE: &[Permission] = &[ViewTasks, UploadFiles];
const DELIVERY: &[Permission] = &[ViewEvents, ViewTasks, ContactsLimited];
const PEOPLE: &[Permission] = &[ManageUsers];

/// The bundles and single tags that make up a role's grant.
fn grant_parts(role: Role) -> &'static [&'static [Permission]] {
    match role {
        Role::Ceo => &[&Permission::ALL],
        Role::Admin => &[
            EVENT_PLANNING,
            EVENT_LOGISTICS,
            SPONSOR_SALES,
            OVERSIGHT,
            CREATIVE,
            PEOPLE,
            &[ViewBudgets, ContactsLimited, ManageCampaigns, ManageSystems],
        ],
        Role::Ae => &[SPONSOR_SALES, DELIVERY, &[UploadFiles, ViewReports]],
        Role::Designer => &[CREATIVE],
        Role::ItManager => &[CREATIVE, PEOPLE, &[ManageSystems, ViewAuditLogs]],
        Role::EventManager => &[
            EVENT_PLANNING,
            EVENT_LOGISTICS,
            DELIVERY,
            &[UploadFiles, ViewBudgets],
        ],
        Role::ProjectManager => &[DELIVERY, CREATIVE, &[ViewReports]],
        Role::FinanceManager => &[FINANCE, OVERSIGHT, &[ViewEvents]],
        Role::SalesManager => &[SPONSOR_SALES, DELIVERY, &[ViewReports, ExportData]],
        Role::MarketingManager => &[DELIVERY, CREATIVE, &[ManageCampaigns, ViewReports]],
        Role::HrManager => &[PEOPLE, &[ViewTasks, ContactsLimited]],
        Role::OperationsManager => &[
            EVENT_PLANNING,
            EVENT_LOGISTICS,
            DELIVERY,
            &[ApproveEvents, ViewBudgets],
        ],
        Role::SponsorshipManager => &[SPONSOR_SALES, DELIVERY, &[ViewReports]],
        Role::ContentWriter => &[CREATIVE, &[ManageCampaigns]],
        Role::Coordinator => &[DELIVERY],
    }
}

/// Every permission tag granted to `role`.
pub fn grants(role: Role) -> PermissionSet {
    grant_parts(role)
        .iter()
        .flat_map(|part| part.iter().copied())
        .collect()
}

/// The resolved permission set for one role, with the boolean checks views use to gate
/// their controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Capabilities {
    permissions: PermissionSet,
}

impl Capabilities {
    /// Denies everything. This is what unknown roles resolve to.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn allows(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }

    /// True when any of `permissions` is held, or when the list is empty.
    pub fn allows_any(&self, permissions: &[Permission]) -> bool {
        permissions.is_empty() || permissions.iter().any(|p| self.allows(*p))
    }

    pub fn permissions(&self) -> &PermissionSet {
        &self.permissions
    }

    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }

    pub fn can_view_events(&self) -> bool {
        self.allows(ViewEvents)
    }

    pub fn can_create_events(&self) -> bool {
        self.allows(CreateEvents)
    }

    pub fn can_approve_events(&self) -> bool {
        self.allows(ApproveEvents)
    }

    pub fn can_view_budgets(&self) -> bool {
        self.allows(ViewBudgets)
    }

    pub fn can_edit_budgets(&self) -> bool {
        self.allows(EditBudgets)
    }

    pub fn can_manage_sponsorships(&self) -> bool {
        self.allows(ManageSponsorships)
    }

    pub fn can_access_contacts_full(&self) -> bool {
        self.allows(ContactsFull)
    }

    pub fn can_access_contacts_limited(&self) -> bool {
        self.allows(ContactsLimited)
    }

    pub fn can_export_data(&self) -> bool {
        self.allows(ExportData)
    }

    pub fn can_view_audit_logs(&self) -> bool {
        self.allows(ViewAuditLogs)
    }

    pub fn can_manage_users(&self) -> bool {
        self.allows(ManageUsers)
    }
}

impl FromIterator<Permission> for Capabilities {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        Self {
            permissions: iter.into_iter().collect(),
        }
    }
}

/// Serialized as `{ "<tag>": bool, .. }` covering every known tag, so clients never have
/// to treat a missing key as false.
impl Serialize for Capabilities {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Permission::ALL.len()))?;
        for permission in Permission::ALL {
            map.serialize_entry(permission.as_str(), &self.allows(permission))?;
        }
        map.end()
    }
}

/// Resolves capabilities for a role. `None` (an unrecognised role) gets nothing.
pub fn capabilities_for(role: Option<Role>) -> Capabilities {
    match role {
        Some(role) => Capabilities {
            permissions: grants(role),
        },
        None => Capabilities::none(),
    }
}

/// Resolves capabilities for a raw role string. Never fails.
pub fn capabilities_for_name(role: &str) -> Capabilities {
    capabilities_for(role.parse().ok())
}

/// One entry of the side navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub id: View,
    pub label: &'static str,
    pub icon: &'static str,
}

impl From<View> for NavItem {
    fn from(view: View) -> Self {
        Self {
            id: view,
            label: view.label(),
            icon: view.icon(),
        }
    }
}

/// Navigation entries visible to `role`, in catalog order. Empty for an unknown role.
pub fn nav_items_for(role: Option<Role>) -> Vec<NavItem> {
    match role {
        Some(role) => nav_items(&capabilities_for(Some(role))),
        None => Vec::new(),
    }
}

pub fn nav_items_for_name(role: &str) -> Vec<NavItem> {
    nav_items_for(role.parse().ok())
}

fn nav_items(capabilities: &Capabilities) -> Vec<NavItem> {
    CATALOG
        .iter()
        .filter(|def| def.in_nav && capabilities.allows_any(def.gate))
        .map(|def| NavItem::from(def.view))
        .collect()
}

/// One row of the role/permission matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleGrant {
    pub role: Role,
    pub name: &'static str,
    pub permissions: Vec<Permission>,
}

/// The full role/permission matrix, in role declaration order.
pub fn matrix() -> Vec<RoleGrant> {
    Role::ALL
        .into_iter()
        .map(|role| RoleGrant {
            role,
            name: role.display_name(),
            permissions: grants(role).into_iter().collect(),
        })
        .collect()
}
