//! Data structures for access-control entities.
//!
//! This module defines the closed sets of roles and permission tags, and the identity
//! a session holds. Role strings coming from the directory are parsed here and nowhere
//! else.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use confops_adapters::UserRecord;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The category assigned to a user. One user has exactly one role at a time; roles do
/// not inherit from each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Ceo,
    Admin,
    /// Account executive.
    Ae,
    Designer,
    ItManager,
    EventManager,
    ProjectManager,
    FinanceManager,
    SalesManager,
    MarketingManager,
    HrManager,
    OperationsManager,
    SponsorshipManager,
    ContentWriter,
    Coordinator,
}

impl Role {
    pub const ALL: [Role; 15] = [
        Role::Ceo,
        Role::Admin,
        Role::Ae,
        Role::Designer,
        Role::ItManager,
        Role::EventManager,
        Role::ProjectManager,
        Role::FinanceManager,
        Role::SalesManager,
        Role::MarketingManager,
        Role::HrManager,
        Role::OperationsManager,
        Role::SponsorshipManager,
        Role::ContentWriter,
        Role::Coordinator,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Ceo => "ceo",
            Role::Admin => "admin",
            Role::Ae => "ae",
            Role::Designer => "designer",
            Role::ItManager => "it_manager",
            Role::EventManager => "event_manager",
            Role::ProjectManager => "project_manager",
            Role::FinanceManager => "finance_manager",
            Role::SalesManager => "sales_manager",
            Role::MarketingManager => "marketing_manager",
            Role::HrManager => "hr_manager",
            Role::OperationsManager => "operations_manager",
            Role::SponsorshipManager => "sponsorship_manager",
            Role::ContentWriter => "content_writer",
            Role::Coordinator => "coordinator",
        }
    }

    /// Human readable name, used by the user switcher.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Ceo => "CEO",
            Role::Admin => "Administrator",
            Role::Ae => "Account Executive",
            Role::Designer => "Designer",
            Role::ItManager => "IT Manager",
            Role::EventManager => "Event Manager",
            Role::ProjectManager => "Project Manager",
            Role::FinanceManager => "Finance Manager",
            Role::SalesManager => "Sales Manager",
            Role::MarketingManager => "Marketing Manager",
            Role::HrManager => "HR Manager",
            Role::OperationsManager => "Operations Manager",
            Role::SponsorshipManager => "Sponsorship Manager",
            Role::ContentWriter => "Content Writer",
            Role::Coordinator => "Coordinator",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// An atomic permission tag. Roles are granted sets of these, and every capability check
/// and nav entry is decided by tag membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    ViewEvents,
    CreateEvents,
    ApproveEvents,
    ViewTasks,
    ViewBudgets,
    EditBudgets,
    ViewSponsorships,
    ManageSponsorships,
    ContactsFull,
    ContactsLimited,
    ExportData,
    ViewAuditLogs,
    UploadFiles,
    ViewReports,
    ManageUsers,
    ManageVendors,
    ManageVenues,
    ManageCampaigns,
    ManageInvoices,
    ManageSystems,
}

impl Permission {
    pub const ALL: [Permission; 20] = [
        Permission::ViewEvents,
        Permission::CreateEvents,
        Permission::ApproveEvents,
        Permission::ViewTasks,
        Permission::ViewBudgets,
        Permission::EditBudgets,
        Permission::ViewSponsorships,
        Permission::ManageSponsorships,
        Permission::ContactsFull,
        Permission::ContactsLimited,
        Permission::ExportData,
        Permission::ViewAuditLogs,
        Permission::UploadFiles,
        Permission::ViewReports,
        Permission::ManageUsers,
        Permission::ManageVendors,
        Permission::ManageVenues,
        Permission::ManageCampaigns,
        Permission::ManageInvoices,
        Permission::ManageSystems,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ViewEvents => "view_events",
            Permission::CreateEvents => "create_events",
            Permission::ApproveEvents => "approve_events",
            Permission::ViewTasks => "view_tasks",
            Permission::ViewBudgets => "view_budgets",
            Permission::EditBudgets => "edit_budgets",
            Permission::ViewSponsorships => "view_sponsorships",
            Permission::ManageSponsorships => "manage_sponsorships",
            Permission::ContactsFull => "contacts_full",
            Permission::ContactsLimited => "contacts_limited",
            Permission::ExportData => "export_data",
            Permission::ViewAuditLogs => "view_audit_logs",
            Permission::UploadFiles => "upload_files",
            Permission::ViewReports => "view_reports",
            Permission::ManageUsers => "manage_users",
            Permission::ManageVendors => "manage_vendors",
            Permission::ManageVenues => "manage_venues",
            Permission::ManageCampaigns => "manage_campaigns",
            Permission::ManageInvoices => "manage_invoices",
            Permission::ManageSystems => "manage_systems",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type PermissionSet = BTreeSet<Permission>;

/// The user a session is acting as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub id: String,
    pub name: String,
    /// Raw role string from the directory. See [`Identity::role`].
    pub role: String,
    pub avatar: Option<String>,
    pub email: Option<String>,
    pub title: Option<String>,
}

impl Identity {
    /// The parsed role, or `None` when the directory assigned a role we do not know.
    pub fn role(&self) -> Option<Role> {
        self.role.parse().ok()
    }
}

impl From<UserRecord> for Identity {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            role: record.role,
            avatar: record.avatar,
            email: record.email,
            title: record.title,
        }
    }
}
