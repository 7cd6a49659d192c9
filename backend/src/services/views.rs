//! The catalog of dashboard views.
//!
//! Every screen the dashboard can show is listed here once, together with its label,
//! icon, the permissions that open it, and the in-view controls it offers. Nav lists and
//! the view router are both derived from this table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::models::Permission;

/// A view identifier. `Events` and `Calendar` are distinct identifiers that render the
/// same screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    Dashboard,
    Calendar,
    Events,
    Tasks,
    Approvals,
    Budgets,
    Invoices,
    Sponsorships,
    Contacts,
    Marketing,
    Vendors,
    Venues,
    Uploads,
    Reports,
    Team,
    ItSystems,
    AuditLogs,
    Notifications,
    Settings,
    Profile,
    Help,
}

impl View {
    pub const DEFAULT: View = View::Dashboard;

    pub fn as_str(&self) -> &'static str {
        self.def().id
    }

    pub fn label(&self) -> &'static str {
        self.def().label
    }

    pub fn icon(&self) -> &'static str {
        self.def().icon
    }

    pub fn screen(&self) -> ScreenKind {
        self.def().screen
    }

    /// Permissions that open this view; any one of them suffices. Empty means open to
    /// everyone.
    pub fn gate(&self) -> &'static [Permission] {
        self.def().gate
    }

    pub fn is_gated(&self) -> bool {
        !self.gate().is_empty()
    }

    pub fn controls(&self) -> &'static [Control] {
        self.def().controls
    }

    /// Parses an identifier, falling back to the default view for anything unknown.
    pub fn parse_or_default(id: &str) -> View {
        id.parse().unwrap_or(View::DEFAULT)
    }

    pub(crate) fn def(&self) -> &'static ViewDef {
        CATALOG
            .iter()
            .find(|def| def.view == *self)
            .unwrap_or(&CATALOG[0])
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown view: {0}")]
pub struct UnknownView(pub String);

impl FromStr for View {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CATALOG
            .iter()
            .find(|def| def.id == s)
            .map(|def| def.view)
            .ok_or_else(|| UnknownView(s.to_string()))
    }
}

/// The screen component a view renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenKind {
    Dashboard,
    EventsCalendar,
    TaskBoard,
    Approvals,
    BudgetOverview,
    Invoices,
    SponsorshipKanban,
    ContactDirectory,
    Marketing,
    Vendors,
    Venues,
    Uploads,
    Reports,
    Team,
    ItSystems,
    AuditLog,
    Notifications,
    Settings,
    Profile,
    Help,
}

/// An action button inside a view, shown only when its permission is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Control {
    CreateEvent,
    ApproveEvent,
    AssignTask,
    EditBudget,
    ExportBudget,
    IssueInvoice,
    AddSponsor,
    MoveSponsor,
    ExportContacts,
    LaunchCampaign,
    AddVendor,
    BookVenue,
    UploadFile,
    ExportReport,
    InviteMember,
    ManageIntegrations,
    ExportLogs,
}

impl Control {
    pub fn permission(&self) -> Permission {
        match self {
            Control::CreateEvent => Permission::CreateEvents,
            Control::ApproveEvent => Permission::ApproveEvents,
            Control::AssignTask => Permission::ViewTasks,
            Control::EditBudget => Permission::EditBudgets,
            Control::ExportBudget => Permission::ExportData,
            Control::IssueInvoice => Permission::ManageInvoices,
            Control::AddSponsor => Permission::ManageSponsorships,
            Control::MoveSponsor => Permission::ManageSponsorships,
            Control::ExportContacts => Permission::ExportData,
            Control::LaunchCampaign => Permission::ManageCampaigns,
            Control::AddVendor => Permission::ManageVendors,
            Control::BookVenue => Permission::ManageVenues,
            Control::UploadFile => Permission::UploadFiles,
            Control::ExportReport => Permission::ExportData,
            Control::InviteMember => Permission::ManageUsers,
            Control::ManageIntegrations => Permission::ManageSystems,
            Control::ExportLogs => Permission::ExportData,
        }
    }
}

#[derive(Debug)]
pub(crate) struct ViewDef {
    pub view: View,
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub screen: ScreenKind,
    pub gate: &'static [Permission],
    /// Whether the view gets an entry in the side navigation.
    pub in_nav: bool,
    pub controls: &'static [Control],
}

/// Ordered as the side navigation shows it. The first entry is the default view.
pub(crate) static CATALOG: [ViewDef; 21] = [
    ViewDef {
        view: View::Dashboard,
        id: "dashboard",
        label: "Dashboard",
        icon: "home",
        screen: ScreenKind::Dashboard,
        gate: &[],
        in_nav: true,
        controls: &[Control::CreateEvent],
    },
    ViewDef {
        view: View::Calendar,
        id: "calendar",
        label: "Event Calendar",
        icon: "calendar",
        screen: ScreenKind::EventsCalendar,
        gate: &[Permission::ViewEvents],
        in_nav: true,
        controls: &[Control::CreateEvent, Control::ApproveEvent],
    },
    ViewDef {
        view: View::Events,
        id: "events",
        label: "Events",
        icon: "calendar",
        screen: ScreenKind::EventsCalendar,
        gate: &[Permission::ViewEvents],
        in_nav: false,
        controls: &[Control::CreateEvent, Control::ApproveEvent],
    },
    ViewDef {
        view: View::Tasks,
        id: "tasks",
        label: "Tasks",
        icon: "check-square",
        screen: ScreenKind::TaskBoard,
        gate: &[Permission::ViewTasks],
        in_nav: true,
        controls: &[Control::AssignTask],
    },
    ViewDef {
        view: View::Approvals,
        id: "approvals",
        label: "Approvals",
        icon: "check-circle",
        screen: ScreenKind::Approvals,
        gate: &[Permission::ApproveEvents],
        in_nav: true,
        controls: &[Control::ApproveEvent],
    },
    ViewDef {
        view: View::Budgets,
        id: "budgets",
        label: "Budget Overview",
        icon: "dollar-sign",
        screen: ScreenKind::BudgetOverview,
        gate: &[Permission::ViewBudgets],
        in_nav: true,
        controls: &[Control::EditBudget, Control::ExportBudget],
    },
    ViewDef {
        view: View::Invoices,
        id: "invoices",
        label: "Invoices",
        icon: "file-text",
        screen: ScreenKind::Invoices,
        gate: &[Permission::ManageInvoices],
        in_nav: true,
        controls: &[Control::IssueInvoice],
    },
    ViewDef {
        view: View::Sponsorships,
        id: "sponsorships",
        label: "Sponsorships",
        icon: "award",
        screen: ScreenKind::SponsorshipKanban,
        gate: &[Permission::ViewSponsorships],
        in_nav: true,
        controls: &[Control::AddSponsor, Control::MoveSponsor],
    },
    ViewDef {
        view: View::Contacts,
        id: "contacts",
        label: "Contacts",
        icon: "users",
        screen: ScreenKind::ContactDirectory,
        gate: &[Permission::ContactsFull, Permission::ContactsLimited],
        in_nav: true,
        controls: &[Control::ExportContacts],
    },
    ViewDef {
        view: View::Marketing,
        id: "marketing",
        label: "Marketing",
        icon: "megaphone",
        screen: ScreenKind::Marketing,
        gate: &[Permission::ManageCampaigns],
        in_nav: true,
        controls: &[Control::LaunchCampaign],
    },
    ViewDef {
        view: View::Vendors,
        id: "vendors",
        label: "Vendors",
        icon: "truck",
        screen: ScreenKind::Vendors,
        gate: &[Permission::ManageVendors],
        in_nav: true,
        controls: &[Control::AddVendor],
    },
    ViewDef {
        view: View::Venues,
        id: "venues",
        label: "Venues",
        icon: "map-pin",
        screen: ScreenKind::Venues,
        gate: &[Permission::ManageVenues],
        in_nav: true,
        controls: &[Control::BookVenue],
    },
    ViewDef {
        view: View::Uploads,
        id: "uploads",
        label: "Uploads",
        icon: "upload",
        screen: ScreenKind::Uploads,
        gate: &[Permission::UploadFiles],
        in_nav: true,
        controls: &[Control::UploadFile],
    },
    ViewDef {
        view: View::Reports,
        id: "reports",
        label: "Reports",
        icon: "bar-chart",
        screen: ScreenKind::Reports,
        gate: &[Permission::ViewReports],
        in_nav: true,
        controls: &[Control::ExportReport],
    },
    ViewDef {
        view: View::Team,
        id: "team",
        label: "Team",
        icon: "user-plus",
        screen: ScreenKind::Team,
        gate: &[Permission::ManageUsers],
        in_nav: true,
        controls: &[Control::InviteMember],
    },
    ViewDef {
        view: View::ItSystems,
        id: "it-systems",
        label: "IT Systems",
        icon: "server",
        screen: ScreenKind::ItSystems,
        gate: &[Permission::ManageSystems],
        in_nav: true,
        controls: &[Control::ManageIntegrations],
    },
    ViewDef {
        view: View::AuditLogs,
        id: "audit-logs",
        label: "Audit Logs",
        icon: "shield",
        screen: ScreenKind::AuditLog,
        gate: &[Permission::ViewAuditLogs],
        in_nav: true,
        controls: &[Control::ExportLogs],
    },
    ViewDef {
        view: View::Notifications,
        id: "notifications",
        label: "Notifications",
        icon: "bell",
        screen: ScreenKind::Notifications,
        gate: &[],
        in_nav: true,
        controls: &[],
    },
    ViewDef {
        view: View::Settings,
        id: "settings",
        label: "Settings",
        icon: "settings",
        screen: ScreenKind::Settings,
        gate: &[],
        in_nav: true,
        controls: &[],
    },
    ViewDef {
        view: View::Profile,
        id: "profile",
        label: "Profile",
        icon: "user",
        screen: ScreenKind::Profile,
        gate: &[],
        in_nav: false,
        controls: &[],
    },
    ViewDef {
        view: View::Help,
        id: "help",
        label: "Help",
        icon: "help-circle",
        screen: ScreenKind::Help,
        gate: &[],
        in_nav: false,
        controls: &[],
    },
];

/// Views in navigation order.
pub fn catalog() -> impl Iterator<Item = View> {
    CATALOG.iter().map(|def| def.view)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn catalog_has_one_entry_per_view() {
        let views: HashSet<View> = catalog().collect();
        assert_eq!(views.len(), CATALOG.len());

        let ids: HashSet<&str> = CATALOG.iter().map(|def| def.id).collect();
        assert_eq!(ids.len(), CATALOG.len());
    }

    #[test]
    fn ids_match_serde_names() {
        for view in catalog() {
            assert_eq!(
                serde_json::to_value(view).unwrap(),
                serde_json::Value::String(view.as_str().to_string())
            );
            assert_eq!(view.as_str().parse::<View>(), Ok(view));
        }
    }

    #[test]
    fn default_view_is_first_and_open() {
        assert_eq!(CATALOG[0].view, View::DEFAULT);
        assert!(!View::DEFAULT.is_gated());
    }

    #[test]
    fn events_is_an_alias_of_calendar() {
        assert_eq!(View::Events.screen(), View::Calendar.screen());
        assert_eq!(View::Events.gate(), View::Calendar.gate());
        assert!(!View::Events.def().in_nav);
    }

    #[test]
    fn unknown_ids_fall_back_to_dashboard() {
        assert_eq!(View::parse_or_default("nope"), View::Dashboard);
        assert_eq!(View::parse_or_default("Tasks"), View::Dashboard);
        assert_eq!(View::parse_or_default("audit-logs"), View::AuditLogs);
    }

    #[test]
    fn strict_parse_reports_the_unknown_id() {
        let err = "Tasks".parse::<View>().unwrap_err();
        assert_eq!(err, UnknownView("Tasks".to_string()));
        assert_eq!(err.to_string(), "unknown view: Tasks");
    }
}
