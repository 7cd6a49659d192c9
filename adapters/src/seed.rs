//! Built-in staff roster used when no directory file is configured.
//!
//! The roster holds one account per known dashboard role plus a guest account whose
//! role string is not recognised, which is handy for exercising the restricted views.

use async_trait::async_trait;

use crate::{AdapterError, DirectoryAdapter, UserRecord};

const AVATAR_BASE: &str = "https://avatars.confops.local";

/// `(id, name, role, title)`
const ROSTER: &[(&str, &str, &str, &str)] = &[
    ("u-ceo", "Margaret Okafor", "ceo", "Chief Executive Officer"),
    ("u-admin", "Daniel Reyes", "admin", "Platform Administrator"),
    ("u-ae", "Priya Nair", "ae", "Account Executive"),
    ("u-designer", "Tomasz Wolski", "designer", "Senior Designer"),
    ("u-it", "Hannah Lee", "it_manager", "IT Manager"),
    ("u-events", "Carlos Mendes", "event_manager", "Event Manager"),
    ("u-pm", "Aisha Bello", "project_manager", "Project Manager"),
    ("u-finance", "Robert Chen", "finance_manager", "Finance Manager"),
    ("u-sales", "Lucia Romano", "sales_manager", "Sales Manager"),
    ("u-marketing", "Owen Fletcher", "marketing_manager", "Marketing Manager"),
    ("u-hr", "Grace Mwangi", "hr_manager", "HR Manager"),
    ("u-ops", "Ibrahim Haddad", "operations_manager", "Operations Manager"),
    ("u-sponsors", "Elena Petrova", "sponsorship_manager", "Sponsorship Manager"),
    ("u-content", "Samuel Osei", "content_writer", "Content Writer"),
    ("u-coord", "Mei Tanaka", "coordinator", "Conference Coordinator"),
    ("u-guest", "Visiting Guest", "guest123", "Guest"),
];

/// Directory backed by the static roster above.
#[derive(Debug, Default, Clone, Copy)]
pub struct SeedDirectory;

impl SeedDirectory {
    pub fn new() -> Self {
        Self
    }

    /// The roster without going through the async trait.
    pub fn records() -> Vec<UserRecord> {
        ROSTER
            .iter()
            .map(|(id, name, role, title)| {
                UserRecord::new(*id, *name, *role)
                    .with_title(*title)
                    .with_email(format!("{}@confops.local", id.trim_start_matches("u-")))
                    .with_avatar(format!("{AVATAR_BASE}/{id}.png"))
            })
            .collect()
    }
}

#[async_trait]
impl DirectoryAdapter for SeedDirectory {
    fn name(&self) -> &str {
        "seed"
    }

    async fn load(&self) -> Result<Vec<UserRecord>, AdapterError> {
        let records = Self::records();
        tracing::debug!(count = records.len(), "loaded seed roster");
        Ok(records)
    }
}
