//! Session holder for the dashboard.
//!
//! A `Session` owns the loaded user directory and the identity currently in use.
//! Switching identity simulates a login; there is no credential check. Capabilities and
//! navigation are resolved from the current role on every read, so a switch takes effect
//! immediately and leaves nothing of the previous role behind.

use std::collections::HashMap;

use crate::auth::models::Identity;
use crate::auth::registry::{self, Capabilities, NavItem};

#[derive(Debug, Clone, Default)]
pub struct Session {
    users: Vec<Identity>,
    index: HashMap<String, usize>,
    current: Option<usize>,
}

impl Session {
    /// Builds a session over `users` with nobody signed in. When ids repeat, the first
    /// record wins.
    pub fn new(users: impl IntoIterator<Item = Identity>) -> Self {
        let mut session = Self::default();
        for user in users {
            if session.index.contains_key(&user.id) {
                tracing::warn!(id = %user.id, "ignoring duplicate user record");
                continue;
            }
            session.index.insert(user.id.clone(), session.users.len());
            session.users.push(user);
        }
        session
    }

    /// Builds a session and switches to `id` straight away.
    pub fn with_current(users: impl IntoIterator<Item = Identity>, id: &str) -> Self {
        let mut session = Self::new(users);
        session.switch_user(id);
        session
    }

    pub fn current_user(&self) -> Option<&Identity> {
        self.current.map(|i| &self.users[i])
    }

    /// Replaces the current identity with the directory record for `id`. Unknown ids
    /// leave the session untouched; the return value tells whether a switch happened.
    pub fn switch_user(&mut self, id: &str) -> bool {
        match self.index.get(id) {
            Some(&i) => {
                let user = &self.users[i];
                tracing::info!(id = %user.id, role = %user.role, "switched user");
                self.current = Some(i);
                true
            }
            None => {
                tracing::warn!(id, "switch to unknown user ignored");
                false
            }
        }
    }

    /// Capabilities of the current identity. Nobody signed in means no capabilities.
    pub fn capabilities(&self) -> Capabilities {
        registry::capabilities_for(self.current_user().and_then(Identity::role))
    }

    pub fn nav_items(&self) -> Vec<NavItem> {
        registry::nav_items_for(self.current_user().and_then(Identity::role))
    }

    /// The whole directory, in load order.
    pub fn users(&self) -> &[Identity] {
        &self.users
    }

    pub fn user(&self, id: &str) -> Option<&Identity> {
        self.index.get(id).map(|&i| &self.users[i])
    }
}

#[cfg(test)]
mod tests {
    use confops_adapters::{SeedDirectory, UserRecord};

    use super::*;
    use crate::auth::models::Role;
    use crate::services::views::View;

    fn seeded() -> Session {
        Session::new(SeedDirectory::records().into_iter().map(Identity::from))
    }

    #[test]
    fn no_user_before_initialization() {
        let session = seeded();
        assert!(session.current_user().is_none());
        assert!(session.capabilities().is_empty());
        assert!(session.nav_items().is_empty());
    }

    #[test]
    fn switching_replaces_capabilities_without_residue() {
        let mut session = Session::with_current(
            SeedDirectory::records().into_iter().map(Identity::from),
            "u-ceo",
        );
        assert!(session.capabilities().can_view_budgets());
        assert!(session.nav_items().iter().any(|item| item.id == View::AuditLogs));

        assert!(session.switch_user("u-designer"));
        assert_eq!(session.current_user().unwrap().role(), Some(Role::Designer));
        assert_eq!(
            session.capabilities(),
            registry::capabilities_for(Some(Role::Designer))
        );
        assert_eq!(
            session.nav_items(),
            registry::nav_items_for(Some(Role::Designer))
        );
        assert!(!session.capabilities().can_view_budgets());
    }

    #[test]
    fn unknown_id_is_ignored() {
        let mut session = Session::with_current(
            SeedDirectory::records().into_iter().map(Identity::from),
            "u-finance",
        );
        assert!(!session.switch_user("u-nobody"));
        assert_eq!(session.current_user().unwrap().id, "u-finance");

        let mut empty = seeded();
        assert!(!empty.switch_user("u-nobody"));
        assert!(empty.current_user().is_none());
    }

    #[test]
    fn guest_with_unknown_role_gets_nothing() {
        let session = Session::with_current(
            SeedDirectory::records().into_iter().map(Identity::from),
            "u-guest",
        );
        assert_eq!(session.current_user().unwrap().role, "guest123");
        assert!(session.capabilities().is_empty());
        assert!(session.nav_items().is_empty());
    }

    #[test]
    fn first_duplicate_wins() {
        let session = Session::new([
            Identity::from(UserRecord::new("u-1", "First", "ceo")),
            Identity::from(UserRecord::new("u-1", "Second", "designer")),
        ]);
        assert_eq!(session.users().len(), 1);
        assert_eq!(session.user("u-1").unwrap().name, "First");
    }
}
