//! Maps a view identifier to the screen to show.
//!
//! Rendering is total: unknown identifiers render the default view, and a view whose
//! gate the caller does not pass renders the restricted placeholder instead of partial
//! content.

use serde::Serialize;

use crate::auth::registry::Capabilities;
use crate::services::views::{Control, ScreenKind, View};

pub const RESTRICTED_TITLE: &str = "Access Restricted";

/// How much of the contact directory a caller may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactDetail {
    Full,
    Limited,
}

/// What the front end should draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Screen {
    Rendered {
        view: View,
        screen: ScreenKind,
        title: &'static str,
        controls: Vec<Control>,
        #[serde(skip_serializing_if = "Option::is_none")]
        contacts: Option<ContactDetail>,
    },
    Restricted {
        view: View,
        title: &'static str,
        message: String,
    },
}

impl Screen {
    pub fn view(&self) -> View {
        match self {
            Screen::Rendered { view, .. } | Screen::Restricted { view, .. } => *view,
        }
    }

    pub fn is_restricted(&self) -> bool {
        matches!(self, Screen::Restricted { .. })
    }

    pub fn controls(&self) -> &[Control] {
        match self {
            Screen::Rendered { controls, .. } => controls,
            Screen::Restricted { .. } => &[],
        }
    }
}

pub fn render(view: View, capabilities: &Capabilities) -> Screen {
    if !capabilities.allows_any(view.gate()) {
        tracing::debug!(%view, "view restricted");
        return Screen::Restricted {
            view,
            title: RESTRICTED_TITLE,
            message: format!("You do not have access to {}.", view.label()),
        };
    }

    let controls = view
        .controls()
        .iter()
        .copied()
        .filter(|control| capabilities.allows(control.permission()))
        .collect();

    let contacts = (view.screen() == ScreenKind::ContactDirectory).then(|| {
        if capabilities.can_access_contacts_full() {
            ContactDetail::Full
        } else {
            ContactDetail::Limited
        }
    });

    Screen::Rendered {
        view,
        screen: view.screen(),
        title: view.label(),
        controls,
        contacts,
    }
}

/// Renders a raw identifier; anything unknown renders the default view.
pub fn render_id(id: &str, capabilities: &Capabilities) -> Screen {
    render(View::parse_or_default(id), capabilities)
}
