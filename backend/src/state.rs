//! Shared state handed to every handler.
//!
//! One session and one navigation stack per process. Both are built by the caller and
//! injected here; each request takes a lock only for a single synchronous operation.

use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::auth::service::Session;
use crate::services::navigation::NavigationStack;

#[derive(Clone)]
pub struct AppState {
    pub session: Arc<RwLock<Session>>,
    pub navigation: Arc<Mutex<NavigationStack>>,
}

impl AppState {
    pub fn new(session: Session, navigation: NavigationStack) -> Self {
        Self {
            session: Arc::new(RwLock::new(session)),
            navigation: Arc::new(Mutex::new(navigation)),
        }
    }
}
