//! Navigation requests raised outside the UI thread.
//!
//! Background work (an expired session detected mid-call, a screen asking to
//! move on) cannot touch the shell directly. It records a [`Route`] here and
//! the shell picks it up on its next frame. Only the latest request is kept,
//! except that a pending [`Route::Login`] is never replaced: once the session
//! is gone, nothing else may be shown first.

use std::sync::{Arc, Mutex, PoisonError};

use crate::egui_app::types::Route;

#[derive(Debug, Clone, Default)]
pub struct Navigator {
    pending: Arc<Mutex<Option<Route>>>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self, route: Route) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if *pending == Some(Route::Login) {
            tracing::debug!("Login pending; ignoring navigation to {:?}", route);
            return;
        }
        tracing::debug!("Navigation requested: {:?}", route);
        *pending = Some(route);
    }

    /// Take the pending request, leaving none behind.
    pub fn take(&self) -> Option<Route> {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}
