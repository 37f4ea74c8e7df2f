//! Application state for the Payroll Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::Roster;

/// Shared application state.
///
/// Holds the in-memory roster behind a read/write lock: salary and
/// statistics requests take a read lock, appends take a write lock.
#[derive(Clone, Default)]
pub struct AppState {
    roster: Arc<RwLock<Roster>>,
}

impl AppState {
    /// Creates a new application state around the given roster.
    pub fn new(roster: Roster) -> Self {
        Self {
            roster: Arc::new(RwLock::new(roster)),
        }
    }

    /// Returns the shared roster.
    pub fn roster(&self) -> &RwLock<Roster> {
        &self.roster
    }
}
