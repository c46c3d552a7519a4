//! Application state for the web layer.

use std::sync::Arc;

use crate::locations::LocationResolver;
use crate::planner::{DutyConfig, LogHeader};

/// Shared application state.
///
/// Everything here is read-only after start-up, so handlers share it
/// without locking.
#[derive(Clone)]
pub struct AppState {
    /// Known locations
    pub locations: Arc<LocationResolver>,

    /// Duty simulation parameters
    pub duty: Arc<DutyConfig>,

    /// Header for daily log sheets
    pub log_header: Arc<LogHeader>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(locations: LocationResolver, duty: DutyConfig, log_header: LogHeader) -> Self {
        Self {
            locations: Arc::new(locations),
            duty: Arc::new(duty),
            log_header: Arc::new(log_header),
        }
    }
}
