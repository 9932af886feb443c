//! Application state for the web layer.

use std::sync::Arc;

use crate::lookup::FuelPriceLookup;

/// Shared application state.
///
/// The lookup is stateless, so one instance serves every request.
pub struct AppState<S> {
    /// Fuel price lookup service
    pub lookup: Arc<FuelPriceLookup<S>>,
}

impl<S> AppState<S> {
    /// Create a new app state.
    pub fn new(lookup: FuelPriceLookup<S>) -> Self {
        Self {
            lookup: Arc::new(lookup),
        }
    }
}

// Manual impl: cloning the state never requires cloning the source.
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            lookup: Arc::clone(&self.lookup),
        }
    }
}
