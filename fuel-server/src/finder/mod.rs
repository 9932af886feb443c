//! RACQ fuel finder client.
//!
//! The fuel finder answers a form POST of `location` and `fuel-type` with an
//! HTML fragment listing the area average and the cheapest stations. This
//! module only fetches that page; reading it is the job of [`crate::scrape`].

mod client;
mod error;
mod mock;
mod source;

pub use client::{DEFAULT_ENDPOINT, FUEL_TYPE, FinderClient, FinderConfig};
pub use error::FinderError;
pub use mock::MockFinderClient;
pub use source::PageSource;
