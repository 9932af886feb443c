//! Page source abstraction.

use std::future::Future;

use crate::domain::Postcode;

use super::error::FinderError;

/// Something that can produce the fuel finder results page for a postcode.
///
/// This abstraction allows the lookup to be tested with fixture pages.
pub trait PageSource {
    /// Fetch the raw HTML results page for `postcode`.
    fn fetch_results(
        &self,
        postcode: &Postcode,
    ) -> impl Future<Output = Result<String, FinderError>> + Send;
}
