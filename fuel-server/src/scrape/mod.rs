//! Reading the fuel finder results page.
//!
//! The page is third-party markup with no stable API, so every selector
//! lives behind [`HtmlExtractor`]. If the site changes its layout only
//! [`RacqExtractor`] needs to follow.

mod extractor;
mod report;

pub use extractor::{HtmlExtractor, RacqExtractor};
pub use report::{Fragment, MissingFragment, extract_report, read_page};
