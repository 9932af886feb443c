//! Fuel price lookup service.
//!
//! One lookup is one POST to the fuel finder, one scrape of the page and
//! one formatted reply. Lookups share nothing but the page source.

use tracing::{info, warn};

use crate::domain::{FuelReport, Postcode};
use crate::finder::{FinderError, PageSource};
use crate::reply::{ERROR_REPLY, format_reply, unreadable_page_reply};
use crate::scrape::{HtmlExtractor, MissingFragment, RacqExtractor, read_page};

/// Why a lookup produced no report.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The fuel finder could not be reached
    #[error("could not reach fuel finder: {0}")]
    Transport(#[source] FinderError),

    /// The fuel finder answered with a non-200 status
    #[error("fuel finder returned status {status}")]
    UpstreamStatus { status: u16 },

    /// The results page was missing something we need
    #[error(transparent)]
    MissingFragment(#[from] MissingFragment),
}

impl From<FinderError> for QueryError {
    fn from(err: FinderError) -> Self {
        match err {
            FinderError::Status { status, .. } => QueryError::UpstreamStatus { status },
            other => QueryError::Transport(other),
        }
    }
}

impl QueryError {
    /// The text sent back to the chat for this failure.
    ///
    /// Transport and status failures are deliberately indistinguishable
    /// to the user.
    pub fn user_message(&self, postcode: &Postcode) -> String {
        match self {
            QueryError::Transport(_) | QueryError::UpstreamStatus { .. } => ERROR_REPLY.to_string(),
            QueryError::MissingFragment(_) => unreadable_page_reply(postcode),
        }
    }
}

/// Looks up fuel prices for a postcode.
///
/// Stateless apart from the page source, so a single instance can be
/// shared by every request.
#[derive(Debug, Clone)]
pub struct FuelPriceLookup<S, E = RacqExtractor> {
    source: S,
    extractor: E,
}

impl<S: PageSource> FuelPriceLookup<S> {
    /// Create a lookup reading the RACQ markup from `source`.
    pub fn new(source: S) -> Self {
        Self::with_extractor(source, RacqExtractor)
    }
}

impl<S: PageSource, E: HtmlExtractor> FuelPriceLookup<S, E> {
    /// Create a lookup with a custom extractor.
    pub fn with_extractor(source: S, extractor: E) -> Self {
        Self { source, extractor }
    }

    /// Fetch and scrape the report for `postcode`.
    pub async fn report(&self, postcode: &Postcode) -> Result<FuelReport, QueryError> {
        let body = self.source.fetch_results(postcode).await.map_err(|e| {
            warn!(%postcode, error = %e, "fuel finder request failed");
            QueryError::from(e)
        })?;

        let report = read_page(&self.extractor, &body).map_err(|e| {
            warn!(%postcode, error = %e, "could not read fuel finder page");
            QueryError::from(e)
        })?;

        info!(
            %postcode,
            average = %report.average_price,
            rating = ?report.rating,
            regional = report.is_regional(),
            "fuel prices found"
        );
        Ok(report)
    }

    /// Look up `postcode` and compose the chat reply.
    pub async fn lookup(&self, postcode: &Postcode) -> Result<String, QueryError> {
        let report = self.report(postcode).await?;
        Ok(format_reply(postcode, &report))
    }

    /// Like [`lookup`](Self::lookup), but failures become their
    /// user-facing message.
    pub async fn reply(&self, postcode: &Postcode) -> String {
        match self.lookup(postcode).await {
            Ok(reply) => reply,
            Err(e) => e.user_message(postcode),
        }
    }
}
