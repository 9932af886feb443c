//! Scraped fuel price report.

use serde::Serialize;

/// Whether the average price in an area is favorable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceRating {
    Good,
    Bad,
}

impl PriceRating {
    /// Class token the fuel finder puts on unfavorable prices.
    pub const BAD_TOKEN: &'static str = "is-bad";

    /// Derive a rating from the site's class token.
    ///
    /// Only `is-bad` is bad. Anything else (including `is-good` and
    /// unknown tokens) is treated as good.
    pub fn from_token(token: &str) -> Self {
        if token == Self::BAD_TOKEN {
            PriceRating::Bad
        } else {
            PriceRating::Good
        }
    }
}

/// The cheapest station in the area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestStation {
    /// Price in cents, as rendered by the site
    pub price: String,

    /// Station name
    pub name: String,

    /// Street address
    pub address: String,
}

/// Fuel prices for one postcode, built fresh per lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FuelReport {
    /// Average price in cents, as rendered by the site (not parsed)
    pub average_price: String,

    /// Whether the average is good or bad
    pub rating: PriceRating,

    /// Free-text commentary from the site
    pub commentary: String,

    /// Cheapest station, or `None` for regional areas where the site
    /// has no per-station breakdown.
    pub best_station: Option<BestStation>,
}

impl FuelReport {
    /// True when per-station detail is unavailable for the area.
    pub fn is_regional(&self) -> bool {
        self.best_station.is_none()
    }
}
