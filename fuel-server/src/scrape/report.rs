//! Assembling a [`FuelReport`] from extracted fragments.

use std::fmt;

use scraper::Html;

use crate::domain::{BestStation, FuelReport, PriceRating};

use super::extractor::HtmlExtractor;

/// A fragment of the results page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment {
    AveragePrice,
    Rating,
    Commentary,
    BestPrice,
    BestStationName,
    BestStationAddress,
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Fragment::AveragePrice => "average price",
            Fragment::Rating => "price rating",
            Fragment::Commentary => "commentary",
            Fragment::BestPrice => "best price",
            Fragment::BestStationName => "best station name",
            Fragment::BestStationAddress => "best station address",
        };
        f.write_str(name)
    }
}

/// A required fragment was absent from the results page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("results page has no {0}")]
pub struct MissingFragment(pub Fragment);

/// Build a report from a parsed results page.
///
/// Station fragments are only required when the page is not regional.
pub fn extract_report<E: HtmlExtractor + ?Sized>(
    extractor: &E,
    page: &Html,
) -> Result<FuelReport, MissingFragment> {
    let required = |value: Option<String>, fragment| value.ok_or(MissingFragment(fragment));

    let average_price = required(extractor.average_price(page), Fragment::AveragePrice)?;
    let rating_token = required(extractor.rating_token(page), Fragment::Rating)?;
    let commentary = required(extractor.commentary(page), Fragment::Commentary)?;

    let best_station = if extractor.is_regional(page) {
        None
    } else {
        Some(BestStation {
            price: required(extractor.best_price(page), Fragment::BestPrice)?,
            name: required(extractor.best_station_name(page), Fragment::BestStationName)?,
            address: required(
                extractor.best_station_address(page),
                Fragment::BestStationAddress,
            )?,
        })
    };

    Ok(FuelReport {
        average_price,
        rating: PriceRating::from_token(&rating_token),
        commentary,
        best_station,
    })
}

/// Parse a raw results page and build a report from it.
///
/// The parsed document is not `Send`, so it never outlives this call.
pub fn read_page<E: HtmlExtractor + ?Sized>(
    extractor: &E,
    body: &str,
) -> Result<FuelReport, MissingFragment> {
    let page = Html::parse_document(body);
    extract_report(extractor, &page)
}
