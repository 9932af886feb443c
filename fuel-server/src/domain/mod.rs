//! Domain types for the fuel price bot.
//!
//! Everything here is transient: values are built per lookup from the
//! scraped page and dropped once the reply has been composed.

mod postcode;
mod report;

pub use postcode::{InvalidPostcode, Postcode};
pub use report::{BestStation, FuelReport, PriceRating};
