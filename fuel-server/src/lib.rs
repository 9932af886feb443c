//! Fuel price chat bot.
//!
//! Answers `fuel <postcode>` with whether it's a good time to fill up
//! and which nearby servo is cheapest, scraped from the RACQ fuel finder.

pub mod command;
pub mod config;
pub mod domain;
pub mod finder;
pub mod lookup;
pub mod reply;
pub mod scrape;
pub mod web;
