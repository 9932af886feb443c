//! Chat reply composition.
//!
//! Every line is a chat quote (`>`), with an emoji marker on the first
//! line saying whether it's a good time to fill up.

use crate::domain::{FuelReport, Postcode, PriceRating};

/// Sent when the fuel finder can't be reached or answers with an error.
pub const ERROR_REPLY: &str = "There was an error getting prices. Complain to the ACCC";

/// Sent instead of the best-station line for regional areas.
pub const REGIONAL_LINE: &str =
    ">Unable to provide specific fuel station price data for your post code";

/// Compose the reply for a successful lookup.
pub fn format_reply(postcode: &Postcode, report: &FuelReport) -> String {
    let mut lines = Vec::with_capacity(3);

    lines.push(match report.rating {
        PriceRating::Bad => format!(
            ">:x::fuelpump: Average price in {postcode} is bad at: {} cents p/L",
            report.average_price
        ),
        PriceRating::Good => format!(
            ">:white_check_mark::fuelpump: Average price in {postcode} is good at {} cents p/L",
            report.average_price
        ),
    });

    lines.push(format!(">{}", report.commentary));

    lines.push(match &report.best_station {
        Some(best) => format!(
            ">For {} cents, {} at {} has the best price in your area",
            best.price, best.name, best.address
        ),
        None => REGIONAL_LINE.to_string(),
    });

    // `\n` between lines, no trailing terminator.
    lines.join("\n")
}

/// Reply for a results page the bot couldn't read.
pub fn unreadable_page_reply(postcode: &Postcode) -> String {
    format!("Couldn't read fuel prices for {postcode}. The fuel finder page may have changed.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BestStation;

    fn report(rating: PriceRating, best_station: Option<BestStation>) -> FuelReport {
        FuelReport {
            average_price: "165.1".into(),
            rating,
            commentary: "Prices are stable".into(),
            best_station,
        }
    }

    fn servo() -> BestStation {
        BestStation {
            price: "165.0".into(),
            name: "ServoCo".into(),
            address: "1 Main St".into(),
        }
    }

    #[test]
    fn good_metro_reply() {
        let postcode = Postcode::parse("4000").unwrap();
        let reply = format_reply(&postcode, &report(PriceRating::Good, Some(servo())));

        assert_eq!(
            reply,
            ">:white_check_mark::fuelpump: Average price in 4000 is good at 165.1 cents p/L\n\
             >Prices are stable\n\
             >For 165.0 cents, ServoCo at 1 Main St has the best price in your area"
        );
    }

    #[test]
    fn bad_regional_reply() {
        let postcode = Postcode::parse("4830").unwrap();
        let reply = format_reply(&postcode, &report(PriceRating::Bad, None));

        assert_eq!(
            reply,
            ">:x::fuelpump: Average price in 4830 is bad at: 165.1 cents p/L\n\
             >Prices are stable\n\
             >Unable to provide specific fuel station price data for your post code"
        );
    }

    #[test]
    fn lines_are_newline_separated_without_terminator() {
        let postcode = Postcode::parse("4000").unwrap();
        let reply = format_reply(&postcode, &report(PriceRating::Good, Some(servo())));

        assert!(!reply.contains('\r'));
        assert!(!reply.ends_with('\n'));
        assert_eq!(reply.matches('\n').count(), 2);
    }

    #[test]
    fn unreadable_page_names_postcode() {
        let postcode = Postcode::parse("4000").unwrap();
        assert_eq!(
            unreadable_page_reply(&postcode),
            "Couldn't read fuel prices for 4000. The fuel finder page may have changed."
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::BestStation;
    use proptest::prelude::*;

    fn price() -> impl Strategy<Value = String> {
        "[1-2][0-9]{2}\\.[0-9]"
    }

    fn station() -> impl Strategy<Value = BestStation> {
        (price(), "[A-Z][a-z]{2,10}", "[1-9][0-9]{0,2} [A-Z][a-z]{2,8} St").prop_map(
            |(price, name, address)| BestStation {
                price,
                name,
                address,
            },
        )
    }

    proptest! {
        /// `is-bad` always leads with "is bad at" and the average price
        #[test]
        fn bad_first_line(code in "[0-9]{4}", avg in price(), best in proptest::option::of(station())) {
            let postcode = Postcode::parse(&code).unwrap();
            let report = FuelReport {
                average_price: avg.clone(),
                rating: PriceRating::from_token("is-bad"),
                commentary: "c".into(),
                best_station: best,
            };
            let reply = format_reply(&postcode, &report);
            let first = reply.lines().next().unwrap();
            prop_assert!(first.contains("is bad at"));
            prop_assert!(first.contains(&avg));
            prop_assert!(first.contains(&code));
        }

        /// Any other token leads with "is good at"
        #[test]
        fn good_first_line(code in "[0-9]{4}", token in "[a-z-]{0,10}".prop_filter("not is-bad", |t| t != "is-bad")) {
            let postcode = Postcode::parse(&code).unwrap();
            let report = FuelReport {
                average_price: "150.0".into(),
                rating: PriceRating::from_token(&token),
                commentary: "c".into(),
                best_station: None,
            };
            let reply = format_reply(&postcode, &report);
            prop_assert!(reply.lines().next().unwrap().contains("is good at"));
        }

        /// Regional replies never mention a station
        #[test]
        fn regional_has_fallback_only(code in "[0-9]{4}", best in station()) {
            let postcode = Postcode::parse(&code).unwrap();
            let report = FuelReport {
                average_price: "150.0".into(),
                rating: PriceRating::Good,
                commentary: "c".into(),
                best_station: None,
            };
            let reply = format_reply(&postcode, &report);
            prop_assert!(reply.contains(REGIONAL_LINE));
            prop_assert!(!reply.contains("has the best price"));
            prop_assert!(!reply.contains(&best.address));
        }

        /// Metro replies name the best price, station and address
        #[test]
        fn metro_names_station(code in "[0-9]{4}", best in station()) {
            let postcode = Postcode::parse(&code).unwrap();
            let report = FuelReport {
                average_price: "150.0".into(),
                rating: PriceRating::Good,
                commentary: "c".into(),
                best_station: Some(best.clone()),
            };
            let reply = format_reply(&postcode, &report);
            let last = reply.lines().last().unwrap();
            prop_assert!(last.contains(&best.price));
            prop_assert!(last.contains(&best.name));
            prop_assert!(last.contains(&best.address));
            prop_assert!(!reply.contains(REGIONAL_LINE));
        }
    }
}
