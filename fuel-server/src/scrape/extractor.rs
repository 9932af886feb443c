//! Fragment extraction from the results page.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

/// Reads the individual fragments of a fuel finder results page.
///
/// Each method returns `None` when nothing matches. A matching element
/// with no text yields an empty string.
pub trait HtmlExtractor {
    /// Average price in cents, as rendered.
    fn average_price(&self, page: &Html) -> Option<String>;

    /// Rating class token (e.g. `is-good`, `is-bad`).
    ///
    /// Returns `None` only when the rated element itself is missing. An
    /// element without a rating token yields an empty string.
    fn rating_token(&self, page: &Html) -> Option<String>;

    /// Commentary paragraph.
    fn commentary(&self, page: &Html) -> Option<String>;

    /// Price at the cheapest station.
    fn best_price(&self, page: &Html) -> Option<String>;

    /// Name of the cheapest station.
    fn best_station_name(&self, page: &Html) -> Option<String>;

    /// Street address of the cheapest station.
    fn best_station_address(&self, page: &Html) -> Option<String>;

    /// Whether the results are flagged as regional (no per-station data).
    fn is_regional(&self, page: &Html) -> bool;
}

/// Class on the results table marking regional areas.
const REGIONAL_CLASS: &str = "regional";

struct Selectors {
    average_price: Selector,
    rating: Selector,
    commentary: Selector,
    best_price: Selector,
    best_station_name: Selector,
    best_station_address: Selector,
    results: Selector,
}

static SELECTORS: LazyLock<Selectors> = LazyLock::new(|| Selectors {
    average_price: selector(".price strong"),
    rating: selector(".price span"),
    commentary: selector(".commentary p"),
    best_price: selector(".fair-fuel-results tbody tr th"),
    best_station_name: selector(".fair-fuel-results tbody tr:nth-child(1) td:nth-child(2)"),
    best_station_address: selector(".fair-fuel-results tbody tr:nth-child(1) td:nth-child(3)"),
    results: selector(".fair-fuel-results"),
});

fn selector(css: &str) -> Selector {
    // Selectors are compile-time constants; a parse failure is a bug.
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css:?}: {e:?}"))
}

/// Extractor for the RACQ fuel finder markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct RacqExtractor;

impl HtmlExtractor for RacqExtractor {
    fn average_price(&self, page: &Html) -> Option<String> {
        first_text(page, &SELECTORS.average_price)
    }

    fn rating_token(&self, page: &Html) -> Option<String> {
        let element = page.select(&SELECTORS.rating).next()?;
        let token = element
            .value()
            .attr("class")
            .and_then(|classes| classes.split_whitespace().nth(1))
            .unwrap_or_default();
        Some(token.to_string())
    }

    fn commentary(&self, page: &Html) -> Option<String> {
        first_text(page, &SELECTORS.commentary)
    }

    fn best_price(&self, page: &Html) -> Option<String> {
        first_text(page, &SELECTORS.best_price)
    }

    fn best_station_name(&self, page: &Html) -> Option<String> {
        first_text(page, &SELECTORS.best_station_name)
    }

    fn best_station_address(&self, page: &Html) -> Option<String> {
        first_text(page, &SELECTORS.best_station_address)
    }

    fn is_regional(&self, page: &Html) -> bool {
        page.select(&SELECTORS.results).any(|results| {
            results
                .value()
                .attr("class")
                .is_some_and(|classes| classes.split_whitespace().any(|c| c == REGIONAL_CLASS))
        })
    }
}

/// Text of the first element matching `selector`, whitespace-collapsed.
fn first_text(page: &Html, selector: &Selector) -> Option<String> {
    page.select(selector).next().map(element_text)
}

fn element_text(element: ElementRef<'_>) -> String {
    let raw: String = element.text().collect();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const METRO_PAGE: &str = r#"
        <div class="average">
          <p class="price"><strong> 165.1 </strong><span class="price is-good">Good</span></p>
          <div class="commentary"><p>Prices are <em>stable</em></p></div>
        </div>
        <table class="fair-fuel-results">
          <thead><tr><th>Price</th><th>Station</th><th>Address</th></tr></thead>
          <tbody>
            <tr><th>165.0</th><td>ServoCo</td><td>1 Main
              St</td></tr>
            <tr><th>166.2</th><td>Other Servo</td><td>2 High St</td></tr>
          </tbody>
        </table>
    "#;

    fn parse(html: &str) -> Html {
        Html::parse_document(html)
    }

    #[test]
    fn selectors_parse() {
        LazyLock::force(&SELECTORS);
    }

    #[test]
    fn reads_average_price() {
        let page = parse(METRO_PAGE);
        assert_eq!(
            RacqExtractor.average_price(&page).as_deref(),
            Some("165.1")
        );
    }

    #[test]
    fn reads_second_class_as_rating_token() {
        let page = parse(METRO_PAGE);
        assert_eq!(RacqExtractor.rating_token(&page).as_deref(), Some("is-good"));

        let page = parse(r#"<p class="price"><span class="price is-bad"></span></p>"#);
        assert_eq!(RacqExtractor.rating_token(&page).as_deref(), Some("is-bad"));
    }

    #[test]
    fn rating_without_token_is_empty() {
        let page = parse(r#"<p class="price"><span class="price"></span></p>"#);
        assert_eq!(RacqExtractor.rating_token(&page).as_deref(), Some(""));

        let page = parse(r#"<p class="price"><span></span></p>"#);
        assert_eq!(RacqExtractor.rating_token(&page).as_deref(), Some(""));
    }

    #[test]
    fn missing_rating_element_is_none() {
        let page = parse(r#"<p class="price"><strong>165.1</strong></p>"#);
        assert_eq!(RacqExtractor.rating_token(&page), None);
    }

    #[test]
    fn commentary_joins_nested_text() {
        let page = parse(METRO_PAGE);
        assert_eq!(
            RacqExtractor.commentary(&page).as_deref(),
            Some("Prices are stable")
        );
    }

    #[test]
    fn best_station_comes_from_first_body_row() {
        let page = parse(METRO_PAGE);
        assert_eq!(RacqExtractor.best_price(&page).as_deref(), Some("165.0"));
        assert_eq!(
            RacqExtractor.best_station_name(&page).as_deref(),
            Some("ServoCo")
        );
        assert_eq!(
            RacqExtractor.best_station_address(&page).as_deref(),
            Some("1 Main St")
        );
    }

    #[test]
    fn regional_class_detected() {
        let page = parse(r#"<table class="fair-fuel-results regional"><tbody></tbody></table>"#);
        assert!(RacqExtractor.is_regional(&page));

        let page = parse(METRO_PAGE);
        assert!(!RacqExtractor.is_regional(&page));
    }

    #[test]
    fn regional_requires_exact_class() {
        let page = parse(r#"<table class="fair-fuel-results regional-note"></table>"#);
        assert!(!RacqExtractor.is_regional(&page));
    }

    #[test]
    fn empty_page_has_no_fragments() {
        let page = parse("<html><body></body></html>");
        assert_eq!(RacqExtractor.average_price(&page), None);
        assert_eq!(RacqExtractor.commentary(&page), None);
        assert_eq!(RacqExtractor.best_price(&page), None);
        assert_eq!(RacqExtractor.best_station_name(&page), None);
        assert!(!RacqExtractor.is_regional(&page));
    }

    #[test]
    fn blank_fragment_is_empty_not_missing() {
        let page = parse(r#"<p class="price"><strong>   </strong></p>"#);
        assert_eq!(RacqExtractor.average_price(&page).as_deref(), Some(""));

        let page = parse(r#"<div class="commentary"><p></p></div>"#);
        assert_eq!(RacqExtractor.commentary(&page).as_deref(), Some(""));
    }

    #[test]
    fn regional_class_on_any_results_element() {
        let page = parse(
            r#"<div class="fair-fuel-results"></div>
               <table class="fair-fuel-results regional"><tbody></tbody></table>"#,
        );
        assert!(RacqExtractor.is_regional(&page));
    }
}
