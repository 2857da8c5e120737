//! HTML extraction for the paginated dealer listing.
//!
//! Listing pages carry each dealer as an element with `data-dealer-*`
//! attributes and mark the next page with an `a.w-pagination-next` link.
//! Extraction works on the raw tag text with regexes; attribute order
//! inside the tag does not matter.

use regex::Regex;

/// `data-dealer-*` attributes lifted off one listing element, untyped.
#[derive(Debug, Default, Clone)]
pub struct RawDealerElement {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub lat: Option<String>,
    pub lon: Option<String>,
    pub phone: Option<String>,
    pub hours: Option<String>,
    pub diversity: Option<String>,
    pub website: Option<String>,
}

/// Extracts every element carrying a `data-dealer-id` attribute.
///
/// Elements missing other attributes still come back; deciding whether a
/// record is usable is the normalizer's job.
#[must_use]
pub fn extract_dealer_elements(html: &str) -> Vec<RawDealerElement> {
    let tag_re = Regex::new(r#"<[a-zA-Z][^>]*\bdata-dealer-id\s*=\s*["'][^"']*["'][^>]*>"#)
        .expect("valid regex");
    let attr_re =
        Regex::new(r#"data-dealer-([A-Za-z]+)\s*=\s*["']([^"']*)["']"#).expect("valid regex");

    tag_re
        .find_iter(html)
        .map(|tag| {
            let mut element = RawDealerElement::default();
            for cap in attr_re.captures_iter(tag.as_str()) {
                let value = cap[2].to_string();
                match &cap[1] {
                    "id" => element.id = Some(value),
                    "name" => element.name = Some(value),
                    "description" => element.description = Some(value),
                    "address" => element.address = Some(value),
                    "city" => element.city = Some(value),
                    "state" => element.state = Some(value),
                    "postalCode" => element.postal_code = Some(value),
                    "lat" => element.lat = Some(value),
                    "lon" => element.lon = Some(value),
                    "phone" => element.phone = Some(value),
                    "hours" => element.hours = Some(value),
                    "diversity" => element.diversity = Some(value),
                    "website" => element.website = Some(value),
                    _ => {}
                }
            }
            element
        })
        .collect()
}

/// Pulls the `href` off the `a.w-pagination-next` link, if the page has one.
/// Absence of the link signals the final page.
#[must_use]
pub fn extract_next_page_href(html: &str) -> Option<String> {
    let anchor_re = Regex::new(r"(?is)<a\b[^>]*>").expect("valid regex");
    let href_re = Regex::new(r#"href\s*=\s*["']([^"']*)["']"#).expect("valid regex");

    for tag in anchor_re.find_iter(html) {
        if !tag.as_str().contains("w-pagination-next") {
            continue;
        }
        if let Some(cap) = href_re.captures(tag.as_str()) {
            let href = cap[1].to_string();
            if !href.is_empty() {
                return Some(href);
            }
        }
    }
    None
}

/// Resolves a next-page `href` (typically just a query string like
/// `?f8575e1d_page=2`) against the page it came from.
#[must_use]
pub fn resolve_next_url(page_url: &str, href: &str) -> Option<String> {
    let base = reqwest::Url::parse(page_url).ok()?;
    base.join(href).ok().map(|url| url.to_string())
}
