use crate::core::terms::{draw_term, SearchType};
use rand::Rng;
use serde::Deserialize;
use url::form_urlencoded;

/// One simulated search action: a term plus the list it was drawn from.
/// Built fresh for every request and discarded once the response is logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    term: String,
    search_type: SearchType,
}

impl SearchQuery {
    pub fn new(search_type: SearchType, term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            search_type,
        }
    }

    /// Pick a fresh query from the fixed term lists.
    pub fn draw(rng: &mut impl Rng) -> Self {
        let (search_type, term) = draw_term(rng);
        Self::new(search_type, term)
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn search_type(&self) -> SearchType {
        self.search_type
    }

    /// Request path including the query string. Debug output is always
    /// requested so the service reports its per-request check counters.
    pub fn request_path(&self) -> String {
        let params: String = form_urlencoded::Serializer::new(String::new())
            .append_pair("q", &self.term)
            .append_pair("debug", "1")
            .finish();
        format!("/products/search?{}", params)
    }

    /// Summary line for a successful search.
    pub fn summary_line(&self, summary: &SearchSummary) -> String {
        format!(
            "{} search '{}' → found {} products, checked {} items, total checked {}",
            self.search_type,
            self.term,
            fmt_count(summary.total_found),
            fmt_count(summary.checked_request),
            fmt_count(summary.total_checked),
        )
    }

    /// Summary line for a non-success status. The body is not consulted.
    pub fn error_line(&self, status: u16) -> String {
        format!("Error {} for search '{}'", status, self.term)
    }
}

fn fmt_count(value: Option<u64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "None".to_string(),
    }
}

/// A product row as returned by the search endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub description: String,
    pub brand: String,
}

/// Response body of `/products/search`.
///
/// The check counters only appear when the request asked for debug output,
/// and the service may omit any of them; a missing counter is logged as the
/// token `None` rather than failing the decode.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchSummary {
    #[serde(default)]
    pub products: Vec<Product>,
    pub total_found: Option<u64>,
    pub search_time: Option<String>,
    pub checked_request: Option<u64>,
    pub total_checked: Option<u64>,
}
