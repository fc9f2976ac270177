use rand::Rng;

/// Searchable product-name keywords. Every product in the catalog under test
/// is named "Product <brand> <n>", so one generic keyword matches broadly.
pub const NAME_TERMS: &[&str] = &["product"];

/// Searchable category keywords, matching the catalog's category set.
pub const CATEGORY_TERMS: &[&str] = &["electronics", "books", "home", "outdoors", "clothes"];

/// Which candidate list a search term was drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    Name,
    Category,
}

impl std::fmt::Display for SearchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchType::Name => write!(f, "Name"),
            SearchType::Category => write!(f, "Category"),
        }
    }
}

/// Draw one search term: half the time a name keyword, half the time a
/// category keyword, uniform within each list.
pub fn draw_term(rng: &mut impl Rng) -> (SearchType, &'static str) {
    if rng.gen::<f64>() < 0.5 {
        let term = NAME_TERMS[rng.gen_range(0..NAME_TERMS.len())];
        (SearchType::Name, term)
    } else {
        let term = CATEGORY_TERMS[rng.gen_range(0..CATEGORY_TERMS.len())];
        (SearchType::Category, term)
    }
}
