//! Catalog search and sort.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::search::compare_names;

/// Sort options offered on the catalog page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOption {
    /// Name A-Z (page default).
    #[default]
    NameAsc,
    /// Name Z-A.
    NameDesc,
    /// Cheapest first.
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
}

impl SortOption {
    /// All options in menu order.
    pub const ALL: [SortOption; 4] = [
        SortOption::NameAsc,
        SortOption::NameDesc,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
    ];

    /// Parse the query-string key. Unknown keys yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "name-asc" => Some(Self::NameAsc),
            "name-desc" => Some(Self::NameDesc),
            "price-asc" => Some(Self::PriceAsc),
            "price-desc" => Some(Self::PriceDesc),
            _ => None,
        }
    }

    /// Query-string key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NameAsc => "name-asc",
            Self::NameDesc => "name-desc",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
        }
    }

    /// Menu label.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::NameAsc => "Nama A-Z",
            Self::NameDesc => "Nama Z-A",
            Self::PriceAsc => "Harga Termurah",
            Self::PriceDesc => "Harga Termahal",
        }
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            Self::NameAsc => compare_names(&a.name, &b.name),
            Self::NameDesc => compare_names(&b.name, &a.name),
            Self::PriceAsc => a.listed_price().cmp(&b.listed_price()),
            Self::PriceDesc => b.listed_price().cmp(&a.listed_price()),
        }
    }
}

/// Search term and sort selection for one catalog render.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogQuery {
    /// Free-text term; empty means no filter.
    pub term: String,
    /// `None` when the requested sort key was not recognized.
    pub sort: Option<SortOption>,
}

impl CatalogQuery {
    /// Create a query with the default sort.
    pub fn new() -> Self {
        Self {
            term: String::new(),
            sort: Some(SortOption::default()),
        }
    }

    /// Build from request parameters. A missing sort falls back to the page
    /// default; an unknown one is kept as unrecognized.
    pub fn from_params(term: Option<&str>, sort: Option<&str>) -> Self {
        Self {
            term: term.unwrap_or_default().to_string(),
            sort: match sort {
                None | Some("") => Some(SortOption::default()),
                Some(key) => SortOption::parse(key),
            },
        }
    }

    /// Set the search term.
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into();
        self
    }

    /// Set the sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Whether a search term is active.
    pub fn has_term(&self) -> bool {
        !self.term.trim().is_empty()
    }

    /// Whether a product matches the search term.
    pub fn matches(&self, product: &Product) -> bool {
        if self.term.is_empty() {
            return true;
        }
        let needle = self.term.to_lowercase();
        [
            product.name.as_str(),
            product.description.as_str(),
            product.brand.as_deref().unwrap_or_default(),
            product.category.as_deref().unwrap_or_default(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Filter then sort a product set without touching the records.
///
/// Ties on the sort key fall back to product id so the output is
/// deterministic regardless of source order.
pub fn filter_and_sort<'a>(products: &'a [Product], query: &CatalogQuery) -> Vec<&'a Product> {
    let mut visible: Vec<&Product> = products.iter().filter(|p| query.matches(p)).collect();

    if let Some(sort) = query.sort {
        visible.sort_by(|a, b| sort.compare(a, b).then_with(|| a.id.cmp(&b.id)));
    }

    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;

    fn product(id: &str, name: &str, retail: i64, discount: Option<i64>) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            description: String::new(),
            images: Vec::new(),
            retail_price: retail,
            discount_price: discount,
            variants: Vec::new(),
            brand: None,
            category: None,
            status: None,
            created_at: None,
        }
    }

    fn sample() -> Vec<Product> {
        let mut bra = product("p2", "Bra Comfort", 120000, None);
        bra.brand = Some("Sorella".to_string());
        bra.category = Some("Wanita".to_string());
        let mut singlet = product("p3", "Singlet Katun", 45000, Some(0));
        singlet.description = "Bahan katun lembut untuk boxer lovers".to_string();
        vec![
            bra,
            product("p1", "Boxer Pro", 100000, Some(80000)),
            singlet,
        ]
    }

    fn names(result: &[&Product]) -> Vec<String> {
        result.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_search_matches_name_case_insensitively() {
        let products = vec![
            product("p1", "Boxer Pro", 100000, None),
            product("p2", "Bra Comfort", 90000, None),
        ];
        let query = CatalogQuery::new().with_term("boxer");
        assert_eq!(names(&filter_and_sort(&products, &query)), vec!["Boxer Pro"]);

        let query = CatalogQuery::new().with_term("BOXER");
        assert_eq!(names(&filter_and_sort(&products, &query)), vec!["Boxer Pro"]);
    }

    #[test]
    fn test_search_covers_description_brand_and_category() {
        let products = sample();
        let by_description = CatalogQuery::new().with_term("katun lembut");
        assert_eq!(names(&filter_and_sort(&products, &by_description)), vec!["Singlet Katun"]);

        let by_brand = CatalogQuery::new().with_term("sorella");
        assert_eq!(names(&filter_and_sort(&products, &by_brand)), vec!["Bra Comfort"]);

        let by_category = CatalogQuery::new().with_term("wanita");
        assert_eq!(names(&filter_and_sort(&products, &by_category)), vec!["Bra Comfort"]);
    }

    #[test]
    fn test_empty_term_keeps_every_product() {
        let products = sample();
        let result = filter_and_sort(&products, &CatalogQuery::new());
        assert_eq!(result.len(), products.len());
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let products = sample();
        let query = CatalogQuery::new().with_term("kaos kaki");
        assert!(filter_and_sort(&products, &query).is_empty());
    }

    #[test]
    fn test_name_sorting() {
        let products = sample();
        let asc = filter_and_sort(&products, &CatalogQuery::new());
        assert_eq!(names(&asc), vec!["Boxer Pro", "Bra Comfort", "Singlet Katun"]);

        let desc = filter_and_sort(&products, &CatalogQuery::new().with_sort(SortOption::NameDesc));
        assert_eq!(names(&desc), vec!["Singlet Katun", "Bra Comfort", "Boxer Pro"]);
    }

    #[test]
    fn test_name_sorting_folds_accents() {
        let products = vec![
            product("z", "Zebra Boxer", 50000, None),
            product("e", "Élan Bra", 60000, None),
        ];
        let asc = filter_and_sort(&products, &CatalogQuery::new());
        assert_eq!(names(&asc), vec!["Élan Bra", "Zebra Boxer"]);
    }

    #[test]
    fn test_price_sorting_is_monotonic_in_listed_price() {
        let products = sample();
        let asc = filter_and_sort(&products, &CatalogQuery::new().with_sort(SortOption::PriceAsc));
        let prices: Vec<i64> = asc.iter().map(|p| p.listed_price()).collect();
        assert_eq!(prices, vec![45000, 80000, 120000]);

        let desc = filter_and_sort(&products, &CatalogQuery::new().with_sort(SortOption::PriceDesc));
        assert!(desc
            .windows(2)
            .all(|w| w[0].listed_price() >= w[1].listed_price()));
    }

    #[test]
    fn test_price_ties_break_on_id() {
        let products = vec![
            product("b", "Kaos B", 50000, None),
            product("a", "Kaos A", 50000, None),
        ];
        let result =
            filter_and_sort(&products, &CatalogQuery::new().with_sort(SortOption::PriceAsc));
        assert_eq!(result[0].id.as_str(), "a");
        assert_eq!(result[1].id.as_str(), "b");
    }

    #[test]
    fn test_unrecognized_sort_keeps_filtered_order() {
        let products = sample();
        let query = CatalogQuery::from_params(None, Some("popular"));
        assert_eq!(query.sort, None);
        let result = filter_and_sort(&products, &query);
        assert_eq!(names(&result), vec!["Bra Comfort", "Boxer Pro", "Singlet Katun"]);
    }

    #[test]
    fn test_from_params_defaults() {
        let query = CatalogQuery::from_params(Some("bra"), None);
        assert_eq!(query.term, "bra");
        assert_eq!(query.sort, Some(SortOption::NameAsc));

        let query = CatalogQuery::from_params(None, Some("price-desc"));
        assert_eq!(query.sort, Some(SortOption::PriceDesc));
    }

    #[test]
    fn test_source_records_are_untouched() {
        let products = sample();
        let before = products.clone();
        let _ = filter_and_sort(&products, &CatalogQuery::new().with_sort(SortOption::PriceDesc));
        assert_eq!(products, before);
    }

    #[test]
    fn test_sort_option_round_trip_keys() {
        for option in SortOption::ALL {
            assert_eq!(SortOption::parse(option.as_str()), Some(option));
        }
    }
}
