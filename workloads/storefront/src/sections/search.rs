//! Catalog search bar and sort selector.

use gudang_commerce::prelude::{CatalogQuery, SortOption};
use gudang_sdk::gudang_streaming::escape_html;

/// Render the GET search form for `/katalog`.
///
/// The clear link keeps the sort and drops only the term.
pub fn render_search_form(query: &CatalogQuery) -> String {
    let options: String = SortOption::ALL
        .iter()
        .map(|option| {
            let selected = if query.sort == Some(*option) {
                " selected"
            } else {
                ""
            };
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                option.as_str(),
                selected,
                option.display_name()
            )
        })
        .collect();

    let clear = if query.has_term() {
        let href = match query.sort {
            Some(sort) => format!("/katalog?sort={}", sort.as_str()),
            None => "/katalog".to_string(),
        };
        format!(
            r#"<a class="clear-link" href="{}" aria-label="Hapus pencarian">&times;</a>"#,
            href
        )
    } else {
        String::new()
    };

    format!(
        r#"<section class="container" data-section="search">
    <form class="search" method="get" action="/katalog">
        <input type="search" name="q" value="{term}" placeholder="Cari produk..." aria-label="Cari produk">
        {clear}
        <select name="sort" aria-label="Urutkan">{options}</select>
        <button class="btn" type="submit">Cari</button>
    </form>
</section>
"#,
        term = escape_html(&query.term),
        clear = clear,
        options = options
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_has_no_clear_link() {
        let html = render_search_form(&CatalogQuery::new());
        assert!(!html.contains("clear-link"));
        assert!(html.contains(r#"<option value="name-asc" selected>Nama A-Z</option>"#));
        assert_eq!(html.matches("<option").count(), 4);
    }

    #[test]
    fn test_term_is_escaped_and_clear_keeps_sort() {
        let query = CatalogQuery::from_params(Some("<bra>"), Some("price-desc"));
        let html = render_search_form(&query);
        assert!(html.contains(r#"value="&lt;bra&gt;""#));
        assert!(html.contains(r#"href="/katalog?sort=price-desc""#));
        assert!(html.contains(r#"<option value="price-desc" selected>"#));
    }

    #[test]
    fn test_unknown_sort_selects_nothing() {
        let html = render_search_form(&CatalogQuery::from_params(None, Some("random")));
        assert!(!html.contains(" selected"));
    }
}
