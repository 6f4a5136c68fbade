//! `gudang catalog`: the catalog page pipeline in a terminal.

use anyhow::{Context as _, Result};
use gudang_commerce::prelude::{filter_and_sort, CatalogQuery, Currency, PriceDisplay, Product};
use serde::Serialize;

use super::{currency, CatalogArgs};
use crate::context::Context;

/// One result line.
#[derive(Debug, Serialize)]
pub struct CatalogRow {
    pub id: String,
    pub name: String,
    pub price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizes: Option<String>,
}

/// Filter, sort and format a product snapshot.
pub fn catalog_rows(products: &[Product], query: &CatalogQuery, currency: Currency) -> Vec<CatalogRow> {
    filter_and_sort(products, query)
        .into_iter()
        .map(|product| {
            let price = PriceDisplay::for_product(product, currency);
            CatalogRow {
                id: product.id.to_string(),
                name: product.name.clone(),
                price: price.current.display(),
                original: price.original.map(|m| m.display()),
                discount_percent: price.discount_percent,
                sizes: product.size_summary(),
            }
        })
        .collect()
}

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let currency = currency(&ctx.config)?;
    let query = CatalogQuery::from_params(args.q.as_deref(), args.sort.as_deref());
    if query.sort.is_none() {
        ctx.output.warn(&format!(
            "Unknown sort '{}', keeping store order",
            args.sort.unwrap_or_default()
        ));
    }

    let store = ctx.open_store()?;
    let spinner = ctx.output.spinner("Memuat produk...");
    let products = store.list_all_products().await;
    spinner.finish_and_clear();
    let products = products.context("Gagal memuat produk")?;

    for record in store.drain_fetch_records() {
        ctx.output.debug(&format!(
            "{} {} in {}ms",
            record.tag,
            record.target,
            record.duration.as_millis()
        ));
    }

    let rows = catalog_rows(&products, &query, currency);

    if ctx.output.is_json() {
        ctx.output.json(&rows);
        return Ok(());
    }

    ctx.output.header("Katalog Produk");
    if query.has_term() {
        ctx.output.kv("cari", &query.term);
    }
    if let Some(sort) = query.sort {
        ctx.output.kv("urutan", sort.display_name());
    }

    if rows.is_empty() {
        ctx.output
            .info("Tidak ada produk yang cocok dengan pencarian Anda.");
        return Ok(());
    }

    let widths = [12, 32, 12, 12, 6, 16];
    ctx.output
        .table_row(&["ID", "NAMA", "HARGA", "CORET", "DISKON", "UKURAN"], &widths);
    for row in &rows {
        let discount = row
            .discount_percent
            .map(|pct| format!("-{}%", pct))
            .unwrap_or_default();
        ctx.output.table_row(
            &[
                &row.id,
                &row.name,
                &row.price,
                row.original.as_deref().unwrap_or(""),
                &discount,
                row.sizes.as_deref().unwrap_or(""),
            ],
            &widths,
        );
    }
    ctx.output
        .success(&format!("{} dari {} produk", rows.len(), products.len()));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gudang_commerce::prelude::SortOption;
    use gudang_data::{CatalogStore, MemoryStore};

    fn products() -> Vec<Product> {
        let store = MemoryStore::from_json_str(
            r#"{ "products": [
                { "id": "p1", "name": "Boxer Pro", "retailPrice": 100000, "discountPrice": 80000 },
                { "id": "p2", "name": "Bra Comfort", "retailPrice": 150000, "brand": "Wacoal" }
            ] }"#,
        )
        .unwrap();
        futures::executor::block_on(store.list_all_products()).unwrap()
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let query = CatalogQuery::new().with_term("BOXER");
        let rows = catalog_rows(&products(), &query, Currency::IDR);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].price, "Rp80.000");
        assert_eq!(rows[0].original.as_deref(), Some("Rp100.000"));
        assert_eq!(rows[0].discount_percent, Some(20));
    }

    #[test]
    fn test_brand_matches_and_price_sort() {
        let rows = catalog_rows(
            &products(),
            &CatalogQuery::new().with_term("wacoal"),
            Currency::IDR,
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "p2");

        let rows = catalog_rows(
            &products(),
            &CatalogQuery::new().with_sort(SortOption::PriceDesc),
            Currency::IDR,
        );
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Bra Comfort", "Boxer Pro"]);
    }
}
