//! `gudang product`: one product as the detail page would show it.

use anyhow::{bail, Context as _, Result};
use dialoguer::Select;
use gudang_commerce::prelude::{
    variant_label, ContactAction, ContactChannel, Currency, DetailSelection, PriceDisplay, Product,
};
use serde::Serialize;

use super::{currency, ProductArgs};
use crate::context::Context;
use crate::output::stock_badge;

/// Everything the detail page derives from a product and a selection.
#[derive(Debug, Serialize)]
pub struct ProductReport {
    pub id: String,
    pub name: String,
    pub price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<u32>,
    pub variant_label: String,
    pub variants: Vec<VariantLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_variant: Option<String>,
    /// WhatsApp link once a variant is chosen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_link: Option<String>,
    /// Prompt shown on the disabled contact button.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_prompt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VariantLine {
    pub value: String,
    pub available: bool,
    pub selected: bool,
}

/// Build the report for a product and selection.
pub fn describe(
    product: &Product,
    selection: &DetailSelection,
    channel: &ContactChannel,
    currency: Currency,
) -> ProductReport {
    let price = PriceDisplay::for_product(product, currency);
    let (contact_link, contact_prompt) = match selection.contact_action(product, channel) {
        ContactAction::Enabled { href } => (Some(href), None),
        ContactAction::Disabled { label } => (None, Some(label)),
    };

    ProductReport {
        id: product.id.to_string(),
        name: product.name.clone(),
        price: price.current.display(),
        original: price.original.map(|m| m.display()),
        discount_percent: price.discount_percent,
        variant_label: variant_label(product).to_string(),
        variants: selection
            .variant_choices(product)
            .into_iter()
            .map(|choice| VariantLine {
                value: choice.value,
                available: choice.available,
                selected: choice.selected,
            })
            .collect(),
        selected_variant: selection.selected_variant.clone(),
        contact_link,
        contact_prompt,
    }
}

/// Offer only in-stock values.
fn pick_variant(product: &Product, selection: &DetailSelection) -> Result<Option<String>> {
    let values: Vec<String> = selection
        .variant_choices(product)
        .into_iter()
        .filter(|choice| choice.available)
        .map(|choice| choice.value)
        .collect();

    if values.is_empty() {
        return Ok(None);
    }

    let index = Select::new()
        .with_prompt(format!("Pilih {}", variant_label(product)))
        .items(&values)
        .default(0)
        .interact()?;

    Ok(values.into_iter().nth(index))
}

/// Run the product command.
pub async fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let currency = currency(&ctx.config)?;
    let channel = ContactChannel::new(
        &ctx.config.store.name,
        &ctx.config.store.whatsapp_number,
    );

    let store = ctx.open_store()?;
    let spinner = ctx.output.spinner("Memuat produk...");
    let product = store.get_product_by_id(&args.id).await;
    spinner.finish_and_clear();

    let Some(product) = product.context("Gagal memuat produk")? else {
        bail!("Produk tidak ditemukan: {}", args.id);
    };

    let mut selection = DetailSelection::initial(&product);
    if let Some(value) = args.varian.as_deref() {
        selection
            .select_variant(&product, value)
            .with_context(|| format!("Cannot select variant '{}'", value))?;
    } else if args.pick {
        match pick_variant(&product, &selection)? {
            Some(value) => selection.select_variant(&product, &value)?,
            None => ctx.output.warn("Semua varian habis"),
        }
    }

    let report = describe(&product, &selection, &channel, currency);

    if ctx.output.is_json() {
        ctx.output.json(&report);
        return Ok(());
    }

    ctx.output.header(&report.name);
    ctx.output.kv("id", &report.id);
    ctx.output.kv("harga", &report.price);
    if let (Some(original), Some(pct)) = (&report.original, report.discount_percent) {
        ctx.output.kv("harga coret", &format!("{} (-{}%)", original, pct));
    }

    if !report.variants.is_empty() {
        ctx.output.info(&report.variant_label);
        for line in &report.variants {
            let marker = if line.selected { " ◀" } else { "" };
            ctx.output.list_item(&format!(
                "{} [{}]{}",
                line.value,
                stock_badge(line.available),
                marker
            ));
        }
    }

    match (&report.contact_link, &report.contact_prompt) {
        (Some(link), _) => ctx.output.success(&format!("Hubungi via WhatsApp: {}", link)),
        (None, Some(prompt)) => ctx.output.warn(prompt),
        (None, None) => {}
    }

    Ok(())
}
