//! Product detail selection state.
//!
//! The state is rebuilt from `DetailSelection::initial` for every product and
//! then moved only through the transitions below, so an out-of-stock value
//! can never become the selected variant.

use thiserror::Error;

use crate::catalog::{Product, SIZE_VARIANT_TYPE};
use crate::contact::ContactChannel;

/// Rejected selection transitions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// The product has no variant groups.
    #[error("Product {0} has no variants")]
    NoVariants(String),

    /// The value is not part of the first variant group.
    #[error("Unknown variant value: {0}")]
    UnknownVariant(String),

    /// The value exists but has no stock.
    #[error("Variant {0} is out of stock")]
    OutOfStock(String),
}

/// Per-page selection state for one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSelection {
    pub selected_image: Option<String>,
    pub selected_variant: Option<String>,
    pub description_open: bool,
}

/// One selectable value as rendered in the variant selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantChoice {
    pub value: String,
    pub available: bool,
    pub selected: bool,
}

/// Outcome of the contact call-to-action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactAction {
    /// Link carrying the pre-filled order message.
    Enabled { href: String },
    /// Inert control; no link is produced.
    Disabled { label: String },
}

impl DetailSelection {
    /// Initial state for a freshly loaded product.
    ///
    /// The first image is shown; a variant is pre-selected only when exactly
    /// one value of the first group is in stock.
    pub fn initial(product: &Product) -> Self {
        let selected_variant = product.primary_variant_group().and_then(|group| {
            let mut in_stock = group.values.iter().filter(|v| v.in_stock());
            match (in_stock.next(), in_stock.next()) {
                (Some(only), None) => Some(only.value.clone()),
                _ => None,
            }
        });

        Self {
            selected_image: product.primary_image().map(str::to_string),
            selected_variant,
            description_open: true,
        }
    }

    /// Show one of the product's images. Unknown images are ignored and
    /// `false` is returned.
    pub fn select_image(&mut self, product: &Product, image: &str) -> bool {
        if product.images.iter().any(|i| i == image) {
            self.selected_image = Some(image.to_string());
            true
        } else {
            false
        }
    }

    /// Select a value of the first variant group.
    pub fn select_variant(&mut self, product: &Product, value: &str) -> Result<(), SelectionError> {
        let group = product
            .primary_variant_group()
            .ok_or_else(|| SelectionError::NoVariants(product.id.to_string()))?;

        let choice = group
            .values
            .iter()
            .find(|v| v.value == value)
            .ok_or_else(|| SelectionError::UnknownVariant(value.to_string()))?;

        if !choice.in_stock() {
            return Err(SelectionError::OutOfStock(value.to_string()));
        }

        self.selected_variant = Some(choice.value.clone());
        Ok(())
    }

    /// Expand or collapse the description panel.
    pub fn toggle_description(&mut self) {
        self.description_open = !self.description_open;
    }

    /// Values of the first variant group with availability and selection flags.
    pub fn variant_choices(&self, product: &Product) -> Vec<VariantChoice> {
        product
            .primary_variant_group()
            .map(|group| {
                group
                    .values
                    .iter()
                    .map(|v| VariantChoice {
                        value: v.value.clone(),
                        available: v.in_stock(),
                        selected: self.selected_variant.as_deref() == Some(v.value.as_str()),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Contact link once a variant is chosen, otherwise a disabled prompt.
    pub fn contact_action(&self, product: &Product, channel: &ContactChannel) -> ContactAction {
        let kind = variant_label(product);
        match &self.selected_variant {
            Some(value) => ContactAction::Enabled {
                href: channel.product_link(&product.name, Some((kind, value))),
            },
            None => ContactAction::Disabled {
                label: format!("Pilih {} Dahulu", kind),
            },
        }
    }
}

/// Heading of the first variant group, defaulting to "Ukuran".
pub fn variant_label(product: &Product) -> &str {
    product
        .primary_variant_group()
        .map(|g| g.kind.as_str())
        .filter(|k| !k.is_empty())
        .unwrap_or(SIZE_VARIANT_TYPE)
}
