//! Per-request site context shared by every renderer.

use chrono::Datelike;
use gudang_commerce::prelude::{CommerceError, ContactChannel, Currency};
use gudang_sdk::gudang_core::SiteConfig;

/// Resolved settings a page needs to render.
#[derive(Debug, Clone)]
pub struct Site {
    pub config: SiteConfig,
    pub currency: Currency,
    pub contact: ContactChannel,
    /// Year printed in the footer copyright.
    pub year: i32,
}

impl Site {
    /// Resolve the currency and contact channel; the year is taken from the
    /// current UTC date.
    pub fn from_config(config: SiteConfig) -> Result<Self, CommerceError> {
        let currency = Currency::from_code(&config.store.currency)
            .ok_or_else(|| CommerceError::UnknownCurrency(config.store.currency.clone()))?;
        let contact = ContactChannel::new(&config.store.name, &config.store.whatsapp_number);

        Ok(Self {
            config,
            currency,
            contact,
            year: chrono::Utc::now().year(),
        })
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn store_name(&self) -> &str {
        &self.config.store.name
    }

    /// URL of a bundled image under the configured asset base.
    pub fn asset(&self, file: &str) -> String {
        format!("{}/{}", self.config.store.assets_base.trim_end_matches('/'), file)
    }
}
