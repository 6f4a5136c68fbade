//! Dependency tagging for outbound fetches.

/// The collections a page reads from.
///
/// Every fetch carries one of these so logs and metrics can say which home
/// page section a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyTag {
    /// Promotional banners for the home slider.
    Banners,
    /// Brand logos for the marquee.
    Brands,
    /// Products for the preview, catalog and detail pages.
    Products,
}

impl DependencyTag {
    pub const ALL: [DependencyTag; 3] = [Self::Banners, Self::Brands, Self::Products];

    /// Get the name of this dependency.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Banners => "banners",
            Self::Brands => "brands",
            Self::Products => "products",
        }
    }

    /// Whether a failure blocks the whole page rather than one section.
    ///
    /// Only the detail page treats products as critical; this reports the
    /// tag's nature and leaves the decision to the page.
    pub fn is_critical(&self) -> bool {
        matches!(self, Self::Products)
    }
}

impl std::fmt::Display for DependencyTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
