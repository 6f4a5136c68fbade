//! Section abstraction for independently streamable page parts.
//!
//! A data-bound section is streamed twice: first as a placeholder holding
//! its skeleton, then, once its data resolves, as a `<template>` fill that
//! the slot runtime swaps in. Sections without data are sent once.

/// Client script that moves a streamed fill into its placeholder.
pub const SLOT_RUNTIME: &str = "function gudangFill(n){var t=document.getElementById('fill-'+n),s=document.getElementById('slot-'+n);if(t&&s){s.replaceWith(t.content.cloneNode(true));t.remove();}}";

/// A named, independently-streamable part of the page.
#[derive(Debug, Clone)]
pub struct Section {
    /// Section name (used for timing, slot ids and identification).
    pub name: String,
    /// Dependency tags this section waits on.
    pub dependencies: Vec<String>,
    /// Skeleton HTML streamed while data is loading.
    pub skeleton: Option<String>,
}

impl Section {
    /// Create a new section.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dependencies: Vec::new(),
            skeleton: None,
        }
    }

    /// Create a section using the builder.
    pub fn builder(name: impl Into<String>) -> SectionBuilder {
        SectionBuilder::new(name)
    }

    /// Placeholder streamed right after the shell.
    pub fn placeholder(&self) -> String {
        format!(
            r#"<div id="slot-{name}" data-slot="{name}" aria-busy="true">{skeleton}</div>"#,
            name = self.name,
            skeleton = self.skeleton.as_deref().unwrap_or_default()
        )
    }

    /// Final HTML for the slot, streamed once the data resolves.
    pub fn fill(&self, html: &str) -> String {
        format!(
            r#"<template id="fill-{name}">{html}</template><script>gudangFill("{name}")</script>"#,
            name = self.name,
            html = html
        )
    }
}

/// Builder for ergonomic section definition.
pub struct SectionBuilder {
    name: String,
    dependencies: Vec<String>,
    skeleton: Option<String>,
}

impl SectionBuilder {
    /// Create a new section builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dependencies: Vec::new(),
            skeleton: None,
        }
    }

    /// Add a dependency tag.
    pub fn depends_on(mut self, tag: impl Into<String>) -> Self {
        self.dependencies.push(tag.into());
        self
    }

    /// Set the loading skeleton.
    pub fn with_skeleton(mut self, html: impl Into<String>) -> Self {
        self.skeleton = Some(html.into());
        self
    }

    /// Build the section.
    pub fn build(self) -> Section {
        Section {
            name: self.name,
            dependencies: self.dependencies,
            skeleton: self.skeleton,
        }
    }
}
