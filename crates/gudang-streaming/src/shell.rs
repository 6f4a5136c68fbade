//! Shell template abstraction.

use crate::html::escape_html;
use crate::section::SLOT_RUNTIME;

/// Head content for the shell.
#[derive(Debug, Clone, Default)]
pub struct HeadContent {
    /// Page title.
    pub title: Option<String>,
    /// Meta tags.
    pub meta: Vec<(String, String)>,
    /// Link tags (stylesheets, fonts, etc.).
    pub links: Vec<String>,
    /// Inline scripts in head.
    pub scripts: Vec<String>,
}

impl HeadContent {
    /// Create new head content with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Add a meta tag.
    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Add a stylesheet link.
    pub fn with_stylesheet(mut self, href: &str) -> Self {
        self.links.push(format!(
            r#"<link rel="stylesheet" href="{}">"#,
            escape_html(href)
        ));
        self
    }

    /// Add a preconnect hint.
    pub fn with_preconnect(mut self, href: &str) -> Self {
        self.links.push(format!(
            r#"<link rel="preconnect" href="{}" crossorigin>"#,
            escape_html(href)
        ));
        self
    }

    /// Add inline CSS styles.
    pub fn with_style(mut self, css: &str) -> Self {
        self.links.push(format!("<style>{}</style>", css));
        self
    }

    /// Add an inline script.
    pub fn with_script(mut self, js: &str) -> Self {
        self.scripts.push(js.to_string());
        self
    }

    /// Add the script that swaps streamed section fills into their slots.
    pub fn with_slot_runtime(self) -> Self {
        self.with_script(SLOT_RUNTIME)
    }

    /// Render head content to HTML.
    pub fn render(&self) -> String {
        let mut html = String::from("<meta charset=\"utf-8\">\n");

        if let Some(title) = &self.title {
            html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
        }

        for (name, content) in &self.meta {
            html.push_str(&format!(
                r#"<meta name="{}" content="{}">"#,
                escape_html(name),
                escape_html(content)
            ));
            html.push('\n');
        }

        for link in &self.links {
            html.push_str(link);
            html.push('\n');
        }

        for script in &self.scripts {
            html.push_str(&format!("<script>{}</script>\n", script));
        }

        html
    }
}

/// Shell template: everything around the streamed sections.
#[derive(Debug, Clone)]
pub struct Shell {
    /// Include doctype declaration.
    pub doctype: bool,
    /// Document language.
    pub lang: String,
    /// Head content.
    pub head: HeadContent,
    /// HTML before sections (opening body, header, wrapper divs).
    pub body_start: String,
    /// HTML after sections (footer, closing tags).
    pub body_end: String,
}

impl Shell {
    /// Create a new shell with basic structure.
    pub fn new(head: HeadContent) -> Self {
        Self {
            doctype: true,
            lang: "id".to_string(),
            head,
            body_start: "<body>\n<main>\n".to_string(),
            body_end: "</main>\n</body>\n</html>".to_string(),
        }
    }

    /// Set custom body start HTML.
    pub fn with_body_start(mut self, html: impl Into<String>) -> Self {
        self.body_start = html.into();
        self
    }

    /// Set custom body end HTML.
    pub fn with_body_end(mut self, html: impl Into<String>) -> Self {
        self.body_end = html.into();
        self
    }

    /// Render the opening part of the shell (before sections).
    pub fn render_opening(&self) -> String {
        let mut html = String::new();

        if self.doctype {
            html.push_str("<!DOCTYPE html>\n");
        }

        html.push_str(&format!("<html lang=\"{}\">\n<head>\n", escape_html(&self.lang)));
        html.push_str(&self.head.render());
        html.push_str("</head>\n");
        html.push_str(&self.body_start);

        html
    }

    /// Render the closing part of the shell (after sections).
    pub fn render_closing(&self) -> String {
        self.body_end.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_contains_head_and_body_start() {
        let shell = Shell::new(
            HeadContent::new("Katalog Produk | Gudang Pakaian Dalam")
                .with_meta("viewport", "width=device-width, initial-scale=1")
                .with_style("body{margin:0}"),
        )
        .with_body_start("<body><header>Katalog</header>");

        let html = shell.render_opening();
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"id\">"));
        assert!(html.contains("<title>Katalog Produk | Gudang Pakaian Dalam</title>"));
        assert!(html.contains(r#"<meta name="viewport""#));
        assert!(html.contains("<style>body{margin:0}</style>"));
        assert!(html.ends_with("<body><header>Katalog</header>"));
    }

    #[test]
    fn test_title_is_escaped() {
        let head = HeadContent::new("<script>x</script>");
        assert!(head.render().contains("<title>&lt;script&gt;x&lt;/script&gt;</title>"));
    }

    #[test]
    fn test_slot_runtime_is_included() {
        let head = HeadContent::new("Beranda").with_slot_runtime();
        assert!(head.render().contains("function gudangFill"));
    }
}
