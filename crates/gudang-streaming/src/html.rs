//! HTML escaping.

/// Escape text for element content and quoted attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Boxer" & 'Bra'</b>"#),
            "&lt;b&gt;&quot;Boxer&quot; &amp; &#39;Bra&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("Rp80.000"), "Rp80.000");
    }
}
