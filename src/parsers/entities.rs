use scraper::Html;

/// Decode HTML character references (`&amp;`, `&#252;`, ...) into literal text
pub fn decode_html_entities(text: &str) -> String {
    let fragment = Html::parse_fragment(text);
    fragment.root_element().text().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_and_numeric_references() {
        assert_eq!(decode_html_entities("Open &amp; Rapid"), "Open & Rapid");
        assert_eq!(decode_html_entities("M&#252;nchen"), "München");
        assert_eq!(decode_html_entities("&quot;Blitz&quot;"), "\"Blitz\"");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(decode_html_entities("Spring Open 2024"), "Spring Open 2024");
    }
}
