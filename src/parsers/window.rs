/// Which match of the inner delimiters a window search uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    First,
    Last,
}

/// A field located by a marker phrase followed by a pair of inner delimiters.
///
/// The search window opens right after `marker` and, when `window_end` is
/// set, closes at its first occurrence after the marker. If `window_end`
/// never appears the window runs to the end of the document. Inside the
/// window the value sits between `open` and `close`, both located with the
/// same [`Direction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldWindow<'p> {
    pub marker: &'p str,
    pub window_end: Option<&'p str>,
    pub open: &'p str,
    pub close: &'p str,
    pub direction: Direction,
}

impl<'p> FieldWindow<'p> {
    pub const fn new(marker: &'p str, open: &'p str, close: &'p str) -> Self {
        Self {
            marker,
            window_end: None,
            open,
            close,
            direction: Direction::First,
        }
    }

    pub const fn ending_at(mut self, window_end: &'p str) -> Self {
        self.window_end = Some(window_end);
        self
    }

    pub const fn last_match(mut self) -> Self {
        self.direction = Direction::Last;
        self
    }

    /// Extract the raw value, or `None` when the marker or either inner
    /// delimiter is missing from the window.
    pub fn extract<'h>(&self, html: &'h str) -> Option<&'h str> {
        let window = self.window(html)?;
        let (open_at, close_at) = match self.direction {
            Direction::First => (window.find(self.open)?, window.find(self.close)?),
            Direction::Last => (window.rfind(self.open)?, window.rfind(self.close)?),
        };
        let value_start = open_at + self.open.len();
        if close_at < value_start {
            return None;
        }
        window.get(value_start..close_at)
    }

    fn window<'h>(&self, html: &'h str) -> Option<&'h str> {
        let marker_at = html.find(self.marker)?;
        let rest = &html[marker_at + self.marker.len()..];
        let end = self
            .window_end
            .and_then(|end| rest.find(end))
            .unwrap_or(rest.len());
        Some(&rest[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CELL: FieldWindow<'static> = FieldWindow::new("<td>Label</td>", "<b>", "</b>");

    #[test]
    fn test_missing_marker_is_absent() {
        assert_eq!(CELL.extract("<td>Other</td><b>x</b>"), None);
    }

    #[test]
    fn test_first_match_after_marker() {
        let html = "<b>before</b><td>Label</td><b>one</b><b>two</b>";
        assert_eq!(CELL.extract(html), Some("one"));
    }

    #[test]
    fn test_last_match_inside_bounded_window() {
        let window = FieldWindow::new("<td>Rounds</td>", "Rd.", "</a>")
            .ending_at("</tr>")
            .last_match();
        let html = "<td>Rounds</td><a>Rd.1</a><a>Rd.2</a></tr><tr><a>Rd.7</a></tr>";
        assert_eq!(window.extract(html), Some("2"));
    }

    #[test]
    fn test_missing_window_end_extends_to_document_end() {
        let window = FieldWindow::new("<td>Rounds</td>", "Rd.", "</a>")
            .ending_at("</tr>")
            .last_match();
        let html = "<td>Rounds</td><a>Rd.1</a><a>Rd.4</a>";
        assert_eq!(window.extract(html), Some("4"));
    }

    #[test]
    fn test_missing_open_delimiter_is_absent() {
        assert_eq!(CELL.extract("<td>Label</td>plain text</b>"), None);
    }

    #[test]
    fn test_close_before_open_is_absent() {
        assert_eq!(CELL.extract("<td>Label</td></b> and <b>unterminated"), None);
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(CELL.extract("<td>Label</td><b></b>"), Some(""));
    }
}
