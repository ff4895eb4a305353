use log::debug;

use super::entities::decode_html_entities;
use super::window::FieldWindow;

const NAME: FieldWindow<'static> = FieldWindow::new("<table", "<h2>", "</h2>");

const GROUP: FieldWindow<'static> = FieldWindow::new(
    "<td class=\"CRnowrap b\">Tournament selection</td>",
    "<b>",
    "</b>",
);

const MAX_ROUND: FieldWindow<'static> = FieldWindow::new(
    "<td class=\"CR\">Number of rounds</td>",
    "<td class=\"CR\">",
    "</td>",
);

const CURRENT_ROUND: FieldWindow<'static> =
    FieldWindow::new("<td class=\"CRnowrap b\">Ranking list after</td>", "Rd.", "</a>")
        .ending_at("</tr>")
        .last_match();

/// Tournament name from the first `<h2>` after the page's first table, entities decoded
pub fn tournament_name(html: &str) -> Option<String> {
    let raw = NAME.extract(html);
    if raw.is_none() {
        debug!("No tournament name heading found");
    }
    raw.map(decode_html_entities)
}

/// Group shown in the tournament selection row; empty when the row is missing
pub fn tournament_group(html: &str) -> String {
    match GROUP.extract(html) {
        Some(raw) => last_segment(raw).to_string(),
        None => {
            debug!("No tournament selection row found");
            String::new()
        }
    }
}

/// Total number of rounds, as printed on the page
pub fn max_round(html: &str) -> Option<&str> {
    MAX_ROUND.extract(html)
}

/// Latest round the ranking list covers, as printed on the page
pub fn current_round(html: &str) -> Option<&str> {
    CURRENT_ROUND.extract(html)
}

fn last_segment(raw: &str) -> &str {
    raw.rsplit(':').next().unwrap_or(raw).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
        <h2>Not this one</h2>
        <table class="CRs1"><tr><td><h2>Spring Open &amp; Rapid 2024</h2></td></tr></table>
        <table>
          <tr><td class="CRnowrap b">Tournament selection</td>
              <td><a href="tnr1.aspx">A</a>, <b>Group : Open A </b></td></tr>
          <tr><td class="CR">Number of rounds</td><td class="CR">9</td></tr>
          <tr><td class="CRnowrap b">Ranking list after</td>
              <td><a href="x">Rd.1</a> , <a href="x">Rd.2</a> , <a href="x">Rd.5</a></td></tr>
          <tr><td><a href="y">Rd.8</a></td></tr>
        </table>
        </body></html>
    "#;

    #[test]
    fn test_name_is_decoded() {
        assert_eq!(
            tournament_name(PAGE).as_deref(),
            Some("Spring Open & Rapid 2024")
        );
    }

    #[test]
    fn test_name_missing_without_table() {
        assert_eq!(tournament_name("<h2>Loose heading</h2>"), None);
    }

    #[test]
    fn test_group_takes_last_colon_segment() {
        assert_eq!(tournament_group(PAGE), "Open A");
    }

    #[test]
    fn test_group_without_colon_is_trimmed() {
        let html = r#"<td class="CRnowrap b">Tournament selection</td><td><b> Seniors </b>"#;
        assert_eq!(tournament_group(html), "Seniors");
    }

    #[test]
    fn test_group_defaults_to_empty() {
        assert_eq!(tournament_group("<html></html>"), "");
    }

    #[test]
    fn test_max_round() {
        assert_eq!(max_round(PAGE), Some("9"));
        assert_eq!(max_round("<table></table>"), None);
    }

    #[test]
    fn test_current_round_uses_last_link_in_row() {
        assert_eq!(current_round(PAGE), Some("5"));
    }

    #[test]
    fn test_current_round_missing() {
        assert_eq!(current_round("<td class=\"CR\">Number of rounds</td>"), None);
    }
}
