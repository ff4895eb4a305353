use log::debug;

use crate::domain::SearchResultEntry;

const RESULTS_TABLE: &str = "<table class=\"CRs2\"";
const TABLE_END: &str = "</table>";
const ANCHOR_OPEN: &str = "<a href";
const ANCHOR_CLOSE: &str = "</a>";

/// Parse the tournaments listed in a search results page, in document order
pub fn parse_search_results(html: &str) -> Vec<SearchResultEntry> {
    let Some(table) = results_table(html) else {
        debug!("No search results table found");
        return Vec::new();
    };

    table
        .match_indices(ANCHOR_OPEN)
        .filter_map(|(at, _)| parse_anchor(&table[at..]))
        .collect()
}

// --- Table Location ---

fn results_table(html: &str) -> Option<&str> {
    let start = html.find(RESULTS_TABLE)?;
    let table = &html[start..];
    let end = table.find(TABLE_END).unwrap_or(table.len());
    Some(&table[..end])
}

// --- Anchor Parsing ---

fn parse_anchor(anchor: &str) -> Option<SearchResultEntry> {
    let Some(tag_end) = anchor.find('>') else {
        debug!("Skipping anchor without a closing '>'");
        return None;
    };

    let tag = &anchor[..=tag_end];
    let Some(url) = quoted_value(tag) else {
        debug!("Skipping anchor without a quoted href: {}", tag);
        return None;
    };

    let body = &anchor[tag_end + 1..];
    let Some(name_end) = body.find(ANCHOR_CLOSE) else {
        debug!("Skipping unterminated anchor: {}", tag);
        return None;
    };

    Some(SearchResultEntry::new(url, &body[..name_end]))
}

/// Text between the first and second double quote of a tag
fn quoted_value(tag: &str) -> Option<&str> {
    tag.split('"').nth(1)
}
