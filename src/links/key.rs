const KEY_PREFIX: &str = "tnr";
const KEY_SUFFIX: &str = ".aspx";

/// Recover the tournament key from one of the site's tournament URLs.
///
/// Returns the text between the first `tnr` and the next `.aspx`, or `None`
/// if the URL does not follow that shape.
pub fn tournament_key(url: &str) -> Option<&str> {
    let start = url.find(KEY_PREFIX)? + KEY_PREFIX.len();
    let rest = &url[start..];
    let end = rest.find(KEY_SUFFIX)?;
    Some(&rest[..end])
}
