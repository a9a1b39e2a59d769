//! HTTP request handlers.

pub(crate) mod documents;
pub(crate) mod navigation;
pub(crate) mod pages;

use percent_encoding::percent_decode_str;

/// Sidebar disclosure state carried in the `expanded` query parameter.
///
/// Ids are percent-encoded and comma-separated, so the raw query is split
/// before decoding. An absent parameter yields `None` (default state), an
/// empty one yields an empty set.
pub(crate) fn expanded_param(raw_query: Option<&str>) -> Option<Vec<String>> {
    let value = raw_query?
        .split('&')
        .find_map(|pair| pair.strip_prefix("expanded="))?;

    Some(
        value
            .split(',')
            .filter(|id| !id.is_empty())
            .map(|id| percent_decode_str(id).decode_utf8_lossy().into_owned())
            .collect(),
    )
}
