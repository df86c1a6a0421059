// File: crates/chart-core/src/embed.rs
// Summary: Server-side helpers that emit the data-carrying markup the bootstrapper reads back.

use crate::dataset::ChartDataset;
use crate::error::ChartError;
use crate::host::DATA_ELEMENT_ID;

/// Render the hidden carrier element, e.g.
/// `<div id="chart-data" data-chart="{&quot;dates&quot;:...}"></div>`.
/// The attribute value is escaped so arbitrary label strings cannot break
/// out of the markup.
pub fn data_element_html(dataset: &ChartDataset) -> Result<String, ChartError> {
    let payload = dataset.to_embed_json()?;
    Ok(format!(
        r#"<div id="{}" data-chart="{}" hidden></div>"#,
        DATA_ELEMENT_ID,
        escape_attr(&payload)
    ))
}

/// Escape for element text content.
pub(crate) fn escape_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape for a double-quoted attribute value.
pub(crate) fn escape_attr(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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
