//! M3U rendering
//!
//! Pure functions: identical input always yields identical lines.

use crate::model::{ContentEntry, StreamRecord};

/// First line of every playlist document.
pub const HEADER: &str = "#EXTM3U";

/// Duration placeholder for live or unknown length.
const UNKNOWN_DURATION: i32 = -1;

/// Render one entry as `#EXTINF` / URL line pairs.
///
/// Records without a stream URL are skipped. The header is not included.
pub fn render_entry(entry: &ContentEntry) -> Vec<String> {
    let group = group_title(entry.display_name());
    let mut lines = Vec::new();

    for record in entry.qualifying_records() {
        lines.push(extinf_line(entry, record, &group));
        lines.push(record.url().to_string());
    }

    lines
}

/// Render a full document: the header followed by every entry in order.
pub fn render_document<'a, I>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a ContentEntry>,
{
    let mut lines = vec![HEADER.to_string()];
    for entry in entries {
        lines.extend(render_entry(entry));
    }
    lines
}

fn extinf_line(entry: &ContentEntry, record: &StreamRecord, group: &str) -> String {
    let mut line = format!("#EXTINF:{}", UNKNOWN_DURATION);

    if let Some(id) = record.tvg_id() {
        line.push_str(&format!(" tvg-id=\"{}\"", single_line(id)));
    }
    if let Some(name) = record.tvg_name() {
        line.push_str(&format!(" tvg-name=\"{}\"", single_line(name)));
    }
    line.push_str(&format!(
        " tvg-logo=\"{}\" group-title=\"{}\",{}",
        single_line(record.resolved_logo(entry)),
        group,
        single_line(record.display_title())
    ));

    line
}

/// `group-title` value: double quotes become single quotes.
fn group_title(name: &str) -> String {
    single_line(name).replace('"', "'")
}

// helper. A line break inside a value would split the record.
fn single_line(s: &str) -> String {
    if s.contains(['\r', '\n']) {
        s.split(['\r', '\n'])
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        s.to_string()
    }
}
