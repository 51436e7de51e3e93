//! Front-matter splitting for content documents.
//!
//! A document is a YAML header fenced by `---` lines followed by free text:
//!
//! ```markdown
//! ---
//! title: Choosing a refurbished CT scanner
//! date: 2024-03-18
//! ---
//! Body text...
//! ```

use serde::de::DeserializeOwned;

use super::ContentError;

const FENCE: &str = "---";

/// Split a raw document into its header YAML and body.
///
/// Leading blank lines of the body are dropped; the rest is kept verbatim
/// apart from line-ending normalisation.
pub fn split(raw: &str) -> Result<(&str, String), ContentError> {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);

    let mut lines = raw.split_inclusive('\n');
    let first = lines.next().unwrap_or("");
    if first.trim_end() != FENCE {
        return Err(ContentError::MissingFrontMatter);
    }

    let header_start = first.len();
    let mut offset = header_start;
    let mut header_end = None;

    for line in lines.by_ref() {
        if line.trim_end() == FENCE {
            header_end = Some((offset, offset + line.len()));
            break;
        }
        offset += line.len();
    }

    let (header_end, body_start) = header_end.ok_or(ContentError::UnterminatedFrontMatter)?;

    let header = &raw[header_start..header_end];
    let body = raw[body_start..]
        .lines()
        .skip_while(|line| line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    Ok((header, body))
}

/// Parse a raw document into typed front matter and body.
pub fn parse<T: DeserializeOwned>(raw: &str) -> Result<(T, String), ContentError> {
    let (header, body) = split(raw)?;
    let metadata = serde_yaml::from_str(header)?;
    Ok((metadata, body))
}
