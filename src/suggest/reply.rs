// src/suggest/reply.rs
// =============================================================================
// Parses the model's reply into Suggestion records.
//
// Expected shape, repeated for each suggestion:
//
//   PRIORITY: High
//   TITLE: Compress hero images
//   DESCRIPTION: Serve WebP versions of the large images on the home page.
//   IMPACT: Faster first paint
//
// The reply is split on "PRIORITY:" markers. Anything before the first
// marker (a preamble like "Here are my suggestions") is ignored. Inside a
// block, lines are matched by their label; unknown lines are skipped.
//
// A block without a TITLE or a DESCRIPTION is dropped. A block without an
// IMPACT gets a generic one.
// =============================================================================

use crate::report::{Priority, Suggestion};

const PRIORITY_MARKER: &str = "PRIORITY:";
const DEFAULT_IMPACT: &str = "Will improve overall site performance";

pub fn parse_suggestions(reply: &str) -> Vec<Suggestion> {
    reply
        .split(PRIORITY_MARKER)
        .skip(1)
        .filter_map(parse_block)
        .collect()
}

// One block: the rest of the PRIORITY line, then labeled lines
fn parse_block(block: &str) -> Option<Suggestion> {
    let mut lines = block.trim().lines();
    let priority = Priority::parse_lenient(lines.next().unwrap_or_default());

    let mut title = None;
    let mut description = None;
    let mut impact = None;

    for line in lines.map(str::trim) {
        if let Some(value) = labeled(line, "TITLE:") {
            title = Some(value);
        } else if let Some(value) = labeled(line, "DESCRIPTION:") {
            description = Some(value);
        } else if let Some(value) = labeled(line, "IMPACT:") {
            impact = Some(value);
        }
    }

    Some(Suggestion {
        priority,
        title: title?.to_string(),
        description: description?.to_string(),
        impact: impact.unwrap_or(DEFAULT_IMPACT).to_string(),
    })
}

// The trimmed value after `label`, if the line has that label and a value
fn labeled<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    line.strip_prefix(label)
        .map(str::trim)
        .filter(|value| !value.is_empty())
}
