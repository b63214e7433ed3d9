//! The inline segmenter, which splits a line of prose into alternating styled
//! text runs and formula groups.
//!
//! The line is scanned for math delimiters first (`$$…$$` before `$…$`, so a
//! bare `$` inside a display span is not misread as a terminator), and each
//! math span is handed to the [`NodeBuilder`]. The text between math spans is
//! then sub-scanned for `**bold**` and `*italic*` markers.
//!
//! This is the single recovery boundary of the crate: a formula that fails to
//! build becomes an [`FormattedRun::ErrorText`] run carrying its original
//! delimited source, and the rest of the line is processed normally.

use crate::config::ParserConfig;
use crate::node::FormattedRun;
use crate::parser::NodeBuilder;

/// Segment a line using the default configuration.
pub fn segment(line: &str) -> Vec<FormattedRun> {
    segment_with(line, &ParserConfig::default())
}

/// Segment a line into styled text runs and formula groups.
pub fn segment_with(line: &str, config: &ParserConfig) -> Vec<FormattedRun> {
    let builder = NodeBuilder::new(config);
    let mut runs = Vec::new();
    // Start of the pending text span, which ends where a math span begins.
    let mut text_start = 0;
    let mut index = 0;

    while let Some(c) = line[index..].chars().next() {
        if c != '$' {
            index += c.len_utf8();
            continue;
        }

        // Prefer the display delimiter over the inline one at each candidate.
        let delimiter = if line[index + 1..].starts_with('$') {
            "$$"
        } else {
            "$"
        };
        let body_start = index + delimiter.len();
        let Some(close) = line[body_start..].find(delimiter) else {
            // An opener with no closer reads as literal text.
            index = body_start;
            continue;
        };

        styled_runs(&line[text_start..index], &mut runs);
        let span_end = body_start + close + delimiter.len();
        let span = &line[index..span_end];
        let formula = span[delimiter.len()..span.len() - delimiter.len()].trim();
        match builder.build(formula) {
            Ok(nodes) => runs.push(FormattedRun::FormulaGroup(nodes)),
            Err(_) => runs.push(FormattedRun::ErrorText(span.to_string())),
        }
        index = span_end;
        text_start = span_end;
    }

    styled_runs(&line[text_start..], &mut runs);
    runs
}

/// Split a plain-text span on `**…**` and `*…*` markers, first match wins,
/// no nesting. Unterminated markers stay literal.
fn styled_runs(text: &str, runs: &mut Vec<FormattedRun>) {
    let mut plain = String::new();
    let mut rest = text;

    while let Some(position) = rest.find('*') {
        let (before, marked) = rest.split_at(position);
        if let Some(stripped) = marked.strip_prefix("**") {
            if let Some(end) = stripped.find("**") {
                plain.push_str(before);
                flush_plain(&mut plain, runs);
                runs.push(FormattedRun::BoldText(stripped[..end].to_string()));
                rest = &stripped[end + 2..];
                continue;
            }
        } else if let Some(end) = marked[1..].find('*') {
            plain.push_str(before);
            flush_plain(&mut plain, runs);
            runs.push(FormattedRun::ItalicText(marked[1..1 + end].to_string()));
            rest = &marked[1 + end + 1..];
            continue;
        }

        let marker_len = if marked.starts_with("**") { 2 } else { 1 };
        plain.push_str(before);
        plain.push_str(&marked[..marker_len]);
        rest = &marked[marker_len..];
    }

    plain.push_str(rest);
    flush_plain(&mut plain, runs);
}

fn flush_plain(plain: &mut String, runs: &mut Vec<FormattedRun>) {
    if !plain.is_empty() {
        runs.push(FormattedRun::PlainText(std::mem::take(plain)));
    }
}
