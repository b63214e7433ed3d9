//! Contains the [`NodeBuilder`], which transforms a formula string into an ordered
//! `Vec<MathNode>` by recursive descent.
//!
//! The builder scans left to right with an accumulating text buffer. The buffer is
//! flushed into a [`MathNode::Run`] whenever a structural token is recognized or the
//! input ends; flushing strips any backslash left behind by an undefined command.
//! Structural commands recurse into their brace-delimited arguments through
//! [`lex::braced`], and superscript/subscript operators pop the most recently
//! emitted node to serve as their base.
//!
//! Everything malformed degrades to literal text in place. The only failure that
//! crosses this module's boundary is [`BuildError::NestingTooDeep`], raised when
//! the input nests deeper than the configured maximum.

pub mod lex;
mod primitives;
pub mod tables;

use thiserror::Error;

use crate::config::ParserConfig;
use crate::node::MathNode;

/// Builds math node trees from formula strings.
///
/// The builder holds only configuration; every call to [`build`] is independent
/// and the builder can be shared freely across threads.
///
/// [`build`]: NodeBuilder::build
#[derive(Debug, Clone, Copy)]
pub struct NodeBuilder {
    max_nesting_depth: usize,
}

impl NodeBuilder {
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            max_nesting_depth: config.max_nesting_depth,
        }
    }

    /// Parse a formula into its ordered node sequence.
    ///
    /// Unknown commands and unbalanced braces degrade to literal text; the call
    /// only fails when the input nests deeper than the configured maximum.
    pub fn build(&self, formula: &str) -> Result<Vec<MathNode>, BuildError> {
        self.build_at(formula, 0)
    }

    fn build_at(&self, formula: &str, depth: usize) -> Result<Vec<MathNode>, BuildError> {
        if depth > self.max_nesting_depth {
            return Err(BuildError::NestingTooDeep {
                limit: self.max_nesting_depth,
            });
        }

        let mut nodes = Vec::new();
        let mut buffer = String::new();
        let mut cursor = formula;

        while let Some(c) = cursor.chars().next() {
            match c {
                '\\' => {
                    let mut rest = &cursor[1..];
                    let Some(name) = lex::control_sequence(&mut rest) else {
                        // Trailing lone backslash, stripped at flush.
                        buffer.push('\\');
                        cursor = rest;
                        continue;
                    };
                    match name {
                        "frac" | "dfrac" => {
                            self.fraction(&mut rest, name, &mut buffer, &mut nodes, depth)?
                        }
                        "sqrt" => self.radical(&mut rest, name, &mut buffer, &mut nodes, depth)?,
                        "widehat" => {
                            self.widehat(&mut rest, name, &mut buffer, &mut nodes, depth)?
                        }
                        "overline" => {
                            self.overline(&mut rest, name, &mut buffer, &mut nodes, depth)?
                        }
                        "text" => self.text_group(&mut rest, name, &mut buffer, &mut nodes),
                        "begin" => self.cases(&mut rest, name, &mut buffer, &mut nodes, depth)?,
                        // Sizing only, no node emitted.
                        "left" | "right" => {}
                        _ => {
                            if let Some(substitute) = tables::symbol(name) {
                                buffer.push_str(substitute);
                            } else {
                                // Unknown command: buffer the backslash and rescan
                                // the name one character at a time as plain text.
                                buffer.push('\\');
                                cursor = &cursor[1..];
                                continue;
                            }
                        }
                    }
                    cursor = rest;
                }
                '^' | '_' => {
                    let mut rest = &cursor[1..];
                    match self.script_argument(&mut rest, depth)? {
                        Some(script) => {
                            flush(&mut buffer, &mut nodes);
                            let base = vec![nodes.pop().unwrap_or(MathNode::Run(String::new()))];
                            nodes.push(if c == '^' {
                                MathNode::SuperScript { base, script }
                            } else {
                                MathNode::SubScript { base, script }
                            });
                            cursor = rest;
                        }
                        None => {
                            // No resolvable argument; the operator reads as text.
                            buffer.push(c);
                            cursor = &cursor[1..];
                        }
                    }
                }
                _ => {
                    buffer.push(c);
                    cursor = &cursor[c.len_utf8()..];
                }
            }
        }

        flush(&mut buffer, &mut nodes);
        Ok(nodes)
    }
}

impl Default for NodeBuilder {
    fn default() -> Self {
        Self::new(&ParserConfig::default())
    }
}

/// Flush the accumulated text buffer into a `Run` node.
///
/// Backslashes left behind by undefined commands are stripped here, upholding
/// the `Run` invariant. An empty buffer (or one holding only backslashes)
/// produces no node.
fn flush(buffer: &mut String, nodes: &mut Vec<MathNode>) {
    if buffer.is_empty() {
        return;
    }
    let text = strip_backslashes(buffer);
    buffer.clear();
    if !text.is_empty() {
        nodes.push(MathNode::Run(text));
    }
}

pub(crate) fn strip_backslashes(text: &str) -> String {
    text.chars().filter(|&c| c != '\\').collect()
}

/// The error produced when a formula nests deeper than the configured maximum.
///
/// This is the single failure that can escape [`NodeBuilder::build`]; every
/// other malformation degrades to literal text inside the builder. The inline
/// segmenter absorbs this error into a [`FormattedRun::ErrorText`] run.
///
/// [`FormattedRun::ErrorText`]: crate::node::FormattedRun::ErrorText
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("formula nesting exceeds the maximum depth of {limit}")]
    NestingTooDeep { limit: usize },
}
