//! The behavior of every structural command the builder recognizes, plus the
//! resolution of script arguments.
//!
//! Each handler receives the cursor positioned just after the command name.
//! Handlers parse their arguments on a copy of the cursor and only commit it on
//! success; when the expected pattern is not satisfied, the command token is
//! pushed to the text buffer literally and the scan resumes at the original
//! position, so no input is ever skipped silently.

use super::{flush, lex, strip_backslashes, BuildError, NodeBuilder};
use crate::node::MathNode;

const CASES_END: &str = r"\end{cases}";
const CASES_LINE_SEPARATOR: &str = r"\\";

impl NodeBuilder {
    /// `\frac{A}{B}` and `\dfrac{A}{B}`.
    pub(super) fn fraction(
        &self,
        input: &mut &str,
        name: &str,
        buffer: &mut String,
        nodes: &mut Vec<MathNode>,
        depth: usize,
    ) -> Result<(), BuildError> {
        let mut rest = *input;
        if let Some(numerator) = lex::braced(&mut rest) {
            if let Some(denominator) = lex::braced(&mut rest) {
                let numerator = self.build_at(numerator, depth + 1)?;
                let denominator = self.build_at(denominator, depth + 1)?;
                flush(buffer, nodes);
                nodes.push(MathNode::Fraction {
                    numerator,
                    denominator,
                });
                *input = rest;
                return Ok(());
            }
        }
        literal_fallback(buffer, name);
        Ok(())
    }

    /// `\sqrt{A}` and `\sqrt[n]{A}`.
    pub(super) fn radical(
        &self,
        input: &mut &str,
        name: &str,
        buffer: &mut String,
        nodes: &mut Vec<MathNode>,
        depth: usize,
    ) -> Result<(), BuildError> {
        let mut rest = *input;
        let degree_source = lex::bracketed(&mut rest);
        if let Some(body) = lex::braced(&mut rest) {
            let degree = match degree_source {
                Some(source) => Some(self.build_at(source, depth + 1)?),
                None => None,
            };
            let children = self.build_at(body, depth + 1)?;
            flush(buffer, nodes);
            nodes.push(MathNode::Radical { degree, children });
            *input = rest;
            return Ok(());
        }
        literal_fallback(buffer, name);
        Ok(())
    }

    /// `\widehat{X}`: a literal hat marker run, then the body appended after it.
    /// The marker is prefixed, not wrapped around the body.
    pub(super) fn widehat(
        &self,
        input: &mut &str,
        name: &str,
        buffer: &mut String,
        nodes: &mut Vec<MathNode>,
        depth: usize,
    ) -> Result<(), BuildError> {
        let mut rest = *input;
        if let Some(body) = lex::braced(&mut rest) {
            let inner = self.build_at(body, depth + 1)?;
            flush(buffer, nodes);
            nodes.push(MathNode::Run("^".to_string()));
            nodes.extend(inner);
            *input = rest;
            return Ok(());
        }
        literal_fallback(buffer, name);
        Ok(())
    }

    /// `\overline{A}`: the body, then a literal combining-overline run.
    pub(super) fn overline(
        &self,
        input: &mut &str,
        name: &str,
        buffer: &mut String,
        nodes: &mut Vec<MathNode>,
        depth: usize,
    ) -> Result<(), BuildError> {
        let mut rest = *input;
        if let Some(body) = lex::braced(&mut rest) {
            let inner = self.build_at(body, depth + 1)?;
            flush(buffer, nodes);
            nodes.extend(inner);
            nodes.push(MathNode::Run("\u{0305}".to_string()));
            *input = rest;
            return Ok(());
        }
        literal_fallback(buffer, name);
        Ok(())
    }

    /// `\text{A}`: the body as one opaque run, with no nested math parsing and
    /// no symbol substitution.
    pub(super) fn text_group(
        &self,
        input: &mut &str,
        name: &str,
        buffer: &mut String,
        nodes: &mut Vec<MathNode>,
    ) {
        let mut rest = *input;
        if let Some(body) = lex::braced(&mut rest) {
            flush(buffer, nodes);
            nodes.push(MathNode::Run(strip_backslashes(body)));
            *input = rest;
            return;
        }
        literal_fallback(buffer, name);
    }

    /// `\begin{cases} L1 \\ L2 … \end{cases}`: a literal `{ ` prefix, each
    /// non-empty line built recursively, and a literal ` ; ` run between
    /// consecutive lines.
    pub(super) fn cases(
        &self,
        input: &mut &str,
        name: &str,
        buffer: &mut String,
        nodes: &mut Vec<MathNode>,
        depth: usize,
    ) -> Result<(), BuildError> {
        let mut rest = *input;
        if let Some(environment) = lex::braced(&mut rest) {
            if environment == "cases" {
                if let Some(end) = rest.find(CASES_END) {
                    let interior = &rest[..end];
                    let after = &rest[end + CASES_END.len()..];

                    flush(buffer, nodes);
                    nodes.push(MathNode::Run("{ ".to_string()));
                    let mut first = true;
                    for line in interior.split(CASES_LINE_SEPARATOR) {
                        let line = line.trim();
                        if line.is_empty() {
                            continue;
                        }
                        if !first {
                            nodes.push(MathNode::Run(" ; ".to_string()));
                        }
                        first = false;
                        nodes.extend(self.build_at(line, depth + 1)?);
                    }
                    *input = after;
                    return Ok(());
                }
            }
        }
        literal_fallback(buffer, name);
        Ok(())
    }

    /// Resolve the argument of a `^`/`_` operator, the operator itself having
    /// been consumed by the caller.
    ///
    /// The argument is, in order of preference: a braced group (built
    /// recursively), a single backslash command (built recursively), or the
    /// single next character. Returns `None` when nothing resolvable follows,
    /// in which case the caller treats the operator as literal text.
    pub(super) fn script_argument(
        &self,
        input: &mut &str,
        depth: usize,
    ) -> Result<Option<Vec<MathNode>>, BuildError> {
        let trimmed = input.trim_start();
        match trimmed.chars().next() {
            None => Ok(None),
            Some('{') => {
                let mut rest = trimmed;
                match lex::braced(&mut rest) {
                    Some(group) => {
                        let nodes = self.build_at(group, depth + 1)?;
                        *input = rest;
                        Ok(Some(nodes))
                    }
                    None => Ok(None),
                }
            }
            Some('\\') => {
                let mut rest = &trimmed[1..];
                match lex::control_sequence(&mut rest) {
                    Some(command_name) => {
                        let command = &trimmed[..1 + command_name.len()];
                        let nodes = self.build_at(command, depth + 1)?;
                        *input = rest;
                        Ok(Some(nodes))
                    }
                    None => Ok(None),
                }
            }
            Some(c) => {
                *input = &trimmed[c.len_utf8()..];
                Ok(Some(vec![MathNode::Run(c.to_string())]))
            }
        }
    }
}

/// Emit the command token as literal text; its backslash is stripped at flush.
fn literal_fallback(buffer: &mut String, name: &str) {
    buffer.push('\\');
    buffer.push_str(name);
}
