//! This crate converts loosely-structured formula markup — the `LaTeX`-like notation
//! that survives OCR of scanned documents — into a tree of typed [`MathNode`]s, and
//! splits full lines of prose into [`FormattedRun`]s (plain, bold, italic, or formula
//! spans) ready for a downstream document renderer.
//!
//! The two entry points are [`NodeBuilder::build`], which parses a single formula
//! string, and [`segment`], which processes a whole line of text and invokes the
//! builder for every `$…$`/`$$…$$` span it finds.
//!
//! Malformed markup never aborts a line: unknown commands and unbalanced braces
//! degrade to literal text inside the builder, and the one failure that crosses the
//! builder's boundary (nesting deeper than [`ParserConfig::max_nesting_depth`]) is
//! converted by the segmenter into a [`FormattedRun::ErrorText`] run carrying the
//! original delimited source.

pub mod config;
pub mod node;
pub mod parser;
pub mod segment;

#[doc(inline)]
pub use config::ParserConfig;
#[doc(inline)]
pub use node::{FormattedRun, MathNode};
#[doc(inline)]
pub use parser::{BuildError, NodeBuilder};
#[doc(inline)]
pub use segment::{segment, segment_with};
