/// Knobs shared by the [`NodeBuilder`] and the inline segmenter.
///
/// [`NodeBuilder`]: crate::parser::NodeBuilder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// The maximum formula nesting depth the builder will recurse into.
    ///
    /// Each brace-delimited argument, script argument, radical degree, and `cases`
    /// line adds one level. Input nested deeper than this fails with
    /// [`BuildError::NestingTooDeep`] instead of exhausting the call stack;
    /// the segmenter turns that failure into an error-styled text run.
    /// (default: 64)
    ///
    /// [`BuildError::NestingTooDeep`]: crate::parser::BuildError::NestingTooDeep
    pub max_nesting_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_nesting_depth: 64,
        }
    }
}
