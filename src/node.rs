//! The definition of the [`MathNode`] tree and the paragraph-level [`FormattedRun`],
//! which together form the logical representation handed to a document renderer.
//!
//! A `Vec<MathNode>` is produced per formula by the [`NodeBuilder`], and a
//! `Vec<FormattedRun>` is produced per line of prose by [`segment`]. Both are
//! created fresh on every call and hold no shared or cached state; the exporter
//! consumes them and maps each variant 1:1 onto the target format's structural
//! primitive.
//!
//! [`NodeBuilder`]: crate::parser::NodeBuilder
//! [`segment`]: crate::segment::segment

/// A typed element of the math tree produced by parsing one formula.
///
/// A sequence of nodes is always in strict left-to-right reading order, and a
/// node never references anything outside its own subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathNode {
    /// Terminal literal content, after symbol substitution.
    ///
    /// The text never contains an unescaped backslash: undefined commands have
    /// their backslash stripped when the text buffer is flushed.
    Run(String),
    /// A fraction with its numerator and denominator sub-sequences.
    Fraction {
        numerator: Vec<MathNode>,
        denominator: Vec<MathNode>,
    },
    /// A base and the script rendered to its upper right.
    SuperScript {
        base: Vec<MathNode>,
        script: Vec<MathNode>,
    },
    /// A base and the script rendered to its lower right.
    SubScript {
        base: Vec<MathNode>,
        script: Vec<MathNode>,
    },
    /// A root. The degree is present for `\sqrt[n]{…}` and absent for `\sqrt{…}`.
    Radical {
        degree: Option<Vec<MathNode>>,
        children: Vec<MathNode>,
    },
}

/// A typed element of one paragraph's content, produced by the inline segmenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormattedRun {
    /// Unstyled prose.
    PlainText(String),
    /// Prose delimited by `**…**`.
    BoldText(String),
    /// Prose delimited by `*…*`.
    ItalicText(String),
    /// A parsed formula span, carrying its ordered node sequence.
    FormulaGroup(Vec<MathNode>),
    /// A formula span that failed to build, carried verbatim with its delimiters.
    ///
    /// The exporter should render this in a visually distinct style so the
    /// surrounding document still assembles. This is the only externally visible
    /// failure mode of the whole parsing core.
    ErrorText(String),
}
