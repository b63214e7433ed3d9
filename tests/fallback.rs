//! Degradation behavior: malformed markup must complete as literal text, and
//! the only failure ever surfaced is the segmenter's error-styled run.

use mathrun::{segment_with, BuildError, FormattedRun, MathNode, NodeBuilder, ParserConfig};

macro_rules! degrades_to_literal {
    ($name:ident, $($input:literal),+ $(,)?) => {
        #[test]
        fn $name() {
            let builder = NodeBuilder::default();
            for input in [$($input),+] {
                let nodes = builder.build(input).expect("degradation must not fail");
                assert!(
                    nodes.iter().all(|n| matches!(n, MathNode::Run(_))),
                    "expected literal runs for input {input}, got {nodes:?}",
                );
            }
        }
    };
}

degrades_to_literal! {
    unbalanced_braces,
    r"\frac{1}",
    r"\frac{1}{2",
    r"\sqrt{",
    r"\widehat{AB",
    r"\text{oops",
    r"\overline{x",
}

degrades_to_literal! {
    unknown_commands,
    r"\foo",
    r"\unknowncommand{x}",
    r"a \notarealthing b",
}

degrades_to_literal! {
    incomplete_environments,
    r"\begin{cases}x=1",
    r"\begin{matrix}x\end{matrix}",
    r"\end{cases}",
}

#[test]
fn no_input_is_dropped() {
    // Degraded commands keep their argument text in the output.
    let nodes = NodeBuilder::default().build(r"\frac{1}").unwrap();
    assert_eq!(nodes, vec![MathNode::Run("frac{1}".to_string())]);
}

#[test]
fn depth_overflow_is_the_only_build_error() {
    let config = ParserConfig {
        max_nesting_depth: 3,
    };
    let builder = NodeBuilder::new(&config);
    let mut formula = String::from("1");
    for _ in 0..5 {
        formula = format!(r"\sqrt{{{formula}}}");
    }
    assert_eq!(
        builder.build(&formula),
        Err(BuildError::NestingTooDeep { limit: 3 })
    );
}

#[test]
fn segmenter_absorbs_build_failures() {
    let config = ParserConfig {
        max_nesting_depth: 1,
    };
    let runs = segment_with(r"before $\frac{\frac{1}{2}}{3}$ after", &config);
    assert_eq!(
        runs,
        vec![
            FormattedRun::PlainText("before ".to_string()),
            FormattedRun::ErrorText(r"$\frac{\frac{1}{2}}{3}$".to_string()),
            FormattedRun::PlainText(" after".to_string()),
        ]
    );
}

#[test]
fn error_text_keeps_the_original_delimiters() {
    let config = ParserConfig {
        max_nesting_depth: 0,
    };
    let runs = segment_with("$$x^{2}$$", &config);
    assert_eq!(
        runs,
        vec![FormattedRun::ErrorText("$$x^{2}$$".to_string())]
    );
}
