//! Cursor-style lexing helpers shared by the [`NodeBuilder`].
//!
//! Every function takes a `&mut &str` cursor and advances it past what it
//! consumed on success. On failure the cursor is left untouched, so callers can
//! fall back to emitting the triggering token literally.
//!
//! [`NodeBuilder`]: crate::parser::NodeBuilder

/// Extract the content of a delimited group, honoring nesting.
///
/// The cursor must point at `open` (leading whitespace is skipped). Returns the
/// span strictly between the matching delimiters and leaves the cursor one past
/// the closing delimiter. Returns `None` when the input ends before the
/// delimiters balance.
pub fn delimited<'a>(input: &mut &'a str, open: u8, close: u8) -> Option<&'a str> {
    let rest = input.trim_start();
    let bytes = rest.as_bytes();
    if bytes.first() != Some(&open) {
        return None;
    }

    let mut depth = 0usize;
    for (index, byte) in bytes.iter().enumerate() {
        if *byte == open {
            depth += 1;
        } else if *byte == close {
            depth -= 1;
            if depth == 0 {
                let content = &rest[1..index];
                *input = &rest[index + 1..];
                return Some(content);
            }
        }
    }
    None
}

/// Extract a `{…}` group. See [`delimited`].
pub fn braced<'a>(input: &mut &'a str) -> Option<&'a str> {
    delimited(input, b'{', b'}')
}

/// Extract a `[…]` group, as used for the degree of `\sqrt[n]{…}`. See [`delimited`].
pub fn bracketed<'a>(input: &mut &'a str) -> Option<&'a str> {
    delimited(input, b'[', b']')
}

/// Lex a control sequence name, the leading `\` having already been consumed.
///
/// The name is the maximal run of ASCII alphabetic characters, or a single
/// character when the first character is not alphabetic (control symbols such
/// as `\,` and `\!`). Returns `None` on empty input.
pub fn control_sequence<'a>(input: &mut &'a str) -> Option<&'a str> {
    let first = input.chars().next()?;
    let len = if first.is_ascii_alphabetic() {
        input
            .bytes()
            .take_while(|b| b.is_ascii_alphabetic())
            .count()
    } else {
        first.len_utf8()
    };

    let (name, rest) = input.split_at(len);
    *input = rest;
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn braced_nested() {
        let mut input = "{a{b{c}d}e}f";
        assert_eq!(braced(&mut input), Some("a{b{c}d}e"));
        assert_eq!(input, "f");
    }

    #[test]
    fn braced_skips_leading_whitespace() {
        let mut input = "  {x} rest";
        assert_eq!(braced(&mut input), Some("x"));
        assert_eq!(input, " rest");
    }

    #[test]
    fn braced_unbalanced() {
        let mut input = "{a{b}";
        assert_eq!(braced(&mut input), None);
        assert_eq!(input, "{a{b}", "cursor must not move on failure");
    }

    #[test]
    fn braced_not_a_group() {
        let mut input = "abc";
        assert_eq!(braced(&mut input), None);
        assert_eq!(input, "abc");
    }

    #[test]
    fn bracketed_degree() {
        let mut input = "[3]{8}";
        assert_eq!(bracketed(&mut input), Some("3"));
        assert_eq!(input, "{8}");
    }

    #[test]
    fn control_sequence_word() {
        let mut input = "frac{1}{2}";
        assert_eq!(control_sequence(&mut input), Some("frac"));
        assert_eq!(input, "{1}{2}");
    }

    #[test]
    fn control_sequence_symbol() {
        let mut input = ",x";
        assert_eq!(control_sequence(&mut input), Some(","));
        assert_eq!(input, "x");
    }

    #[test]
    fn control_sequence_empty() {
        let mut input = "";
        assert_eq!(control_sequence(&mut input), None);
    }
}
