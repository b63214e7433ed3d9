//! The static symbol table mapping command names to Unicode substitutes.
//!
//! Lookup happens after the lexer has taken the maximal alphabetic run as the
//! command name, so the whole token is matched in a single pass: `\leq` can
//! never be corrupted by the shorter `\le`, and a substitute string is never
//! re-scanned. The table is a compile-time `phf` map, immutable for the whole
//! process, which keeps concurrent parsing lock-free.

use phf::phf_map;

static SYMBOLS: phf::Map<&'static str, &'static str> = phf_map! {
    // Lowercase Greek
    "alpha" => "α",
    "beta" => "β",
    "gamma" => "γ",
    "delta" => "δ",
    "epsilon" => "ε",
    "varepsilon" => "ε",
    "zeta" => "ζ",
    "eta" => "η",
    "theta" => "θ",
    "vartheta" => "ϑ",
    "iota" => "ι",
    "kappa" => "κ",
    "lambda" => "λ",
    "mu" => "μ",
    "nu" => "ν",
    "xi" => "ξ",
    "omicron" => "ο",
    "pi" => "π",
    "varpi" => "ϖ",
    "rho" => "ρ",
    "varrho" => "ϱ",
    "sigma" => "σ",
    "varsigma" => "ς",
    "tau" => "τ",
    "upsilon" => "υ",
    "phi" => "φ",
    "varphi" => "ϕ",
    "chi" => "χ",
    "psi" => "ψ",
    "omega" => "ω",
    // Uppercase Greek with a distinct glyph
    "Gamma" => "Γ",
    "Delta" => "Δ",
    "Theta" => "Θ",
    "Lambda" => "Λ",
    "Xi" => "Ξ",
    "Pi" => "Π",
    "Sigma" => "Σ",
    "Upsilon" => "Υ",
    "Phi" => "Φ",
    "Psi" => "Ψ",
    "Omega" => "Ω",
    // Relations
    "le" => "≤",
    "leq" => "≤",
    "ge" => "≥",
    "geq" => "≥",
    "ne" => "≠",
    "neq" => "≠",
    "approx" => "≈",
    "equiv" => "≡",
    "sim" => "∼",
    "simeq" => "≃",
    "cong" => "≅",
    "propto" => "∝",
    "ll" => "≪",
    "gg" => "≫",
    // Arithmetic
    "times" => "×",
    "div" => "÷",
    "pm" => "±",
    "mp" => "∓",
    "cdot" => "⋅",
    "ast" => "∗",
    "star" => "⋆",
    "bullet" => "•",
    "oplus" => "⊕",
    "otimes" => "⊗",
    // Sets
    "in" => "∈",
    "notin" => "∉",
    "ni" => "∋",
    "subset" => "⊂",
    "subseteq" => "⊆",
    "supset" => "⊃",
    "supseteq" => "⊇",
    "cup" => "∪",
    "cap" => "∩",
    "emptyset" => "∅",
    "varnothing" => "∅",
    "setminus" => "∖",
    // Logic
    "forall" => "∀",
    "exists" => "∃",
    "nexists" => "∄",
    "neg" => "¬",
    "lnot" => "¬",
    "land" => "∧",
    "wedge" => "∧",
    "lor" => "∨",
    "vee" => "∨",
    // Arrows
    "to" => "→",
    "rightarrow" => "→",
    "leftarrow" => "←",
    "Rightarrow" => "⇒",
    "Leftarrow" => "⇐",
    "leftrightarrow" => "↔",
    "Leftrightarrow" => "⇔",
    "mapsto" => "↦",
    "uparrow" => "↑",
    "downarrow" => "↓",
    // Big operators, emitted as plain glyphs
    "sum" => "∑",
    "prod" => "∏",
    "int" => "∫",
    "iint" => "∬",
    "oint" => "∮",
    // Degree
    "deg" => "°",
    "circ" => "°",
    "degrees" => "°",
    // Dots
    "ldots" => "…",
    "cdots" => "⋯",
    "dots" => "…",
    // Miscellaneous
    "infty" => "∞",
    "partial" => "∂",
    "nabla" => "∇",
    "angle" => "∠",
    "perp" => "⊥",
    "parallel" => "∥",
    "mid" => "∣",
    "prime" => "′",
    "hbar" => "ℏ",
    "ell" => "ℓ",
    "Re" => "ℜ",
    "Im" => "ℑ",
    "aleph" => "ℵ",
    // Spacing
    "quad" => " ",
    "qquad" => "  ",
    " " => " ",
    "," => "\u{2009}",
    ";" => " ",
    ":" => " ",
    "!" => "",
};

/// Look up the Unicode substitute for a command name (without its backslash).
pub fn symbol(command: &str) -> Option<&'static str> {
    SYMBOLS.get(command).copied()
}

#[cfg(test)]
mod tests {
    use super::symbol;

    #[test]
    fn greek() {
        assert_eq!(symbol("alpha"), Some("α"));
        assert_eq!(symbol("Delta"), Some("Δ"));
    }

    #[test]
    fn prefix_colliding_tokens() {
        // Both spellings resolve to the same relation; the longer one must not
        // be corrupted by the shorter prefix.
        assert_eq!(symbol("le"), Some("≤"));
        assert_eq!(symbol("leq"), Some("≤"));
    }

    #[test]
    fn control_symbols() {
        assert_eq!(symbol(","), Some("\u{2009}"));
        assert_eq!(symbol("!"), Some(""));
    }

    #[test]
    fn unknown() {
        assert_eq!(symbol("notacommand"), None);
    }
}
