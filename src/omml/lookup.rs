// Symbol and template tables
//
// Compiled-in, read-only mappings from OMML attribute values and text-run
// glyphs to LaTeX. Values carrying a trailing space are control words that
// must stay separated from a following letter.

use super::templates::Segment::{Lit, Slot as S};
use super::templates::{Slot, Template, limit, wrap};
use phf::phf_map;

/// Accent and group characters (`m:chr`) to wrapping templates
pub static ACCENTS: phf::Map<&'static str, Template> = phf_map! {
    // Combining accents above
    "\u{0300}" => wrap!("\\grave"),
    "\u{0301}" => wrap!("\\acute"),
    "\u{0302}" => wrap!("\\hat"),
    "\u{0303}" => wrap!("\\tilde"),
    "\u{0304}" => wrap!("\\bar"),
    "\u{0305}" => wrap!("\\overline"),
    "\u{0306}" => wrap!("\\breve"),
    "\u{0307}" => wrap!("\\dot"),
    "\u{0308}" => wrap!("\\ddot"),
    "\u{030A}" => wrap!("\\mathring"),
    "\u{030C}" => wrap!("\\check"),
    "\u{20D0}" => wrap!("\\overleftharpoon"),
    "\u{20D1}" => wrap!("\\overrightharpoon"),
    "\u{20D6}" => wrap!("\\overleftarrow"),
    "\u{20D7}" => wrap!("\\vec"),
    "\u{20DB}" => wrap!("\\dddot"),
    "\u{20DC}" => wrap!("\\ddddot"),
    "\u{20E1}" => wrap!("\\overleftrightarrow"),

    // Combining accents below
    "\u{0330}" => wrap!("\\utilde"),
    "\u{0331}" => wrap!("\\underline"),
    "\u{20EE}" => wrap!("\\underleftarrow"),
    "\u{20EF}" => wrap!("\\underrightarrow"),

    // Spacing forms
    "`" => wrap!("\\grave"),
    "\u{00B4}" => wrap!("\\acute"),
    "^" => wrap!("\\hat"),
    "~" => wrap!("\\tilde"),
    "\u{00AF}" => wrap!("\\bar"),
    "\u{02D8}" => wrap!("\\breve"),
    "\u{02D9}" => wrap!("\\dot"),
    "\u{00A8}" => wrap!("\\ddot"),
    "\u{02C7}" => wrap!("\\check"),

    // Stretchy arrows
    "\u{2190}" => wrap!("\\overleftarrow"),
    "\u{2192}" => wrap!("\\overrightarrow"),
    "\u{2194}" => wrap!("\\overleftrightarrow"),

    // Over/under groups
    "\u{23B4}" => wrap!("\\overbracket"),
    "\u{23B5}" => wrap!("\\underbracket"),
    "\u{23DC}" => wrap!("\\overparen"),
    "\u{23DD}" => wrap!("\\underparen"),
    "\u{23DE}" => wrap!("\\overbrace"),
    "\u{23DF}" => wrap!("\\underbrace"),
};

/// Bar positions (`m:pos`)
pub static BAR_POSITIONS: phf::Map<&'static str, Template> = phf_map! {
    "top" => wrap!("\\overline"),
    "bot" => wrap!("\\underline"),
};

/// Fraction types (`m:type`)
pub static FRACTIONS: phf::Map<&'static str, Template> = phf_map! {
    "bar" => Template(&[Lit("\\frac{"), S(Slot::Num), Lit("}{"), S(Slot::Den), Lit("}")]),
    "skw" => Template(&[Lit("^{"), S(Slot::Num), Lit("}/_{"), S(Slot::Den), Lit("}")]),
    "lin" => Template(&[Lit("{"), S(Slot::Num), Lit("}/{"), S(Slot::Den), Lit("}")]),
    "noBar" => Template(&[
        Lit("\\genfrac{}{}{0pt}{}{"),
        S(Slot::Num),
        Lit("}{"),
        S(Slot::Den),
        Lit("}"),
    ]),
};

/// N-ary operator characters (`m:chr` on `m:naryPr`)
pub static BIG_OPERATORS: phf::Map<&'static str, &'static str> = phf_map! {
    "\u{2140}" => "\\Bbbsum",
    "\u{220F}" => "\\prod",
    "\u{2210}" => "\\coprod",
    "\u{2211}" => "\\sum",
    "\u{222B}" => "\\int",
    "\u{222C}" => "\\iint",
    "\u{222D}" => "\\iiint",
    "\u{222E}" => "\\oint",
    "\u{222F}" => "\\oiint",
    "\u{2230}" => "\\oiiint",
    "\u{22C0}" => "\\bigwedge",
    "\u{22C1}" => "\\bigvee",
    "\u{22C2}" => "\\bigcap",
    "\u{22C3}" => "\\bigcup",
    "\u{2A00}" => "\\bigodot",
    "\u{2A01}" => "\\bigoplus",
    "\u{2A02}" => "\\bigotimes",
    "\u{2A04}" => "\\biguplus",
    "\u{2A06}" => "\\bigsqcup",
};

/// `\command{<placeholder>}`; the placeholder literal must match `FUNC_PLACE`
macro_rules! func {
    ($command:literal) => {
        concat!($command, "{\u{E000}}")
    };
}

/// Function names (text of a run directly under `m:fName`)
pub static FUNCTIONS: phf::Map<&'static str, &'static str> = phf_map! {
    "sin" => func!("\\sin"),
    "cos" => func!("\\cos"),
    "tan" => func!("\\tan"),
    "cot" => func!("\\cot"),
    "sec" => func!("\\sec"),
    "csc" => func!("\\csc"),
    "arcsin" => func!("\\arcsin"),
    "arccos" => func!("\\arccos"),
    "arctan" => func!("\\arctan"),
    "arccot" => func!("\\operatorname{arccot}"),
    "sinh" => func!("\\sinh"),
    "cosh" => func!("\\cosh"),
    "tanh" => func!("\\tanh"),
    "coth" => func!("\\coth"),
    "sech" => func!("\\operatorname{sech}"),
    "csch" => func!("\\operatorname{csch}"),
    "log" => func!("\\log"),
    "ln" => func!("\\ln"),
    "lg" => func!("\\lg"),
    "exp" => func!("\\exp"),
    "det" => func!("\\det"),
    "dim" => func!("\\dim"),
    "ker" => func!("\\ker"),
    "gcd" => func!("\\gcd"),
    "deg" => func!("\\deg"),
    "arg" => func!("\\arg"),
    "hom" => func!("\\hom"),
    "Pr" => func!("\\Pr"),
    "lim" => func!("\\lim"),
    "max" => func!("\\max"),
    "min" => func!("\\min"),
    "sup" => func!("\\sup"),
    "inf" => func!("\\inf"),
};

/// Limit functions (base of `m:limLow`) to subscript-limit templates
pub static LIMIT_FUNCTIONS: phf::Map<&'static str, Template> = phf_map! {
    "lim" => limit!("\\lim"),
    "max" => limit!("\\max"),
    "min" => limit!("\\min"),
    "sup" => limit!("\\sup"),
    "inf" => limit!("\\inf"),
    "liminf" => limit!("\\liminf"),
    "limsup" => limit!("\\limsup"),
};

/// Text-run glyphs to LaTeX
pub static SYMBOLS: phf::Map<&'static str, &'static str> = phf_map! {
    // Lowercase Greek
    "α" => "\\alpha ",
    "β" => "\\beta ",
    "γ" => "\\gamma ",
    "δ" => "\\delta ",
    "ε" => "\\varepsilon ",
    "ϵ" => "\\epsilon ",
    "ζ" => "\\zeta ",
    "η" => "\\eta ",
    "θ" => "\\theta ",
    "ϑ" => "\\vartheta ",
    "ι" => "\\iota ",
    "κ" => "\\kappa ",
    "ϰ" => "\\varkappa ",
    "λ" => "\\lambda ",
    "μ" => "\\mu ",
    "ν" => "\\nu ",
    "ξ" => "\\xi ",
    "ο" => "o",
    "π" => "\\pi ",
    "ϖ" => "\\varpi ",
    "ρ" => "\\rho ",
    "ϱ" => "\\varrho ",
    "σ" => "\\sigma ",
    "ς" => "\\varsigma ",
    "τ" => "\\tau ",
    "υ" => "\\upsilon ",
    "φ" => "\\varphi ",
    "ϕ" => "\\phi ",
    "χ" => "\\chi ",
    "ψ" => "\\psi ",
    "ω" => "\\omega ",

    // Uppercase Greek
    "Α" => "A",
    "Β" => "B",
    "Γ" => "\\Gamma ",
    "Δ" => "\\Delta ",
    "Ε" => "E",
    "Ζ" => "Z",
    "Η" => "H",
    "Θ" => "\\Theta ",
    "Ι" => "I",
    "Κ" => "K",
    "Λ" => "\\Lambda ",
    "Μ" => "M",
    "Ν" => "N",
    "Ξ" => "\\Xi ",
    "Ο" => "O",
    "Π" => "\\Pi ",
    "Ρ" => "P",
    "Σ" => "\\Sigma ",
    "Τ" => "T",
    "Υ" => "\\Upsilon ",
    "Φ" => "\\Phi ",
    "Χ" => "X",
    "Ψ" => "\\Psi ",
    "Ω" => "\\Omega ",

    // Binary operators
    "±" => "\\pm ",
    "∓" => "\\mp ",
    "×" => "\\times ",
    "÷" => "\\div ",
    "⋅" => "\\cdot ",
    "·" => "\\cdot ",
    "∘" => "\\circ ",
    "∗" => "\\ast ",
    "⋆" => "\\star ",
    "∙" => "\\bullet ",
    "⊕" => "\\oplus ",
    "⊗" => "\\otimes ",
    "−" => "-",

    // Relations
    "≠" => "\\neq ",
    "≤" => "\\leq ",
    "≥" => "\\geq ",
    "≦" => "\\leqq ",
    "≧" => "\\geqq ",
    "≨" => "\\lneqq ",
    "≩" => "\\gneqq ",
    "≪" => "\\ll ",
    "≫" => "\\gg ",
    "≈" => "\\approx ",
    "≡" => "\\equiv ",
    "∼" => "\\sim ",
    "≃" => "\\simeq ",
    "≅" => "\\cong ",
    "∝" => "\\propto ",
    "∥" => "\\parallel ",
    "⊥" => "\\perp ",
    "∈" => "\\in ",
    "∉" => "\\notin ",
    "∋" => "\\ni ",
    "∌" => "\\not\\ni ",
    "⊂" => "\\subset ",
    "⊃" => "\\supset ",
    "⊆" => "\\subseteq ",
    "⊇" => "\\supseteq ",

    // Arrows
    "←" => "\\leftarrow ",
    "↑" => "\\uparrow ",
    "→" => "\\rightarrow ",
    "↓" => "\\downarrow ",
    "↔" => "\\leftrightarrow ",
    "↕" => "\\updownarrow ",
    "↖" => "\\nwarrow ",
    "↗" => "\\nearrow ",
    "↘" => "\\searrow ",
    "↙" => "\\swarrow ",
    "↦" => "\\mapsto ",
    "⇐" => "\\Leftarrow ",
    "⇒" => "\\Rightarrow ",
    "⇔" => "\\Leftrightarrow ",
    "⟶" => "\\longrightarrow ",
    "⟵" => "\\longleftarrow ",

    // Logic and sets
    "∀" => "\\forall ",
    "∃" => "\\exists ",
    "∄" => "\\nexists ",
    "¬" => "\\neg ",
    "∧" => "\\wedge ",
    "∨" => "\\vee ",
    "∪" => "\\cup ",
    "∩" => "\\cap ",
    "∅" => "\\emptyset ",

    // Dots
    "…" => "\\ldots ",
    "⋯" => "\\cdots ",
    "⋮" => "\\vdots ",
    "⋰" => "\\adots ",
    "⋱" => "\\ddots ",

    // Delimiters
    "⟨" => "\\langle ",
    "⟩" => "\\rangle ",
    "⌊" => "\\lfloor ",
    "⌋" => "\\rfloor ",
    "⌈" => "\\lceil ",
    "⌉" => "\\rceil ",
    "‖" => "\\| ",

    // Ordinary symbols
    "∞" => "\\infty ",
    "∂" => "\\partial ",
    "∇" => "\\nabla ",
    "∠" => "\\angle ",
    "ℏ" => "\\hbar ",
    "ℓ" => "\\ell ",
    "ℜ" => "\\Re ",
    "ℑ" => "\\Im ",
    "ℵ" => "\\aleph ",
    "℘" => "\\wp ",
    "′" => "'",
    "″" => "''",
    "‴" => "'''",

    // Big operators written inline in a run
    "∑" => "\\sum ",
    "∏" => "\\prod ",
    "∫" => "\\int ",
    "∮" => "\\oint ",
};

/// Fold a Mathematical Alphanumeric Symbols italic or bold-italic letter to its plain form
///
/// Word stores italic math letters either as ASCII or as these code points;
/// both must render the same. Bold and other styled alphabets are kept.
pub fn fold_math_alphanumeric(c: char) -> char {
    let code = c as u32;
    let folded = match code {
        // Italic Latin capital and small; small h sits outside the block
        0x1D434..=0x1D44D => 'A' as u32 + (code - 0x1D434),
        0x1D44E..=0x1D467 => 'a' as u32 + (code - 0x1D44E),
        0x210E => 'h' as u32,
        // Bold italic Latin
        0x1D468..=0x1D481 => 'A' as u32 + (code - 0x1D468),
        0x1D482..=0x1D49B => 'a' as u32 + (code - 0x1D482),
        // Italic Greek capital; one slot is capital theta symbol
        0x1D6E2..=0x1D6FA if code != 0x1D6F3 => 0x0391 + (code - 0x1D6E2),
        0x1D6F3 => 0x0398,
        0x1D6FB => 0x2207,
        // Italic Greek small, then the variant forms
        0x1D6FC..=0x1D714 => 0x03B1 + (code - 0x1D6FC),
        0x1D715 => 0x2202,
        0x1D716 => 0x03F5,
        0x1D717 => 0x03D1,
        0x1D718 => 0x03F0,
        0x1D719 => 0x03D5,
        0x1D71A => 0x03F1,
        0x1D71B => 0x03D6,
        _ => return c,
    };
    char::from_u32(folded).unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::omml::templates::FUNC_PLACE;

    #[test]
    fn test_function_placeholder_matches() {
        for (name, template) in FUNCTIONS.entries() {
            assert!(template.contains(FUNC_PLACE), "missing placeholder for {}", name);
        }
        assert_eq!(FUNCTIONS.get("sin").unwrap().replace(FUNC_PLACE, "x"), "\\sin{x}");
    }

    #[test]
    fn test_limit_functions() {
        let lim = LIMIT_FUNCTIONS.get("lim").unwrap();
        assert_eq!(lim.render(&[(Slot::Lim, "n\\to \\infty ")]), "\\lim_{n\\to \\infty }");
    }

    #[test]
    fn test_fraction_types() {
        let args = [(Slot::Num, "a"), (Slot::Den, "b")];
        assert_eq!(FRACTIONS.get("bar").unwrap().render(&args), "\\frac{a}{b}");
        assert_eq!(FRACTIONS.get("skw").unwrap().render(&args), "^{a}/_{b}");
        assert_eq!(FRACTIONS.get("lin").unwrap().render(&args), "{a}/{b}");
        assert_eq!(
            FRACTIONS.get("noBar").unwrap().render(&args),
            "\\genfrac{}{}{0pt}{}{a}{b}"
        );
    }

    #[test]
    fn test_fold_math_alphanumeric() {
        assert_eq!(fold_math_alphanumeric('\u{1D465}'), 'x');
        assert_eq!(fold_math_alphanumeric('\u{1D434}'), 'A');
        assert_eq!(fold_math_alphanumeric('\u{210E}'), 'h');
        assert_eq!(fold_math_alphanumeric('\u{1D6FC}'), 'α');
        assert_eq!(fold_math_alphanumeric('\u{1D714}'), 'ω');
        assert_eq!(fold_math_alphanumeric('\u{1D6E4}'), 'Γ');
        assert_eq!(fold_math_alphanumeric('\u{1D6F3}'), 'Θ');
        assert_eq!(fold_math_alphanumeric('\u{1D715}'), '∂');
        assert_eq!(fold_math_alphanumeric('\u{1D48C}'), 'k');
        assert_eq!(fold_math_alphanumeric('x'), 'x');
        // Bold stays bold
        assert_eq!(fold_math_alphanumeric('\u{1D431}'), '\u{1D431}');
    }
}
