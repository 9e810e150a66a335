// LaTeX output templates
//
// A template is a fixed sequence of literal segments and named slots. Slots
// are filled with already-rendered text, and the result is never scanned
// again, so braces in a filled slot cannot collide with braces in the
// template around it.

/// Named slot in a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Text,
    Num,
    Den,
    Deg,
    Lim,
    Left,
    Right,
}

/// Piece of a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Lit(&'static str),
    Slot(Slot),
}

use Segment::{Lit, Slot as S};

/// Parametrized output string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template(pub &'static [Segment]);

impl Template {
    /// Fill the slots from `args`; a slot without an argument renders empty
    pub fn render(&self, args: &[(Slot, &str)]) -> String {
        let mut out = String::with_capacity(self.literal_len() + args.iter().map(|(_, v)| v.len()).sum::<usize>());
        self.render_into(&mut out, args);
        out
    }

    /// Append the filled template to `out`
    pub fn render_into(&self, out: &mut String, args: &[(Slot, &str)]) {
        for segment in self.0 {
            match segment {
                Lit(text) => out.push_str(text),
                S(slot) => {
                    if let Some((_, value)) = args.iter().find(|(s, _)| s == slot) {
                        out.push_str(value);
                    }
                },
            }
        }
    }

    /// Fill the `Text` slot
    #[inline]
    pub fn wrap(&self, text: &str) -> String {
        self.render(&[(Slot::Text, text)])
    }

    fn literal_len(&self) -> usize {
        self.0
            .iter()
            .map(|segment| match segment {
                Lit(text) => text.len(),
                S(_) => 0,
            })
            .sum()
    }
}

/// `\command{<text>}`
macro_rules! wrap {
    ($command:literal) => {
        $crate::omml::templates::Template(&[
            $crate::omml::templates::Segment::Lit(concat!($command, "{")),
            $crate::omml::templates::Segment::Slot($crate::omml::templates::Slot::Text),
            $crate::omml::templates::Segment::Lit("}"),
        ])
    };
}
pub(crate) use wrap;

/// `\command_{<lim>}`
macro_rules! limit {
    ($command:literal) => {
        $crate::omml::templates::Template(&[
            $crate::omml::templates::Segment::Lit(concat!($command, "_{")),
            $crate::omml::templates::Segment::Slot($crate::omml::templates::Slot::Lim),
            $crate::omml::templates::Segment::Lit("}"),
        ])
    };
}
pub(crate) use limit;

/// Row break in arrays and matrices
pub const BRK: &str = "\\\\";

/// Column separator in matrix rows
pub const ALN: &str = "&";

/// Marks where a function's argument goes in a rendered function name.
/// A private-use code point, so no escaped text run can produce it.
pub const FUNC_PLACE: &str = "\u{E000}";

/// Arrow command as produced by text runs, and its replacement under a limit
pub const LIM_TO: (&str, &str) = ("\\rightarrow", "\\to");

pub const SUB: Template = Template(&[Lit("_{"), S(Slot::Text), Lit("}")]);

pub const SUP: Template = Template(&[Lit("^{"), S(Slot::Text), Lit("}")]);

pub const DELIMITER: Template = Template(&[
    Lit("\\left"),
    S(Slot::Left),
    S(Slot::Text),
    Lit("\\right"),
    S(Slot::Right),
]);

/// Delimiter defaults: opening, closing, and the invisible delimiter
pub const DELIMITER_LEFT: &str = "(";
pub const DELIMITER_RIGHT: &str = ")";
pub const DELIMITER_NULL: &str = ".";
pub const DELIMITER_SEPARATOR: &str = "|";

pub const RADICAL: Template = Template(&[
    Lit("\\sqrt["),
    S(Slot::Deg),
    Lit("]{"),
    S(Slot::Text),
    Lit("}"),
]);

pub const RADICAL_DEFAULT: Template = Template(&[Lit("\\sqrt{"), S(Slot::Text), Lit("}")]);

pub const ARRAY: Template = Template(&[
    Lit("\\begin{array}{c}"),
    S(Slot::Text),
    Lit("\\end{array}"),
]);

pub const MATRIX: Template = Template(&[
    Lit("\\begin{matrix}"),
    S(Slot::Text),
    Lit("\\end{matrix}"),
]);

pub const LIM_UPP: Template = Template(&[
    Lit("\\overset{"),
    S(Slot::Lim),
    Lit("}{"),
    S(Slot::Text),
    Lit("}"),
]);

pub const FRACTION_DEFAULT: Template = Template(&[
    Lit("\\frac{"),
    S(Slot::Num),
    Lit("}{"),
    S(Slot::Den),
    Lit("}"),
]);

pub const ACCENT_DEFAULT: Template = wrap!("\\hat");

pub const BAR_DEFAULT: Template = wrap!("\\overline");

pub const BIG_OPERATOR_DEFAULT: &str = "\\int";
