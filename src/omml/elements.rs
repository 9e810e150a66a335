use phf::{phf_map, phf_set};

/// Structural OMML elements with a dedicated handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathTag {
    Accent,
    Bar,
    Delimiter,
    SubscriptElement,
    SuperscriptElement,
    Fraction,
    Function,
    FunctionName,
    GroupChar,
    Radical,
    EqArr,
    LimLow,
    LimUpp,
    Limit,
    Matrix,
    MatrixRow,
    Nary,
    Run,
}

impl MathTag {
    /// Resolve an OMML local name
    #[inline]
    pub fn from_tag(tag: &str) -> Option<Self> {
        MATH_TAGS.get(tag).copied()
    }
}

/// Fast element name to tag lookup using PHF
static MATH_TAGS: phf::Map<&'static str, MathTag> = phf_map! {
    "acc" => MathTag::Accent,
    "bar" => MathTag::Bar,
    "d" => MathTag::Delimiter,
    "sub" => MathTag::SubscriptElement,
    "sup" => MathTag::SuperscriptElement,
    "f" => MathTag::Fraction,
    "func" => MathTag::Function,
    "fName" => MathTag::FunctionName,
    "groupChr" => MathTag::GroupChar,
    "rad" => MathTag::Radical,
    "eqArr" => MathTag::EqArr,
    "limLow" => MathTag::LimLow,
    "limUpp" => MathTag::LimUpp,
    "lim" => MathTag::Limit,
    "m" => MathTag::Matrix,
    "mr" => MathTag::MatrixRow,
    "nary" => MathTag::Nary,
    "r" => MathTag::Run,
};

/// Containers without a template of their own; they render as their children
static PASS_THROUGH: phf::Set<&'static str> = phf_set! {
    "box",
    "sSub",
    "sSup",
    "sSubSup",
    "num",
    "den",
    "deg",
    "e",
};

/// Suffix shared by every properties element (`accPr`, `dPr`, `naryPr`, ...)
pub const PROPERTIES_SUFFIX: &str = "Pr";

#[inline]
pub fn is_pass_through(tag: &str) -> bool {
    PASS_THROUGH.contains(tag)
}

#[inline]
pub fn is_properties_tag(tag: &str) -> bool {
    tag.ends_with(PROPERTIES_SUFFIX)
}
