// Delimiter element handler

use crate::error::Result;
use crate::node::SourceNode;
use crate::omml::dispatch::Dispatcher;
use crate::omml::fragment::{Fragment, TaggedFragment};
use crate::omml::lookup::SYMBOLS;
use crate::omml::properties::PropKey;
use crate::omml::renderer::MathRenderer;
use crate::omml::templates::{
    DELIMITER, DELIMITER_LEFT, DELIMITER_NULL, DELIMITER_RIGHT, DELIMITER_SEPARATOR, Slot,
};
use crate::omml::utils::escape_latex;
use log::debug;

/// Handler for delimiter elements (`m:d`)
pub struct DelimiterHandler;

impl DelimiterHandler {
    pub fn render<N: SourceNode>(renderer: &mut MathRenderer, elem: &N) -> Result<Fragment> {
        let children = renderer.render_children_list(elem, None)?;

        let mut properties = None;
        let mut operands = Vec::new();
        for TaggedFragment { tag, fragment } in &children {
            match *tag {
                "dPr" => properties = Some(fragment),
                "e" => operands.push(fragment.as_str()),
                _ => {},
            }
        }

        let property = move |key| match properties {
            Some(fragment) => fragment.value(key),
            None => Ok(None),
        };

        let left = Self::bracket(property(PropKey::BegChr)?, DELIMITER_LEFT);
        let right = Self::bracket(property(PropKey::EndChr)?, DELIMITER_RIGHT);
        let separator = match property(PropKey::SepChr)? {
            Some(chr) => Self::glyph(chr),
            None => DELIMITER_SEPARATOR.to_string(),
        };

        let operands = operands.join(separator.as_str());

        let mut text = properties.map_or("", |f| f.as_str()).to_string();
        DELIMITER.render_into(
            &mut text,
            &[
                (Slot::Left, left.as_str()),
                (Slot::Text, operands.as_str()),
                (Slot::Right, right.as_str()),
            ],
        );
        Ok(Fragment::text(text))
    }

    /// Absent or valueless falls back to `default`; an empty value is the invisible delimiter
    fn bracket(chr: Option<&str>, default: &str) -> String {
        match chr {
            None => {
                debug!("delimiter: no bracket character, using '{}'", default);
                default.to_string()
            },
            Some("") => DELIMITER_NULL.to_string(),
            Some(chr) => Self::glyph(chr),
        }
    }

    fn glyph(chr: &str) -> String {
        escape_latex(SYMBOLS.get(chr).copied().unwrap_or(chr))
    }
}

#[cfg(all(test, feature = "xml"))]
mod tests {
    use crate::omml::convert_math;

    const X: &str = "<m:e><m:r><m:t>x</m:t></m:r></m:e>";

    fn delimiter(pr: &str, body: &str) -> String {
        convert_math(&format!("<m:d><m:dPr>{}</m:dPr>{}</m:d>", pr, body)).unwrap()
    }

    #[test]
    fn test_explicit_parentheses() {
        let pr = r#"<m:begChr m:val="("/><m:endChr m:val=")"/>"#;
        assert_eq!(delimiter(pr, X), "\\left(x\\right)");
    }

    #[test]
    fn test_default_parentheses() {
        assert_eq!(delimiter("", X), "\\left(x\\right)");
        assert_eq!(delimiter("<m:begChr/>", X), "\\left(x\\right)");
        let latex = convert_math(&format!("<m:d>{}</m:d>", X)).unwrap();
        assert_eq!(latex, "\\left(x\\right)");
    }

    #[test]
    fn test_empty_value_is_invisible() {
        let pr = r#"<m:begChr m:val="{"/><m:endChr m:val=""/>"#;
        assert_eq!(delimiter(pr, X), "\\left\\{x\\right.");
    }

    #[test]
    fn test_mapped_brackets() {
        let pr = r#"<m:begChr m:val="⟨"/><m:endChr m:val="⟩"/>"#;
        assert_eq!(delimiter(pr, X), "\\left\\langle x\\right\\rangle ");

        let pr = r#"<m:begChr m:val="["/><m:endChr m:val="]"/>"#;
        assert_eq!(delimiter(pr, X), "\\left[x\\right]");
    }

    #[test]
    fn test_multiple_operands_use_separator() {
        let body = "<m:e><m:r><m:t>a</m:t></m:r></m:e><m:e><m:r><m:t>b</m:t></m:r></m:e>";
        assert_eq!(delimiter("", body), "\\left(a|b\\right)");
        assert_eq!(
            delimiter(r#"<m:sepChr m:val=","/>"#, body),
            "\\left(a,b\\right)"
        );
    }
}
