// N-ary operator element handler

use crate::error::Result;
use crate::node::SourceNode;
use crate::omml::dispatch::Dispatcher;
use crate::omml::fragment::{Fragment, TaggedFragment};
use crate::omml::lookup::BIG_OPERATORS;
use crate::omml::properties::PropKey;
use crate::omml::renderer::MathRenderer;
use crate::omml::templates::BIG_OPERATOR_DEFAULT;
use crate::omml::utils::{is_complex_operand, needs_separator};
use log::debug;
use std::borrow::Cow;

/// Handler for n-ary operators (`m:nary`)
///
/// The operator comes from `m:naryPr`; limits and the operand follow in
/// document order. An operand is braced only when it looks compound, which
/// approximates how Word decides to group it.
pub struct NaryHandler;

impl NaryHandler {
    pub fn render<N: SourceNode>(renderer: &mut MathRenderer, elem: &N) -> Result<Fragment> {
        let children = renderer.render_children_list(elem, None)?;

        let mut operator = None;
        let mut parts: Vec<Cow<'_, str>> = Vec::with_capacity(children.len());
        for TaggedFragment { tag, fragment } in &children {
            match *tag {
                "naryPr" => operator = fragment.value(PropKey::Chr)?,
                "e" if is_complex_operand(fragment.as_str()) => {
                    debug!("n-ary: bracing operand '{}'", fragment);
                    parts.push(Cow::Owned(format!("{{{}}}", fragment)));
                },
                _ => parts.push(Cow::Borrowed(fragment.as_str())),
            }
        }

        let mut text = match operator {
            Some(chr) => BIG_OPERATORS.get(chr).copied().unwrap_or(chr).to_string(),
            None => {
                debug!("n-ary: no operator character, using an integral");
                BIG_OPERATOR_DEFAULT.to_string()
            },
        };
        for part in &parts {
            if needs_separator(&text, part) {
                text.push(' ');
            }
            text.push_str(part);
        }
        Ok(Fragment::text(text))
    }
}

#[cfg(all(test, feature = "xml"))]
mod tests {
    use crate::omml::convert_math;

    fn nary(pr: &str, operand: &str) -> String {
        convert_math(&format!(
            "<m:nary>{}<m:sub/><m:sup/><m:e><m:r><m:t>{}</m:t></m:r></m:e></m:nary>",
            pr, operand
        ))
        .unwrap()
    }

    const SUM: &str = r#"<m:naryPr><m:chr m:val="∑"/></m:naryPr>"#;

    #[test]
    fn test_simple_operand_unwrapped() {
        let latex = convert_math(&format!(
            "<m:nary>{}<m:e><m:r><m:t>i</m:t></m:r></m:e></m:nary>",
            SUM
        ));
        assert_eq!(latex.unwrap(), "\\sum i");
    }

    #[test]
    fn test_complex_operand_wrapped() {
        let latex = convert_math(&format!(
            "<m:nary>{}<m:e><m:r><m:t>x+1</m:t></m:r></m:e></m:nary>",
            SUM
        ));
        assert_eq!(latex.unwrap(), "\\sum{x+1}");
    }

    #[test]
    fn test_limits_in_document_order() {
        let latex = convert_math(&format!(
            "<m:nary>{}<m:sub><m:r><m:t>i=1</m:t></m:r></m:sub><m:sup><m:r><m:t>n</m:t></m:r></m:sup><m:e><m:r><m:t>i</m:t></m:r></m:e></m:nary>",
            SUM
        ));
        assert_eq!(latex.unwrap(), "\\sum_{i=1}^{n}i");
    }

    #[test]
    fn test_default_operator_is_integral() {
        assert_eq!(nary("<m:naryPr/>", "f"), "\\int_{}^{}f");
        assert_eq!(nary("", "f"), "\\int_{}^{}f");
    }

    #[test]
    fn test_unmapped_operator_used_literally() {
        assert_eq!(
            nary(r#"<m:naryPr><m:chr m:val="⊎"/></m:naryPr>"#, "f"),
            "⊎_{}^{}f"
        );
    }
}
