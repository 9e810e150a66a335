// Fraction element handler

use crate::error::Result;
use crate::node::SourceNode;
use crate::omml::dispatch::Dispatcher;
use crate::omml::fragment::Fragment;
use crate::omml::lookup::FRACTIONS;
use crate::omml::properties::PropKey;
use crate::omml::renderer::MathRenderer;
use crate::omml::templates::{FRACTION_DEFAULT, Slot};
use log::debug;

/// Handler for fraction elements (`m:f`)
pub struct FractionHandler;

impl FractionHandler {
    pub fn render<N: SourceNode>(renderer: &mut MathRenderer, elem: &N) -> Result<Fragment> {
        let children = renderer.render_children_map(elem, None)?;

        let template = match children.property("fPr", PropKey::Type)? {
            Some(kind) => FRACTIONS.get(kind).copied(),
            None => None,
        };
        let template = template.unwrap_or_else(|| {
            debug!("fraction: no mapped type, using a stacked fraction");
            FRACTION_DEFAULT
        });

        let mut text = children.text("fPr").to_string();
        template.render_into(
            &mut text,
            &[(Slot::Num, children.text("num")), (Slot::Den, children.text("den"))],
        );
        Ok(Fragment::text(text))
    }
}

#[cfg(all(test, feature = "xml"))]
mod tests {
    use crate::omml::convert_math;

    const HALF: &str = r#"<m:num><m:r><m:t>1</m:t></m:r></m:num><m:den><m:r><m:t>2</m:t></m:r></m:den>"#;

    #[test]
    fn test_default_fraction() {
        let latex = convert_math(&format!("<m:f>{}</m:f>", HALF));
        assert_eq!(latex.unwrap(), "\\frac{1}{2}");
    }

    #[test]
    fn test_fraction_types() {
        let linear = convert_math(&format!(
            r#"<m:f><m:fPr><m:type m:val="lin"/></m:fPr>{}</m:f>"#,
            HALF
        ));
        assert_eq!(linear.unwrap(), "{1}/{2}");

        let skewed = convert_math(&format!(
            r#"<m:f><m:fPr><m:type m:val="skw"/></m:fPr>{}</m:f>"#,
            HALF
        ));
        assert_eq!(skewed.unwrap(), "^{1}/_{2}");

        let no_bar = convert_math(&format!(
            r#"<m:f><m:fPr><m:type m:val="noBar"/></m:fPr>{}</m:f>"#,
            HALF
        ));
        assert_eq!(no_bar.unwrap(), "\\genfrac{}{}{0pt}{}{1}{2}");
    }

    #[test]
    fn test_nested_fraction_keeps_braces() {
        let latex = convert_math(&format!(
            "<m:f><m:num><m:f>{}</m:f></m:num><m:den><m:r><m:t>3</m:t></m:r></m:den></m:f>",
            HALF
        ));
        assert_eq!(latex.unwrap(), "\\frac{\\frac{1}{2}}{3}");
    }
}
