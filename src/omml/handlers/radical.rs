// Radical element handler

use crate::error::Result;
use crate::node::SourceNode;
use crate::omml::dispatch::Dispatcher;
use crate::omml::fragment::Fragment;
use crate::omml::renderer::MathRenderer;
use crate::omml::templates::{RADICAL, RADICAL_DEFAULT, Slot};

/// Handler for radical elements (`m:rad`)
pub struct RadicalHandler;

impl RadicalHandler {
    pub fn render<N: SourceNode>(renderer: &mut MathRenderer, elem: &N) -> Result<Fragment> {
        let children = renderer.render_children_map(elem, None)?;
        let radicand = children.text("e");
        let degree = children.text("deg");

        let text = if degree.is_empty() {
            RADICAL_DEFAULT.wrap(radicand)
        } else {
            RADICAL.render(&[(Slot::Deg, degree), (Slot::Text, radicand)])
        };
        Ok(Fragment::text(text))
    }
}

#[cfg(all(test, feature = "xml"))]
mod tests {
    use crate::omml::convert_math;

    #[test]
    fn test_square_root() {
        let latex = convert_math(r#"<m:rad><m:e><m:r><m:t>x</m:t></m:r></m:e></m:rad>"#);
        assert_eq!(latex.unwrap(), "\\sqrt{x}");

        // Word writes an empty degree when it is hidden
        let latex = convert_math(
            r#"<m:rad><m:radPr><m:degHide m:val="1"/></m:radPr><m:deg/><m:e><m:r><m:t>x</m:t></m:r></m:e></m:rad>"#,
        );
        assert_eq!(latex.unwrap(), "\\sqrt{x}");
    }

    #[test]
    fn test_nth_root() {
        let latex = convert_math(
            r#"<m:rad><m:deg><m:r><m:t>3</m:t></m:r></m:deg><m:e><m:r><m:t>x</m:t></m:r></m:e></m:rad>"#,
        );
        assert_eq!(latex.unwrap(), "\\sqrt[3]{x}");
    }
}
