// Accent element handler

use crate::error::Result;
use crate::node::SourceNode;
use crate::omml::dispatch::Dispatcher;
use crate::omml::fragment::Fragment;
use crate::omml::lookup::ACCENTS;
use crate::omml::properties::PropKey;
use crate::omml::renderer::MathRenderer;
use crate::omml::templates::ACCENT_DEFAULT;
use log::debug;

/// Handler for accent elements (`m:acc`)
pub struct AccentHandler;

impl AccentHandler {
    pub fn render<N: SourceNode>(renderer: &mut MathRenderer, elem: &N) -> Result<Fragment> {
        let children = renderer.render_children_map(elem, None)?;

        let template = match children.property("accPr", PropKey::Chr)? {
            Some(chr) => ACCENTS.get(chr).copied(),
            None => None,
        };
        let template = template.unwrap_or_else(|| {
            debug!("accent: no mapped chr, using the hat accent");
            ACCENT_DEFAULT
        });

        Ok(Fragment::text(template.wrap(children.text("e"))))
    }
}

#[cfg(all(test, feature = "xml"))]
mod tests {
    use crate::omml::convert_math;

    #[test]
    fn test_mapped_accent() {
        let latex = convert_math(
            r#"<m:acc><m:accPr><m:chr m:val="&#x307;"/></m:accPr><m:e><m:r><m:t>x</m:t></m:r></m:e></m:acc>"#,
        );
        assert_eq!(latex.unwrap(), "\\dot{x}");
    }

    #[test]
    fn test_default_accent() {
        let latex = convert_math(r#"<m:acc><m:e><m:r><m:t>a</m:t></m:r></m:e></m:acc>"#);
        assert_eq!(latex.unwrap(), "\\hat{a}");

        let latex = convert_math(
            r#"<m:acc><m:accPr><m:chr m:val="?"/></m:accPr><m:e><m:r><m:t>a</m:t></m:r></m:e></m:acc>"#,
        );
        assert_eq!(latex.unwrap(), "\\hat{a}");
    }
}
