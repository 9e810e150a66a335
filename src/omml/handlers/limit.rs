// Limit element handlers

use crate::error::{Error, Result};
use crate::node::SourceNode;
use crate::omml::dispatch::Dispatcher;
use crate::omml::fragment::Fragment;
use crate::omml::lookup::LIMIT_FUNCTIONS;
use crate::omml::renderer::MathRenderer;
use crate::omml::templates::{LIM_TO, LIM_UPP, Slot};

const LIMIT_PARTS: &[&str] = &["e", "lim"];

/// Handler for lower limits (`m:limLow`)
///
/// The base must be a known limit function such as `lim` or `max`.
pub struct LimLowHandler;

impl LimLowHandler {
    pub fn render<N: SourceNode>(renderer: &mut MathRenderer, elem: &N) -> Result<Fragment> {
        let children = renderer.render_children_map(elem, Some(LIMIT_PARTS))?;
        let base = children.text("e");

        let template = LIMIT_FUNCTIONS
            .get(base)
            .ok_or_else(|| Error::UnsupportedLimitFunction(base.to_string()))?;

        Ok(Fragment::text(template.render(&[(Slot::Lim, children.text("lim"))])))
    }
}

/// Handler for upper limits (`m:limUpp`)
pub struct LimUppHandler;

impl LimUppHandler {
    pub fn render<N: SourceNode>(renderer: &mut MathRenderer, elem: &N) -> Result<Fragment> {
        let children = renderer.render_children_map(elem, Some(LIMIT_PARTS))?;
        Ok(Fragment::text(LIM_UPP.render(&[
            (Slot::Lim, children.text("lim")),
            (Slot::Text, children.text("e")),
        ])))
    }
}

/// Handler for limit content (`m:lim`)
pub struct LimitHandler;

impl LimitHandler {
    pub fn render<N: SourceNode>(renderer: &mut MathRenderer, elem: &N) -> Result<Fragment> {
        let (arrow, to) = LIM_TO;
        let text = renderer.render_children_text(elem, None)?;
        Ok(Fragment::text(text.replace(arrow, to)))
    }
}

#[cfg(all(test, feature = "xml"))]
mod tests {
    use crate::error::Error;
    use crate::omml::convert_math;

    #[test]
    fn test_lower_limit() {
        let latex = convert_math(
            r#"<m:limLow>
                <m:limLowPr><m:ctrlPr/></m:limLowPr>
                <m:e><m:r><m:t>max</m:t></m:r></m:e>
                <m:lim><m:r><m:t>x∈S</m:t></m:r></m:lim>
            </m:limLow>"#,
        );
        assert_eq!(latex.unwrap(), "\\max_{x\\in S}");
    }

    #[test]
    fn test_unsupported_lower_limit() {
        let latex = convert_math(
            r#"<m:limLow><m:e><m:r><m:t>foo</m:t></m:r></m:e><m:lim><m:r><m:t>x</m:t></m:r></m:lim></m:limLow>"#,
        );
        assert_eq!(latex, Err(Error::UnsupportedLimitFunction("foo".to_string())));
    }

    #[test]
    fn test_upper_limit() {
        let latex = convert_math(
            r#"<m:limUpp><m:e><m:r><m:t>x</m:t></m:r></m:e><m:lim><m:r><m:t>def</m:t></m:r></m:lim></m:limUpp>"#,
        );
        assert_eq!(latex.unwrap(), "\\overset{def}{x}");
    }

    #[test]
    fn test_arrow_becomes_to() {
        let latex = convert_math(
            r#"<m:limLow><m:e><m:r><m:t>lim</m:t></m:r></m:e><m:lim><m:r><m:t>x→0</m:t></m:r></m:lim></m:limLow>"#,
        );
        assert_eq!(latex.unwrap(), "\\lim_{x\\to 0}");
    }
}
