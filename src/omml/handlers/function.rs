// Function application and function name handlers

use crate::error::{Error, Result};
use crate::node::SourceNode;
use crate::omml::dispatch::Dispatcher;
use crate::omml::fragment::{Fragment, TaggedFragment};
use crate::omml::lookup::FUNCTIONS;
use crate::omml::renderer::MathRenderer;
use crate::omml::templates::FUNC_PLACE;

/// Handler for function application (`m:func`)
pub struct FunctionHandler;

impl FunctionHandler {
    pub fn render<N: SourceNode>(renderer: &mut MathRenderer, elem: &N) -> Result<Fragment> {
        let children = renderer.render_children_map(elem, None)?;
        let name = children.get("fName").map_or(FUNC_PLACE, Fragment::as_str);
        Ok(Fragment::text(name.replace(FUNC_PLACE, children.text("e"))))
    }
}

/// Handler for function names (`m:fName`)
///
/// Runs must name a known function. Anything else, such as a lower limit
/// wrapping `lim`, is kept verbatim. The result always carries exactly one
/// argument placeholder.
pub struct FunctionNameHandler;

impl FunctionNameHandler {
    pub fn render<N: SourceNode>(renderer: &mut MathRenderer, elem: &N) -> Result<Fragment> {
        let mut name = String::new();

        for TaggedFragment { tag, fragment } in renderer.render_children_list(elem, None)? {
            let text = fragment.as_str();
            if tag == "r" {
                let function = FUNCTIONS
                    .get(text)
                    .ok_or_else(|| Error::UnsupportedSymbol(text.to_string()))?;
                name.push_str(function);
            } else {
                name.push_str(text);
            }
        }

        if !name.contains(FUNC_PLACE) {
            name.push_str(FUNC_PLACE);
        }
        Ok(Fragment::text(name))
    }
}

#[cfg(all(test, feature = "xml"))]
mod tests {
    use crate::error::Error;
    use crate::omml::convert_math;

    #[test]
    fn test_known_function() {
        let latex = convert_math(
            r#"<m:func><m:fName><m:r><m:t>sin</m:t></m:r></m:fName><m:e><m:r><m:t>x</m:t></m:r></m:e></m:func>"#,
        );
        assert_eq!(latex.unwrap(), "\\sin{x}");
    }

    #[test]
    fn test_unknown_function_fails() {
        let latex = convert_math(
            r#"<m:r><m:t>a</m:t></m:r><m:func><m:fName><m:r><m:t>foo</m:t></m:r></m:fName><m:e><m:r><m:t>x</m:t></m:r></m:e></m:func>"#,
        );
        assert_eq!(latex, Err(Error::UnsupportedSymbol("foo".to_string())));
    }

    #[test]
    fn test_non_run_name_gets_placeholder() {
        let latex = convert_math(
            r#"<m:func>
                <m:fName>
                    <m:limLow>
                        <m:e><m:r><m:t>lim</m:t></m:r></m:e>
                        <m:lim><m:r><m:t>n→∞</m:t></m:r></m:lim>
                    </m:limLow>
                </m:fName>
                <m:e><m:r><m:t>a</m:t></m:r></m:e>
            </m:func>"#,
        );
        assert_eq!(latex.unwrap(), "\\lim_{n\\to \\infty}a");
    }
}
