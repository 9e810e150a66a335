// Group character element handler

use crate::error::Result;
use crate::node::SourceNode;
use crate::omml::dispatch::Dispatcher;
use crate::omml::fragment::Fragment;
use crate::omml::lookup::ACCENTS;
use crate::omml::properties::PropKey;
use crate::omml::renderer::MathRenderer;
use log::debug;

/// Handler for group characters (`m:groupChr`)
///
/// Shares the accent table but has no default template. An unmapped
/// character is emitted as itself in place of the group.
pub struct GroupCharHandler;

impl GroupCharHandler {
    pub fn render<N: SourceNode>(renderer: &mut MathRenderer, elem: &N) -> Result<Fragment> {
        let children = renderer.render_children_map(elem, None)?;
        let base = children.text("e");

        let mut text = children.text("groupChrPr").to_string();
        match children.property("groupChrPr", PropKey::Chr)? {
            Some(chr) => match ACCENTS.get(chr) {
                Some(template) => text.push_str(&template.wrap(base)),
                None => {
                    debug!("group character: '{}' is unmapped, emitting it literally", chr);
                    text.push_str(chr);
                },
            },
            None => {
                debug!("group character: no chr, keeping the base as is");
                text.push_str(base);
            },
        }
        Ok(Fragment::text(text))
    }
}

#[cfg(all(test, feature = "xml"))]
mod tests {
    use crate::omml::convert_math;

    #[test]
    fn test_underbrace() {
        let latex = convert_math(
            r#"<m:groupChr><m:groupChrPr><m:chr m:val="⏟"/></m:groupChrPr><m:e><m:r><m:t>abc</m:t></m:r></m:e></m:groupChr>"#,
        );
        assert_eq!(latex.unwrap(), "\\underbrace{abc}");
    }

    #[test]
    fn test_unmapped_is_literal() {
        let latex = convert_math(
            r#"<m:groupChr><m:groupChrPr><m:chr m:val="*"/></m:groupChrPr><m:e><m:r><m:t>abc</m:t></m:r></m:e></m:groupChr>"#,
        );
        assert_eq!(latex.unwrap(), "*");
    }

    #[test]
    fn test_missing_chr_keeps_base() {
        let latex = convert_math(r#"<m:groupChr><m:e><m:r><m:t>abc</m:t></m:r></m:e></m:groupChr>"#);
        assert_eq!(latex.unwrap(), "abc");
    }
}
