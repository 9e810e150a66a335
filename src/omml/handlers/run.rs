// Text run element handler

use crate::node::SourceNode;
use crate::omml::fragment::Fragment;
use crate::omml::utils::translate_run;

/// Handler for text runs (`m:r`)
pub struct RunHandler;

impl RunHandler {
    /// Translate the run's `t` child; a run without one renders nothing
    pub fn render<N: SourceNode>(elem: &N) -> Option<Fragment> {
        let text = elem.child("t")?.text();
        Some(Fragment::text(translate_run(&text)))
    }
}

#[cfg(all(test, feature = "xml"))]
mod tests {
    use crate::omml::convert_math;

    #[test]
    fn test_run_text() {
        let latex = convert_math(
            r#"<m:r><m:rPr><m:sty m:val="p"/></m:rPr><w:rPr xmlns:w="urn:w"/><m:t>a+b</m:t></m:r>"#,
        );
        assert_eq!(latex.unwrap(), "a+b");
    }

    #[test]
    fn test_run_without_text_is_dropped() {
        let latex = convert_math(r#"<m:r><m:rPr/></m:r><m:r><m:t>x</m:t></m:r>"#);
        assert_eq!(latex.unwrap(), "x");
    }

    #[test]
    fn test_run_symbols_and_escapes() {
        let latex = convert_math(r#"<m:r><m:t>α≤50%</m:t></m:r>"#);
        assert_eq!(latex.unwrap(), "\\alpha \\leq 50\\%");
    }
}
