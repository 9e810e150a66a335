// Matrix element handlers

use crate::error::Result;
use crate::node::SourceNode;
use crate::omml::dispatch::{Dispatcher, join_fragments};
use crate::omml::fragment::Fragment;
use crate::omml::renderer::MathRenderer;
use crate::omml::templates::{ALN, BRK, MATRIX};

/// Handler for matrices (`m:m`)
pub struct MatrixHandler;

impl MatrixHandler {
    pub fn render<N: SourceNode>(renderer: &mut MathRenderer, elem: &N) -> Result<Fragment> {
        let mut rows = renderer.render_children_list(elem, None)?;
        rows.retain(|child| child.tag == "mr");
        Ok(Fragment::text(MATRIX.wrap(&join_fragments(&rows, BRK))))
    }
}

/// Handler for matrix rows (`m:mr`)
pub struct MatrixRowHandler;

impl MatrixRowHandler {
    pub fn render<N: SourceNode>(renderer: &mut MathRenderer, elem: &N) -> Result<Fragment> {
        let cells = renderer.render_children_list(elem, Some(&["e"]))?;
        Ok(Fragment::text(join_fragments(&cells, ALN)))
    }
}

#[cfg(all(test, feature = "xml"))]
mod tests {
    use crate::omml::convert_math;

    fn cell(text: &str) -> String {
        format!("<m:e><m:r><m:t>{}</m:t></m:r></m:e>", text)
    }

    #[test]
    fn test_two_by_two() {
        let xml = format!(
            "<m:m><m:mPr><m:mcs/></m:mPr><m:mr>{}{}</m:mr><m:mr>{}{}</m:mr></m:m>",
            cell("a"),
            cell("b"),
            cell("c"),
            cell("d")
        );
        assert_eq!(
            convert_math(&xml).unwrap(),
            "\\begin{matrix}a&b\\\\c&d\\end{matrix}"
        );
    }

    #[test]
    fn test_single_cell() {
        let xml = format!("<m:m><m:mr>{}</m:mr></m:m>", cell("1"));
        assert_eq!(convert_math(&xml).unwrap(), "\\begin{matrix}1\\end{matrix}");
    }
}
