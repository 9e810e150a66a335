// Equation array handler

use crate::error::Result;
use crate::node::SourceNode;
use crate::omml::dispatch::{Dispatcher, join_fragments};
use crate::omml::fragment::Fragment;
use crate::omml::renderer::MathRenderer;
use crate::omml::templates::{ARRAY, BRK};

/// Handler for equation arrays (`m:eqArr`)
pub struct EqArrHandler;

impl EqArrHandler {
    pub fn render<N: SourceNode>(renderer: &mut MathRenderer, elem: &N) -> Result<Fragment> {
        let rows = renderer.render_children_list(elem, Some(&["e"]))?;
        Ok(Fragment::text(ARRAY.wrap(&join_fragments(&rows, BRK))))
    }
}
