// Bar element handler

use crate::error::Result;
use crate::node::SourceNode;
use crate::omml::dispatch::Dispatcher;
use crate::omml::fragment::Fragment;
use crate::omml::lookup::BAR_POSITIONS;
use crate::omml::properties::PropKey;
use crate::omml::renderer::MathRenderer;
use crate::omml::templates::BAR_DEFAULT;
use log::debug;

/// Handler for over/under bar elements (`m:bar`)
pub struct BarHandler;

impl BarHandler {
    pub fn render<N: SourceNode>(renderer: &mut MathRenderer, elem: &N) -> Result<Fragment> {
        let children = renderer.render_children_map(elem, None)?;

        let template = match children.property("barPr", PropKey::Pos)? {
            Some(pos) => BAR_POSITIONS.get(pos).copied(),
            None => None,
        };
        let template = template.unwrap_or_else(|| {
            debug!("bar: no mapped pos, using an over-bar");
            BAR_DEFAULT
        });

        let mut text = children.text("barPr").to_string();
        text.push_str(&template.wrap(children.text("e")));
        Ok(Fragment::text(text))
    }
}
