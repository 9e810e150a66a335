// Subscript and superscript element handlers

use crate::error::Result;
use crate::node::SourceNode;
use crate::omml::dispatch::Dispatcher;
use crate::omml::fragment::Fragment;
use crate::omml::renderer::MathRenderer;
use crate::omml::templates::{SUB, SUP};

/// Handler for subscript content (`m:sub`)
pub struct SubscriptHandler;

impl SubscriptHandler {
    pub fn render<N: SourceNode>(renderer: &mut MathRenderer, elem: &N) -> Result<Fragment> {
        let text = renderer.render_children_text(elem, None)?;
        Ok(Fragment::text(SUB.wrap(&text)))
    }
}

/// Handler for superscript content (`m:sup`)
pub struct SuperscriptHandler;

impl SuperscriptHandler {
    pub fn render<N: SourceNode>(renderer: &mut MathRenderer, elem: &N) -> Result<Fragment> {
        let text = renderer.render_children_text(elem, None)?;
        Ok(Fragment::text(SUP.wrap(&text)))
    }
}
