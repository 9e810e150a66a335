// Math renderer
//
// Entry point for converting one `m:oMath` element. Structural tags go to
// their handler; containers without a template render as their children,
// `*Pr` elements become properties fragments, and anything else is dropped.

use super::dispatch::Dispatcher;
use super::elements::{MathTag, is_pass_through, is_properties_tag};
use super::fragment::Fragment;
use super::handlers::*;
use super::properties::PropertiesTable;
use crate::error::{Error, Result};
use crate::node::{MATH_ROOT, SourceNode};
use log::trace;

/// Renders an OMML equation to LaTeX
///
/// Holds no state between equations; create one per conversion or reuse it
/// freely.
#[derive(Debug, Default, Clone, Copy)]
pub struct MathRenderer;

impl MathRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Convert a math root element to a LaTeX math-mode fragment
    ///
    /// The result has no surrounding `$` or `\[`. Fails with
    /// [`Error::Structure`] before any traversal if `root` is not `oMath`.
    pub fn convert<N: SourceNode>(&mut self, root: &N) -> Result<String> {
        if root.local_name() != MATH_ROOT {
            return Err(Error::Structure {
                expected: MATH_ROOT,
                found: root.local_name().to_string(),
            });
        }

        let text = self.render_children_text(root, None)?;
        // Symbol entries end in a space that must not sit before a closing brace
        Ok(text.replace(" }", "}"))
    }
}

impl Dispatcher for MathRenderer {
    fn handle_tag<N: SourceNode>(&mut self, elem: &N, tag: &str) -> Result<Option<Fragment>> {
        let Some(kind) = MathTag::from_tag(tag) else {
            return Ok(None);
        };
        trace!("rendering <{}> as {:?}", tag, kind);

        let fragment = match kind {
            MathTag::Accent => AccentHandler::render(self, elem)?,
            MathTag::Bar => BarHandler::render(self, elem)?,
            MathTag::Delimiter => DelimiterHandler::render(self, elem)?,
            MathTag::SubscriptElement => SubscriptHandler::render(self, elem)?,
            MathTag::SuperscriptElement => SuperscriptHandler::render(self, elem)?,
            MathTag::Fraction => FractionHandler::render(self, elem)?,
            MathTag::Function => FunctionHandler::render(self, elem)?,
            MathTag::FunctionName => FunctionNameHandler::render(self, elem)?,
            MathTag::GroupChar => GroupCharHandler::render(self, elem)?,
            MathTag::Radical => RadicalHandler::render(self, elem)?,
            MathTag::EqArr => EqArrHandler::render(self, elem)?,
            MathTag::LimLow => LimLowHandler::render(self, elem)?,
            MathTag::LimUpp => LimUppHandler::render(self, elem)?,
            MathTag::Limit => LimitHandler::render(self, elem)?,
            MathTag::Matrix => MatrixHandler::render(self, elem)?,
            MathTag::MatrixRow => MatrixRowHandler::render(self, elem)?,
            MathTag::Nary => NaryHandler::render(self, elem)?,
            MathTag::Run => return Ok(RunHandler::render(elem)),
        };

        Ok(Some(fragment))
    }

    fn handle_unknown<N: SourceNode>(&mut self, elem: &N, tag: &str) -> Result<Option<Fragment>> {
        if is_pass_through(tag) {
            let text = self.render_children_text(elem, None)?;
            return Ok(Some(Fragment::text(text)));
        }

        if is_properties_tag(tag) {
            return Ok(Some(Fragment::Properties(PropertiesTable::parse(elem)?)));
        }

        Ok(None)
    }
}
