// OMML (Office Math Markup Language) to LaTeX rendering
//
// The renderer walks an `m:oMath` tree through the `Dispatcher` protocol.
// Every structural element has a handler under `handlers/` that renders its
// children recursively and fills a template chosen from its `*Pr` sibling.
// Text runs are translated glyph by glyph and escaped.
//
// Reference: ECMA-376 Part 1, §22.1 (Math)

mod dispatch;
mod elements;
mod fragment;
mod handlers;
mod lookup;
mod properties;
mod renderer;
mod templates;
mod utils;

pub use dispatch::{ChildMap, Dispatcher, join_fragments};
pub use elements::MathTag;
pub use fragment::{Fragment, TaggedFragment};
pub use properties::{PropKey, PropValue, PropertiesTable};
pub use renderer::MathRenderer;
pub use utils::{escape_latex, translate_run};

/// Convert the body of an equation, wrapped in a transitional `m:oMath` root
#[cfg(all(test, feature = "xml"))]
pub(crate) fn convert_math(body: &str) -> crate::error::Result<String> {
    let xml = format!(
        r#"<m:oMath xmlns:m="{}">{}</m:oMath>"#,
        crate::node::OMML_NS,
        body
    );
    MathRenderer::new().convert(&crate::xml::parse(&xml)?)
}
