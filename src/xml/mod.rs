// XML tree adapter
//
// An owned element tree implementing `SourceNode`, and (with the `xml`
// feature) a quick-xml based reader that builds it from text.

mod element;
#[cfg(feature = "xml")]
mod reader;

pub use element::XmlElement;
#[cfg(feature = "xml")]
pub use reader::parse;

pub use crate::node::find_math_nodes;
