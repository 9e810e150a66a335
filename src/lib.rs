//! omml-latex - Convert Office Math Markup Language (OMML) equations to LaTeX
//!
//! Word processors store equations as OMML trees inside their documents.
//! This crate renders such a tree into a LaTeX math-mode fragment, following
//! Word's own choices for spacing, implicit bracing and delimiter defaults.
//!
//! # Features
//!
//! - **Renderer over any tree**: implement [`SourceNode`] for your parser's
//!   element type and call [`convert`]
//! - **Built-in XML adapter** (`xml` feature, on by default): parse OMML or a
//!   whole `document.xml` with quick-xml and convert every equation in it
//! - **Compiled-in tables**: accents, operators, functions and symbols are
//!   static `phf` maps
//!
//! # Example - Converting a single equation
//!
//! ```
//! # #[cfg(feature = "xml")]
//! # fn main() -> omml_latex::Result<()> {
//! let xml = r#"<m:oMath xmlns:m="http://schemas.openxmlformats.org/officeDocument/2006/math">
//!     <m:f>
//!         <m:num><m:r><m:t>1</m:t></m:r></m:num>
//!         <m:den><m:r><m:t>2</m:t></m:r></m:den>
//!     </m:f>
//! </m:oMath>"#;
//!
//! assert_eq!(omml_latex::convert_str(xml)?, "\\frac{1}{2}");
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "xml"))]
//! # fn main() {}
//! ```
//!
//! # Example - Converting every equation in a document
//!
//! ```no_run
//! # #[cfg(feature = "xml")]
//! # fn main() -> omml_latex::Result<()> {
//! let document = std::fs::read_to_string("document.xml").unwrap();
//!
//! for equation in omml_latex::convert_document(&document)? {
//!     match equation {
//!         Ok(latex) => println!("$${}$$", latex),
//!         Err(e) => eprintln!("skipped: {}", e),
//!     }
//! }
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "xml"))]
//! # fn main() {}
//! ```

/// Error types shared by the renderer and the XML adapter
pub mod error;

/// The tree capability set the renderer reads from
pub mod node;

/// OMML rendering: dispatcher, handlers, templates and symbol tables
pub mod omml;

/// Owned XML element tree and its quick-xml reader
pub mod xml;

pub use error::{Error, Result};
pub use node::{MATH_ROOT, OMML_NS, OMML_STRICT_NS, SourceNode, find_math_nodes};
pub use omml::{
    Fragment, MathRenderer, PropKey, PropValue, PropertiesTable, TaggedFragment, escape_latex,
    translate_run,
};

#[cfg(feature = "xml")]
use log::warn;

/// Convert one `m:oMath` element to LaTeX
///
/// The output has no surrounding math-mode delimiters.
pub fn convert<N: SourceNode>(node: &N) -> Result<String> {
    MathRenderer::new().convert(node)
}

/// Parse `xml` and convert its root, which must be `m:oMath`
#[cfg(feature = "xml")]
pub fn convert_str(xml: &str) -> Result<String> {
    convert(&xml::parse(xml)?)
}

/// Convert every equation found in an XML document
///
/// Returns one result per `m:oMath` element in document order. A failing
/// equation does not stop the others; only a document that cannot be parsed
/// fails as a whole.
#[cfg(feature = "xml")]
pub fn convert_document(xml: &str) -> Result<Vec<Result<String>>> {
    let root = xml::parse(xml)?;

    let results = find_math_nodes(&root)
        .into_iter()
        .enumerate()
        .map(|(index, node)| {
            let result = convert(node);
            if let Err(e) = &result {
                warn!("equation {} could not be converted: {}", index, e);
            }
            result
        })
        .collect();

    Ok(results)
}
