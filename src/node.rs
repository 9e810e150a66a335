// Source tree abstraction
//
// The renderer never parses XML itself. It walks any tree that can answer
// the handful of questions below, so callers may hand it nodes from their
// own parser as long as they implement `SourceNode`.

use std::borrow::Cow;

/// Transitional OMML namespace, as written by Word
pub const OMML_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/math";

/// Strict (ISO 29500) OMML namespace
pub const OMML_STRICT_NS: &str = "http://purl.oclc.org/ooxml/officeDocument/math";

/// Local name of the math root element
pub const MATH_ROOT: &str = "oMath";

/// Check whether a namespace URI belongs to OMML
#[inline]
pub fn is_omml_namespace(uri: &str) -> bool {
    uri == OMML_NS || uri == OMML_STRICT_NS
}

/// Read-only view of an element in an already-parsed XML tree.
///
/// Implementations must return children in document order.
pub trait SourceNode {
    /// Element name without prefix
    fn local_name(&self) -> &str;

    /// Resolved namespace URI, if the element is bound to one
    fn namespace(&self) -> Option<&str>;

    /// Attribute value looked up by local name, ignoring the prefix
    fn attribute(&self, local_name: &str) -> Option<&str>;

    /// Child elements in document order
    fn children(&self) -> impl Iterator<Item = &Self>;

    /// Text content of the element
    fn text(&self) -> Cow<'_, str>;

    /// Whether this element lives in the OMML namespace
    fn is_omml(&self) -> bool {
        self.namespace().is_some_and(is_omml_namespace)
    }

    /// First child with the given local name, in any namespace
    fn child(&self, local_name: &str) -> Option<&Self> {
        self.children().find(|c| c.local_name() == local_name)
    }
}

/// Collect every math root below `root`, depth-first.
///
/// A math root is not searched further, so nested roots are never reported twice.
pub fn find_math_nodes<N: SourceNode>(root: &N) -> Vec<&N> {
    let mut found = Vec::new();
    collect_math_nodes(root, &mut found);
    found
}

fn collect_math_nodes<'n, N: SourceNode>(node: &'n N, found: &mut Vec<&'n N>) {
    if node.local_name() == MATH_ROOT && node.is_omml() {
        found.push(node);
        return;
    }

    for child in node.children() {
        collect_math_nodes(child, found);
    }
}

#[cfg(all(test, feature = "xml"))]
mod tests {
    use super::*;
    use crate::xml;

    #[test]
    fn test_namespaces() {
        assert!(is_omml_namespace(OMML_NS));
        assert!(is_omml_namespace(OMML_STRICT_NS));
        assert!(!is_omml_namespace(
            "http://schemas.openxmlformats.org/wordprocessingml/2006/main"
        ));
    }

    #[test]
    fn test_find_math_nodes_in_document() {
        let doc = xml::parse(
            r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"
                          xmlns:m="http://schemas.openxmlformats.org/officeDocument/2006/math">
                <w:body>
                    <w:p><m:oMath><m:r><m:t>a</m:t></m:r></m:oMath></w:p>
                    <w:p><w:r><w:t>text</w:t></w:r></w:p>
                    <w:p><m:oMathPara><m:oMath><m:r><m:t>b</m:t></m:r></m:oMath></m:oMathPara></w:p>
                </w:body>
            </w:document>"#,
        )
        .unwrap();

        let found = find_math_nodes(&doc);
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|n| n.local_name() == MATH_ROOT));
    }

    #[test]
    fn test_find_math_nodes_ignores_foreign_namespace() {
        let doc = xml::parse(r#"<root xmlns:x="urn:other"><x:oMath/></root>"#).unwrap();
        assert!(find_math_nodes(&doc).is_empty());
    }
}
