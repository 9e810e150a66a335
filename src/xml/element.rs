use crate::node::SourceNode;
use smallvec::SmallVec;
use std::borrow::Cow;

/// Owned XML element with its namespace already resolved
///
/// Built by [`parse`](super::parse), or by hand through the builder methods
/// when a tree comes from somewhere other than XML text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    namespace: Option<String>,
    attributes: SmallVec<[(String, String); 2]>,
    children: Vec<XmlElement>,
    text: String,
}

impl XmlElement {
    /// Create an element with the given namespace URI and local name
    pub fn new(namespace: Option<&str>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.map(str::to_owned),
            ..Self::default()
        }
    }

    /// Add an attribute, keyed by its local name
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Append a child element
    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }

    /// Append text content
    pub fn with_text(mut self, text: &str) -> Self {
        self.text.push_str(text);
        self
    }

    #[cfg(feature = "xml")]
    pub(crate) fn push_attribute(&mut self, name: String, value: String) {
        self.attributes.push((name, value));
    }

    #[cfg(feature = "xml")]
    pub(crate) fn push_child(&mut self, child: XmlElement) {
        self.children.push(child);
    }

    #[cfg(feature = "xml")]
    pub(crate) fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
    }
}

impl SourceNode for XmlElement {
    fn local_name(&self) -> &str {
        &self.name
    }

    fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    fn attribute(&self, local_name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(name, _)| name == local_name)
            .map(|(_, value)| value.as_str())
    }

    fn children(&self) -> impl Iterator<Item = &Self> {
        self.children.iter()
    }

    fn text(&self) -> Cow<'_, str> {
        if self.children.is_empty() {
            return Cow::Borrowed(&self.text);
        }

        let mut text = self.text.clone();
        for child in &self.children {
            text.push_str(&child.text());
        }
        Cow::Owned(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::OMML_NS;

    #[test]
    fn test_builder() {
        let elem = XmlElement::new(Some(OMML_NS), "chr").with_attribute("val", "^");
        assert_eq!(elem.local_name(), "chr");
        assert!(elem.is_omml());
        assert_eq!(elem.attribute("val"), Some("^"));
        assert_eq!(elem.attribute("missing"), None);
    }

    #[test]
    fn test_text_includes_descendants() {
        let elem = XmlElement::new(None, "p")
            .with_text("a")
            .with_child(XmlElement::new(None, "t").with_text("b"));
        assert_eq!(elem.text(), "ab");
        assert_eq!(elem.child("t").map(|t| t.text().into_owned()), Some("b".to_string()));
    }
}
