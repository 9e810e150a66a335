// Rendered fragments
//
// Every handler hands back a `Fragment`. Property elements produce the
// `Properties` variant so their owning structural element can read
// attributes from it; everything else is plain rendered text.

use super::properties::{PropKey, PropValue, PropertiesTable};
use crate::error::{Error, Result};
use std::fmt;

/// Output of rendering one child element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Rendered LaTeX text
    Text(String),
    /// Parsed `*Pr` element
    Properties(PropertiesTable),
}

impl Fragment {
    /// Create a text fragment
    #[inline]
    pub fn text(text: impl Into<String>) -> Self {
        Fragment::Text(text.into())
    }

    /// Rendered text of the fragment
    ///
    /// A properties fragment renders as whatever its recognized children
    /// produced, which is only ever row-break markers.
    pub fn as_str(&self) -> &str {
        match self {
            Fragment::Text(text) => text,
            Fragment::Properties(table) => table.as_str(),
        }
    }

    /// Whether the fragment renders to nothing
    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }

    /// Look up a property, distinguishing an absent tag (`Ok(None)`) from a
    /// tag without a value (`Ok(Some(PropValue::Valueless))`)
    ///
    /// Fails with [`Error::AttributeAccess`] on a text fragment.
    pub fn attribute(&self, key: PropKey) -> Result<Option<&PropValue>> {
        match self {
            Fragment::Properties(table) => Ok(table.get(key)),
            Fragment::Text(text) => Err(Error::AttributeAccess {
                name: key.name(),
                text: text.clone(),
            }),
        }
    }

    /// Look up a property value; absent and valueless tags both yield `None`
    pub fn value(&self, key: PropKey) -> Result<Option<&str>> {
        Ok(self.attribute(key)?.and_then(PropValue::as_str))
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Fragment {
    fn from(text: String) -> Self {
        Fragment::Text(text)
    }
}

/// A fragment paired with the tag it was rendered from, kept in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedFragment<'n> {
    pub tag: &'n str,
    pub fragment: Fragment,
}
