// OMML property parsing
//
// A `*Pr` element parametrizes its sibling structural element. Only a small
// fixed set of property tags matters for rendering; each carries its value
// in an `m:val` attribute. `m:brk` is the one structural marker and renders
// as a row break.

use super::dispatch::Dispatcher;
use super::fragment::Fragment;
use super::templates::BRK;
use crate::error::Result;
use crate::node::SourceNode;
use phf::phf_map;

/// Recognized property tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropKey {
    Chr,
    Pos,
    BegChr,
    EndChr,
    SepChr,
    Type,
    Brk,
}

impl PropKey {
    const COUNT: usize = 7;

    /// OMML tag name of the property
    pub fn name(self) -> &'static str {
        match self {
            PropKey::Chr => "chr",
            PropKey::Pos => "pos",
            PropKey::BegChr => "begChr",
            PropKey::EndChr => "endChr",
            PropKey::SepChr => "sepChr",
            PropKey::Type => "type",
            PropKey::Brk => "brk",
        }
    }

    /// Resolve a property tag name
    pub fn from_tag(tag: &str) -> Option<Self> {
        PROP_KEYS.get(tag).copied()
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

static PROP_KEYS: phf::Map<&'static str, PropKey> = phf_map! {
    "chr" => PropKey::Chr,
    "pos" => PropKey::Pos,
    "begChr" => PropKey::BegChr,
    "endChr" => PropKey::EndChr,
    "sepChr" => PropKey::SepChr,
    "type" => PropKey::Type,
    "brk" => PropKey::Brk,
};

/// State of a property tag that occurred in a `*Pr` element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropValue {
    /// The tag is present but carries no `val` attribute
    Valueless,
    /// The tag's `val` attribute, possibly empty
    Value(String),
}

impl PropValue {
    /// The value, if any
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::Valueless => None,
            PropValue::Value(value) => Some(value),
        }
    }
}

/// Parsed properties of one `*Pr` element
///
/// Immutable once built. A tag that never occurred is `None`, a tag without
/// a value is `Some(PropValue::Valueless)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertiesTable {
    values: [Option<PropValue>; PropKey::COUNT],
    text: String,
}

impl PropertiesTable {
    /// Parse a `*Pr` element
    pub fn parse<N: SourceNode>(elem: &N) -> Result<Self> {
        let mut builder = PropertiesBuilder::default();
        let text = builder.render_children_text(elem, None)?;
        Ok(builder.finish(text))
    }

    /// Stored state of a property, or `None` if the tag never occurred
    pub fn get(&self, key: PropKey) -> Option<&PropValue> {
        self.values[key.index()].as_ref()
    }

    /// Property value; absent and valueless tags both yield `None`
    pub fn value(&self, key: PropKey) -> Option<&str> {
        self.get(key).and_then(PropValue::as_str)
    }

    /// Whether the tag occurred at all
    pub fn contains(&self, key: PropKey) -> bool {
        self.values[key.index()].is_some()
    }

    /// Rendered text of the properties element
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Accumulates property values while walking a `*Pr` element
#[derive(Debug, Default)]
pub(crate) struct PropertiesBuilder {
    values: [Option<PropValue>; PropKey::COUNT],
}

impl PropertiesBuilder {
    /// Store a property; a repeated tag overwrites the earlier value
    pub(crate) fn set(&mut self, key: PropKey, value: PropValue) {
        self.values[key.index()] = Some(value);
    }

    pub(crate) fn finish(self, text: String) -> PropertiesTable {
        PropertiesTable {
            values: self.values,
            text,
        }
    }
}

impl Dispatcher for PropertiesBuilder {
    fn handle_tag<N: SourceNode>(&mut self, elem: &N, tag: &str) -> Result<Option<Fragment>> {
        let Some(key) = PropKey::from_tag(tag) else {
            return Ok(None);
        };

        match key {
            PropKey::Brk => {
                self.set(key, PropValue::Value(BRK.to_string()));
                Ok(Some(Fragment::text(BRK)))
            },
            _ => {
                let value = elem
                    .attribute("val")
                    .map_or(PropValue::Valueless, |v| PropValue::Value(v.to_owned()));
                self.set(key, value);
                Ok(None)
            },
        }
    }
}

#[cfg(all(test, feature = "xml"))]
mod tests {
    use super::*;
    use crate::xml;

    fn parse_pr(body: &str) -> PropertiesTable {
        let xml = format!(
            r#"<m:dPr xmlns:m="http://schemas.openxmlformats.org/officeDocument/2006/math">{}</m:dPr>"#,
            body
        );
        PropertiesTable::parse(&xml::parse(&xml).unwrap()).unwrap()
    }

    #[test]
    fn test_three_states() {
        let table = parse_pr(r#"<m:begChr m:val="["/><m:endChr/>"#);

        assert_eq!(table.get(PropKey::BegChr), Some(&PropValue::Value("[".to_string())));
        assert_eq!(table.value(PropKey::BegChr), Some("["));

        assert_eq!(table.get(PropKey::EndChr), Some(&PropValue::Valueless));
        assert_eq!(table.value(PropKey::EndChr), None);
        assert!(table.contains(PropKey::EndChr));

        assert_eq!(table.get(PropKey::Chr), None);
        assert!(!table.contains(PropKey::Chr));
    }

    #[test]
    fn test_empty_value_is_kept() {
        let table = parse_pr(r#"<m:begChr m:val=""/>"#);
        assert_eq!(table.value(PropKey::BegChr), Some(""));
    }

    #[test]
    fn test_repeated_tag_last_wins() {
        let table = parse_pr(r#"<m:chr m:val="a"/><m:chr m:val="b"/>"#);
        assert_eq!(table.value(PropKey::Chr), Some("b"));
    }

    #[test]
    fn test_break_marker() {
        let table = parse_pr(r#"<m:brk/><m:ctrlPr/>"#);
        assert_eq!(table.value(PropKey::Brk), Some(BRK));
        assert_eq!(table.as_str(), BRK);
    }

    #[test]
    fn test_unrecognized_and_foreign_children_ignored() {
        let table = parse_pr(
            r#"<m:grow m:val="1"/><w:chr xmlns:w="urn:other" w:val="x"/><m:type m:val="lin"/>"#,
        );
        assert_eq!(table.get(PropKey::Chr), None);
        assert_eq!(table.value(PropKey::Type), Some("lin"));
        assert_eq!(table.as_str(), "");
    }
}
