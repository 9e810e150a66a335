// XML text to element tree
//
// Uses quick-xml's namespace-aware reader so every element carries its
// resolved namespace URI rather than a document-specific prefix.

use super::XmlElement;
use crate::error::{Error, Result};
use quick_xml::NsReader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;

/// Parse an XML document or fragment into an owned element tree
///
/// # Example
/// ```
/// use omml_latex::xml::parse;
/// use omml_latex::SourceNode;
///
/// let root = parse(r#"<m:oMath xmlns:m="http://schemas.openxmlformats.org/officeDocument/2006/math"/>"#)?;
/// assert_eq!(root.local_name(), "oMath");
/// # Ok::<(), omml_latex::Error>(())
/// ```
pub fn parse(xml: &str) -> Result<XmlElement> {
    if xml.trim().is_empty() {
        return Err(Error::Xml("Empty XML input".to_string()));
    }

    let mut reader = NsReader::from_str(xml);
    let mut stack: Vec<XmlElement> = Vec::with_capacity(32);
    let mut root = None;

    loop {
        let position = reader.buffer_position();
        let (ns, event) = reader.read_resolved_event().map_err(|e| {
            Error::Xml(format!("XML parsing error near position {}: {}", position, e))
        })?;
        let namespace = match ns {
            ResolveResult::Bound(ns) => Some(
                std::str::from_utf8(ns.as_ref())
                    .map_err(|e| Error::Xml(e.to_string()))?
                    .to_owned(),
            ),
            _ => None,
        };

        match event {
            Event::Start(ref e) => {
                stack.push(start_element(&reader, e, namespace)?);
            },
            Event::Empty(ref e) => {
                let elem = start_element(&reader, e, namespace)?;
                attach(&mut stack, &mut root, elem)?;
            },
            Event::End(_) => {
                let elem = stack
                    .pop()
                    .ok_or_else(|| Error::Xml("Unexpected closing tag".to_string()))?;
                attach(&mut stack, &mut root, elem)?;
            },
            Event::Text(ref e) => {
                if let Some(current) = stack.last_mut() {
                    let text = e.decode().map_err(|e| Error::Xml(e.to_string()))?;
                    current.push_text(&text);
                }
            },
            Event::CData(ref e) => {
                if let Some(current) = stack.last_mut() {
                    let text = e.decode().map_err(|e| Error::Xml(e.to_string()))?;
                    current.push_text(&text);
                }
            },
            Event::GeneralRef(ref e) => {
                if let Some(current) = stack.last_mut() {
                    if let Some(ch) = e.resolve_char_ref().map_err(|e| Error::Xml(e.to_string()))? {
                        current.push_text(ch.encode_utf8(&mut [0; 4]));
                    } else {
                        let name = e.decode().map_err(|e| Error::Xml(e.to_string()))?;
                        let resolved = resolve_predefined_entity(&name).ok_or_else(|| {
                            Error::Xml(format!("Unknown entity reference '&{};'", name))
                        })?;
                        current.push_text(resolved);
                    }
                }
            },
            Event::Eof => break,
            _ => {}, // Declarations, comments and processing instructions carry no content
        }
    }

    if !stack.is_empty() {
        return Err(Error::Xml(format!(
            "Unclosed elements detected, final depth: {}",
            stack.len()
        )));
    }

    root.ok_or_else(|| Error::Xml("No root element found".to_string()))
}

fn start_element(
    reader: &NsReader<&[u8]>,
    e: &BytesStart,
    namespace: Option<String>,
) -> Result<XmlElement> {
    let name = std::str::from_utf8(e.local_name().as_ref())
        .map_err(|e| Error::Xml(e.to_string()))?
        .to_owned();
    let mut elem = XmlElement::new(namespace.as_deref(), name);

    for attr in e.attributes() {
        let attr = attr.map_err(|e| Error::Xml(e.to_string()))?;
        let key = std::str::from_utf8(attr.key.local_name().as_ref())
            .map_err(|e| Error::Xml(e.to_string()))?
            .to_owned();
        let value = attr
            .decode_and_unescape_value(reader.decoder())
            .map_err(|e| Error::Xml(e.to_string()))?;
        elem.push_attribute(key, value.into_owned());
    }

    Ok(elem)
}

fn attach(stack: &mut [XmlElement], root: &mut Option<XmlElement>, elem: XmlElement) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.push_child(elem),
        None if root.is_none() => *root = Some(elem),
        None => return Err(Error::Xml("Multiple root elements".to_string())),
    }
    Ok(())
}
