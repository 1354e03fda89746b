//! Parsing raw text into an [`Element`] tree using quick-xml.
//!
//! The tree is built once per deserialize call and is read-only afterwards.
//! Namespace prefixes are stripped - matching works on local names, the way
//! loosely-schema'd API payloads are actually addressed.

use quick_xml::Reader;
use quick_xml::escape::resolve_xml_entity;
use quick_xml::events::{BytesStart, Event};

use crate::error::DeserializeError;
use crate::node::Element;

/// Parse a complete document into its root element.
///
/// Fails fast on malformed markup; no mapping happens before parsing
/// succeeds.
pub fn parse(input: &str) -> Result<Element, DeserializeError> {
    let mut reader = Reader::from_str(input);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| DeserializeError::parse(e.to_string()))?;
        match event {
            Event::Start(start) => {
                stack.push(element_from_start(&start)?);
            }
            Event::Empty(start) => {
                let element = element_from_start(&start)?;
                close_element(element, &mut stack, &mut root)?;
            }
            Event::End(_) => {
                // Tag balancing is quick-xml's job; an unmatched End surfaces
                // as a parse error before reaching this arm.
                if let Some(element) = stack.pop() {
                    close_element(element, &mut stack, &mut root)?;
                }
            }
            Event::Text(text) => {
                let decoded = text
                    .decode()
                    .map_err(|e| DeserializeError::parse(e.to_string()))?;
                append_text(&mut stack, decoded.trim());
            }
            Event::CData(data) => {
                let text = core::str::from_utf8(data.as_ref())
                    .map_err(|e| DeserializeError::parse(e.to_string()))?;
                append_text(&mut stack, text);
            }
            Event::GeneralRef(reference) => {
                let raw = reference
                    .decode()
                    .map_err(|e| DeserializeError::parse(e.to_string()))?;
                let resolved = resolve_entity(&raw)?;
                append_text(&mut stack, &resolved);
            }
            Event::Decl(_) | Event::Comment(_) | Event::PI(_) | Event::DocType(_) => {}
            Event::Eof => break,
        }
    }

    if !stack.is_empty() {
        return Err(DeserializeError::unexpected_eof());
    }
    root.ok_or_else(DeserializeError::unexpected_eof)
}

fn close_element(
    element: Element,
    stack: &mut Vec<Element>,
    root: &mut Option<Element>,
) -> Result<(), DeserializeError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
        Ok(())
    } else if root.is_none() {
        *root = Some(element);
        Ok(())
    } else {
        Err(DeserializeError::parse("multiple root elements"))
    }
}

fn append_text(stack: &mut [Element], text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(current) = stack.last_mut() {
        current.text.push_str(text);
    }
}

fn element_from_start(start: &BytesStart<'_>) -> Result<Element, DeserializeError> {
    let local = start.local_name();
    let name = core::str::from_utf8(local.as_ref())
        .map_err(|e| DeserializeError::parse(e.to_string()))?;
    let mut element = Element::new(name);

    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| DeserializeError::parse(e.to_string()))?;
        let key = attribute.key;

        // Skip xmlns declarations
        if key.as_ref() == b"xmlns" {
            continue;
        }
        if let Some(prefix) = key.prefix()
            && prefix.as_ref() == b"xmlns"
        {
            continue;
        }

        let local_name = key.local_name();
        let name = core::str::from_utf8(local_name.as_ref())
            .map_err(|e| DeserializeError::parse(e.to_string()))?;
        let value = attribute
            .unescape_value()
            .map_err(|e| DeserializeError::parse(e.to_string()))?;
        element
            .attributes
            .push((name.to_string(), value.into_owned()));
    }

    Ok(element)
}

/// Resolve a general entity reference to its replacement text.
fn resolve_entity(raw: &str) -> Result<String, DeserializeError> {
    if let Some(resolved) = resolve_xml_entity(raw) {
        return Ok(resolved.to_string());
    }

    if let Some(rest) = raw.strip_prefix('#') {
        let code = if let Some(hex) = rest.strip_prefix('x').or_else(|| rest.strip_prefix('X')) {
            u32::from_str_radix(hex, 16)
                .map_err(|_| DeserializeError::parse(format!("invalid character reference: #{rest}")))?
        } else {
            rest.parse::<u32>()
                .map_err(|_| DeserializeError::parse(format!("invalid character reference: #{rest}")))?
        };
        let ch = char::from_u32(code)
            .ok_or_else(|| DeserializeError::parse(format!("invalid character reference: #{rest}")))?;
        return Ok(ch.to_string());
    }

    Err(DeserializeError::parse(format!("unknown entity: &{raw};")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_tree_with_attributes_and_text() {
        let root = parse(
            r#"<Person Age="28"><Name>John Sheehan</Name><BestFriend><Name>The Fonz</Name></BestFriend></Person>"#,
        )
        .unwrap();

        assert_eq!(root.name, "Person");
        assert_eq!(root.attribute("Age"), Some("28"));
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].text, "John Sheehan");
        assert_eq!(root.children[1].children[0].text, "The Fonz");
    }

    #[test]
    fn self_closing_elements_are_vacant() {
        let root = parse(r#"<EmptyListSample><Images/></EmptyListSample>"#).unwrap();
        assert_eq!(root.children.len(), 1);
        assert!(root.children[0].is_vacant());
    }

    #[test]
    fn entities_resolve_into_text() {
        let root = parse("<v>fish &amp; chips</v>").unwrap();
        assert_eq!(root.text, "fish&chips");
        let root = parse("<v>&#65;</v>").unwrap();
        assert_eq!(root.text, "A");
    }

    #[test]
    fn namespace_prefixes_are_stripped() {
        let root =
            parse(r#"<ns:Person xmlns:ns="http://example.com"><ns:Name>x</ns:Name></ns:Person>"#)
                .unwrap();
        assert_eq!(root.name, "Person");
        assert_eq!(root.children[0].name, "Name");
        assert!(root.attributes.is_empty());
    }

    #[test]
    fn malformed_markup_is_rejected() {
        assert!(parse("<a><b></a>").is_err());
        assert!(parse("<a>").is_err());
        assert!(parse("").is_err());
    }
}
