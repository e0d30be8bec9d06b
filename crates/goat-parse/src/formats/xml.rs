use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde_json::Map;

use crate::{ParseError, Parser, Value};

/// Parses XML documents with the `quick-xml` event reader.
///
/// The document becomes `{root_name: element}`. An element with no
/// attributes and no child elements is its text. Any other element is a
/// mapping holding attributes under `@name`, children under their tag name
/// (repeated tags collect into a sequence) and text under `#text`.
#[derive(Debug, Default, Clone, Copy)]
pub struct XmlParser;

impl Parser for XmlParser {
    fn parse(&self, raw: &str) -> Result<Value, ParseError> {
        let mut reader = Reader::from_str(raw);
        reader.config_mut().trim_text(true);

        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<(String, Value)> = None;

        loop {
            match reader.read_event().map_err(malformed)? {
                Event::Start(start) => {
                    check_single_root(&root, &stack)?;
                    stack.push(Element::open(&start)?);
                }
                Event::Empty(start) => {
                    check_single_root(&root, &stack)?;
                    let element = Element::open(&start)?;
                    close(element, &mut stack, &mut root);
                }
                Event::End(_) => {
                    // quick-xml already rejects mismatched end tags
                    if let Some(element) = stack.pop() {
                        close(element, &mut stack, &mut root);
                    }
                }
                Event::Text(text) => {
                    let text = text.unescape().map_err(malformed)?;
                    push_text(&mut stack, &text)?;
                }
                Event::CData(cdata) => {
                    let bytes = cdata.into_inner();
                    push_text(&mut stack, &String::from_utf8_lossy(&bytes))?;
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(malformed(format!("unclosed element <{}>", open.name)));
        }
        let (name, value) = root.ok_or_else(|| malformed("document has no root element"))?;
        let mut document = Map::new();
        document.insert(name, value);
        Ok(Value::Object(document))
    }
}

fn malformed(err: impl ToString) -> ParseError {
    ParseError::malformed("xml", err)
}

fn check_single_root(root: &Option<(String, Value)>, stack: &[Element]) -> Result<(), ParseError> {
    match root {
        Some((name, _)) if stack.is_empty() => Err(malformed(format!(
            "multiple root elements, <{}> is already the root",
            name
        ))),
        _ => Ok(()),
    }
}

fn push_text(stack: &mut [Element], text: &str) -> Result<(), ParseError> {
    match stack.last_mut() {
        Some(element) => element.text.push_str(text),
        None if !text.trim().is_empty() => {
            return Err(malformed("text outside the root element"));
        }
        None => {}
    }
    Ok(())
}

fn close(element: Element, stack: &mut [Element], root: &mut Option<(String, Value)>) {
    let name = element.name.clone();
    let value = element.into_value();
    match stack.last_mut() {
        Some(parent) => parent.children.push((name, value)),
        None => *root = Some((name, value)),
    }
}

struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<(String, Value)>,
    text: String,
}

impl Element {
    fn open(start: &BytesStart<'_>) -> Result<Self, ParseError> {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(malformed)?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value().map_err(malformed)?.into_owned();
            attributes.push((key, value));
        }
        Ok(Self {
            name,
            attributes,
            children: Vec::new(),
            text: String::new(),
        })
    }

    fn into_value(self) -> Value {
        if self.attributes.is_empty() && self.children.is_empty() {
            return Value::String(self.text);
        }

        let mut map = Map::new();
        for (key, value) in self.attributes {
            map.insert(format!("@{}", key), Value::String(value));
        }
        for (name, value) in self.children {
            match map.get_mut(&name) {
                Some(Value::Array(items)) => items.push(value),
                Some(existing) => {
                    let first = existing.take();
                    *existing = Value::Array(vec![first, value]);
                }
                None => {
                    map.insert(name, value);
                }
            }
        }
        if !self.text.is_empty() {
            map.insert("#text".to_string(), Value::String(self.text));
        }
        Value::Object(map)
    }
}
