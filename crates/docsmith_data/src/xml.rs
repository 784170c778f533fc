//! XML ingestion.
//!
//! Walks the quick-xml event stream into the canonical value tree:
//! elements become mappings, repeated sibling elements collapse into
//! arrays, attributes sit alongside child elements under their own names,
//! and text content becomes the value of otherwise-empty elements.
//!
//! The parser convention inherited from the original tool wraps every
//! document in one synthetic root key; when the parsed tree has exactly
//! one top-level key, that key is stripped. A document with multiple
//! top-level keys is returned unchanged.

use std::fs;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use serde_json::{Map, Value};

use crate::error::DataResult;
use crate::normalize::parse_error;

/// Parse an XML file into the canonical value tree.
pub fn parse_xml(path: &Path) -> DataResult<Value> {
    let content = fs::read_to_string(path).map_err(|e| parse_error(path, e))?;
    let tree = parse_document(&content).map_err(|e| parse_error(path, e))?;

    if tree.len() == 1 {
        if let Some(inner) = tree.values().next() {
            return Ok(inner.clone());
        }
    }
    Ok(Value::Object(tree))
}

/// One open element while walking the event stream.
struct Element {
    name: String,
    children: Map<String, Value>,
    text: String,
}

impl Element {
    fn new(name: String) -> Self {
        Self {
            name,
            children: Map::new(),
            text: String::new(),
        }
    }

    fn into_value(self) -> Value {
        if self.children.is_empty() {
            if self.text.is_empty() {
                Value::Null
            } else {
                Value::String(self.text)
            }
        } else {
            // mixed content: child elements win, stray text is dropped
            Value::Object(self.children)
        }
    }
}

/// Add a child value under `name`, collapsing repeated siblings into an
/// array in document order.
fn insert_child(children: &mut Map<String, Value>, name: String, value: Value) {
    match children.get_mut(&name) {
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            children.insert(name, value);
        }
    }
}

fn parse_document(content: &str) -> Result<Map<String, Value>, String> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    // index 0 is a synthetic document root
    let mut stack = vec![Element::new(String::new())];

    loop {
        match reader.read_event().map_err(|e| e.to_string())? {
            Event::Start(start) => {
                let mut element =
                    Element::new(String::from_utf8_lossy(start.name().as_ref()).into_owned());
                for attr in start.attributes() {
                    let attr = attr.map_err(|e| e.to_string())?;
                    let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
                    let value = attr.unescape_value().map_err(|e| e.to_string())?;
                    element
                        .children
                        .insert(key, Value::String(value.into_owned()));
                }
                stack.push(element);
            }
            Event::Empty(start) => {
                let mut element =
                    Element::new(String::from_utf8_lossy(start.name().as_ref()).into_owned());
                for attr in start.attributes() {
                    let attr = attr.map_err(|e| e.to_string())?;
                    let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
                    let value = attr.unescape_value().map_err(|e| e.to_string())?;
                    element
                        .children
                        .insert(key, Value::String(value.into_owned()));
                }
                let name = element.name.clone();
                let value = element.into_value();
                if let Some(parent) = stack.last_mut() {
                    insert_child(&mut parent.children, name, value);
                }
            }
            Event::Text(text) => {
                let text = text.xml_content().map_err(|e| e.to_string())?;
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&text);
                }
            }
            Event::CData(cdata) => {
                let text = String::from_utf8_lossy(&cdata.into_inner()).into_owned();
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&text);
                }
            }
            Event::End(_) => {
                if stack.len() > 1 {
                    if let Some(element) = stack.pop() {
                        let name = element.name.clone();
                        let value = element.into_value();
                        if let Some(parent) = stack.last_mut() {
                            insert_child(&mut parent.children, name, value);
                        }
                    }
                }
            }
            Event::Eof => break,
            // declarations, comments, processing instructions
            _ => {}
        }
    }

    match stack.pop() {
        Some(root) if stack.is_empty() => Ok(root.children),
        _ => Err("unbalanced element nesting".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_xml(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let temp = tempdir().unwrap();
        let path = temp.path().join("data.xml");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (temp, path)
    }

    #[test]
    fn test_single_root_is_unwrapped() {
        let (_temp, path) =
            write_xml("<root><name>Ada</name><born>1815</born></root>");
        let value = parse_xml(&path).unwrap();

        assert_eq!(value["name"], "Ada");
        assert_eq!(value["born"], "1815");
    }

    #[test]
    fn test_repeated_siblings_collapse_into_array() {
        let (_temp, path) = write_xml(
            "<root><item>a</item><item>b</item><item>c</item></root>",
        );
        let value = parse_xml(&path).unwrap();

        let items = value["item"].as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[2], "c");
    }

    #[test]
    fn test_attributes_become_keys() {
        let (_temp, path) = write_xml(r#"<root><user id="7">Ada</user></root>"#);
        let value = parse_xml(&path).unwrap();

        assert_eq!(value["user"]["id"], "7");
    }

    #[test]
    fn test_empty_element_is_null() {
        let (_temp, path) = write_xml("<root><name>Ada</name><note/></root>");
        let value = parse_xml(&path).unwrap();

        assert_eq!(value["note"], Value::Null);
    }

    #[test]
    fn test_nested_elements() {
        let (_temp, path) = write_xml(
            "<root><person><name>Ada</name><city>London</city></person></root>",
        );
        let value = parse_xml(&path).unwrap();

        assert_eq!(value["person"]["city"], "London");
    }

    #[test]
    fn test_malformed_document_is_parse_error() {
        let (_temp, path) = write_xml("<root><open></root>");
        let err = parse_xml(&path).unwrap_err();

        assert!(err.is_recoverable());
    }
}
