//! Generic element tree consumed by the decoder.
//!
//! The decoder never looks at XML text directly; it works on an ordered tree
//! of named elements, each with its attributes and an ordered list of child
//! nodes. `Element::read` and `Element::write` convert between that tree and
//! XML text through `xml-rs`.

use std::io::{Read, Write};
use xml::reader::XmlEvent;

use crate::error::FatalError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new<S: Into<String>>(name: S) -> Element {
        Element {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute<N: Into<String>, V: Into<String>>(mut self, name: N, value: V) -> Element {
        self.set_attribute(name, value);
        self
    }

    pub fn with_child(mut self, child: Element) -> Element {
        self.children.push(Node::Element(child));
        self
    }

    pub fn with_text<S: Into<String>>(mut self, text: S) -> Element {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Sets an attribute, replacing the value of an existing one of the same name.
    pub fn set_attribute<N: Into<String>, V: Into<String>>(&mut self, name: N, value: V) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(a) => a.value = value,
            None => self.attributes.push(Attribute { name, value }),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Child elements in document order, skipping text.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|child| match child {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    pub fn first_element(&self, name: &str) -> Option<&Element> {
        self.elements().find(|e| e.name == name)
    }

    /// Concatenated text of the direct text children.
    pub fn text(&self) -> String {
        let mut result = String::new();
        for child in self.children.iter() {
            if let Node::Text(text) = child {
                result.push_str(text);
            }
        }
        result
    }

    //----------------------------------------------------------------------------------------------
    /// Reads the root element of an XML document.
    pub fn read<R: Read>(stream: R) -> Result<Element, FatalError> {
        let parser = xml::reader::ParserConfig::new()
            .cdata_to_characters(true)
            .ignore_comments(true)
            .create_reader(stream);

        // The bottom of the stack collects the document's root element.
        let mut stack = vec![Element::default()];
        for event in parser {
            match event? {
                XmlEvent::StartElement {
                    name, attributes, ..
                } => stack.push(Element {
                    name: name.local_name,
                    attributes: attributes
                        .into_iter()
                        .map(|a| Attribute {
                            name: a.name.local_name,
                            value: a.value,
                        })
                        .collect(),
                    children: Vec::new(),
                }),
                XmlEvent::EndElement { .. } => {
                    if stack.len() > 1 {
                        if let Some(element) = stack.pop() {
                            if let Some(parent) = stack.last_mut() {
                                parent.children.push(Node::Element(element));
                            }
                        }
                    }
                }
                XmlEvent::Characters(text) | XmlEvent::Whitespace(text) => {
                    if let Some(current) = stack.last_mut() {
                        current.children.push(Node::Text(text));
                    }
                }
                _ => {}
            }
        }

        stack
            .into_iter()
            .next()
            .and_then(|document| {
                document.children.into_iter().find_map(|child| match child {
                    Node::Element(e) => Some(e),
                    Node::Text(_) => None,
                })
            })
            .ok_or(FatalError::MissingRegistryElement)
    }

    /// Writes this element as a complete, indented XML document.
    pub fn write<W: Write>(&self, sink: W) -> Result<(), FatalError> {
        let mut writer = xml::writer::EmitterConfig::new()
            .perform_indent(true)
            .create_writer(sink);
        self.write_events(&mut writer)?;
        Ok(())
    }

    fn write_events<W: Write>(
        &self,
        writer: &mut xml::writer::EventWriter<W>,
    ) -> Result<(), xml::writer::Error> {
        let mut start = xml::writer::XmlEvent::start_element(self.name.as_str());
        for a in self.attributes.iter() {
            start = start.attr(a.name.as_str(), a.value.as_str());
        }
        writer.write(start)?;
        for child in self.children.iter() {
            match child {
                Node::Element(e) => e.write_events(writer)?,
                Node::Text(text) => writer.write(xml::writer::XmlEvent::characters(text))?,
            }
        }
        writer.write(xml::writer::XmlEvent::end_element())
    }
}
