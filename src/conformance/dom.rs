use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::core::BajaError;

/// Minimal element tree, enough to walk a rendered document.
#[derive(Debug, Clone, Default)]
pub(crate) struct Element {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub text: String,
    pub children: Vec<Element>,
}

impl Element {
    fn from_start(e: &BytesStart<'_>) -> Self {
        let attrs = e
            .attributes()
            .flatten()
            .map(|attr| {
                let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
                let value = attr
                    .unescape_value()
                    .map(|v| v.into_owned())
                    .unwrap_or_default();
                (key, value)
            })
            .collect();
        Self {
            name: String::from_utf8_lossy(e.name().as_ref()).into_owned(),
            attrs,
            ..Self::default()
        }
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Follow a chain of child names.
    pub fn path(&self, names: &[&str]) -> Option<&Element> {
        names.iter().try_fold(self, |el, name| el.child(name))
    }

    pub fn path_text(&self, names: &[&str]) -> Option<&str> {
        self.path(names).map(|el| el.text.as_str())
    }
}

pub(crate) fn parse(xml: &str) -> Result<Element, BajaError> {
    // Leaf text is kept verbatim; indentation only ever lands in container elements.
    let mut reader = Reader::from_str(xml);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => stack.push(Element::from_start(e)),
            Ok(Event::Empty(ref e)) => attach(&mut stack, &mut root, Element::from_start(e))?,
            Ok(Event::End(_)) => {
                let mut el = stack
                    .pop()
                    .ok_or_else(|| BajaError::Xml("unexpected closing tag".into()))?;
                if !el.children.is_empty() {
                    el.text.clear();
                }
                attach(&mut stack, &mut root, el)?;
            }
            Ok(Event::Text(ref e)) => {
                let text = e
                    .unescape()
                    .map_err(|err| BajaError::Xml(format!("bad text content: {err}")))?;
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&text);
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(BajaError::Xml(format!(
                    "parse error at position {}: {e}",
                    reader.error_position()
                )));
            }
        }
    }

    if let Some(open) = stack.last() {
        return Err(BajaError::Xml(format!("unclosed element <{}>", open.name)));
    }
    root.ok_or_else(|| BajaError::Xml("document has no root element".into()))
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    el: Element,
) -> Result<(), BajaError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(el);
    } else if root.is_none() {
        *root = Some(el);
    } else {
        return Err(BajaError::Xml(format!(
            "second root element <{}>",
            el.name
        )));
    }
    Ok(())
}
