//! Minimal XML element tree used to assemble SVG documents.

use indexmap::IndexMap;
use std::fmt::Write as _;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    name: String,
    attrs: IndexMap<String, String>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.set_attr(key, value);
        self
    }

    pub fn set_attr(&mut self, key: impl Into<String>, value: impl ToString) {
        self.attrs.insert(key.into(), value.to_string());
    }

    pub fn child(mut self, child: Element) -> Self {
        self.push(child);
        self
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Serializes the tree. With `indent`, every element starts on its own line indented by
    /// that many spaces per level and the output ends with a newline.
    pub fn to_xml(&self, indent: Option<usize>) -> String {
        let mut out = String::new();
        self.write_into(&mut out, indent, 0);
        out
    }

    fn write_into(&self, out: &mut String, indent: Option<usize>, depth: usize) {
        if let Some(width) = indent {
            out.push_str(&" ".repeat(width * depth));
        }
        let _ = write!(out, "<{}", self.name);
        for (key, value) in &self.attrs {
            let _ = write!(out, r#" {key}="{}""#, escape_attr(value));
        }

        if self.children.is_empty() && self.text.is_none() {
            out.push_str("/>");
            if indent.is_some() {
                out.push('\n');
            }
            return;
        }

        out.push('>');
        if let Some(text) = &self.text {
            out.push_str(&escape_text(text));
        }
        if !self.children.is_empty() {
            if indent.is_some() {
                out.push('\n');
            }
            for child in &self.children {
                child.write_into(out, indent, depth + 1);
            }
            if let Some(width) = indent {
                out.push_str(&" ".repeat(width * depth));
            }
        }
        let _ = write!(out, "</{}>", self.name);
        if indent.is_some() {
            out.push('\n');
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_xml(None))
    }
}

pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}
