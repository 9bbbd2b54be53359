//! Just enough XML for the Khronos registry files: elements, attributes,
//! text, comments, CDATA, processing instructions and a doctype line.
//! Namespaces and DTD internals are not interpreted.

use winnow::ascii::{digit1, hex_digit1, multispace0, multispace1};
use winnow::combinator::{alt, cut_err, delimited, eof, opt, preceded, repeat};
use winnow::error::{StrContext, StrContextValue};
use winnow::token::{literal, take_till, take_until, take_while};
use winnow::{PResult, Parser};

use crate::{RegistryError, RegistryResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.elements().filter(move |element| element.name == name)
    }

    pub fn child(&self, name: &str) -> Option<&Element> {
        self.elements().find(|element| element.name == name)
    }

    /// All text below this element, in document order.
    pub fn text(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, into: &mut String) {
        for node in &self.children {
            match node {
                Node::Element(element) => element.collect_text(into),
                Node::Text(text) => into.push_str(text),
            }
        }
    }
}

fn entity(input: &mut &str) -> PResult<char> {
    delimited(
        '&',
        alt((
            preceded("#x", hex_digit1.try_map(|hex| u32::from_str_radix(hex, 16)))
                .verify_map(char::from_u32),
            preceded('#', digit1.parse_to::<u32>()).verify_map(char::from_u32),
            "lt".value('<'),
            "gt".value('>'),
            "amp".value('&'),
            "quot".value('"'),
            "apos".value('\''),
        )),
        ';',
    )
    .parse_next(input)
}

/// Replaces entity references. Unknown ones are kept as written.
pub fn decode_entities(mut raw: &str) -> String {
    let mut decoded = String::with_capacity(raw.len());
    while let Some(at) = raw.find('&') {
        decoded.push_str(&raw[..at]);
        raw = &raw[at..];
        let mut rest = raw;
        match entity.parse_next(&mut rest) {
            Ok(c) => {
                decoded.push(c);
                raw = rest;
            }
            Err(_) => {
                decoded.push('&');
                raw = &raw[1..];
            }
        }
    }
    decoded.push_str(raw);
    decoded
}

fn name<'a>(input: &mut &'a str) -> PResult<&'a str> {
    take_while(1.., |c: char| {
        c.is_alphanumeric() || matches!(c, '_' | '-' | ':' | '.')
    })
    .parse_next(input)
}

fn attribute(input: &mut &str) -> PResult<(String, String)> {
    let key = name.parse_next(input)?;
    (multispace0, '=', multispace0).parse_next(input)?;
    let value = cut_err(alt((
        delimited('"', take_till(0.., '"'), '"'),
        delimited('\'', take_till(0.., '\''), '\''),
    )))
    .context(StrContext::Label("attribute value"))
    .parse_next(input)?;
    Ok((key.to_owned(), decode_entities(value)))
}

fn comment(input: &mut &str) -> PResult<()> {
    ("<!--", take_until(0.., "-->"), "-->")
        .void()
        .parse_next(input)
}

fn processing_instruction(input: &mut &str) -> PResult<()> {
    ("<?", take_until(0.., "?>"), "?>").void().parse_next(input)
}

fn doctype(input: &mut &str) -> PResult<()> {
    ("<!DOCTYPE", take_till(0.., '>'), '>').void().parse_next(input)
}

fn cdata(input: &mut &str) -> PResult<String> {
    delimited("<![CDATA[", take_until(0.., "]]>"), "]]>")
        .map(str::to_owned)
        .parse_next(input)
}

fn text(input: &mut &str) -> PResult<String> {
    take_while(1.., |c: char| c != '<')
        .map(decode_entities)
        .parse_next(input)
}

fn misc(input: &mut &str) -> PResult<()> {
    alt((comment, processing_instruction, doctype, multispace1.void())).parse_next(input)
}

fn node(input: &mut &str) -> PResult<Option<Node>> {
    alt((
        comment.value(None),
        processing_instruction.value(None),
        cdata.map(|text| Some(Node::Text(text))),
        element.map(|element| Some(Node::Element(element))),
        text.map(|text| Some(Node::Text(text))),
    ))
    .parse_next(input)
}

fn element(input: &mut &str) -> PResult<Element> {
    let (tag, attributes): (&str, Vec<_>) =
        preceded('<', (name, repeat(0.., preceded(multispace1, attribute)))).parse_next(input)?;
    multispace0.parse_next(input)?;

    let mut element = Element {
        name: tag.to_owned(),
        attributes,
        children: Vec::new(),
    };
    if opt("/>").parse_next(input)?.is_some() {
        return Ok(element);
    }

    cut_err('>')
        .context(StrContext::Expected(StrContextValue::CharLiteral('>')))
        .parse_next(input)?;
    let children: Vec<Option<Node>> = repeat(0.., node).parse_next(input)?;
    cut_err(("</", literal(tag), multispace0, '>'))
        .context(StrContext::Label("closing tag"))
        .parse_next(input)?;

    element.children = children.into_iter().flatten().collect();
    Ok(element)
}

fn document(input: &mut &str) -> PResult<Element> {
    let () = repeat(0.., misc).parse_next(input)?;
    let root = element.parse_next(input)?;
    let () = repeat(0.., misc).parse_next(input)?;
    eof.parse_next(input)?;
    Ok(root)
}

/// Parses a whole document and returns its root element.
pub fn parse_document(source: &str) -> RegistryResult<Element> {
    document.parse(source).map_err(|err| RegistryError::Xml {
        offset: err.offset(),
        message: err.inner().to_string(),
    })
}
