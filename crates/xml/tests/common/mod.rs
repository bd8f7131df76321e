//! Minimal scanner over the serializer's own output subset.
//!
//! Exists to close the build → render → rescan loop in integration tests; it
//! is not a general XML tokenizer. Quotes inside attribute values are not
//! handled (the serializer does not escape them), so test inputs stick to
//! benign values.

use memchr::memchr;
use xml::{XmlError, XmlEvent};

pub fn scan(input: &str) -> Vec<XmlEvent> {
    let bytes = input.as_bytes();
    let mut events = vec![XmlEvent::StartDocument];
    let mut i = 0;
    while i < bytes.len() {
        let Some(rel) = memchr(b'<', &bytes[i..]) else {
            push_text(&mut events, &input[i..]);
            break;
        };
        let open = i + rel;
        push_text(&mut events, &input[i..open]);
        let Some(close_rel) = memchr(b'>', &bytes[open..]) else {
            events.push(XmlEvent::Error(XmlError::tokenization(
                "unterminated tag",
                open,
            )));
            break;
        };
        let close = open + close_rel;
        scan_tag(&mut events, &input[open + 1..close]);
        i = close + 1;
    }
    events.push(XmlEvent::EndDocument);
    events
}

fn push_text(events: &mut Vec<XmlEvent>, text: &str) {
    if !text.is_empty() {
        events.push(XmlEvent::Characters(text.to_string()));
    }
}

fn scan_tag(events: &mut Vec<XmlEvent>, tag: &str) {
    if let Some(name) = tag.strip_prefix('/') {
        events.push(XmlEvent::EndElement {
            name: name.to_string(),
        });
        return;
    }
    let (tag, self_closing) = match tag.strip_suffix(" /") {
        Some(stripped) => (stripped, true),
        None => (tag, false),
    };
    let (name, rest) = match tag.split_once(' ') {
        Some((name, rest)) => (name, rest),
        None => (tag, ""),
    };
    events.push(XmlEvent::StartElement {
        name: name.to_string(),
        attributes: scan_attributes(rest),
    });
    if self_closing {
        events.push(XmlEvent::EndElement {
            name: name.to_string(),
        });
    }
}

fn scan_attributes(mut rest: &str) -> Vec<(String, String)> {
    let mut out = Vec::new();
    loop {
        rest = rest.trim_start();
        let Some((name, after_eq)) = rest.split_once("=\"") else {
            break;
        };
        let Some((value, tail)) = after_eq.split_once('"') else {
            break;
        };
        out.push((name.to_string(), value.to_string()));
        rest = tail;
    }
    out
}
