//! Best-effort recovery of a JSON object from model output.
//!
//! Models wrap JSON in code fences, add commentary after it, or stop mid-object
//! when they run out of tokens. `repair_json_object` handles all three and
//! degrades to an empty map instead of failing.

use std::borrow::Cow;

use serde_json::{Map, Value};

const FENCE: &str = "```";

/// Extracts the first JSON object from `text`.
///
/// Tries each fenced block that holds an object in order, then the raw text
/// from its first `{`. Returns an empty map when nothing parses.
pub fn repair_json_object(text: &str) -> Map<String, Value> {
    fenced_objects(text)
        .chain(std::iter::once(text))
        .map(parse_from_first_brace)
        .find(|map| !map.is_empty())
        .unwrap_or_default()
}

fn parse_from_first_brace(source: &str) -> Map<String, Value> {
    let Some(start) = source.find('{') else {
        return Map::new();
    };

    match serde_json::from_str::<Value>(&balance(&source[start..])) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

fn fenced_objects(text: &str) -> impl Iterator<Item = &str> {
    text.contains(FENCE)
        .then(|| text.split(FENCE))
        .into_iter()
        .flatten()
        .map(|part| {
            let part = part.trim();
            part.strip_prefix("json").map(str::trim_start).unwrap_or(part)
        })
        .filter(|part| part.starts_with('{'))
}

/// Cuts `text` (which starts with `{`) where its outermost object closes, or
/// closes whatever is still open if the text ends first.
fn balance(text: &str) -> Cow<'_, str> {
    let mut closers: Vec<char> = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' => closers.push('}'),
            '[' => closers.push(']'),
            '}' | ']' => {
                closers.pop();
                if closers.is_empty() {
                    return Cow::Borrowed(&text[..=i]);
                }
            }
            _ => {}
        }
    }

    let mut repaired = text.to_string();
    if in_string {
        if escaped {
            repaired.pop();
        }
        repaired.push('"');
    } else {
        let kept = repaired.trim_end().trim_end_matches(',').len();
        repaired.truncate(kept);
    }
    repaired.extend(closers.iter().rev());
    Cow::Owned(repaired)
}
