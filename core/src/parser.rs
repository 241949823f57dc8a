//! Splits registry text into tab separated rules.

/// One non-comment registry line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// 1-based line number in the registry text.
    pub line: usize,
    pub fields: Vec<String>,
}

impl Rule {
    pub fn new(line: usize, fields: Vec<String>) -> Self {
        Self { line, fields }
    }

    pub fn prefix(&self) -> &str {
        self.fields.first().map(String::as_str).unwrap_or_default()
    }

    /// The long name when present, otherwise the short name.
    ///
    /// `None` for a rule that has no name column at all.
    pub fn vendor_name(&self) -> Option<&str> {
        self.fields
            .get(2)
            .or_else(|| self.fields.get(1))
            .map(String::as_str)
    }
}

/// Characters that end a line, matching the registry's original tooling.
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Splits on every line break, treating `\r\n` as one.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(LINE_BREAKS) {
            Some(idx) => {
                let line = &rest[..idx];
                let tail = &rest[idx..];
                let skip = if tail.starts_with("\r\n") {
                    2
                } else {
                    tail.chars().next().map_or(1, char::len_utf8)
                };
                rest = &tail[skip..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}

/// Parses registry text into rules, keeping their original order.
///
/// Empty lines and `#` comments are dropped, ignoring surrounding whitespace.
/// Kept lines are split as they are, so a leading space stays part of the
/// prefix and a trailing tab yields an empty last field.
pub fn parse(text: &str) -> Vec<Rule> {
    split_lines(text)
        .enumerate()
        .filter_map(|(idx, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }
            let fields = line.split('\t').map(str::to_string).collect();
            Some(Rule::new(idx + 1, fields))
        })
        .collect()
}
