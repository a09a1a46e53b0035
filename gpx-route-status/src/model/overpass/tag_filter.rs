use std::fmt::Display;

/// a `["key"="value"]` clause matching ways whose tag equals a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagFilter {
    pub key: String,
    pub value: String,
}

impl TagFilter {
    pub fn equals(key: &str, value: &str) -> TagFilter {
        TagFilter {
            key: String::from(key),
            value: String::from(value),
        }
    }
}

/// escapes a value for use inside a double-quoted Overpass QL string.
fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

impl Display for TagFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[\"{}\"=\"{}\"]", escape(&self.key), escape(&self.value))
    }
}
