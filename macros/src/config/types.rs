//! Key casing helpers for Config derive macro.

/// Key casing rule, mirroring serde's `rename_all` names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCase {
    Snake,
    Camel,
}

impl KeyCase {
    pub fn parse(rule: &str) -> Option<Self> {
        match rule {
            "snake_case" => Some(Self::Snake),
            "camelCase" => Some(Self::Camel),
            _ => None,
        }
    }

    /// Convert a snake_case field identifier to the key casing.
    pub fn apply(self, ident: &str) -> String {
        match self {
            Self::Snake => ident.to_string(),
            Self::Camel => to_camel_case(ident),
        }
    }
}

/// Convert snake_case to camelCase
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut upper_next = false;
    for c in s.chars() {
        if c == '_' {
            upper_next = !result.is_empty();
        } else if upper_next {
            result.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            result.push(c);
        }
    }
    result
}
