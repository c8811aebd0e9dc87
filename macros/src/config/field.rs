//! Field information structures and parsing.

use crate::config::types::KeyCase;

/// Parsed field information.
pub struct FieldInfo {
    pub name: syn::Ident,
    /// Key as written in the source file.
    pub key: String,
}

impl FieldInfo {
    /// Parse field info from a syn::Field.
    pub fn from_field(field: &syn::Field, case: KeyCase) -> Option<Self> {
        let ident = field.ident.as_ref()?;

        // Raw identifiers (`r#type`) keep their bare name as key
        let ident_str = ident.to_string();
        let bare = ident_str.strip_prefix("r#").unwrap_or(&ident_str);

        Some(Self {
            name: ident.clone(),
            key: case.apply(bare),
        })
    }
}
