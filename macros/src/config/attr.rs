//! Attribute parsing helpers for Config derive macro.

use syn::Attribute;

/// Get key casing rule from #[config(rename_all = "camelCase")].
pub fn get_rename_all(attrs: &[Attribute]) -> Option<String> {
    get_string_attr(attrs, "rename_all")
}

/// Get string value from #[config(key = "value")].
fn get_string_attr(attrs: &[Attribute], key: &str) -> Option<String> {
    for attr in attrs {
        if !attr.path().is_ident("config") {
            continue;
        }
        let mut value = None;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) {
                let lit: syn::LitStr = meta.value()?.parse()?;
                value = Some(lit.value());
            } else if meta.input.peek(syn::Token![=]) {
                let _ = meta.value()?.parse::<syn::Lit>();
            }
            Ok(())
        });
        if value.is_some() {
            return value;
        }
    }
    None
}
