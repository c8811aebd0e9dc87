//! Proc macros for sitemeta.
//!
//! # Config derive macro
//!
//! Generates field path accessors so diagnostics always cite the key
//! exactly as it is written in `site.toml`.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(rename_all = "camelCase")]
//! pub struct SiteConfig {
//!     /// Title used in `<title>`.
//!     pub site_title: String,
//!     pub author_social_links: Vec<SocialLink>,
//! }
//!
//! // Generates:
//! // - SiteConfig::FIELDS.site_title          -> FieldPath("siteTitle")
//! // - SiteConfig::FIELDS.author_social_links -> FieldPath("authorSocialLinks")
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(rename_all = "camelCase")]` - Key casing (`camelCase` or `snake_case`)

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates `FIELDS`.
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
