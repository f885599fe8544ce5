#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the kata crates.
//! Currently a single attribute, [`macro@kata_error`], which turns a plain enum into a
//! `thiserror` error with context support.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! kata-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining calculator error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `...Ext` trait adding `.context()` to any
///   `Result` whose error converts into this enum.
/// * **Source Conversions**: Implements `From<T>` for variants carrying a `source` field
///   (or a field marked `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * **Internal Fallback**: Implements `From<&'static str>` and `From<String>` when an
///   `Internal { message, context }` variant exists.
/// * **`format_context` helper**: A private function usable from `#[error(...)]` strings
///   that renders `" (context)"` or nothing.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. Every variant uses named fields; tuple and unit variants are rejected.
/// 3. A `context` field, when present, must be `Option<Cow<'static, str>>`.
/// 4. Variants with a source must also carry a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[kata_derive::kata_error]
/// pub enum PricingError {
///     #[error("Invalid value{}: {message}", format_context(.context))]
///     InvalidValue { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
///
///     #[error("Internal pricing error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn check(value: f64) -> Result<f64, PricingError> {
///     if value.is_nan() {
///         return Err("value is NaN".into());
///     }
///     Ok(value)
/// }
/// ```
#[proc_macro_attribute]
pub fn kata_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
