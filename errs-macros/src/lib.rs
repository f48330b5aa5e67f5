//! Procedural macros for `errs`.
//!
//! `#[errs::error_type]` turns a unit (or `Default`) struct into an error
//! type: it implements `errs::ErrorConstructor` and submits the type so that
//! `errs::Registry::discover()` picks it up.
//!
//! ```ignore
//! #[errs::error_type]
//! struct NotFound;
//!
//! #[errs::error_type(name = "Overflow", init = mark_retryable)]
//! struct OverflowError;
//!
//! fn mark_retryable(f: &mut errs::Fault) { f.set("retryable", true); }
//! ```

use proc_macro::TokenStream;

mod codegen;

#[proc_macro_attribute]
pub fn error_type(args: TokenStream, input: TokenStream) -> TokenStream {
    codegen::entrypoint(args, input)
}
