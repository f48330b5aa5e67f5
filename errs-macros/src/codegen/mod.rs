mod emit;
mod msgs;
mod parse;

use proc_macro::TokenStream;
use syn::{parse_macro_input, Item};

use emit::error_type_for_struct;
use msgs::{ERR_GENERICS, ERR_TARGET};
use parse::TypeArgs;

pub fn entrypoint(args: TokenStream, input: TokenStream) -> TokenStream {
    let mut type_args = TypeArgs::default();
    let parser = syn::meta::parser(|meta| type_args.parse(meta));
    parse_macro_input!(args with parser);
    let item_any = parse_macro_input!(input as Item);
    match item_any {
        Item::Struct(item) if !item.generics.params.is_empty() => {
            syn::Error::new_spanned(&item.generics, ERR_GENERICS)
                .to_compile_error()
                .into()
        }
        Item::Struct(item) => error_type_for_struct(&item, &type_args).into(),
        other => syn::Error::new_spanned(other, ERR_TARGET)
            .to_compile_error()
            .into(),
    }
}
