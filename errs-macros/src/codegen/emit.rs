use quote::quote;
use syn::{Fields, ItemStruct};

use super::parse::TypeArgs;

pub fn error_type_for_struct(item: &ItemStruct, args: &TypeArgs) -> proc_macro2::TokenStream {
    let ident = &item.ident;
    let name = match &args.name {
        Some(lit) => lit.value(),
        None => ident.to_string(),
    };
    // 单元结构体直接构造，其余要求 Default
    let ctor = match &item.fields {
        Fields::Unit => quote! { #ident },
        _ => quote! { <#ident as Default>::default() },
    };
    let init_fn = args.init.as_ref().map(|path| {
        quote! { fn init(&self, fault: &mut errs::Fault) { #path(fault) } }
    });
    quote! {
        #item
        impl errs::ErrorConstructor for #ident {
            fn type_name(&self) -> &str { #name }
            #init_fn
        }
        #[doc(hidden)]
        const _: () = {
            fn __create_error_type() -> errs::Constructor { ::std::sync::Arc::new(#ctor) }
            errs::__private::inventory::submit! { errs::constructor::__RegisteredType { create: __create_error_type } };
        };
    }
}
