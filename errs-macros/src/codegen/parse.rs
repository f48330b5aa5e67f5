use super::msgs::{ERR_EMPTY_NAME, ERR_UNKNOWN_ARG};
use syn::{meta::ParseNestedMeta, LitStr, Path};

/// `#[error_type(name = "...", init = path)]`
#[derive(Default)]
pub struct TypeArgs {
    pub name: Option<LitStr>,
    pub init: Option<Path>,
}

impl TypeArgs {
    pub fn parse(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("name") {
            let lit: LitStr = meta.value()?.parse()?;
            if lit.value().is_empty() {
                return Err(syn::Error::new_spanned(&lit, ERR_EMPTY_NAME));
            }
            self.name = Some(lit);
            Ok(())
        } else if meta.path.is_ident("init") {
            self.init = Some(meta.value()?.parse()?);
            Ok(())
        } else {
            Err(meta.error(ERR_UNKNOWN_ARG))
        }
    }
}
