use proc_macro2::TokenStream;
use quote::{quote, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    token::Comma,
    Attribute, Ident, Result,
};

/// Idents of `CommandFlags` constants, e.g. `#[flags(EPHEMERAL)]`.
pub struct Flags {
    list: Punctuated<Ident, Comma>,
}

pub fn parse_flags(attrs: &[Attribute]) -> Result<Flags> {
    match attrs.iter().find(|attr| attr.path().is_ident("flags")) {
        Some(attr) => attr.parse_args(),
        None => Ok(Flags {
            list: Punctuated::new(),
        }),
    }
}

impl Parse for Flags {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        Punctuated::parse_separated_nonempty(input).map(|list| Self { list })
    }
}

impl ToTokens for Flags {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let path = quote!(crate::core::commands::CommandFlags);

        if self.list.is_empty() {
            tokens.extend(quote!(#path::empty()));

            return;
        }

        let bits = self.list.iter().map(|flag| quote!(#path::#flag.bits()));

        tokens.extend(quote!(#path::from_bits_truncate(0 #( | #bits )*)));
    }
}
