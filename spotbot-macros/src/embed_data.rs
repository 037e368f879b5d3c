use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields, Result};

pub fn derive(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput { ident, data, .. } = input;

    let message = "`EmbedData` can only be derived for structs";

    let data = match data {
        Data::Struct(s) => s,
        Data::Enum(e) => return Err(Error::new(e.enum_token.span, message)),
        Data::Union(u) => return Err(Error::new(u.union_token.span, message)),
    };

    let Fields::Named(named_fields) = data.fields else {
        let message = "Deriving `EmbedData` requires named fields";

        return Err(Error::new(ident.span(), message));
    };

    let mut color = TokenStream::new();
    let mut description = TokenStream::new();
    let mut fields = TokenStream::new();
    let mut footer = TokenStream::new();
    let mut timestamp = TokenStream::new();
    let mut title = TokenStream::new();
    let mut thumbnail = TokenStream::new();

    for field in named_fields.named {
        let Some(field_ident) = field.ident else {
            let message = "Deriving `EmbedData` requires named fields";

            return Err(Error::new(ident.span(), message));
        };

        match field_ident.to_string().as_str() {
            "color" => color = quote!(.color(self.color)),
            "description" => description = quote!(.description(self.description)),
            "fields" => fields = quote!(.fields(self.fields)),
            "footer" => footer = quote!(.footer(self.footer)),
            "timestamp" => timestamp = quote!(.timestamp(self.timestamp)),
            "title" => title = quote!(.title(self.title)),
            "thumbnail" => thumbnail = quote!(.thumbnail(self.thumbnail)),
            _ => {
                let message = "Invalid field name for `EmbedData`, must be `color`, \
                    `description`, `fields`, `footer`, `timestamp`, `title`, or `thumbnail`";

                return Err(Error::new(field_ident.span(), message));
            }
        }
    }

    let tokens = quote! {
        impl crate::embeds::EmbedData for #ident {
            fn build(self) -> ::twilight_model::channel::message::Embed {
                ::spotbot_util::EmbedBuilder::new()
                    #color
                    #description
                    #fields
                    #footer
                    #timestamp
                    #title
                    #thumbnail
                    .build()
            }
        }
    };

    Ok(tokens)
}
