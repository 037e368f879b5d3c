use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod embed_data;
mod flags;
mod slash;

/// Create a static SlashCommand `{uppercased_name}_SLASH`.
///
/// Make sure there is a function in scope with the signature
/// `async fn slash_{lowercased_name}(Arc<Context>, InteractionCommand) ->
/// Result<()>`
///
/// The command's name is taken from the `#[command(name = "...")]` attribute
/// of `twilight-interactions` and `#[flags(...)]` may list `CommandFlags`.
#[proc_macro_derive(SlashCommand, attributes(flags))]
pub fn slash_command(input: TokenStream) -> TokenStream {
    let derive_input = parse_macro_input!(input as DeriveInput);

    match slash::derive(derive_input) {
        Ok(result) => result.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Derive the `EmbedData` trait which provides a `build` method.
///
/// Can only be derived on structs with any of the following field names:
/// - `color`
/// - `description`
/// - `fields`
/// - `footer`
/// - `timestamp`
/// - `title`
/// - `thumbnail`
#[proc_macro_derive(EmbedData)]
pub fn embed_data(input: TokenStream) -> TokenStream {
    let derive_input = parse_macro_input!(input as DeriveInput);

    match embed_data::derive(derive_input) {
        Ok(result) => result.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
