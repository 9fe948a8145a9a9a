use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, parse_macro_input};

/// Derive macro for implementing the `Key` trait on a fieldless enum.
///
/// Emits `MEMBERS` listing every variant in declaration order, which becomes
/// the enumeration order of the handler table and the eager cache. The enum
/// must also be `Copy + Eq + Hash + Debug` (derive them alongside `Key`).
#[proc_macro_derive(Key)]
pub fn derive_key(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let variants = match &input.data {
        Data::Enum(data_enum) => &data_enum.variants,
        _ => {
            return syn::Error::new_spanned(&input, "#[derive(Key)] can only be used on enums")
                .to_compile_error()
                .into();
        }
    };

    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(
            &input.generics,
            "#[derive(Key)] does not support generic enums",
        )
        .to_compile_error()
        .into();
    }

    for variant in variants {
        if !matches!(variant.fields, Fields::Unit) {
            return syn::Error::new_spanned(
                variant,
                "#[derive(Key)] requires fieldless variants",
            )
            .to_compile_error()
            .into();
        }
    }

    let members = variants.iter().map(|variant| {
        let variant_name = &variant.ident;
        quote! { #name::#variant_name }
    });

    let expanded = quote! {
        impl ::totem::Key for #name {
            const MEMBERS: &'static [Self] = &[ #(#members),* ];
        }
    };

    TokenStream::from(expanded)
}
