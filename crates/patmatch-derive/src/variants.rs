//! `#[derive(Variants)]` implementation.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use std::collections::HashSet;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

pub fn derive_variants(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_variants_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_variants_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            input,
            "Variants can only be derived for enums",
        ));
    };

    let mut seen = HashSet::new();
    let mut impls = Vec::new();

    for variant in &data.variants {
        let ident = &variant.ident;
        let (ty, arm) = match &variant.fields {
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
                (&fields.unnamed[0].ty, quote!(#name::#ident(payload)))
            }
            Fields::Named(fields) if fields.named.len() == 1 => {
                let field = &fields.named[0].ident;
                (&fields.named[0].ty, quote!(#name::#ident { #field: payload }))
            }
            _ => continue,
        };

        if !seen.insert(ty.to_token_stream().to_string()) {
            return Err(syn::Error::new_spanned(
                ty,
                "payload type appears in more than one variant",
            ));
        }

        impls.push(quote! {
            impl #impl_generics ::patmatch::Variant<#ty> for #name #ty_generics #where_clause {
                #[allow(unreachable_patterns)]
                fn variant(&self) -> ::core::option::Option<&#ty> {
                    match self {
                        #arm => ::core::option::Option::Some(payload),
                        _ => ::core::option::Option::None,
                    }
                }
            }
        });
    }

    Ok(quote! { #(#impls)* })
}
