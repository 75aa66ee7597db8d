//! `#[derive(Destructure)]` implementation.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Index, Member};

pub fn derive_destructure(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_destructure_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_destructure_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            input,
            "Destructure can only be derived for structs",
        ));
    };

    let field_impls = data.fields.iter().enumerate().map(|(i, field)| {
        let member = match &field.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(Index::from(i)),
        };
        let ty = &field.ty;
        quote! {
            impl #impl_generics ::patmatch::Field<#i> for #name #ty_generics #where_clause {
                type Type = #ty;

                fn field(&self) -> &#ty {
                    &self.#member
                }
            }
        }
    });

    let count = data.fields.len();

    Ok(quote! {
        impl #impl_generics ::patmatch::Destructure for #name #ty_generics #where_clause {
            const FIELD_COUNT: usize = #count;
        }

        #(#field_impls)*
    })
}
