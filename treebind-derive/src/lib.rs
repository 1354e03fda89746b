//! Derive macro for `treebind::FromDocument`.
//!
//! Structs with named fields map each field from a child element or
//! attribute of the source node. Enums with unit variants map from the
//! node's text, matching variant names canonically.
//!
//! Supported attributes:
//!
//! - `#[document(rename = "...")]` on the container, a field, or an enum
//!   variant: the serialized name to match, searched instead of the Rust
//!   name.
//! - `#[document(skip)]` on a field: never populated from the document;
//!   takes its `Default` value.

extern crate proc_macro;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DataEnum, DataStruct, DeriveInput, Fields, LitStr};

#[proc_macro_derive(FromDocument, attributes(document))]
pub fn derive_from_document(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    match &input.data {
        Data::Struct(data) => expand_struct(input, data),
        Data::Enum(data) => expand_enum(input, data),
        Data::Union(_) => Err(syn::Error::new_spanned(
            input,
            "FromDocument cannot be derived for unions",
        )),
    }
}

#[derive(Default)]
struct Attrs {
    rename: Option<String>,
    skip: bool,
}

/// Collect `#[document(...)]` attributes from a container, field, or
/// variant.
fn parse_attrs(attrs: &[syn::Attribute]) -> syn::Result<Attrs> {
    let mut parsed = Attrs::default();
    for attr in attrs {
        if !attr.path().is_ident("document") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let value: LitStr = meta.value()?.parse()?;
                parsed.rename = Some(value.value());
                Ok(())
            } else if meta.path.is_ident("skip") {
                parsed.skip = true;
                Ok(())
            } else {
                Err(meta.error("unsupported document attribute"))
            }
        })?;
    }
    Ok(parsed)
}

fn expand_struct(input: &DeriveInput, data: &DataStruct) -> syn::Result<TokenStream> {
    let Fields::Named(fields) = &data.fields else {
        return Err(syn::Error::new_spanned(
            input,
            "FromDocument requires named fields",
        ));
    };

    let mut initializers = Vec::new();
    for field in &fields.named {
        let ident = field.ident.as_ref().unwrap();
        let attrs = parse_attrs(&field.attrs)?;
        if attrs.skip {
            initializers.push(quote! {
                #ident: ::core::default::Default::default()
            });
            continue;
        }

        let name = ident.to_string();
        let ty = &field.ty;
        let descriptor = match &attrs.rename {
            Some(rename) => quote! { ::treebind::Field::renamed(#name, #rename) },
            None => quote! { ::treebind::Field::new(#name) },
        };
        initializers.push(quote! {
            #ident: <#ty as ::treebind::FromDocument>::from_field(node, &#descriptor, cx)?
        });
    }

    let container = parse_attrs(&input.attrs)?;
    let type_name = container.rename.unwrap_or_else(|| input.ident.to_string());
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::treebind::FromDocument for #ident #ty_generics #where_clause {
            const NAME: ::core::option::Option<&'static str> =
                ::core::option::Option::Some(#type_name);

            fn from_root(
                node: &::treebind::Element,
                cx: &::treebind::Context<'_>,
            ) -> ::core::result::Result<Self, ::treebind::DeserializeError> {
                ::core::result::Result::Ok(Self {
                    #(#initializers,)*
                })
            }

            fn from_field(
                node: &::treebind::Element,
                field: &::treebind::Field,
                cx: &::treebind::Context<'_>,
            ) -> ::core::result::Result<Self, ::treebind::DeserializeError> {
                match ::treebind::locate_element(node, field) {
                    ::core::option::Option::Some(child) => Self::from_root(child, cx),
                    // An absent nested object takes its empty value: every
                    // field maps from a node with nothing in it.
                    ::core::option::Option::None => {
                        Self::from_root(&::treebind::Element::default(), cx)
                    }
                }
            }
        }
    })
}

/// Unit enums are scalars: the node's text picks a variant by canonical
/// name. Blank text picks the first variant.
fn expand_enum(input: &DeriveInput, data: &DataEnum) -> syn::Result<TokenStream> {
    let mut arms = Vec::new();
    let mut empty = None;
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "FromDocument enums must use unit variants",
            ));
        }
        let attrs = parse_attrs(&variant.attrs)?;
        let ident = &variant.ident;
        let name = attrs.rename.unwrap_or_else(|| ident.to_string());
        if empty.is_none() {
            empty = Some(quote! { Self::#ident });
        }
        arms.push(quote! {
            if wanted == ::treebind::naming::canonical(#name) {
                return ::core::result::Result::Ok(Self::#ident);
            }
        });
    }
    let Some(empty) = empty else {
        return Err(syn::Error::new_spanned(
            input,
            "FromDocument enums need at least one variant",
        ));
    };

    let container = parse_attrs(&input.attrs)?;
    let type_name = container.rename.unwrap_or_else(|| input.ident.to_string());
    let ident = &input.ident;

    Ok(quote! {
        #[automatically_derived]
        impl ::treebind::Scalar for #ident {
            const EXPECTED: &'static str = #type_name;

            fn empty() -> Self {
                #empty
            }

            fn parse_text(
                text: &str,
                _cx: &::treebind::Context<'_>,
            ) -> ::core::result::Result<Self, ::treebind::DeserializeError> {
                let wanted = ::treebind::naming::canonical(text);
                #(#arms)*
                ::core::result::Result::Err(::treebind::DeserializeError::coerce(
                    text,
                    Self::EXPECTED,
                ))
            }
        }

        #[automatically_derived]
        impl ::treebind::FromDocument for #ident {
            const NAME: ::core::option::Option<&'static str> =
                ::core::option::Option::Some(#type_name);

            fn from_root(
                node: &::treebind::Element,
                cx: &::treebind::Context<'_>,
            ) -> ::core::result::Result<Self, ::treebind::DeserializeError> {
                ::treebind::scalar::map_root(node, cx)
            }

            fn from_field(
                node: &::treebind::Element,
                field: &::treebind::Field,
                cx: &::treebind::Context<'_>,
            ) -> ::core::result::Result<Self, ::treebind::DeserializeError> {
                ::treebind::scalar::map_field(node, field, cx)
            }
        }
    })
}
