// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::util::{int_repr, reject_generics};
use proc_macro2::{Ident, TokenStream};
use quote::quote;
use syn::{Data, DataEnum, DeriveInput, Fields};

pub fn derive_enum(ast: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &ast.ident;
    let data = match &ast.data {
        Data::Enum(data) => data,
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "#[derive(PodEnum)] is for fieldless enums; structs derive PodObject",
            ))
        }
    };
    reject_generics(&ast.generics, "PodEnum")?;
    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            name,
            "an enum without variants has no values",
        ));
    }
    if let Some(variant) = data
        .variants
        .iter()
        .find(|v| !matches!(v.fields, Fields::Unit))
    {
        return Err(syn::Error::new_spanned(
            variant,
            "#[derive(PodEnum)] variants cannot carry data",
        ));
    }
    let repr = int_repr(&ast.attrs)?.ok_or_else(|| {
        syn::Error::new_spanned(
            name,
            "#[derive(PodEnum)] needs an integer representation, e.g. #[repr(i32)]",
        )
    })?;

    let enum_repr_ts = gen_enum_repr(data, &repr);
    let leaf_ts = gen_leaf(data, &repr);
    Ok(quote! {
        impl ::podkit_core::reflect::EnumRepr for #name {
            #enum_repr_ts
        }

        impl ::podkit_core::reflect::Leaf for #name {
            #leaf_ts
        }

        ::podkit_core::impl_leaf_field!(#name, Enum);
    })
}

fn gen_enum_repr(data: &DataEnum, repr: &Ident) -> TokenStream {
    let variant_idents: Vec<_> = data.variants.iter().map(|v| &v.ident).collect();
    quote! {
        type Repr = #repr;

        fn to_repr(&self) -> #repr {
            match self {
                #(
                    Self::#variant_idents => Self::#variant_idents as #repr,
                )*
            }
        }

        fn from_repr(raw: #repr) -> ::core::option::Option<Self> {
            #(
                if raw == Self::#variant_idents as #repr {
                    return ::core::option::Option::Some(Self::#variant_idents);
                }
            )*
            ::core::option::Option::None
        }
    }
}

fn gen_leaf(data: &DataEnum, repr: &Ident) -> TokenStream {
    // value-initialized enum fields take the first declared variant
    let first = &data.variants[0].ident;
    quote! {
        const KIND: ::podkit_core::types::PrimitiveKind =
            <#repr as ::podkit_core::reflect::Leaf>::KIND;

        #[inline(always)]
        fn zero() -> Self {
            Self::#first
        }

        fn write_bytes(
            &self,
            buffer: &mut ::podkit_core::buffer::BinaryBuffer,
        ) -> ::core::result::Result<(), ::podkit_core::error::Error> {
            ::podkit_core::reflect::enum_write_bytes(self, buffer)
        }

        fn read_bytes(
            buffer: &mut ::podkit_core::buffer::BinaryBuffer,
        ) -> ::core::result::Result<Self, ::podkit_core::error::Error> {
            ::podkit_core::reflect::enum_read_bytes::<Self>(buffer)
        }

        fn write_text(&self, buffer: &mut ::podkit_core::buffer::TextBuffer, separator: char) {
            ::podkit_core::reflect::enum_write_text(self, buffer, separator)
        }

        fn read_text(
            token: ::podkit_core::buffer::Token<'_>,
        ) -> ::core::result::Result<Self, ::podkit_core::error::Error> {
            ::podkit_core::reflect::enum_read_text::<Self>(token)
        }
    }
}
