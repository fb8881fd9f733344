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

use proc_macro2::{Ident, TokenStream};
use quote::{quote, ToTokens};
use syn::{Field, Fields, Generics, Index, Member, Type, Visibility};

/// Integer types accepted in an enum `#[repr(..)]`.
const INT_REPRS: [&str; 12] = [
    "u8", "u16", "u32", "u64", "u128", "usize", "i8", "i16", "i32", "i64", "i128", "isize",
];

/// Source field with its declaration index and name preserved.
///
/// For tuple structs `field_name` is the index as a string.
pub struct SourceField<'a> {
    pub index: usize,
    pub field: &'a Field,
    pub field_name: String,
    pub is_tuple_struct: bool,
}

impl<'a> SourceField<'a> {
    pub fn ty(&self) -> &'a Type {
        &self.field.ty
    }

    /// `self.<member>` accessor.
    pub fn member(&self) -> Member {
        match &self.field.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(Index::from(self.index)),
        }
    }

    /// Generate field initialization syntax for struct construction.
    /// - tuple struct: just the value
    /// - named struct: `field_name: value`
    pub fn field_init(&self, value: TokenStream) -> TokenStream {
        match &self.field.ident {
            Some(ident) if !self.is_tuple_struct => quote! { #ident: #value },
            _ => value,
        }
    }
}

/// Fields in declaration order.
pub fn source_fields(fields: &Fields) -> Vec<SourceField<'_>> {
    let is_tuple_struct = matches!(fields, Fields::Unnamed(_));
    fields
        .iter()
        .enumerate()
        .map(|(index, field)| SourceField {
            index,
            field,
            field_name: match &field.ident {
                Some(ident) => ident.to_string(),
                None => index.to_string(),
            },
            is_tuple_struct,
        })
        .collect()
}

/// Generate Ok(Self(...)) construction syntax for Result return.
pub fn ok_self_construction(is_tuple_struct: bool, field_inits: &[TokenStream]) -> TokenStream {
    if is_tuple_struct {
        quote! { ::core::result::Result::Ok(Self( #(#field_inits),* )) }
    } else {
        quote! { ::core::result::Result::Ok(Self { #(#field_inits),* }) }
    }
}

/// `HCons<A, HCons<B, HNil>>` for the given element types.
pub fn hlist_type<T: ToTokens>(types: &[T]) -> TokenStream {
    types
        .iter()
        .rev()
        .fold(quote! { ::podkit_core::hlist::HNil }, |tail, head| {
            quote! { ::podkit_core::hlist::HCons<#head, #tail> }
        })
}

/// `HCons { head: a, tail: HCons { head: b, tail: HNil } }` for the given
/// element expressions.
pub fn hlist_value(values: &[TokenStream]) -> TokenStream {
    values
        .iter()
        .rev()
        .fold(quote! { ::podkit_core::hlist::HNil }, |tail, head| {
            quote! { ::podkit_core::hlist::HCons { head: #head, tail: #tail } }
        })
}

pub fn reject_generics(generics: &Generics, derive: &str) -> syn::Result<()> {
    if generics.params.is_empty() && generics.where_clause.is_none() {
        return Ok(());
    }
    Err(syn::Error::new_spanned(
        generics,
        format!("#[derive({derive})] does not support generic types"),
    ))
}

pub fn require_public(field: &SourceField<'_>) -> syn::Result<()> {
    if matches!(field.field.vis, Visibility::Public(_)) {
        return Ok(());
    }
    Err(syn::Error::new_spanned(
        field.field,
        format!(
            "field `{}` must be `pub`: aggregates are made of public data members only",
            field.field_name
        ),
    ))
}

/// The integer type named in `#[repr(..)]`, if any.
pub fn int_repr(attrs: &[syn::Attribute]) -> syn::Result<Option<Ident>> {
    let mut repr = None;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("repr")) {
        attr.parse_nested_meta(|meta| {
            if let Some(ident) = meta.path.get_ident() {
                if INT_REPRS.contains(&ident.to_string().as_str()) {
                    repr = Some(ident.clone());
                }
            }
            // repr(align(..)) and friends carry arguments
            if meta.input.peek(syn::token::Paren) {
                let _content;
                syn::parenthesized!(_content in meta.input);
            }
            Ok(())
        })?;
    }
    Ok(repr)
}
