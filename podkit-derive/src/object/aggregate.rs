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

use crate::util::{
    hlist_type, hlist_value, ok_self_construction, reject_generics, require_public,
    source_fields, SourceField,
};
use podkit_core::reflect::MAX_FIELDS;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields};

pub fn derive_aggregate(ast: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &ast.ident;
    let data = match &ast.data {
        Data::Struct(data) => data,
        Data::Enum(_) => {
            return Err(syn::Error::new_spanned(
                name,
                "#[derive(PodObject)] is for structs; fieldless enums derive PodEnum",
            ))
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                name,
                "unions are not aggregates: their fields overlap",
            ))
        }
    };
    reject_generics(&ast.generics, "PodObject")?;
    if matches!(data.fields, Fields::Unit) || data.fields.is_empty() {
        return Err(syn::Error::new_spanned(
            name,
            "#[derive(PodObject)] needs at least one field",
        ));
    }
    if data.fields.len() > MAX_FIELDS {
        return Err(syn::Error::new_spanned(
            name,
            format!(
                "{} fields exceed the supported maximum of {MAX_FIELDS}",
                data.fields.len()
            ),
        ));
    }

    let fields = source_fields(&data.fields);
    for field in &fields {
        require_public(field)?;
    }
    let is_tuple_struct = matches!(data.fields, Fields::Unnamed(_));

    let aggregate_ts = gen_aggregate_impl(&fields, is_tuple_struct);
    let field_ts = gen_field_impl(&fields);
    Ok(quote! {
        impl ::podkit_core::reflect::Aggregate for #name {
            #aggregate_ts
        }

        impl ::podkit_core::reflect::Field for #name {
            #field_ts
        }
    })
}

fn gen_aggregate_impl(fields: &[SourceField<'_>], is_tuple_struct: bool) -> TokenStream {
    let types: Vec<_> = fields.iter().map(|f| f.ty()).collect();
    let names: Vec<_> = fields.iter().map(|f| f.field_name.as_str()).collect();
    let members: Vec<_> = fields.iter().map(|f| f.member()).collect();

    let fields_ty = hlist_type(&types);
    let inits: Vec<_> = fields
        .iter()
        .map(|f| {
            let ty = f.ty();
            f.field_init(quote! { init.field::<#ty>()? })
        })
        .collect();
    let construct = ok_self_construction(is_tuple_struct, &inits);
    let cloned = hlist_value(
        &members
            .iter()
            .map(|m| quote! { ::core::clone::Clone::clone(&self.#m) })
            .collect::<Vec<_>>(),
    );
    let moved = hlist_value(
        &members
            .iter()
            .map(|m| quote! { self.#m })
            .collect::<Vec<_>>(),
    );

    quote! {
        type Fields = #fields_ty;

        const FIELD_NAMES: &'static [&'static str] = &[#(#names),*];

        fn aggregate_init(
            init: &mut ::podkit_core::reflect::InitList<'_>,
        ) -> ::core::result::Result<Self, ::podkit_core::error::Error> {
            #construct
        }

        fn to_fields(&self) -> Self::Fields {
            #cloned
        }

        fn into_fields(self) -> Self::Fields {
            #moved
        }
    }
}

fn gen_field_impl(fields: &[SourceField<'_>]) -> TokenStream {
    let types: Vec<_> = fields.iter().map(|f| f.ty()).collect();
    let members: Vec<_> = fields.iter().map(|f| f.member()).collect();
    let fields_ty = hlist_type(&types);

    quote! {
        type Leaves = <#fields_ty as ::podkit_core::hlist::FlattenFields>::Output;

        #[inline(always)]
        fn class() -> ::podkit_core::reflect::FieldClass {
            ::podkit_core::reflect::FieldClass::Aggregate
        }

        fn value_init() -> ::core::result::Result<Self, ::podkit_core::error::Error> {
            ::podkit_core::reflect::value_init::<Self>()
        }

        fn emit_raw_ids(slot: &mut [u32]) -> ::core::result::Result<(), ::podkit_core::error::Error> {
            ::podkit_core::reflect::flatten::emit_aggregate_ids::<Self>(slot)
        }

        fn describe_nested() -> ::core::result::Result<
            ::core::option::Option<&'static ::podkit_core::reflect::AggregateDescriptor>,
            ::podkit_core::error::Error,
        > {
            ::core::result::Result::Ok(::core::option::Option::Some(
                ::podkit_core::reflect::descriptor::<Self>()?,
            ))
        }

        fn into_leaves(self) -> Self::Leaves {
            ::podkit_core::hlist::FlattenFields::flatten(
                ::podkit_core::reflect::Aggregate::into_fields(self),
            )
        }

        fn visit_leaves<V: ::podkit_core::reflect::LeafVisitor>(
            &self,
            visitor: &mut V,
        ) -> ::core::result::Result<(), ::podkit_core::error::Error> {
            #(
                ::podkit_core::reflect::Field::visit_leaves(&self.#members, visitor)?;
            )*
            ::core::result::Result::Ok(())
        }

        fn visit_leaves_mut<V: ::podkit_core::reflect::LeafVisitorMut>(
            &mut self,
            visitor: &mut V,
        ) -> ::core::result::Result<(), ::podkit_core::error::Error> {
            #(
                ::podkit_core::reflect::Field::visit_leaves_mut(&mut self.#members, visitor)?;
            )*
            ::core::result::Result::Ok(())
        }
    }
}
