//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use proc_macro::TokenStream;
use proc_macro2::{Ident, Span, TokenStream as TokenStream2};
use quote::{quote, ToTokens};
use syn::{parse_macro_input, Item, ItemConst, ItemFn};

/// Exposes an item to javascript through `wasm-bindgen`.
///
/// - structs and enums get `serde` and `tsify` derives so they cross the wasm boundary by value
/// - functions are exported under their camelCase name
/// - constants are exported as a zero-argument getter named `_CONSTANT_NAME`
#[proc_macro_attribute]
pub fn wasm_expose(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let item = parse_macro_input!(item as Item);
    let expanded = match item {
        Item::Struct(item) => expose_type(item),
        Item::Enum(item) => expose_type(item),
        Item::Fn(item) => expose_fn(item),
        Item::Const(item) => expose_const(item),
        other => syn::Error::new_spanned(other, "wasm_expose only supports structs, enums, functions and constants").to_compile_error(),
    };
    expanded.into()
}

fn expose_type(item: impl ToTokens) -> TokenStream2 {
    quote! {
        #[derive(::serde::Serialize, ::serde::Deserialize, ::tsify::Tsify)]
        #[serde(rename_all = "camelCase")]
        #[tsify(from_wasm_abi, into_wasm_abi)]
        #item
    }
}

fn expose_fn(item: ItemFn) -> TokenStream2 {
    let js_name = to_camel_case(&item.sig.ident.to_string());
    quote! {
        #[::wasm_bindgen::prelude::wasm_bindgen(js_name = #js_name, skip_jsdoc)]
        #item
    }
}

fn expose_const(item: ItemConst) -> TokenStream2 {
    let name = &item.ident;
    let getter = Ident::new(&format!("_{}", name), Span::call_site());
    let js_name = getter.to_string();
    quote! {
        #item

        #[::wasm_bindgen::prelude::wasm_bindgen(js_name = #js_name, skip_jsdoc)]
        pub fn #getter() -> ::wasm_bindgen::JsValue {
            ::wasm_bindgen::JsValue::from(#name)
        }
    }
}

fn to_camel_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut upper_next = false;
    for ch in name.chars() {
        if ch == '_' {
            upper_next = !result.is_empty();
        } else if upper_next {
            result.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            result.push(ch);
        }
    }
    result
}
