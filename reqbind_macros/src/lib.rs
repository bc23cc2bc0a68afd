//! Derive macro backing `reqbind`'s `Bindable` trait.
//!
//! The derive turns a struct's named fields and `#[bind(...)]` annotations
//! into a field visitor: one `match` arm per binding tag, each arm calling
//! the runtime mapping helpers in declaration order. This is the
//! compile-time replacement for walking runtime type metadata — the field
//! descriptor list is baked into the generated `apply` body.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Ident, LitStr, Type};

/// The four annotation namespaces, in the dispatcher's pass order.
const TAGS: [&str; 4] = ["query", "form", "header", "uri"];

#[derive(Default)]
struct FieldSpec {
    /// Explicit key per tag (index matches `TAGS`); `"-"` excludes.
    keys: [Option<String>; 4],
    /// Recurse into this field as a nested struct.
    nested: bool,
    /// Excluded from every source.
    skip: bool,
}

fn is_option(ty: &Type) -> bool {
    if let Type::Path(p) = ty {
        if let Some(seg) = p.path.segments.last() {
            return seg.ident == "Option";
        }
    }
    false
}

fn parse_field_attrs(field: &syn::Field) -> syn::Result<FieldSpec> {
    let mut spec = FieldSpec::default();
    for attr in &field.attrs {
        if !attr.path().is_ident("bind") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            for (idx, tag) in TAGS.iter().enumerate() {
                if meta.path.is_ident(tag) {
                    let lit: LitStr = meta.value()?.parse()?;
                    spec.keys[idx] = Some(lit.value());
                    return Ok(());
                }
            }
            if meta.path.is_ident("nested") {
                spec.nested = true;
                Ok(())
            } else if meta.path.is_ident("skip") {
                spec.skip = true;
                Ok(())
            } else {
                Err(meta.error("unsupported bind attribute"))
            }
        })?;
    }
    Ok(spec)
}

fn struct_is_protobuf(input: &DeriveInput) -> syn::Result<bool> {
    let mut protobuf = false;
    for attr in &input.attrs {
        if !attr.path().is_ident("bind") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("protobuf") {
                protobuf = true;
                Ok(())
            } else {
                Err(meta.error("unsupported bind attribute on struct"))
            }
        })?;
    }
    Ok(protobuf)
}

/// Derives `reqbind::Bindable`. See the re-export in `reqbind` for the
/// attribute reference.
#[proc_macro_derive(Bindable, attributes(bind))]
pub fn derive_bindable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream2> {
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input.ident,
                    "Bindable requires named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Bindable can only be derived for structs",
            ))
        }
    };

    let protobuf = struct_is_protobuf(&input)?;

    let mut specs: Vec<(&Ident, &Type, FieldSpec)> = Vec::new();
    for field in fields {
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
        specs.push((ident, &field.ty, parse_field_attrs(field)?));
    }

    // One arm per tag, fields visited in declaration order.
    let mut arms = Vec::new();
    for (idx, tag) in TAGS.iter().enumerate() {
        let variant = tag_variant(tag);
        let mut stmts = Vec::new();
        for (ident, ty, spec) in &specs {
            if spec.skip {
                continue;
            }
            let name = ident.to_string();
            let key = match &spec.keys[idx] {
                Some(k) if k == "-" => continue,
                Some(k) => k.clone(),
                // No annotation for this source: bind under the field name.
                None => name.clone(),
            };
            if spec.nested {
                if is_option(ty) {
                    stmts.push(quote! {
                        ::reqbind::mapping::bind_nested_opt(&mut self.#ident, src, tag, #name)?;
                    });
                } else {
                    stmts.push(quote! {
                        ::reqbind::mapping::bind_nested(&mut self.#ident, src, tag, #name)?;
                    });
                }
            } else {
                stmts.push(quote! {
                    ::reqbind::mapping::bind_field(&mut self.#ident, src, #name, #key)?;
                });
            }
        }
        arms.push(quote! {
            ::reqbind::BindTag::#variant => { #(#stmts)* }
        });
    }

    // Gate: tags with at least one explicit, non-"-" annotation on a
    // declared field. The scan is top-level only; nested structs gate
    // their own passes when bound directly.
    let mut wanted = Vec::new();
    for (idx, tag) in TAGS.iter().enumerate() {
        let explicit = specs
            .iter()
            .any(|(_, _, spec)| matches!(&spec.keys[idx], Some(k) if k != "-"));
        if explicit {
            let variant = tag_variant(tag);
            wanted.push(quote! { ::reqbind::BindTag::#variant });
        }
    }
    let wants_body = if wanted.is_empty() {
        quote! { false }
    } else {
        quote! { ::core::matches!(tag, #(#wanted)|*) }
    };

    let merge_protobuf = protobuf.then(|| {
        quote! {
            fn merge_protobuf(
                &mut self,
                body: &[u8],
            ) -> ::core::result::Result<(), ::reqbind::BindError> {
                ::reqbind::prost::Message::merge(self, body)
                    .map_err(|e| ::reqbind::BindError::decode("protobuf", e))
            }
        }
    });

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::reqbind::Bindable for #ident #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn apply(
                &mut self,
                src: &dyn ::reqbind::ValueSource,
                tag: ::reqbind::BindTag,
            ) -> ::core::result::Result<(), ::reqbind::BindError> {
                match tag {
                    #(#arms)*
                }
                Ok(())
            }

            #[allow(unused_variables)]
            fn wants(tag: ::reqbind::BindTag) -> bool {
                #wants_body
            }

            #merge_protobuf
        }
    })
}

fn tag_variant(tag: &str) -> Ident {
    let name = match tag {
        "query" => "Query",
        "form" => "Form",
        "header" => "Header",
        "uri" => "Uri",
        other => unreachable!("unknown tag {other}"),
    };
    Ident::new(name, proc_macro2::Span::call_site())
}
