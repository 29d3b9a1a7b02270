use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, LitStr, Type};

/// Derives a description of the CSV columns a record struct reads and writes.
///
/// Each named field becomes one column:
/// - name, honouring `#[serde(rename = "...")]`
/// - kind, `"number"` for `Decimal` fields and `"text"` otherwise
/// - required, false only for `Option<T>`
/// - description, taken from the field's doc comment
///
/// Generates `csv_schema() -> &'static [CsvField]` and
/// `csv_header() -> &'static [&'static str]`. `CsvField` must be in scope at
/// the derive site.
#[proc_macro_derive(CsvSchema, attributes(serde))]
pub fn derive_csv_schema(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "CsvSchema requires named fields",
                ))
            }
        },
        _ => return Err(syn::Error::new_spanned(name, "CsvSchema only supports structs")),
    };

    let mut columns = Vec::with_capacity(fields.len());
    for field in fields {
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "unnamed field"))?;
        let column = serde_rename(&field.attrs)?.unwrap_or_else(|| ident.to_string());
        let required = !is_option(&field.ty);
        let kind = if type_ends_with(&field.ty, "Decimal") {
            "number"
        } else {
            "text"
        };
        let description = doc_comment(&field.attrs);
        columns.push((column, kind, required, description));
    }

    let entries = columns.iter().map(|(column, kind, required, description)| {
        quote! {
            CsvField {
                name: #column,
                kind: #kind,
                required: #required,
                description: #description,
            }
        }
    });
    let header = columns.iter().map(|(column, ..)| column);

    Ok(quote! {
        impl #name {
            pub fn csv_schema() -> &'static [CsvField] {
                static SCHEMA: &[CsvField] = &[#(#entries),*];
                SCHEMA
            }

            pub fn csv_header() -> &'static [&'static str] {
                static HEADER: &[&str] = &[#(#header),*];
                HEADER
            }
        }
    })
}

fn serde_rename(attrs: &[syn::Attribute]) -> syn::Result<Option<String>> {
    let mut rename = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let lit: LitStr = meta.value()?.parse()?;
                rename = Some(lit.value());
            } else if meta.input.peek(syn::Token![=]) {
                // skip the value of any other `key = value` option
                let _: syn::Expr = meta.value()?.parse()?;
            }
            Ok(())
        })?;
    }
    Ok(rename)
}

fn doc_comment(attrs: &[syn::Attribute]) -> String {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            syn::Meta::NameValue(nv) => match &nv.value {
                syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Str(s),
                    ..
                }) => Some(s.value().trim().to_string()),
                _ => None,
            },
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_option(ty: &Type) -> bool {
    type_ends_with(ty, "Option")
}

fn type_ends_with(ty: &Type, ident: &str) -> bool {
    match ty {
        Type::Path(path) => path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == ident),
        _ => false,
    }
}
