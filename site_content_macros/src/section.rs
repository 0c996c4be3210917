use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Ident, LitStr};

pub fn derive_section(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let vis = &input.vis;

    let (key, overrides_name) = parse_struct_attrs(&input);
    let key_ident = format_ident!("{}", key);

    let fields = match &input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(fields) => &fields.named,
            _ => panic!("Section derive only supports structs with named fields"),
        },
        _ => panic!("Section derive only supports structs"),
    };

    let mut names = Vec::new();
    let mut types = Vec::new();
    for field in fields {
        names.push(field.ident.clone().unwrap());
        types.push(field.ty.clone());
    }

    let doc = format!(
        "Optional overrides for [`{}`]. An absent field means \"use the default\".",
        name
    );

    let expanded = quote! {
        #[doc = #doc]
        #[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        #vis struct #overrides_name {
            #(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub #names: Option<#types>,
            )*
        }

        impl #overrides_name {
            /// True when no field carries an override.
            pub fn is_empty(&self) -> bool {
                true #(&& self.#names.is_none())*
            }
        }

        impl site_content::Section for #name {
            type Overrides = #overrides_name;

            const KEY: &'static str = #key;

            fn resolve(defaults: &Self, overrides: Option<&#overrides_name>) -> Self {
                match overrides {
                    Some(overrides) => Self {
                        #(
                            #names: overrides
                                .#names
                                .as_ref()
                                .unwrap_or(&defaults.#names)
                                .clone(),
                        )*
                    },
                    None => defaults.clone(),
                }
            }

            fn to_overrides(&self) -> #overrides_name {
                #overrides_name {
                    #( #names: Some(self.#names.clone()), )*
                }
            }

            fn overrides_in(content: &site_content::ContentOverrides) -> Option<&#overrides_name> {
                content.#key_ident.as_ref()
            }

            fn defaults_in(content: &site_content::EffectiveContent) -> &Self {
                &content.#key_ident
            }
        }
    };

    TokenStream::from(expanded)
}

fn parse_struct_attrs(input: &DeriveInput) -> (String, Ident) {
    let mut key: Option<String> = None;
    let mut overrides = format_ident!("{}Overrides", input.ident);

    for attr in &input.attrs {
        if !attr.path().is_ident("section") {
            continue;
        }

        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("key") {
                let value: LitStr = meta.value()?.parse()?;
                key = Some(value.value());
            } else if meta.path.is_ident("overrides") {
                let value: LitStr = meta.value()?.parse()?;
                overrides = format_ident!("{}", value.value());
            }
            Ok(())
        });
    }

    // Default: lowercased struct name ("Hero" -> "hero", "Cv" -> "cv")
    let key = key.unwrap_or_else(|| input.ident.to_string().to_lowercase());
    (key, overrides)
}
