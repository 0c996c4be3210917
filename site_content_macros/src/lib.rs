mod section;

use proc_macro::TokenStream;

/// Derive macro for content sections.
///
/// Applied to the fully-populated ("effective") shape of a section, it
/// generates the matching overrides struct, where every field is optional,
/// plus the `site_content::Section` impl that resolves `override ?? default`
/// field by field.
///
/// # Usage
///
/// ```ignore
/// #[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Section)]
/// #[serde(rename_all = "camelCase")]
/// #[section(key = "hero")]
/// pub struct Hero {
///     pub greeting: String,
///     pub name: String,
/// }
///
/// // generated:
/// // pub struct HeroOverrides { pub greeting: Option<String>, pub name: Option<String> }
/// ```
///
/// - `#[section(key = "...")]` names the field holding this section in
///   `ContentOverrides` / `EffectiveContent`. Defaults to the lowercased
///   struct name.
/// - `#[section(overrides = "...")]` renames the generated struct.
///   Defaults to the struct name + "Overrides".
///
/// List fields are resolved as whole values: a present override list
/// replaces the default list, it is never merged element-wise.
#[proc_macro_derive(Section, attributes(section))]
pub fn derive_section(input: TokenStream) -> TokenStream {
    section::derive_section(input)
}
