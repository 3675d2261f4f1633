//! Procedural macros for filter-panel

use darling::{FromDeriveInput, FromVariant};
use proc_macro::TokenStream;
use proc_macro2::Ident;
use quote::{format_ident, quote};
use std::collections::BTreeMap;
use syn::{parse_macro_input, DeriveInput};

/// Container-level attributes for #[derive(Action)]
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(action), supports(enum_any))]
struct ActionOpts {
    ident: syn::Ident,
    data: darling::ast::Data<ActionVariant, ()>,

    /// Enable automatic category inference from variant name prefixes
    #[darling(default)]
    infer_categories: bool,
}

/// Variant-level attributes
#[derive(Debug, FromVariant)]
#[darling(attributes(action))]
struct ActionVariant {
    ident: syn::Ident,
    fields: darling::ast::Fields<()>,

    /// Explicit category override
    #[darling(default)]
    category: Option<String>,

    /// Exclude from category inference
    #[darling(default)]
    skip_category: bool,
}

// Verbs that END an action name; everything before the first one is the category
const ACTION_VERBS: &[&str] = &[
    "Select", "Reset", "Apply", "Clear", "Set", "Add", "Remove", "Update", "Load", "Save",
    "Open", "Close", "Submit", "Cancel", "Toggle", "Focus", "Next", "Prev", "Show", "Hide",
];

/// Split a PascalCase string into parts
fn split_pascal_case(s: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();

    for ch in s.chars() {
        if ch.is_uppercase() && !current.is_empty() {
            parts.push(std::mem::take(&mut current));
        }
        current.push(ch);
    }
    if !current.is_empty() {
        parts.push(current);
    }
    parts
}

/// Convert PascalCase to snake_case
fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, ch) in s.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
        } else {
            result.push(ch);
        }
    }
    result
}

/// Infer a category from a variant name: the parts before the first verb
///
/// `FilterSelect` -> `filter`, `FilterResetAll` -> `filter`,
/// `ResetAll` -> none (leading verb), `Quit` -> none (single part).
fn infer_category(name: &str) -> Option<String> {
    let parts = split_pascal_case(name);
    if parts.len() < 2 || ACTION_VERBS.contains(&parts[0].as_str()) {
        return None;
    }

    let verb_at = parts
        .iter()
        .skip(1)
        .position(|part| ACTION_VERBS.contains(&part.as_str()))?
        + 1;
    Some(to_snake_case(&parts[..verb_at].concat()))
}

/// Derive macro for the Action trait
///
/// Generates a `name()` method that returns the variant name as a static string.
///
/// With `#[action(infer_categories)]`, also generates:
/// - an `ActionCategory` impl whose `category()` returns the inferred category
/// - `is_{category}()` predicates for each category
///
/// Variants can override inference with `#[action(category = "...")]` or opt
/// out with `#[action(skip_category)]`.
///
/// # Example
/// ```ignore
/// #[derive(Action, Clone, Debug)]
/// #[action(infer_categories)]
/// enum PanelAction {
///     FilterSelect { field: FilterField, value: String },
///     FilterResetAll,
///     Quit,  // uncategorized
/// }
///
/// let action = PanelAction::FilterResetAll;
/// assert_eq!(action.name(), "FilterResetAll");
/// assert_eq!(action.category(), Some("filter"));
/// assert!(action.is_filter());
/// ```
#[proc_macro_derive(Action, attributes(action))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let opts = match ActionOpts::from_derive_input(&input) {
        Ok(opts) => opts,
        Err(e) => return e.write_errors().into(),
    };

    let name = &opts.ident;

    let variants = match &opts.data {
        darling::ast::Data::Enum(variants) => variants,
        _ => {
            return syn::Error::new_spanned(&input, "Action can only be derived for enums")
                .to_compile_error()
                .into();
        }
    };

    let name_arms = variants.iter().map(|v| {
        let variant_name = &v.ident;
        let variant_str = variant_name.to_string();

        match &v.fields.style {
            darling::ast::Style::Unit => quote! {
                #name::#variant_name => #variant_str
            },
            darling::ast::Style::Tuple => quote! {
                #name::#variant_name(..) => #variant_str
            },
            darling::ast::Style::Struct => quote! {
                #name::#variant_name { .. } => #variant_str
            },
        }
    });

    let mut expanded = quote! {
        impl ::filter_panel::Action for #name {
            fn name(&self) -> &'static str {
                match self {
                    #(#name_arms),*
                }
            }
        }
    };

    if opts.infer_categories {
        let mut categories: BTreeMap<String, Vec<&Ident>> = BTreeMap::new();

        let category_arms: Vec<_> = variants
            .iter()
            .map(|v| {
                let category = if v.skip_category {
                    None
                } else {
                    v.category
                        .clone()
                        .or_else(|| infer_category(&v.ident.to_string()))
                };

                let variant = &v.ident;
                match category {
                    Some(category) => {
                        categories.entry(category.clone()).or_default().push(variant);
                        quote! { #name::#variant { .. } => ::core::option::Option::Some(#category) }
                    }
                    None => quote! { #name::#variant { .. } => ::core::option::Option::None },
                }
            })
            .collect();

        let predicates = categories.iter().map(|(category, members)| {
            let predicate_name = format_ident!("is_{}", category);
            let doc = format!(
                "Returns true if this action belongs to the `{}` category.",
                category
            );
            quote! {
                #[doc = #doc]
                pub fn #predicate_name(&self) -> bool {
                    matches!(self, #(#name::#members { .. })|*)
                }
            }
        });

        expanded = quote! {
            #expanded

            impl ::filter_panel::ActionCategory for #name {
                fn category(&self) -> ::core::option::Option<&'static str> {
                    match self {
                        #(#category_arms,)*
                    }
                }
            }

            impl #name {
                #(#predicates)*
            }
        };
    }

    TokenStream::from(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_pascal_case() {
        assert_eq!(split_pascal_case("FilterResetAll"), vec!["Filter", "Reset", "All"]);
        assert_eq!(split_pascal_case("Quit"), vec!["Quit"]);
    }

    #[test]
    fn test_infer_category() {
        assert_eq!(infer_category("FilterSelect"), Some("filter".to_string()));
        assert_eq!(infer_category("FilterResetAll"), Some("filter".to_string()));
        assert_eq!(infer_category("PresetFilterApply"), Some("preset_filter".to_string()));
        assert_eq!(infer_category("ResetAll"), None);
        assert_eq!(infer_category("Quit"), None);
        assert_eq!(infer_category("TerminalResized"), None);
    }
}
