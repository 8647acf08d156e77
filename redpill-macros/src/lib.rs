//! `#[derive(Action)]` for redpill action enums

use darling::{ast, FromDeriveInput, FromVariant};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

/// `#[action(...)]` on the enum
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(action), supports(enum_any))]
struct ActionOpts {
    ident: syn::Ident,
    data: ast::Data<ActionVariant, ()>,

    /// Naming convention applied to variants without an explicit name
    #[darling(default)]
    rename_all: Option<String>,
}

/// `#[action(...)]` on a variant
#[derive(Debug, FromVariant)]
#[darling(attributes(action))]
struct ActionVariant {
    ident: syn::Ident,
    fields: ast::Fields<()>,

    /// Explicit action name (wire `type` tag)
    #[darling(default)]
    name: Option<String>,
}

#[derive(Debug, Clone, Copy)]
enum RenameRule {
    SnakeCase,
    ScreamingSnakeCase,
}

impl RenameRule {
    fn parse(rule: &str) -> Option<Self> {
        match rule {
            "snake_case" => Some(Self::SnakeCase),
            "SCREAMING_SNAKE_CASE" => Some(Self::ScreamingSnakeCase),
            _ => None,
        }
    }

    fn apply(self, variant: &str) -> String {
        match self {
            Self::SnakeCase => to_snake_case(variant),
            Self::ScreamingSnakeCase => to_snake_case(variant).to_uppercase(),
        }
    }
}

/// `ChoosePill` -> `choose_pill`
fn to_snake_case(ident: &str) -> String {
    ident
        .char_indices()
        .fold(String::with_capacity(ident.len() + 4), |mut out, (i, ch)| {
            if ch.is_uppercase() && i > 0 {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
            out
        })
}

impl ActionVariant {
    fn action_name(&self, rule: Option<RenameRule>) -> String {
        if let Some(explicit) = &self.name {
            return explicit.clone();
        }
        let ident = self.ident.to_string();
        match rule {
            Some(rule) => rule.apply(&ident),
            None => ident,
        }
    }

    /// Match arm pattern that ignores the variant's fields
    fn pattern(&self, enum_ident: &syn::Ident) -> TokenStream2 {
        let ident = &self.ident;
        match self.fields.style {
            ast::Style::Unit => quote! { #enum_ident::#ident },
            ast::Style::Tuple => quote! { #enum_ident::#ident(..) },
            ast::Style::Struct => quote! { #enum_ident::#ident { .. } },
        }
    }
}

/// Implements `redpill::Action` with one `&'static str` name per variant:
/// - `#[action(name = "CHOOSE_PILL")]` on a variant sets it explicitly
/// - `#[action(rename_all = "SCREAMING_SNAKE_CASE")]` (or `"snake_case"`)
///   on the enum derives it from the variant name
/// - otherwise the variant name is used as-is
///
/// # Example
/// ```ignore
/// #[derive(Action, Clone, Debug)]
/// #[action(rename_all = "SCREAMING_SNAKE_CASE")]
/// enum MyAction {
///     ChoosePill { pill: Pill },
///     #[action(name = "@@unknown")]
///     Unknown { kind: String },
/// }
///
/// assert_eq!(MyAction::ChoosePill { pill }.name(), "CHOOSE_PILL");
/// ```
#[proc_macro_derive(Action, attributes(action))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let opts = match ActionOpts::from_derive_input(&input) {
        Ok(opts) => opts,
        Err(e) => return e.write_errors().into(),
    };

    let rule = match opts.rename_all.as_deref() {
        None => None,
        Some(raw) => match RenameRule::parse(raw) {
            Some(rule) => Some(rule),
            None => {
                return syn::Error::new_spanned(
                    &input.ident,
                    format!(
                        "unsupported rename_all rule {:?}; expected \"snake_case\" or \"SCREAMING_SNAKE_CASE\"",
                        raw
                    ),
                )
                .to_compile_error()
                .into();
            }
        },
    };

    let ident = &opts.ident;
    let ast::Data::Enum(variants) = &opts.data else {
        return syn::Error::new_spanned(&input, "Action can only be derived for enums")
            .to_compile_error()
            .into();
    };

    let arms = variants.iter().map(|variant| {
        let pattern = variant.pattern(ident);
        let action_name = variant.action_name(rule);
        quote! { #pattern => #action_name }
    });

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        impl #impl_generics redpill::Action for #ident #ty_generics #where_clause {
            fn name(&self) -> &'static str {
                match self {
                    #(#arms,)*
                }
            }
        }
    }
    .into()
}
