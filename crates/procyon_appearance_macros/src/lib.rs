use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Error, Expr, Meta, Result, Type, parse_macro_input};

/// Maps each variant of a fieldless enum onto a field of
/// `procyon_appearance_schema::Appearance`.
///
/// ```ignore
/// #[derive(IntoAppearanceField)]
/// #[field(Color)]
/// enum ColorKey {
///     #[appearance(colors.base)]
///     BaseColor,
/// }
/// ```
///
/// Generates `resolve(&self, &Appearance) -> &Color` and an `ALL` array in
/// declaration order.
#[proc_macro_derive(IntoAppearanceField, attributes(appearance, field))]
pub fn into_appearance_field_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(input)
        .unwrap_or_else(Error::into_compile_error)
        .into()
}

fn expand(input: DeriveInput) -> Result<proc_macro2::TokenStream> {
    let name = input.ident;

    let variants = match input.data {
        Data::Enum(data_enum) => data_enum.variants,
        _ => {
            return Err(Error::new(
                name.span(),
                "#[derive(IntoAppearanceField)] can only be used on enums",
            ));
        }
    };

    let field_type = get_enum_field_type(&input.attrs)?;

    let mut variant_matches = Vec::with_capacity(variants.len());
    let mut idents = Vec::with_capacity(variants.len());

    for variant in &variants {
        if !variant.fields.is_empty() {
            return Err(Error::new_spanned(
                variant,
                "appearance keys can't carry fields",
            ));
        }

        let ident = &variant.ident;
        let field_path = get_appearance_expr(&variant.attrs, variant.ident.span())?;

        variant_matches.push(quote! {
            #name::#ident => &appearance.#field_path,
        });
        idents.push(ident);
    }

    let count = idents.len();

    Ok(quote! {
        impl #name {
            pub const ALL: [#name; #count] = [#(#name::#idents),*];

            pub fn resolve<'a>(
                &self,
                appearance: &'a ::procyon_appearance_schema::Appearance,
            ) -> &'a #field_type {
                match self {
                    #(#variant_matches)*
                }
            }
        }
    })
}

fn get_appearance_expr(attrs: &[Attribute], span: Span) -> Result<Expr> {
    let attr = attrs
        .iter()
        .find(|attr| attr.path().is_ident("appearance"))
        .ok_or_else(|| Error::new(span, "variant is missing #[appearance(...)] attribute"))?;

    match &attr.meta {
        Meta::List(list) => syn::parse2(list.tokens.clone()),
        _ => Err(Error::new_spanned(
            attr,
            "#[appearance(...)] must be a list, like #[appearance(colors.base)]",
        )),
    }
}

fn get_enum_field_type(attrs: &[Attribute]) -> Result<Type> {
    let attr = attrs
        .iter()
        .find(|attr| attr.path().is_ident("field"))
        .ok_or_else(|| Error::new(Span::call_site(), "enum is missing #[field(...)] attribute"))?;

    match &attr.meta {
        Meta::List(list) => syn::parse2::<Type>(list.tokens.clone()),
        _ => Err(Error::new_spanned(
            attr,
            "#[field(...)] must be a list, like #[field(Color)]",
        )),
    }
}
