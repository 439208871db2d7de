//! Request/result structure generation and rendering.
//!
//! Responsibilities:
//! - Generate model structs (`shape!`) whose fields are all optional, with
//!   accessors, setters, consuming `with_*` builders, list append/replace,
//!   strict map insertion, and map clearing.
//! - Render models as `{FieldName: value, ...}` (`Render`), omitting unset
//!   fields.
//! - Expose field introspection via the `Shape` trait.
//!
//! Does NOT handle:
//! - Constraint checking (see `validation`); constraints declared here only
//!   feed the generated `Validate` impl.
//!
//! Invariants:
//! - Equality and hashing are structural over the declared fields.
//! - Unset fields are omitted from both the JSON body and the rendering.
//! - Map fields are ordered by key.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;

/// Human-readable rendering used by generated `Display` impls.
pub trait Render {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

macro_rules! render_via_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Render for $ty {
                fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )*
    };
}

render_via_display!(String, bool, i32, i64, Decimal, serde_json::Value);

impl<T: Render> Render for Vec<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            item.render(f)?;
        }
        f.write_str("]")
    }
}

impl<T: Render> Render for BTreeMap<String, T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}=")?;
            value.render(f)?;
        }
        f.write_str("}")
    }
}

/// Writes the `{Name: value, Name: value}` form of a structure.
pub struct FieldList<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    first: bool,
}

impl<'a, 'b> FieldList<'a, 'b> {
    pub fn new(f: &'a mut fmt::Formatter<'b>) -> Self {
        Self { f, first: true }
    }

    pub fn entry(&mut self, name: &str, value: &dyn Render) -> fmt::Result {
        self.f.write_str(if self.first { "{" } else { ", " })?;
        self.first = false;
        write!(self.f, "{name}: ")?;
        value.render(self.f)
    }

    pub fn finish(self) -> fmt::Result {
        if self.first {
            self.f.write_str("{")?;
        }
        self.f.write_str("}")
    }
}

/// Field introspection for generated structures.
pub trait Shape {
    /// Wire name of the structure.
    const SHAPE_NAME: &'static str;
    /// Wire names of all declared fields, in declaration order.
    const FIELD_NAMES: &'static [&'static str];

    /// Wire names of the fields that are currently set.
    fn present_fields(&self) -> Vec<&'static str>;
}

/// Generate a model structure.
///
/// Each field is declared as `name: kind Type => "WireName"` followed by an
/// optional constraint list. Kinds:
/// - `one`: a value returned by reference.
/// - `val`: a `Copy` value returned by value.
/// - `list`: a `Vec<Type>`.
/// - `map`: a `BTreeMap<String, Type>`.
///
/// # Usage
/// ```ignore
/// shape! {
///     /// A key-value tag.
///     pub struct Tag {
///         key: one String => "Key" [required, len(1, 128)],
///         value: one String => "Value" [required, len(1, 256)],
///     }
/// }
/// ```
#[macro_export]
macro_rules! shape {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $kind:ident $ty:ty => $wire:literal $([ $($constraint:tt)* ])?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub struct $name {
            $(
                #[serde(rename = $wire, default, skip_serializing_if = "Option::is_none")]
                $field: Option<$crate::__field_type!($kind $ty)>,
            )*
        }

        impl $name {
            $(
                $crate::__field_methods!($(#[$fmeta])* $field : $kind $ty => $wire);
            )*
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                #[allow(unused_mut)]
                let mut fields = $crate::shape::FieldList::new(f);
                $(
                    if let Some(value) = &self.$field {
                        fields.entry($wire, value)?;
                    }
                )*
                fields.finish()
            }
        }

        impl $crate::shape::Render for $name {
            fn render(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(self, f)
            }
        }

        impl $crate::shape::Shape for $name {
            const SHAPE_NAME: &'static str = stringify!($name);
            const FIELD_NAMES: &'static [&'static str] = &[$($wire),*];

            fn present_fields(&self) -> Vec<&'static str> {
                #[allow(unused_mut)]
                let mut present = Vec::new();
                $(
                    if self.$field.is_some() {
                        present.push($wire);
                    }
                )*
                present
            }
        }

        impl $crate::validation::Validate for $name {
            #[allow(unused_variables)]
            fn validate_into(&self, ctx: &mut $crate::validation::ValidationContext<'_>) {
                $(
                    ctx.enter($wire);
                    $($crate::__constraints!(ctx, self.$field.as_ref(), $($constraint)*);)?
                    if let Some(value) = &self.$field {
                        $crate::validation::Validate::validate_into(value, ctx);
                    }
                    ctx.leave();
                )*
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_type {
    (one $ty:ty) => { $ty };
    (val $ty:ty) => { $ty };
    (list $ty:ty) => { Vec<$ty> };
    (map $ty:ty) => { std::collections::BTreeMap<String, $ty> };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_methods {
    ($(#[$fmeta:meta])* $field:ident : one $ty:ty => $wire:literal) => {
        paste::paste! {
            $(#[$fmeta])*
            pub fn $field(&self) -> Option<&$ty> {
                self.$field.as_ref()
            }

            /// Set the field, or unset it with `None`.
            pub fn [<set_ $field>](&mut self, value: Option<$ty>) {
                self.$field = value;
            }

            /// Set the field and return the updated value.
            pub fn [<with_ $field>](mut self, value: impl Into<$ty>) -> Self {
                self.$field = Some(value.into());
                self
            }
        }
    };
    ($(#[$fmeta:meta])* $field:ident : val $ty:ty => $wire:literal) => {
        paste::paste! {
            $(#[$fmeta])*
            pub fn $field(&self) -> Option<$ty> {
                self.$field
            }

            /// Set the field, or unset it with `None`.
            pub fn [<set_ $field>](&mut self, value: Option<$ty>) {
                self.$field = value;
            }

            /// Set the field and return the updated value.
            pub fn [<with_ $field>](mut self, value: impl Into<$ty>) -> Self {
                self.$field = Some(value.into());
                self
            }
        }
    };
    ($(#[$fmeta:meta])* $field:ident : list $ty:ty => $wire:literal) => {
        paste::paste! {
            $(#[$fmeta])*
            pub fn $field(&self) -> Option<&[$ty]> {
                self.$field.as_deref()
            }

            /// Set the field, or unset it with `None`.
            pub fn [<set_ $field>](&mut self, values: Option<Vec<$ty>>) {
                self.$field = values;
            }

            /// Replace the list with the given items.
            pub fn [<with_ $field>]<I>(mut self, values: I) -> Self
            where
                I: IntoIterator,
                I::Item: Into<$ty>,
            {
                self.$field = Some(values.into_iter().map(Into::into).collect());
                self
            }

            /// Append items, creating the list if unset.
            pub fn [<append_ $field>]<I>(mut self, values: I) -> Self
            where
                I: IntoIterator,
                I::Item: Into<$ty>,
            {
                self.$field
                    .get_or_insert_with(Vec::new)
                    .extend(values.into_iter().map(Into::into));
                self
            }
        }
    };
    ($(#[$fmeta:meta])* $field:ident : map $ty:ty => $wire:literal) => {
        paste::paste! {
            $(#[$fmeta])*
            pub fn $field(&self) -> Option<&std::collections::BTreeMap<String, $ty>> {
                self.$field.as_ref()
            }

            /// Set the field, or unset it with `None`.
            pub fn [<set_ $field>](&mut self, entries: Option<std::collections::BTreeMap<String, $ty>>) {
                self.$field = entries;
            }

            /// Replace the map with the given entries.
            pub fn [<with_ $field>]<I, K, V>(mut self, entries: I) -> Self
            where
                I: IntoIterator<Item = (K, V)>,
                K: Into<String>,
                V: Into<$ty>,
            {
                self.$field = Some(
                    entries
                        .into_iter()
                        .map(|(k, v)| (k.into(), v.into()))
                        .collect(),
                );
                self
            }

            /// Insert an entry, failing with `DuplicateKey` if the key is present.
            pub fn [<insert_ $field _entry>](
                &mut self,
                key: impl Into<String>,
                value: impl Into<$ty>,
            ) -> $crate::error::Result<()> {
                use std::collections::btree_map::Entry;
                match self.$field.get_or_insert_with(Default::default).entry(key.into()) {
                    Entry::Occupied(existing) => Err($crate::error::ModelError::DuplicateKey {
                        field: $wire,
                        key: existing.key().clone(),
                    }),
                    Entry::Vacant(slot) => {
                        slot.insert(value.into());
                        Ok(())
                    }
                }
            }

            /// Add an entry, failing with `DuplicateKey` if the key is present.
            pub fn [<add_ $field _entry>](
                mut self,
                key: impl Into<String>,
                value: impl Into<$ty>,
            ) -> $crate::error::Result<Self> {
                self.[<insert_ $field _entry>](key, value)?;
                Ok(self)
            }

            /// Remove all entries, leaving the field unset.
            pub fn [<clear_ $field _entries>](mut self) -> Self {
                self.$field = None;
                self
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __constraints {
    ($ctx:ident, $value:expr $(,)?) => {};
    ($ctx:ident, $value:expr, required $(, $($rest:tt)*)?) => {
        $ctx.check_required($value.is_some());
        $crate::__constraints!($ctx, $value, $($($rest)*)?);
    };
    ($ctx:ident, $value:expr, account_id $(, $($rest:tt)*)?) => {
        $crate::__constraints!($ctx, $value, required, len(12, 12), pattern("^[0-9]{12}$"));
        $crate::__constraints!($ctx, $value, $($($rest)*)?);
    };
    ($ctx:ident, $value:expr, namespace $(, $($rest:tt)*)?) => {
        $crate::__constraints!($ctx, $value, required, len(0, 64), pattern("^[a-zA-Z0-9._-]*$"));
        $crate::__constraints!($ctx, $value, $($($rest)*)?);
    };
    ($ctx:ident, $value:expr, len($min:expr, $max:expr) $(, $($rest:tt)*)?) => {
        if let Some(v) = $value {
            $ctx.check_length($crate::validation::Measure::measure(v), $min, $max);
        }
        $crate::__constraints!($ctx, $value, $($($rest)*)?);
    };
    ($ctx:ident, $value:expr, range($min:expr, $max:expr) $(, $($rest:tt)*)?) => {
        if let Some(v) = $value {
            $ctx.check_range(i64::from(*v), $min, $max);
        }
        $crate::__constraints!($ctx, $value, $($($rest)*)?);
    };
    ($ctx:ident, $value:expr, pattern($pattern:literal) $(, $($rest:tt)*)?) => {
        if let Some(v) = $value {
            $ctx.check_pattern(v.as_str(), $pattern);
        }
        $crate::__constraints!($ctx, $value, $($($rest)*)?);
    };
}
