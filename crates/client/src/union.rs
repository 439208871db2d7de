//! Tagged unions of alternative parameter payloads.
//!
//! Responsibilities:
//! - Generate sum types (`union_shape!`) whose wire form is a single-key
//!   object naming the chosen variant.
//! - Generate a builder mirroring the wire form's one-optional-field-per-variant
//!   layout, which rejects zero or several payloads.
//! - Keep variants added by newer service versions as `Unknown`, so results
//!   that carry them still parse.
//!
//! Invariants:
//! - A union value carries exactly one payload. `Unknown` with an empty key
//!   stands for an object that names no variant.
//! - `Unknown` serializes back to the object it was read from.
//! - Deserializing an object with several keys fails.
//! - Builders never produce `Unknown`.

/// Introspection shared by every generated union.
pub trait Union {
    /// Rust type name of the union.
    const UNION_NAME: &'static str;
    /// Wire keys of all known variants, in declaration order.
    const VARIANT_NAMES: &'static [&'static str];

    /// Wire key of the chosen variant.
    fn variant_name(&self) -> &str;
}

/// Generate a tagged union and its builder.
///
/// Each variant is declared as `Variant(Payload) => "WireKey" as builder_method`.
///
/// # Usage
/// ```ignore
/// union_shape! {
///     /// Where a logical table reads from.
///     pub enum LogicalTableSource {
///         JoinInstruction(JoinInstruction) => "JoinInstruction" as join_instruction,
///         PhysicalTableId(String) => "PhysicalTableId" as physical_table_id,
///     }
/// }
/// ```
#[macro_export]
macro_rules! union_shape {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident($payload:ty) => $wire:literal as $method:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant($payload),
            )+
            /// A variant this model does not know, kept as read.
            Unknown {
                key: String,
                value: serde_json::Value,
            },
        }

        impl std::hash::Hash for $name {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash(&std::mem::discriminant(self), state);
                match self {
                    $(Self::$variant(payload) => std::hash::Hash::hash(payload, state),)+
                    Self::Unknown { key, value } => {
                        std::hash::Hash::hash(key, state);
                        std::hash::Hash::hash(&value.to_string(), state);
                    }
                }
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                use serde::ser::SerializeMap;

                match self {
                    $(
                        Self::$variant(payload) => {
                            let mut map = serializer.serialize_map(Some(1))?;
                            map.serialize_entry($wire, payload)?;
                            map.end()
                        }
                    )+
                    Self::Unknown { key, .. } if key.is_empty() => {
                        serializer.serialize_map(Some(0))?.end()
                    }
                    Self::Unknown { key, value } => {
                        let mut map = serializer.serialize_map(Some(1))?;
                        map.serialize_entry(key, value)?;
                        map.end()
                    }
                }
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                use serde::de::Error as _;

                let entries =
                    <serde_json::Map<String, serde_json::Value> as serde::Deserialize>::deserialize(
                        deserializer,
                    )?;
                if entries.len() > 1 {
                    return Err(D::Error::invalid_length(
                        entries.len(),
                        &"an object with at most one key",
                    ));
                }
                let Some((key, value)) = entries.into_iter().next() else {
                    return Ok(Self::Unknown {
                        key: String::new(),
                        value: serde_json::Value::Null,
                    });
                };
                match key.as_str() {
                    $(
                        $wire => serde_json::from_value(value)
                            .map(Self::$variant)
                            .map_err(D::Error::custom),
                    )+
                    _ => Ok(Self::Unknown { key, value }),
                }
            }
        }

        paste::paste! {
            impl $name {
                /// Start a builder with no payload set.
                pub fn builder() -> [<$name Builder>] {
                    [<$name Builder>]::default()
                }

                /// Wire key of the chosen variant.
                pub fn variant_name(&self) -> &str {
                    match self {
                        $(Self::$variant(_) => $wire,)+
                        Self::Unknown { key, .. } => key,
                    }
                }

                /// Whether the value holds a variant this model does not know.
                pub fn is_unknown(&self) -> bool {
                    matches!(self, Self::Unknown { .. })
                }

                $(
                    /// Payload of this variant, or `None` when another variant is chosen.
                    pub fn $method(&self) -> Option<&$payload> {
                        match self {
                            Self::$variant(payload) => Some(payload),
                            _ => None,
                        }
                    }
                )+
            }

            #[doc = "Builder for [`" $name "`] that accepts at most one payload."]
            #[derive(Debug, Clone, Default, PartialEq, Eq)]
            pub struct [<$name Builder>] {
                $($method: Option<$payload>,)+
            }

            impl [<$name Builder>] {
                $(
                    pub fn [<with_ $method>](mut self, payload: impl Into<$payload>) -> Self {
                        self.$method = Some(payload.into());
                        self
                    }
                )+

                /// Wire keys of the payloads supplied so far.
                pub fn supplied(&self) -> Vec<&'static str> {
                    let mut supplied = Vec::new();
                    $(
                        if self.$method.is_some() {
                            supplied.push($wire);
                        }
                    )+
                    supplied
                }

                /// Produce the union, failing unless exactly one payload was supplied.
                pub fn build(self) -> $crate::error::Result<$name> {
                    let mut chosen = Vec::new();
                    $(
                        if let Some(payload) = self.$method {
                            chosen.push(($wire, $name::$variant(payload)));
                        }
                    )+
                    if chosen.len() == 1 {
                        if let Some((_, value)) = chosen.pop() {
                            return Ok(value);
                        }
                    }
                    Err($crate::error::ModelError::InvalidUnion {
                        union: stringify!($name),
                        set: chosen.into_iter().map(|(wire, _)| wire).collect(),
                    })
                }
            }
        }

        $(
            impl From<$payload> for $name {
                fn from(value: $payload) -> Self {
                    Self::$variant(value)
                }
            }
        )+

        impl $crate::union::Union for $name {
            const UNION_NAME: &'static str = stringify!($name);
            const VARIANT_NAMES: &'static [&'static str] = &[$($wire),+];

            fn variant_name(&self) -> &str {
                $name::variant_name(self)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let mut fields = $crate::shape::FieldList::new(f);
                match self {
                    $(Self::$variant(payload) => fields.entry($wire, payload)?,)+
                    Self::Unknown { key, .. } if key.is_empty() => {}
                    Self::Unknown { key, value } => fields.entry(key, value)?,
                }
                fields.finish()
            }
        }

        impl $crate::shape::Render for $name {
            fn render(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(self, f)
            }
        }

        impl $crate::validation::Validate for $name {
            fn validate_into(&self, ctx: &mut $crate::validation::ValidationContext<'_>) {
                match self {
                    $(
                        Self::$variant(payload) => {
                            ctx.enter($wire);
                            $crate::validation::Validate::validate_into(payload, ctx);
                            ctx.leave();
                        }
                    )+
                    Self::Unknown { key, .. } => ctx.check_union_variant(stringify!($name), key),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::Union;
    use crate::error::ModelError;

    crate::union_shape! {
        /// Test union.
        pub enum Source {
            Table(String) => "TableId" as table_id,
            Count(i64) => "RowCount" as row_count,
        }
    }

    #[test]
    fn test_builder_with_one_payload() {
        let source = Source::builder().with_table_id("t1").build().unwrap();
        assert_eq!(source, Source::Table("t1".to_string()));
        assert_eq!(source.variant_name(), "TableId");
        assert_eq!(source.table_id().map(String::as_str), Some("t1"));
        assert_eq!(source.row_count(), None);
    }

    #[test]
    fn test_builder_rejects_two_payloads() {
        let err = Source::builder()
            .with_table_id("t1")
            .with_row_count(3)
            .build()
            .unwrap_err();
        match err {
            ModelError::InvalidUnion { union, set } => {
                assert_eq!(union, "Source");
                assert_eq!(set, vec!["TableId", "RowCount"]);
            }
            other => panic!("expected InvalidUnion, got {other:?}"),
        }
    }

    #[test]
    fn test_builder_rejects_empty() {
        let err = Source::builder().build().unwrap_err();
        assert!(matches!(err, ModelError::InvalidUnion { ref set, .. } if set.is_empty()));
    }

    #[test]
    fn test_wire_form_is_single_key_object() {
        let json = serde_json::to_value(Source::Count(7)).unwrap();
        assert_eq!(json, serde_json::json!({"RowCount": 7}));

        let parsed: Source = serde_json::from_value(serde_json::json!({"TableId": "x"})).unwrap();
        assert_eq!(parsed, Source::Table("x".to_string()));

        let two = serde_json::json!({"TableId": "x", "RowCount": 1});
        assert!(serde_json::from_value::<Source>(two).is_err());
    }

    #[test]
    fn test_unknown_variant_is_kept() {
        let json = serde_json::json!({"ViewId": {"Name": "v1"}});
        let parsed: Source = serde_json::from_value(json.clone()).unwrap();
        assert!(parsed.is_unknown());
        assert_eq!(parsed.variant_name(), "ViewId");
        assert_eq!(parsed.table_id(), None);
        assert_eq!(serde_json::to_value(&parsed).unwrap(), json);
        assert_eq!(parsed.to_string(), r#"{ViewId: {"Name":"v1"}}"#);
    }

    #[test]
    fn test_empty_object_is_kept() {
        let parsed: Source = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(
            parsed,
            Source::Unknown {
                key: String::new(),
                value: serde_json::Value::Null
            }
        );
        assert_eq!(serde_json::to_value(&parsed).unwrap(), serde_json::json!({}));
        assert_eq!(parsed.to_string(), "{}");
    }

    #[test]
    fn test_known_payload_errors_still_fail() {
        let json = serde_json::json!({"RowCount": "many"});
        assert!(serde_json::from_value::<Source>(json).is_err());
    }

    #[test]
    fn test_unknown_variant_reported_only_when_strict() {
        use crate::validation::{Validate, ValidationPolicy, ViolationKind};

        let parsed: Source =
            serde_json::from_value(serde_json::json!({"ViewId": "v1"})).unwrap();
        assert!(parsed.validate(&ValidationPolicy::default()).is_valid());

        let report = parsed.validate(&ValidationPolicy::strict());
        assert_eq!(
            report.at(""),
            vec![&ViolationKind::UnknownUnionVariant {
                union: "Source",
                key: "ViewId".to_string()
            }]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Source::Count(7).to_string(), "{RowCount: 7}");
    }

    #[test]
    fn test_variant_names() {
        assert_eq!(Source::VARIANT_NAMES, &["TableId", "RowCount"]);
        assert_eq!(<Source as Union>::UNION_NAME, "Source");
    }
}
