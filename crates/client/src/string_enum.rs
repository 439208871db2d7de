//! Closed string enums with an escape variant for unrecognized values.
//!
//! Responsibilities:
//! - Generate enum types whose wire form is a plain string.
//! - Capture values outside the documented domain verbatim in `Unknown(raw)`
//!   so newer service values survive a round trip.
//! - Offer a strict parse that rejects unknown values.
//!
//! Invariants:
//! - `as_str` returns exactly the string the value was parsed from.
//! - Known wire strings never produce `Unknown`.

use crate::error::Result;

/// Metadata shared by every generated string enum.
pub trait EnumDomain: Sized {
    /// Rust type name of the enum.
    const NAME: &'static str;
    /// Wire values of the documented domain, in declaration order.
    const VALUES: &'static [&'static str];

    /// Wire string of this value.
    fn wire(&self) -> &str;

    /// Whether this value belongs to the documented domain.
    fn known(&self) -> bool;

    /// Parse, rejecting values outside the documented domain.
    fn parse(value: &str) -> Result<Self>;
}

/// Generate a string enum with an `Unknown(String)` escape variant.
///
/// # Usage
/// ```ignore
/// string_enum! {
///     /// Import mode of a data set.
///     pub enum DataSetImportMode {
///         Spice => "SPICE",
///         DirectQuery => "DIRECT_QUERY",
///     }
/// }
/// ```
#[macro_export]
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// A value outside the documented domain, kept verbatim.
            Unknown(String),
        }

        impl $name {
            /// Wire values of the documented domain.
            pub const VALUES: &'static [&'static str] = &[$($wire),+];

            /// Wire string of this value.
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)+
                    Self::Unknown(raw) => raw.as_str(),
                }
            }

            /// Whether this value belongs to the documented domain.
            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Unknown(_))
            }

            /// Parse a wire string, failing on values outside the documented domain.
            pub fn parse_strict(value: &str) -> $crate::error::Result<Self> {
                Self::lookup(value).ok_or_else(|| $crate::error::ModelError::UnknownEnumValue {
                    enum_name: stringify!($name),
                    value: value.to_string(),
                })
            }

            fn lookup(value: &str) -> Option<Self> {
                match value {
                    $($wire => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::lookup(value).unwrap_or_else(|| Self::Unknown(value.to_string()))
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match Self::lookup(&value) {
                    Some(known) => known,
                    None => Self::Unknown(value),
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
                Ok(Self::from(value))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::from(raw))
            }
        }

        impl $crate::string_enum::EnumDomain for $name {
            const NAME: &'static str = stringify!($name);
            const VALUES: &'static [&'static str] = $name::VALUES;

            fn wire(&self) -> &str {
                self.as_str()
            }

            fn known(&self) -> bool {
                self.is_known()
            }

            fn parse(value: &str) -> $crate::error::Result<Self> {
                Self::parse_strict(value)
            }
        }

        impl $crate::shape::Render for $name {
            fn render(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::validation::Validate for $name {
            fn validate_into(&self, ctx: &mut $crate::validation::ValidationContext<'_>) {
                ctx.check_enum(stringify!($name), self.as_str(), self.is_known());
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::EnumDomain;
    use crate::error::ModelError;

    crate::string_enum! {
        /// Test domain.
        pub enum Fruit {
            Apple => "APPLE",
            BloodOrange => "BLOOD_ORANGE",
        }
    }

    #[test]
    fn test_known_values_parse() {
        assert_eq!(Fruit::from("APPLE"), Fruit::Apple);
        assert_eq!(Fruit::from("BLOOD_ORANGE".to_string()), Fruit::BloodOrange);
        assert!(Fruit::Apple.is_known());
    }

    #[test]
    fn test_unknown_value_is_kept_verbatim() {
        let fruit = Fruit::from("kiwi");
        assert_eq!(fruit, Fruit::Unknown("kiwi".to_string()));
        assert_eq!(fruit.as_str(), "kiwi");
        assert_eq!(fruit.to_string(), "kiwi");
        assert!(!fruit.is_known());
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(Fruit::from("apple"), Fruit::Unknown("apple".to_string()));
    }

    #[test]
    fn test_parse_strict_rejects_unknown() {
        assert_eq!(Fruit::parse_strict("APPLE").ok(), Some(Fruit::Apple));
        match Fruit::parse_strict("PEAR") {
            Err(ModelError::UnknownEnumValue { enum_name, value }) => {
                assert_eq!(enum_name, "Fruit");
                assert_eq!(value, "PEAR");
            }
            other => panic!("expected UnknownEnumValue, got {other:?}"),
        }
    }

    #[test]
    fn test_serde_uses_plain_strings() {
        assert_eq!(
            serde_json::to_string(&Fruit::BloodOrange).unwrap(),
            "\"BLOOD_ORANGE\""
        );
        let parsed: Fruit = serde_json::from_str("\"DURIAN\"").unwrap();
        assert_eq!(parsed, Fruit::Unknown("DURIAN".to_string()));
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"DURIAN\"");
    }

    #[test]
    fn test_domain_metadata() {
        assert_eq!(<Fruit as EnumDomain>::NAME, "Fruit");
        assert_eq!(Fruit::VALUES, &["APPLE", "BLOOD_ORANGE"]);
    }
}
