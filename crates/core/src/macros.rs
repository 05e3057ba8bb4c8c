// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Declarative macros for reducing boilerplate.
//!
//! - [`simple_display!`] — `Display` impl mapping enum variants to string literals
//! - [`wire_enum!`] — closed string enumeration with parsing, serde and a value table

/// Generate a `Display` impl that maps enum variants to string literals.
///
/// Unit variants match directly; data-carrying variants use `(..)` to ignore fields.
///
/// ```ignore
/// mlws_core::simple_display! {
///     MyEnum {
///         Foo => "foo",
///         Bar(..) => "bar",
///     }
/// }
/// ```
#[macro_export]
macro_rules! simple_display {
    ($enum:ty { $( $variant:ident $(( $($ignore:tt)* ))? => $str:expr ),+ $(,)? }) => {
        impl std::fmt::Display for $enum {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(match self {
                    $( Self::$variant $(( $($ignore)* ))? => $str, )+
                })
            }
        }
    };
}

/// Define a closed enumeration whose wire form is a fixed string label.
///
/// Generates the enum itself plus:
/// - `KIND`, `ALL` and `LABELS` constants (`ALL` and `LABELS` in declaration order)
/// - `as_str`, `possible_values` and `parse_ignore_case`
/// - `Display`, `FromStr`, `TryFrom<&str>`, `TryFrom<String>`
/// - `Serialize` / `Deserialize` as the bare label
///
/// Strict parsing (`FromStr`, serde) is case-sensitive and rejects anything
/// outside the label set.
///
/// ```ignore
/// mlws_core::wire_enum! {
///     /// Traffic light colour.
///     pub enum Light("light") {
///         Red => "Red",
///         Green => "Green",
///     }
/// }
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident($kind:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Human-readable name of this enumeration, used in parse errors.
            pub const KIND: &'static str = $kind;

            /// Every value, in declaration order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];

            /// Wire labels, index-aligned with [`Self::ALL`].
            pub const LABELS: &'static [&'static str] = &[ $( $label, )+ ];

            /// The wire label for this value.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $label, )+
                }
            }

            /// All possible values, in declaration order.
            pub fn possible_values() -> &'static [$name] {
                Self::ALL
            }

            /// Parse a label ignoring ASCII case. No trimming is applied.
            pub fn parse_ignore_case(value: &str) -> Result<Self, $crate::ParseEnumError> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(value))
                    .ok_or_else(|| $crate::ParseEnumError::new(Self::KIND, value, Self::LABELS))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::ParseEnumError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $( $label => Ok(Self::$variant), )+
                    other => Err($crate::ParseEnumError::new(Self::KIND, other, Self::LABELS)),
                }
            }
        }

        impl TryFrom<&str> for $name {
            type Error = $crate::ParseEnumError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::ParseEnumError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                match s.as_str() {
                    $( $label => Ok(Self::$variant), )+
                    other => Err(serde::de::Error::unknown_variant(other, Self::LABELS)),
                }
            }
        }
    };
}

#[cfg(test)]
#[path = "macros_tests.rs"]
mod tests;
