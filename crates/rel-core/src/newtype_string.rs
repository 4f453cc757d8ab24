//! Macro for defining strongly-typed identifier newtypes.
//!
//! Taxonomy IDs, assembly accessions and release versions are opaque strings
//! to the lookup layer, but they must never be blank: a blank value would
//! silently match nothing in the metadata store. Every newtype generated here
//! rejects blank input and input with surrounding whitespace.

/// Define a strongly-typed, non-blank identifier newtype.
///
/// Generates:
/// - The struct with `Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize`
/// - Custom `Deserialize` (rejects blank values)
/// - `new()` (panics on invalid input), `parse()` (returns [`CoreResult`](crate::error::CoreResult)),
///   `as_str()`, `into_inner()`
/// - `Display`, `AsRef<str>`, `Deref<Target=str>`, `Borrow<str>`, `FromStr`
/// - `PartialEq<str>`, `PartialEq<&str>`
macro_rules! define_identifier {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident($label:literal);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
        #[serde(transparent)]
        $vis struct $Name(String);

        impl<'de> serde::Deserialize<'de> for $Name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                $Name::parse(s).map_err(serde::de::Error::custom)
            }
        }

        impl $Name {
            /// Create a new identifier, panicking if the value is invalid.
            ///
            /// Prefer [`parse`](Self::parse) when handling untrusted input.
            pub fn new(value: impl Into<String>) -> Self {
                match Self::parse(value) {
                    Ok(id) => id,
                    Err(e) => panic!("{e}"),
                }
            }

            /// Validate and wrap an identifier value.
            pub fn parse(value: impl Into<String>) -> $crate::error::CoreResult<Self> {
                let s = value.into();
                if s.trim().is_empty() || s.trim() != s {
                    return Err($crate::error::CoreError::InvalidIdentifier {
                        kind: $label,
                        value: s,
                        reason: "must be non-empty without surrounding whitespace".to_string(),
                    });
                }
                Ok(Self(s))
            }

            /// Return the underlying value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the inner `String`.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $Name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::str::FromStr for $Name {
            type Err = $crate::error::CoreError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl AsRef<str> for $Name {
            fn as_ref(&self) -> &str { &self.0 }
        }

        impl std::ops::Deref for $Name {
            type Target = str;
            fn deref(&self) -> &str { &self.0 }
        }

        impl std::borrow::Borrow<str> for $Name {
            fn borrow(&self) -> &str { &self.0 }
        }

        impl PartialEq<str> for $Name {
            fn eq(&self, other: &str) -> bool { self.0 == other }
        }

        impl PartialEq<&str> for $Name {
            fn eq(&self, other: &&str) -> bool { self.0 == *other }
        }
    };
}

pub(crate) use define_identifier;
