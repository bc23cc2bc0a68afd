//! Runtime coercion from multi-valued string sources to typed fields.

use std::collections::{BTreeMap, HashMap};

use crate::error::BindError;

/// A conversion failure, not yet attached to a field name.
///
/// [`bind_field`](super::bind_field) knows which field it was working on and
/// upgrades this into a [`BindError`] with the full context.
#[derive(Debug)]
pub enum ConvertError {
    /// The value text could not be parsed as the target type.
    Parse {
        value: String,
        target: &'static str,
    },
    /// The target type can never be populated from string values.
    Unsupported { target: &'static str },
}

impl ConvertError {
    pub(crate) fn into_bind_error(self, field: &str) -> BindError {
        match self {
            ConvertError::Parse { value, target } => BindError::Conversion {
                field: field.to_string(),
                value,
                target,
            },
            ConvertError::Unsupported { target } => BindError::UnsupportedType {
                field: field.to_string(),
                target,
            },
        }
    }
}

/// Parse a single source value into a scalar.
pub trait FromBindStr: Sized {
    /// Type kind reported in conversion errors.
    const KIND: &'static str;

    fn from_bind_str(value: &str) -> Result<Self, ConvertError>;
}

impl FromBindStr for String {
    const KIND: &'static str = "string";

    fn from_bind_str(value: &str) -> Result<Self, ConvertError> {
        Ok(value.to_string())
    }
}

impl FromBindStr for bool {
    const KIND: &'static str = "bool";

    // Strict lexical rules: only "true" and "false" parse.
    fn from_bind_str(value: &str) -> Result<Self, ConvertError> {
        value.parse().map_err(|_| ConvertError::Parse {
            value: value.to_string(),
            target: Self::KIND,
        })
    }
}

impl FromBindStr for char {
    const KIND: &'static str = "char";

    fn from_bind_str(value: &str) -> Result<Self, ConvertError> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(ConvertError::Parse {
                value: value.to_string(),
                target: Self::KIND,
            }),
        }
    }
}

macro_rules! impl_from_bind_str_num {
    ($($ty:ty => $kind:literal),* $(,)?) => {
        $(
            impl FromBindStr for $ty {
                const KIND: &'static str = $kind;

                // str::parse range-checks against the declared bit width.
                fn from_bind_str(value: &str) -> Result<Self, ConvertError> {
                    value.parse().map_err(|_| ConvertError::Parse {
                        value: value.to_string(),
                        target: Self::KIND,
                    })
                }
            }
        )*
    };
}

impl_from_bind_str_num! {
    i8 => "i8", i16 => "i16", i32 => "i32", i64 => "i64", i128 => "i128",
    isize => "isize",
    u8 => "u8", u16 => "u16", u32 => "u32", u64 => "u64", u128 => "u128",
    usize => "usize",
    f32 => "f32", f64 => "f64",
}

/// Convert the full value sequence for a key into a field.
///
/// Scalars use the first value; sequences convert every value positionally;
/// maps are rejected outright, since no per-key annotation exists to drive
/// element conversion.
pub trait FromBindValue: Sized {
    fn from_bind_values(values: &[String]) -> Result<Self, ConvertError>;
}

// A blanket impl over FromBindStr would collide with the Vec/map impls under
// the coherence rules, so scalars get explicit impls.
macro_rules! impl_from_bind_values_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromBindValue for $ty {
                fn from_bind_values(values: &[String]) -> Result<Self, ConvertError> {
                    // Only the first of repeated values feeds a scalar field.
                    let first = values.first().map(String::as_str).unwrap_or("");
                    <$ty as FromBindStr>::from_bind_str(first)
                }
            }
        )*
    };
}

impl_from_bind_values_scalar! {
    String, bool, char,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
}

impl<T: FromBindStr> FromBindValue for Vec<T> {
    fn from_bind_values(values: &[String]) -> Result<Self, ConvertError> {
        values.iter().map(|v| T::from_bind_str(v)).collect()
    }
}

impl<T: FromBindStr> FromBindValue for Option<T> {
    fn from_bind_values(values: &[String]) -> Result<Self, ConvertError> {
        let first = values.first().map(String::as_str).unwrap_or("");
        T::from_bind_str(first).map(Some)
    }
}

impl<K, V> FromBindValue for HashMap<K, V> {
    fn from_bind_values(_values: &[String]) -> Result<Self, ConvertError> {
        Err(ConvertError::Unsupported { target: "map" })
    }
}

impl<K, V> FromBindValue for BTreeMap<K, V> {
    fn from_bind_values(_values: &[String]) -> Result<Self, ConvertError> {
        Err(ConvertError::Unsupported { target: "map" })
    }
}
