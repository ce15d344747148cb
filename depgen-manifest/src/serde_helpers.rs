//! Serde helpers for the loosely typed corners of dependencies.yaml.

use std::fmt;

use depgen_core::{Combination, MatrixSpec, OutputFormat, entry_output_types};
use indexmap::IndexMap;
use serde::{
    Deserialize, Deserializer,
    de::{self, Visitor},
};

/// A value that may be written either alone or as a list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(value: OneOrMany<T>) -> Self {
        match value {
            OneOrMany::One(v) => vec![v],
            OneOrMany::Many(v) => v,
        }
    }
}

/// A YAML scalar read as its string form.
///
/// Matrix values such as `cuda: [11.8]` are commonly written unquoted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Scalar(pub String);

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ScalarVisitor;

        impl Visitor<'_> for ScalarVisitor {
            type Value = Scalar;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a string, number, or boolean")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Scalar, E> {
                Ok(Scalar(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Scalar, E> {
                Ok(Scalar(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Scalar, E> {
                Ok(Scalar(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Scalar, E> {
                Ok(Scalar(v.to_string()))
            }

            // `12.0` keeps its decimal so it matches a quoted "12.0".
            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Scalar, E> {
                Ok(Scalar(serde_yaml::Number::from(v).to_string()))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Scalar, E> {
                Ok(Scalar(v.to_string()))
            }
        }

        deserializer.deserialize_any(ScalarVisitor)
    }
}

/// Treat an explicit `null` the same as a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize a file's matrix: dimension -> list of scalar values.
pub(crate) fn deserialize_matrix<'de, D>(deserializer: D) -> Result<MatrixSpec, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<IndexMap<String, Vec<Scalar>>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(dim, values)| (dim, values.into_iter().map(|s| s.0).collect()))
        .collect())
}

/// Deserialize a branch filter: dimension -> single scalar value.
pub(crate) fn deserialize_filter<'de, D>(deserializer: D) -> Result<Combination, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<IndexMap<String, Scalar>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(dim, value)| (dim, value.0))
        .collect())
}

/// Deserialize an entry's `output_types`, rejecting `none` and unknown values.
pub(crate) fn deserialize_output_types<'de, D>(
    deserializer: D,
) -> Result<Vec<OutputFormat>, D::Error>
where
    D: Deserializer<'de>,
{
    let values: Vec<String> = OneOrMany::deserialize(deserializer)?.into();
    entry_output_types(&values).map_err(de::Error::custom)
}
