//! Deserializers for values that arrive as text from HTML forms and query
//! strings.
//!
//! Browsers submit every field as a string and send blank strings for empty
//! inputs. These helpers parse through `FromStr` so they behave the same
//! whether the caller is `serde_urlencoded` directly or a `#[serde(flatten)]`
//! wrapper, which buffers every value as a string.

use std::fmt::Display;
use std::str::FromStr;

use serde::de::Error;
use serde::{Deserialize, Deserializer};

/// Required value parsed from its trimmed text form.
pub fn from_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw = String::deserialize(deserializer)?;
    raw.trim().parse::<T>().map_err(D::Error::custom)
}

/// Optional value: a missing or blank field becomes `None`.
/// Pair with `#[serde(default)]` so an absent key is accepted too.
pub fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse::<T>().map(Some).map_err(D::Error::custom),
    }
}
