// Module name shadows the `serde` crate — use `::serde` for the external crate.
use ::serde::{Deserialize, Deserializer, Serializer};
use rust_decimal::Decimal;

/// Serialize a `Decimal` as a fixed two-decimal string, e.g. `"25.00"`.
///
/// Money and rating values cross the wire as strings so clients never see
/// float rounding artifacts.
pub fn to_money_string<S>(value: &Decimal, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_str(&format!("{value:.2}"))
}

/// Serialize an `Option<Decimal>` as a fixed two-decimal string or null.
///
/// `None` must serialize as JSON null — an absent value is not zero.
pub fn to_money_string_opt<S>(value: &Option<Decimal>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(v) => to_money_string(v, s),
        None => s.serialize_none(),
    }
}

/// Deserialize a field that distinguishes "absent" from "explicitly null".
///
/// Use with `#[serde(default, deserialize_with = "double_option")]` on an
/// `Option<Option<T>>` patch field: `None` = not supplied, `Some(None)` =
/// supplied as null (clear), `Some(Some(v))` = supplied as a value.
pub fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}
