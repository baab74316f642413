use rust_decimal::Decimal;

/// Serializes a decimal as a string, keeping every digit and the scale.
///
/// Use this instead of the crate-wide float representation wherever a value
/// must survive a JSON round trip unchanged.
pub fn serialize_decimal<S>(decimal: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&decimal.to_string())
}
