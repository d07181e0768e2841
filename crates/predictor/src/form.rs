//! Typed access to submitted form fields.
//!
//! Every accessor returns `InputError` with the offending field, so a
//! handler can report exactly what was wrong with a submission.

use std::collections::HashMap;
use std::str::FromStr;

use data_loader::UnknownCategory;

use crate::error::InputError;

/// Raw `name -> value` pairs of an urlencoded form
pub type FormFields = HashMap<String, String>;

/// The trimmed value of a field that must be present and non-empty
pub fn required<'a>(form: &'a FormFields, field: &str) -> Result<&'a str, InputError> {
    form.get(field)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| InputError::MissingField {
            field: field.to_string(),
        })
}

/// The trimmed value of an optional field; blank counts as absent
pub fn optional<'a>(form: &'a FormFields, field: &str) -> Option<&'a str> {
    form.get(field).map(|v| v.trim()).filter(|v| !v.is_empty())
}

/// Parse a value as a float
pub fn parse_float(field: &str, raw: &str) -> Result<f64, InputError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| InputError::MalformedNumber {
            field: field.to_string(),
            value: raw.to_string(),
        })
}

/// A required float field
pub fn float_field(form: &FormFields, field: &str) -> Result<f64, InputError> {
    parse_float(field, required(form, field)?)
}

/// A required integer field
pub fn int_field(form: &FormFields, field: &str) -> Result<i64, InputError> {
    let raw = required(form, field)?;
    raw.parse::<i64>().map_err(|_| InputError::MalformedNumber {
        field: field.to_string(),
        value: raw.to_string(),
    })
}

/// A required field holding one of a category's labels
pub fn category_field<T>(form: &FormFields, field: &str) -> Result<T, InputError>
where
    T: FromStr<Err = UnknownCategory>,
{
    Ok(required(form, field)?.parse::<T>()?)
}
