use crate::error::{Error, Result};

/// Longest province or regency code accepted as a filter.
pub const MAX_REGION_CODE_LEN: usize = 10;

/// Trims an optional region code filter, dropping empty values.
///
/// Province and regency codes are numeric (`31`, `3171`); anything else is
/// rejected before it reaches the upstream query string.
pub fn region_code(raw: Option<&str>, field: &str) -> Result<Option<String>> {
    let Some(code) = raw.map(str::trim).filter(|c| !c.is_empty()) else {
        return Ok(None);
    };

    if code.len() > MAX_REGION_CODE_LEN {
        return Err(Error::BadRequest(format!(
            "{} must be at most {} characters",
            field, MAX_REGION_CODE_LEN
        )));
    }

    if !code.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(Error::BadRequest(format!("{} must be a numeric region code", field)));
    }

    Ok(Some(code.to_string()))
}
