//! Conversion of wait-time labels such as `"12min"` to whole minutes.

use crate::error::WaitLabelError;

/// Unit suffix the site appends to every wait estimate.
pub const WAIT_UNIT_SUFFIX: &str = "min";

/// Parses a wait label of the exact form `<digits>min` into minutes.
///
/// The check is strict: the suffix is case-sensitive, no whitespace or sign
/// is accepted, and the value must fit in a `u32`. A malformed label is an
/// error rather than zero so that layout changes on the site are noticed.
///
/// # Errors
///
/// Returns [`WaitLabelError::InvalidWaitLabel`] describing why the label
/// was rejected.
pub fn parse_wait_minutes(label: &str) -> Result<u32, WaitLabelError> {
    let invalid = |reason: &str| WaitLabelError::InvalidWaitLabel {
        label: label.to_owned(),
        reason: reason.to_owned(),
    };

    let digits = label
        .strip_suffix(WAIT_UNIT_SUFFIX)
        .ok_or_else(|| invalid("missing trailing \"min\" unit"))?;

    if digits.is_empty() {
        return Err(invalid("no minute value before the unit"));
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("minute value is not a base-10 integer"));
    }

    digits
        .parse::<u32>()
        .map_err(|e| invalid(&format!("minute value out of range: {e}")))
}
