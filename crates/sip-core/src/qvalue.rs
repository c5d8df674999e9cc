// siphon-rs - The Siphon SIP Stack
// Copyright (C) 2025 James Ferris <ferrous.communications@gmail.com>
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! q-value handling shared by the Accept-* headers.

use std::fmt;

use crate::HeaderError;

/// Sentinel meaning "no q parameter present".
pub const QVALUE_UNSET: f32 = -1.0;

/// Accepts the unset sentinel or any value in `[0, 1]`. Never clamps.
pub fn validate_q_value(q: f32) -> Result<(), HeaderError> {
    if q == QVALUE_UNSET || (0.0..=1.0).contains(&q) {
        Ok(())
    } else {
        Err(HeaderError::InvalidQValue(q))
    }
}

/// Validates `q` for storage, folding `-0.0` into `0.0`.
pub(crate) fn checked_q_value(q: f32) -> Result<f32, HeaderError> {
    validate_q_value(q)?;
    Ok(if q == 0.0 { 0.0 } else { q })
}

/// Writes `;q=<value>` when `q` is set.
pub(crate) fn write_q_param(f: &mut fmt::Formatter<'_>, q: f32) -> fmt::Result {
    if q == QVALUE_UNSET {
        return Ok(());
    }
    // -0.0 would render as "-0", which is not a qvalue.
    let q = if q == 0.0 { 0.0 } else { q };
    write!(f, ";q={}", q)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        assert!(validate_q_value(0.0).is_ok());
        assert!(validate_q_value(1.0).is_ok());
        assert!(validate_q_value(QVALUE_UNSET).is_ok());
    }

    #[test]
    fn out_of_range_and_nan_are_rejected() {
        assert_eq!(validate_q_value(1.5), Err(HeaderError::InvalidQValue(1.5)));
        assert!(validate_q_value(-0.5).is_err());
        assert!(validate_q_value(f32::NAN).is_err());
        assert!(validate_q_value(f32::INFINITY).is_err());
    }

    #[test]
    fn negative_zero_is_stored_as_zero() {
        let q = checked_q_value(-0.0).unwrap();
        assert!(q.is_sign_positive());
        assert_eq!(q, 0.0);
    }
}
