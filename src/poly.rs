//! Recursive polynomial evaluation and rendering
//!
//! Coefficients are given lowest power first, so `[c0, c1, c2]` is
//! `c0 + c1·x + c2·x²`. Evaluation peels one coefficient per call
//! (`c0 + x · p'(x)`), which is Horner's rule written recursively.
//!
//! # Example
//!
//! ```rust
//! use dynamic_containers::poly;
//!
//! let coeffs = [-1, 8, -4, 7];
//! let value = poly::evaluate(-2, &coeffs, 3).unwrap();
//! assert_eq!(value, -89);
//! assert_eq!(
//!     poly::render(-2, &coeffs, 3, value).unwrap(),
//!     "p(x,n) = p(-2, 3) =  -1x^0 +8x^1 -4x^2 +7x^3= -89"
//! );
//! ```

use std::fmt;

use thiserror::Error;

/// Error type for polynomial operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PolyError {
    /// The degree needs more coefficients than were supplied
    #[error("degree {degree} is out of range for {available} coefficients")]
    DegreeOutOfRange { degree: usize, available: usize },
    /// An intermediate value did not fit in an `i64`
    #[error("polynomial value overflows i64")]
    Overflow,
    /// The output sink refused the write
    #[error("failed to write polynomial")]
    Format(#[from] fmt::Error),
}

fn terms(coeffs: &[i64], degree: usize) -> Result<&[i64], PolyError> {
    coeffs.get(..=degree).ok_or(PolyError::DegreeOutOfRange {
        degree,
        available: coeffs.len(),
    })
}

fn evaluate_terms(x: i64, coeffs: &[i64]) -> Option<i64> {
    match coeffs.split_first() {
        None => Some(0),
        Some((&head, tail)) => x.checked_mul(evaluate_terms(x, tail)?)?.checked_add(head),
    }
}

/// Evaluates the polynomial of the given degree at `x`
///
/// Only `coeffs[..=degree]` takes part.
///
/// # Errors
/// Returns [`PolyError::DegreeOutOfRange`] if `degree >= coeffs.len()` and
/// [`PolyError::Overflow`] if the value does not fit in an `i64`.
pub fn evaluate(x: i64, coeffs: &[i64], degree: usize) -> Result<i64, PolyError> {
    evaluate_terms(x, terms(coeffs, degree)?).ok_or(PolyError::Overflow)
}

/// Writes the terms of `coeffs` lowest power first, recursing down to `x^0`
fn write_terms<W: fmt::Write>(sink: &mut W, coeffs: &[i64]) -> fmt::Result {
    let Some((&last, rest)) = coeffs.split_last() else {
        return Ok(());
    };
    write_terms(sink, rest)?;
    let sign = if last >= 0 { " +" } else { " " };
    write!(sink, "{}{}x^{}", sign, last, rest.len())
}

/// Writes `p(x,n) = p(<x>, <degree>) = <terms>= <value>` to `sink`
///
/// Each term is written as ` +<c>x^<n>`, or ` <c>x^<n>` for a negative
/// coefficient. No trailing newline is written.
///
/// # Errors
/// Returns [`PolyError::DegreeOutOfRange`] if `degree >= coeffs.len()` and
/// [`PolyError::Format`] if the sink fails.
pub fn write_poly<W: fmt::Write>(
    sink: &mut W,
    x: i64,
    coeffs: &[i64],
    degree: usize,
    value: i64,
) -> Result<(), PolyError> {
    let coeffs = terms(coeffs, degree)?;
    write!(sink, "p(x,n) = p({}, {}) = ", x, degree)?;
    write_terms(sink, coeffs)?;
    write!(sink, "= {}", value)?;
    Ok(())
}

/// Renders the polynomial line described in [`write_poly`] into a `String`
pub fn render(x: i64, coeffs: &[i64], degree: usize, value: i64) -> Result<String, PolyError> {
    let mut out = String::new();
    write_poly(&mut out, x, coeffs, degree, value)?;
    Ok(out)
}
