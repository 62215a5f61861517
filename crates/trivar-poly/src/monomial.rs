//! Monomials with bounded per-variable degree.
//!
//! A monomial pairs an integer coefficient with a [`Degrees`] key. Zero
//! is canonical: a zero coefficient forces the key to (0, 0, 0), so a
//! zero monomial has a single representation no matter which exponents it
//! was built with. Multiplication is total: a product whose degree would
//! exceed [`MAX_DEGREE`] on any axis collapses to zero instead of
//! failing.

use std::fmt;
use std::ops::{Mul, Neg};

use num_traits::One;
use thiserror::Error;

use crate::degrees::Degrees;

/// Largest exponent a single variable may carry.
pub const MAX_DEGREE: u8 = 9;

/// Errors reported when constructing a monomial.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DegreeError {
    /// An exponent fell outside the supported range.
    #[error("exponent {exponent} of {variable} out of range (0-9)")]
    OutOfRange {
        /// The variable whose exponent was rejected.
        variable: char,
        /// The offending exponent value.
        exponent: i32,
    },
}

/// A single term: coefficient times x^dx * y^dy * z^dz.
///
/// Immutable value type; every operation returns a new instance.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Monomial {
    coefficient: i64,
    degrees: Degrees,
}

impl Monomial {
    /// Creates a monomial, validating every exponent against the 0-9
    /// range before the zero-coefficient normalization applies.
    ///
    /// # Errors
    ///
    /// Returns [`DegreeError::OutOfRange`] if any exponent lies outside
    /// `0..=9`.
    pub fn new(coefficient: i64, dx: i32, dy: i32, dz: i32) -> Result<Self, DegreeError> {
        for (variable, exponent) in [('x', dx), ('y', dy), ('z', dz)] {
            if !(0..=i32::from(MAX_DEGREE)).contains(&exponent) {
                return Err(DegreeError::OutOfRange { variable, exponent });
            }
        }
        Ok(Self::from_parts(
            coefficient,
            Degrees::new(dx as u8, dy as u8, dz as u8),
        ))
    }

    /// Builds a monomial from already-validated parts, normalizing the
    /// canonical zero.
    pub(crate) fn from_parts(coefficient: i64, degrees: Degrees) -> Self {
        if coefficient == 0 {
            Self::zero()
        } else {
            Self {
                coefficient,
                degrees,
            }
        }
    }

    /// The canonical zero monomial.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            coefficient: 0,
            degrees: Degrees::new(0, 0, 0),
        }
    }

    /// Returns the coefficient.
    #[must_use]
    pub const fn coefficient(&self) -> i64 {
        self.coefficient
    }

    /// Returns the degree key.
    #[must_use]
    pub const fn degrees(&self) -> Degrees {
        self.degrees
    }

    /// Returns true if the coefficient is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.coefficient == 0
    }

    /// Compares degree keys only, ignoring coefficients.
    #[must_use]
    pub fn has_same_degrees(&self, other: &Self) -> bool {
        self.degrees == other.degrees
    }

    /// Multiplies two monomials.
    ///
    /// Exponents add component-wise; if any axis exceeds [`MAX_DEGREE`],
    /// the product is the zero monomial (truncation, not an error).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let dx = self.degrees.dx() + other.degrees.dx();
        let dy = self.degrees.dy() + other.degrees.dy();
        let dz = self.degrees.dz() + other.degrees.dz();

        if dx > MAX_DEGREE || dy > MAX_DEGREE || dz > MAX_DEGREE {
            return Self::zero();
        }

        Self {
            coefficient: self.coefficient * other.coefficient,
            degrees: Degrees::new(dx, dy, dz),
        }
    }
}

impl Neg for Monomial {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_parts(-self.coefficient, self.degrees)
    }
}

impl Mul for Monomial {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Monomial::mul(&self, &rhs)
    }
}

impl One for Monomial {
    fn one() -> Self {
        Self {
            coefficient: 1,
            degrees: Degrees::new(0, 0, 0),
        }
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut out = String::new();
        let constant = self.degrees.is_constant();
        match self.coefficient {
            -1 if constant => out.push_str("-1"),
            -1 => out.push('-'),
            1 if constant => out.push('1'),
            1 => {}
            c => out.push_str(&c.to_string()),
        }

        for (letter, exponent) in [
            ('x', self.degrees.dx()),
            ('y', self.degrees.dy()),
            ('z', self.degrees.dz()),
        ] {
            if exponent > 0 {
                out.push(letter);
                if exponent > 1 {
                    out.push('^');
                    out.push_str(&exponent.to_string());
                }
            }
        }

        // Residual coefficient-1 case; unreachable after the prefix
        // rules above but keeps rendering total.
        if out.is_empty() && self.coefficient == 1 {
            out.push('1');
        }

        f.write_str(&out)
    }
}
