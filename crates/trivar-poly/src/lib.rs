//! # trivar-poly
//!
//! Exact polynomial arithmetic in three variables (x, y, z) with integer
//! coefficients and per-variable degree capped at 9.
//!
//! This crate provides:
//! - [`Degrees`]: the (dx, dy, dz) exponent key with lexicographic order
//! - [`Monomial`]: coefficient plus degree key, with a canonical zero
//! - [`Polynomial`]: a sparse, degree-sorted term map that never stores a
//!   zero coefficient
//!
//! Arithmetic is total over the bounded-degree domain: a product whose
//! degree would exceed 9 on any axis collapses to the zero monomial rather
//! than failing. The only reportable error is an out-of-range exponent at
//! monomial construction ([`DegreeError`]).
//!
//! ## Quick Start
//!
//! ```rust
//! use trivar_poly::{Monomial, Polynomial};
//!
//! let p = Polynomial::from_terms(&[
//!     Monomial::new(1, 1, 0, 0)?, // x
//!     Monomial::new(1, 0, 1, 0)?, // y
//! ]);
//! let square = p.mul(&p);
//! assert_eq!(square.to_string(), "x^2 + 2xy + y^2");
//! # Ok::<(), trivar_poly::DegreeError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod degrees;
pub mod monomial;
pub mod polynomial;

#[cfg(test)]
mod proptests;

pub use degrees::Degrees;
pub use monomial::{DegreeError, Monomial, MAX_DEGREE};
pub use polynomial::Polynomial;
