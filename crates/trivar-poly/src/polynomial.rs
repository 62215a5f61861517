//! Sparse trivariate polynomials over the integers.
//!
//! Terms are stored in a `BTreeMap` keyed by [`Degrees`], ascending in
//! the lexicographic key order. The map never holds a zero coefficient:
//! every mutation funnels through a single merge primitive that prunes
//! cancelled terms, so the stored form is canonical and equality is plain
//! map equality.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{One, Zero};

use crate::degrees::Degrees;
use crate::monomial::Monomial;

/// A finite sum of monomials with distinct degree keys.
///
/// Copies are independent; no backing storage is shared.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Polynomial {
    terms: BTreeMap<Degrees, i64>,
}

impl Polynomial {
    /// Creates the zero polynomial.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Builds a polynomial by accumulating the given monomials.
    ///
    /// Monomials with equal degree keys are summed in sequence order;
    /// zero monomials and cancelled sums contribute nothing.
    #[must_use]
    pub fn from_terms(terms: &[Monomial]) -> Self {
        terms.iter().copied().collect()
    }

    /// Folds one monomial into the term map.
    ///
    /// This is the single normalization choke-point: absence counts as a
    /// zero coefficient, and a sum reaching zero removes the key.
    fn merge_term(&mut self, m: Monomial) {
        if m.is_zero() {
            return;
        }
        let key = m.degrees();
        let coeff = self.terms.entry(key).or_insert(0);
        *coeff += m.coefficient();
        if *coeff == 0 {
            self.terms.remove(&key);
        }
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterates over the terms in ascending degree-key order.
    pub fn terms(&self) -> impl Iterator<Item = Monomial> + '_ {
        self.terms
            .iter()
            .map(|(&degrees, &coeff)| Monomial::from_parts(coeff, degrees))
    }

    /// Returns the term with the highest degree key, if any.
    #[must_use]
    pub fn leading_term(&self) -> Option<Monomial> {
        self.terms
            .iter()
            .next_back()
            .map(|(&degrees, &coeff)| Monomial::from_parts(coeff, degrees))
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result += other;
        result
    }

    /// Negates every coefficient; the term set is unchanged.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            terms: self.terms.iter().map(|(&d, &c)| (d, -c)).collect(),
        }
    }

    /// Subtracts `other` from `self`, defined as adding the negation.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies two polynomials (schoolbook cross product).
    ///
    /// Monomial products whose degree overflows any axis collapse to
    /// zero and are elided by the merge, so the result can have fewer
    /// terms than the cross product suggests.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let mut result = Self::zero();
        for m1 in self.terms() {
            for m2 in other.terms() {
                result.merge_term(m1.mul(m2));
            }
        }
        result
    }
}

impl From<Monomial> for Polynomial {
    fn from(m: Monomial) -> Self {
        let mut poly = Self::new();
        poly.merge_term(m);
        poly
    }
}

impl Extend<Monomial> for Polynomial {
    fn extend<I: IntoIterator<Item = Monomial>>(&mut self, iter: I) {
        for m in iter {
            self.merge_term(m);
        }
    }
}

impl FromIterator<Monomial> for Polynomial {
    fn from_iter<I: IntoIterator<Item = Monomial>>(iter: I) -> Self {
        let mut poly = Self::new();
        poly.extend(iter);
        poly
    }
}

impl AddAssign<&Polynomial> for Polynomial {
    fn add_assign(&mut self, rhs: &Polynomial) {
        for m in rhs.terms() {
            self.merge_term(m);
        }
    }
}

impl AddAssign for Polynomial {
    fn add_assign(&mut self, rhs: Polynomial) {
        *self += &rhs;
    }
}

impl Add for Polynomial {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += &rhs;
        self
    }
}

impl SubAssign<&Polynomial> for Polynomial {
    fn sub_assign(&mut self, rhs: &Polynomial) {
        *self += &rhs.neg();
    }
}

impl SubAssign for Polynomial {
    fn sub_assign(&mut self, rhs: Polynomial) {
        *self -= &rhs;
    }
}

impl Sub for Polynomial {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= &rhs;
        self
    }
}

impl MulAssign<&Polynomial> for Polynomial {
    fn mul_assign(&mut self, rhs: &Polynomial) {
        // Build into a fresh map, then replace wholesale
        *self = Polynomial::mul(self, rhs);
    }
}

impl MulAssign for Polynomial {
    fn mul_assign(&mut self, rhs: Polynomial) {
        *self *= &rhs;
    }
}

impl Mul for Polynomial {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Polynomial::mul(&self, &rhs)
    }
}

impl Neg for Polynomial {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Polynomial::neg(&self)
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Self::Output {
        Polynomial::neg(self)
    }
}

impl Zero for Polynomial {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }
}

impl One for Polynomial {
    fn one() -> Self {
        Self::from(Monomial::one())
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        // Highest degree key first; subsequent terms carry a sign-aware
        // separator and never a doubled minus.
        for (i, term) in self
            .terms
            .iter()
            .rev()
            .map(|(&degrees, &coeff)| Monomial::from_parts(coeff, degrees))
            .enumerate()
        {
            if i == 0 {
                write!(f, "{term}")?;
            } else if term.coefficient() > 0 {
                write!(f, " + {term}")?;
            } else {
                write!(f, " - {}", -term)?;
            }
        }
        Ok(())
    }
}
