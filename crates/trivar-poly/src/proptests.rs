//! Property-based tests for bounded-degree polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::degrees::Degrees;
    use crate::monomial::{Monomial, MAX_DEGREE};
    use crate::polynomial::Polynomial;

    // Strategy for a single valid exponent
    fn exponent() -> impl Strategy<Value = i32> {
        0..=i32::from(MAX_DEGREE)
    }

    // Strategy for generating arbitrary valid monomials
    fn monomial() -> impl Strategy<Value = Monomial> {
        (-50i64..=50, exponent(), exponent(), exponent())
            .prop_map(|(c, dx, dy, dz)| Monomial::new(c, dx, dy, dz).unwrap())
    }

    // Strategy for generating small polynomials
    fn poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec(monomial(), 0..=6).prop_map(|ms| ms.into_iter().collect())
    }

    proptest! {
        // Monomial invariants

        #[test]
        fn monomial_zero_iff_zero_coefficient(
            c in -50i64..=50,
            dx in exponent(),
            dy in exponent(),
            dz in exponent(),
        ) {
            let m = Monomial::new(c, dx, dy, dz).unwrap();
            prop_assert_eq!(m.is_zero(), c == 0);
            if c == 0 {
                // Canonical zero regardless of the supplied exponents
                prop_assert_eq!(m.degrees(), Degrees::default());
            }
        }

        #[test]
        fn monomial_overflow_collapses_to_zero(a in monomial(), b in monomial()) {
            let product = a.mul(&b);
            if a.is_zero() || b.is_zero() {
                prop_assert!(product.is_zero());
            } else {
                let overflow = a.degrees().dx() + b.degrees().dx() > MAX_DEGREE
                    || a.degrees().dy() + b.degrees().dy() > MAX_DEGREE
                    || a.degrees().dz() + b.degrees().dz() > MAX_DEGREE;
                if overflow {
                    prop_assert!(product.is_zero());
                } else {
                    prop_assert_eq!(
                        product.coefficient(),
                        a.coefficient() * b.coefficient()
                    );
                }
            }
        }

        // Polynomial ring axioms

        #[test]
        fn poly_add_commutative(a in poly(), b in poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_add_associative(a in poly(), b in poly(), c in poly()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn poly_add_identity(a in poly()) {
            let zero = Polynomial::zero();
            prop_assert_eq!(a.add(&zero), a.clone());
            prop_assert_eq!(zero.add(&a), a);
        }

        #[test]
        fn poly_additive_inverse(a in poly()) {
            prop_assert!(a.add(&a.neg()).is_zero());
            prop_assert!(a.sub(&a).is_zero());
        }

        #[test]
        fn poly_mul_commutative(a in poly(), b in poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_mul_associative(a in poly(), b in poly(), c in poly()) {
            // Overflow truncation keeps associativity: exponents are
            // non-negative, so a partial product never exceeds a bound
            // the full product respects.
            prop_assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
        }

        #[test]
        fn poly_distributive(a in poly(), b in poly(), c in poly()) {
            // (a + b) * c = a * c + b * c
            let left = a.add(&b).mul(&c);
            let right = a.mul(&c).add(&b.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_mul_zero(a in poly()) {
            let zero = Polynomial::zero();
            prop_assert!(a.mul(&zero).is_zero());
            prop_assert!(zero.mul(&a).is_zero());
        }

        #[test]
        fn poly_neg_involution(a in poly()) {
            prop_assert_eq!(a.neg().neg(), a);
        }

        // Constructor round-trip: folding a sequence with duplicate keys
        // and zero coefficients matches pre-summing by hand.
        #[test]
        fn from_terms_accumulates(ms in proptest::collection::vec(monomial(), 0..=8)) {
            let direct: Polynomial = ms.iter().copied().collect();

            let mut summed = std::collections::BTreeMap::new();
            for m in &ms {
                if !m.is_zero() {
                    *summed.entry(m.degrees()).or_insert(0i64) += m.coefficient();
                }
            }
            let expected: Polynomial = summed
                .into_iter()
                .filter(|&(_, c)| c != 0)
                .map(|(d, c)| {
                    Monomial::new(c, d.dx().into(), d.dy().into(), d.dz().into()).unwrap()
                })
                .collect();

            prop_assert_eq!(direct, expected);
        }

        // Rendering invariants

        #[test]
        fn render_zero_iff_is_zero(a in poly()) {
            prop_assert_eq!(a.to_string() == "0", a.is_zero());
        }

        #[test]
        fn render_has_no_doubled_sign(a in poly()) {
            let s = a.to_string();
            prop_assert!(!s.contains("+ -"));
            prop_assert!(!s.contains("--"));
        }
    }
}
