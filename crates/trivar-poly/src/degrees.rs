//! Degree keys for trivariate monomials.
//!
//! A degree key is the (dx, dy, dz) exponent triple identifying a
//! monomial's shape, independent of its coefficient. Keys compare
//! lexicographically with x most significant, which is both the storage
//! order of polynomial terms and (reversed) the rendering order.

/// The exponent triple of a trivariate monomial.
///
/// Ordering is lexicographic: dx first, then dy, then dz. The derived
/// `Ord` produces exactly this because of field declaration order.
///
/// The key itself accepts any `u8` exponents; the 0-9 range check lives
/// in [`Monomial::new`](crate::monomial::Monomial::new).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Degrees {
    dx: u8,
    dy: u8,
    dz: u8,
}

impl Degrees {
    /// Creates a degree key from the three exponents.
    #[must_use]
    pub const fn new(dx: u8, dy: u8, dz: u8) -> Self {
        Self { dx, dy, dz }
    }

    /// Returns the exponent of x.
    #[must_use]
    pub const fn dx(&self) -> u8 {
        self.dx
    }

    /// Returns the exponent of y.
    #[must_use]
    pub const fn dy(&self) -> u8 {
        self.dy
    }

    /// Returns the exponent of z.
    #[must_use]
    pub const fn dz(&self) -> u8 {
        self.dz
    }

    /// Returns true if all exponents are zero.
    #[must_use]
    pub const fn is_constant(&self) -> bool {
        self.dx == 0 && self.dy == 0 && self.dz == 0
    }

    /// Computes the total degree.
    #[must_use]
    pub fn total_degree(&self) -> u32 {
        u32::from(self.dx) + u32::from(self.dy) + u32::from(self.dz)
    }
}
