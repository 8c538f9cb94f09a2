//! Exact fractions in lowest terms

use crate::error::DomainError;
use num_integer::Integer;
use num_rational::Ratio;
use core::convert::TryFrom;
use num_traits::ToPrimitive;
use std::fmt;
use std::hash::{Hash, Hasher};

/// An immutable fraction `numer / denom`, kept in lowest terms with a positive denominator.
///
/// It's a thin wrapper of [Ratio] whose constructors report a zero denominator
/// as a [DomainError] instead of panicking.
#[derive(Clone, Debug)]
pub struct Rational<T>(Ratio<T>);

impl<T: Clone + Integer> Rational<T> {
    /// Create a rational and reduce it to lowest terms.
    pub fn new(numer: T, denom: T) -> Result<Self, DomainError> {
        if denom.is_zero() {
            return Err(DomainError::ZeroDenominator);
        }
        Ok(Rational(Ratio::new(numer, denom)))
    }

    /// Create a rational from a pair the caller guarantees to be coprime.
    ///
    /// The gcd reduction is skipped, only the sign is moved to the numerator.
    pub fn from_reduced(numer: T, denom: T) -> Result<Self, DomainError> {
        if denom.is_zero() {
            return Err(DomainError::ZeroDenominator);
        }
        debug_assert!(numer.gcd(&denom).is_one());

        if denom < T::zero() {
            let zero = T::zero();
            Ok(Rational(Ratio::new_raw(zero.clone() - numer, zero - denom)))
        } else {
            Ok(Rational(Ratio::new_raw(numer, denom)))
        }
    }

    /// Create a rational representing an integer
    #[inline]
    pub fn from_integer(t: T) -> Self {
        Rational(Ratio::from_integer(t))
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }
}

impl<T> Rational<T> {
    #[inline]
    pub fn numer(&self) -> &T {
        self.0.numer()
    }

    /// Get the denominator, which is always positive
    #[inline]
    pub fn denom(&self) -> &T {
        self.0.denom()
    }

    #[inline]
    pub fn into_ratio(self) -> Ratio<T> {
        self.0
    }
}

impl<T: Clone + Integer + ToPrimitive> Rational<T> {
    /// Approximate the fraction with a float. Returns NaN if either part is not representable.
    pub fn to_f64(&self) -> f64 {
        match (self.0.numer().to_f64(), self.0.denom().to_f64()) {
            (Some(n), Some(d)) => n / d,
            _ => f64::NAN,
        }
    }
}

impl<T: Clone + Integer> PartialEq for Rational<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Clone + Integer> Eq for Rational<T> {}

impl<T: Clone + Integer + Hash> Hash for Rational<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}

impl<T> From<Rational<T>> for Ratio<T> {
    #[inline]
    fn from(r: Rational<T>) -> Self {
        r.0
    }
}

impl<T: Clone + Integer> TryFrom<Ratio<T>> for Rational<T> {
    type Error = DomainError;

    /// The pair is reduced again, since [Ratio::new_raw] can hold any pair
    fn try_from(r: Ratio<T>) -> Result<Self, DomainError> {
        let (n, d) = r.into_raw();
        Rational::new(n, d)
    }
}

impl<T: fmt::Display + Clone + Integer> fmt::Display for Rational<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.denom().is_one() {
            write!(f, "{}", self.0.numer())
        } else {
            write!(f, "{}/{}", self.0.numer(), self.0.denom())
        }
    }
}
