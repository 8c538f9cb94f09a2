use super::simple::SimpleContinuedFraction;
use std::cell::RefCell;

#[derive(Clone, Debug)]
struct Expansion {
    coeffs: Vec<f64>, // never empty
    remainder: f64,   // complete quotient whose floor is the last coefficient
}

impl Expansion {
    fn advance(&mut self) {
        if self.remainder.is_finite() {
            self.remainder = 1. / (self.remainder - self.remainder.floor());
        }
        self.coeffs.push(self.remainder.floor());
    }
}

/// The simple continued fraction expansion of a real number `x`, computed lazily.
///
/// Coefficients are derived by repeatedly taking the floor and the reciprocal of the fractional
/// part, and cached as they are queried. The expansion never ends: once a remainder becomes
/// exactly an integer, all following coefficients are positive infinity. Round-off of the float
/// arithmetic eventually makes the coefficients meaningless for irrational numbers.
///
/// The cache is behind a [RefCell], so the fraction can be moved across threads but not shared.
#[derive(Clone, Debug)]
pub struct RealExpansion {
    state: RefCell<Expansion>,
}

impl RealExpansion {
    pub fn new(x: f64) -> Self {
        RealExpansion {
            state: RefCell::new(Expansion { coeffs: vec![x.floor()], remainder: x }),
        }
    }

    /// Number of cached coefficients
    pub fn cached_len(&self) -> usize {
        self.state.borrow().coeffs.len()
    }
}

/// Create the lazy continued fraction expansion of `x`
#[inline]
pub fn from_number(x: f64) -> RealExpansion {
    RealExpansion::new(x)
}

impl SimpleContinuedFraction for RealExpansion {
    fn coefficient(&self, i: isize) -> f64 {
        if i < 0 {
            return 0.;
        }

        let i = i as usize;
        let mut state = self.state.borrow_mut();
        while state.coeffs.len() <= i {
            state.advance();
        }
        state.coeffs[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cont_frac::{ContinuedFraction, Depth};
    use crate::error::DomainError;
    use std::f64::consts::{PI, SQRT_2};

    #[test]
    fn sqrt2_test() {
        let sqrt2 = from_number(SQRT_2);
        assert_eq!(sqrt2.coefficient(0), 1.);
        for i in 1..20 {
            assert_eq!(sqrt2.coefficient(i), 2., "fail at i={}", i);
        }
        assert_eq!(sqrt2.coefficient(-1), 0.);
        assert_eq!(sqrt2.depth(), Depth::Infinite);
        assert_eq!(sqrt2.to_rational::<i64>(), Err(DomainError::InfiniteDepth));
    }

    #[test]
    fn cache_test() {
        let pi = RealExpansion::new(PI);
        assert_eq!(pi.cached_len(), 1);
        assert_eq!(pi.coefficient(4), 292.);
        assert_eq!(pi.cached_len(), 5);

        // lower indices are served from the cache
        assert_eq!(pi.coefficient(1), 7.);
        assert_eq!(pi.cached_len(), 5);
        assert_eq!(pi.clone().coefficient(3), 1.);

        let r = pi.to_rational_at::<i64>(Depth::Finite(3)).unwrap();
        assert_eq!((*r.numer(), *r.denom()), (355, 113));
    }

    #[test]
    fn rational_number_test() {
        // 1.25 = [1; 4]
        let cf = from_number(1.25);
        assert_eq!(cf.coefficient(0), 1.);
        assert_eq!(cf.coefficient(1), 4.);
        assert_eq!(cf.coefficient(2), f64::INFINITY);
        assert_eq!(cf.coefficient(5), f64::INFINITY);
        assert_eq!(cf.eval_upto(10), 1.25);
        assert_eq!(cf.eval(), 1.25);

        // -1.5 = [-2; 2]
        let cf = from_number(-1.5);
        assert_eq!(cf.coefficient(0), -2.);
        assert_eq!(cf.coefficient(1), 2.);
        assert_eq!(cf.eval(), -1.5);
    }

    #[test]
    fn eval_test() {
        let cf = from_number(PI);
        assert!((cf.eval() - PI).abs() < 1e-12);
        assert!((cf.eval_upto(3) - 355. / 113.).abs() < 1e-15);
    }
}
