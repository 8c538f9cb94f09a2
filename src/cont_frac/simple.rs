//! Simple continued fractions and their exact conversion

use super::block::Block;
use super::general::ContinuedFraction;
use super::Depth;
use crate::error::DomainError;
use crate::rational::Rational;
use core::convert::TryFrom;
use num_integer::Integer;
use num_traits::{CheckedAdd, CheckedMul, FromPrimitive};

/// A helper trait to define valid integer types for exact conversions
pub trait ExactInteger: Integer + Clone + CheckedAdd + CheckedMul + FromPrimitive {}
impl<T: Integer + Clone + CheckedAdd + CheckedMul + FromPrimitive> ExactInteger for T {}

/// This trait defines a simple continued fraction `c_0 + 1/(c_1 + 1/(c_2 + ...))`
/// by its coefficients. Its partial numerators are all one, and the coefficients are
/// the partial denominators.
pub trait SimpleContinuedFraction {
    /// Return the `i`-th coefficient, or positive infinity past the end of the sequence.
    /// Coefficients with negative index are preferred to be zero, though it's not required.
    fn coefficient(&self, i: isize) -> f64;

    /// Index of the last finite coefficient. The default is an endless sequence.
    fn depth(&self) -> Depth {
        Depth::Infinite
    }

    /// Convert the whole fraction into a reduced rational.
    /// See [SimpleContinuedFraction::to_rational_at]
    fn to_rational<T: ExactInteger>(&self) -> Result<Rational<T>, DomainError> {
        self.to_rational_at(self.depth())
    }

    /// Return the reduced rational `c_0 + 1/(c_1 + 1/(... + 1/c_depth))`.
    ///
    /// The pair is folded from the last coefficient with integer arithmetic and
    /// divided by its gcd after every step, so the intermediate values stay as
    /// small as the final fraction.
    fn to_rational_at<T: ExactInteger>(&self, depth: Depth) -> Result<Rational<T>, DomainError> {
        let depth = depth.finite().ok_or(DomainError::InfiniteDepth)?;

        let mut num: T = integer_coefficient(self, depth)?;
        let mut deno = T::one();
        for i in (0..depth).rev() {
            let c: T = integer_coefficient(self, i)?;
            let temp = c
                .checked_mul(&num)
                .and_then(|v| v.checked_add(&deno))
                .ok_or(DomainError::Overflow { index: i })?;
            deno = num;
            num = temp;

            let g = num.gcd(&deno);
            num = num / g.clone();
            deno = deno / g;
        }
        Rational::from_reduced(num, deno)
    }

    /// Returns an iterator of the convergents `c_0`, `c_0 + 1/c_1`, ... in lowest terms.
    /// The iterator stops after the last coefficient, at a coefficient that is not an integer,
    /// when the convergent overflows `T`, or when a convergent has a zero denominator
    /// (e.g. `[0; 0]`).
    fn convergents<T: ExactInteger>(&self) -> Convergents<'_, Self, T> {
        Convergents {
            cf: self,
            block: Block::identity(),
            index: 0,
            depth: self.depth(),
        }
    }
}

fn integer_coefficient<S: SimpleContinuedFraction + ?Sized, T: FromPrimitive>(
    cf: &S,
    index: usize,
) -> Result<T, DomainError> {
    let i = isize::try_from(index).map_err(|_| DomainError::IndexOutOfRange { index })?;
    let value = cf.coefficient(i);
    if value.fract() != 0. {
        // also rejects infinity and NaN
        return Err(DomainError::NonIntegerCoefficient { index, value });
    }
    T::from_f64(value).ok_or(DomainError::NonIntegerCoefficient { index, value })
}

impl<S: SimpleContinuedFraction + ?Sized> ContinuedFraction for S {
    #[inline]
    fn partial_numerator(&self, _: usize) -> f64 {
        1.
    }

    #[inline]
    fn partial_denominator(&self, i: usize) -> f64 {
        self.coefficient(i as isize)
    }
}

/// Iterator of convergents of a [SimpleContinuedFraction]
pub struct Convergents<'a, S: ?Sized, T> {
    cf: &'a S,
    block: Block<T>,
    index: usize,
    depth: Depth,
}

impl<'a, S: SimpleContinuedFraction + ?Sized, T: ExactInteger> Iterator for Convergents<'a, S, T> {
    type Item = Rational<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if matches!(self.depth, Depth::Finite(d) if self.index > d) {
            return None;
        }

        let a: T = integer_coefficient(self.cf, self.index).ok()?;
        let (p, q) = self.block.checked_rmove(a)?;
        self.block.update(p.clone(), q.clone());
        self.index += 1;

        // successive convergents are always coprime
        Rational::from_reduced(p, q).ok()
    }
}

/// A simple continued fraction described by a coefficient function
#[derive(Clone, Copy)]
pub struct FnSimpleContinuedFraction<F> {
    coefficients: F,
    depth: Depth,
}

impl<F: Fn(isize) -> f64> FnSimpleContinuedFraction<F> {
    /// Create an endless fraction from the coefficient function
    pub fn new(coefficients: F) -> Self {
        FnSimpleContinuedFraction { coefficients, depth: Depth::Infinite }
    }

    /// Declare the index of the last finite coefficient
    pub fn with_depth(self, depth: Depth) -> Self {
        FnSimpleContinuedFraction { depth, ..self }
    }
}

impl<F: Fn(isize) -> f64> SimpleContinuedFraction for FnSimpleContinuedFraction<F> {
    #[inline]
    fn coefficient(&self, i: isize) -> f64 {
        (self.coefficients)(i)
    }

    #[inline]
    fn depth(&self) -> Depth {
        self.depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cont_frac::EvalOptions;
    use std::f64::consts::SQRT_2;

    fn sqrt2() -> FnSimpleContinuedFraction<impl Fn(isize) -> f64> {
        // [1; 2, 2, 2, ...]
        FnSimpleContinuedFraction::new(|i| match i {
            0 => 1.,
            i if i < 0 => 0.,
            _ => 2.,
        })
    }

    #[test]
    fn eval_upto_test() {
        // [1; 2, 2, 2, 2]
        let cf = FnSimpleContinuedFraction::new(|i| match i {
            0 => 1.,
            1..=4 => 2.,
            _ => f64::INFINITY,
        })
        .with_depth(Depth::Finite(4));

        assert_eq!(cf.eval_upto(0), 1.);
        assert_eq!(cf.eval_upto(1), 1. + 1. / 2.);
        assert_eq!(cf.eval_upto(2), 1. + 1. / (2. + 1. / 2.));
        assert_eq!(cf.eval_upto(3), 1. + 1. / (2. + 1. / (2. + 1. / 2.)));

        let full = 1. + 1. / (2. + 1. / (2. + 1. / (2. + 1. / 2.)));
        assert_eq!(cf.eval_upto(4), full);
        assert_eq!(cf.eval_upto(5), full);
        assert_eq!(cf.eval_upto(6), full);
        assert!((cf.eval() - full).abs() < 1e-15);
    }

    #[test]
    fn eval_test() {
        assert!((sqrt2().eval() - SQRT_2).abs() < 1e-8);
        let loose = sqrt2().eval_with_options(EvalOptions::default().with_epsilon(1e-3));
        assert!((loose - SQRT_2).abs() < 1e-3);
    }

    #[test]
    fn eval_with_test() {
        let result = sqrt2().eval_with(|prev, current| (prev - current).abs() <= 1e-6);
        assert_ne!(result, SQRT_2);
        assert_ne!(result, sqrt2().eval());
        assert!((result - SQRT_2).abs() <= 1e-6);
    }

    #[test]
    fn to_rational_test() {
        assert_eq!(sqrt2().to_rational::<i64>(), Err(DomainError::InfiniteDepth));
        assert_eq!(sqrt2().to_rational_at::<i64>(Depth::Infinite), Err(DomainError::InfiniteDepth));

        // a truncated endless fraction is still convertible
        let r = sqrt2().to_rational_at::<i64>(Depth::Finite(4)).unwrap();
        assert_eq!((*r.numer(), *r.denom()), (41, 29));

        // [1; 0] = 1 + 1/0
        let inf = FnSimpleContinuedFraction::new(|i| if i == 0 { 1. } else { 0. });
        assert_eq!(inf.to_rational_at::<i64>(Depth::Finite(1)), Err(DomainError::ZeroDenominator));

        let half = FnSimpleContinuedFraction::new(|i| if i == 1 { 2.5 } else { 1. });
        assert_eq!(
            half.to_rational_at::<i64>(Depth::Finite(2)),
            Err(DomainError::NonIntegerCoefficient { index: 1, value: 2.5 })
        );
    }

    #[test]
    fn to_rational_index_range_test() {
        let ones = FnSimpleContinuedFraction::new(|_| 1.);
        assert_eq!(
            ones.to_rational_at::<i64>(Depth::Finite(usize::MAX)),
            Err(DomainError::IndexOutOfRange { index: usize::MAX })
        );
    }

    #[test]
    fn to_rational_overflow_test() {
        // F(n+1)/F(n) grows past i8 quickly
        let phi = FnSimpleContinuedFraction::new(|_| 1.);
        let r = phi.to_rational_at::<i8>(Depth::Finite(8)).unwrap();
        assert_eq!((*r.numer(), *r.denom()), (55, 34));
        assert!(matches!(
            phi.to_rational_at::<i8>(Depth::Finite(12)),
            Err(DomainError::Overflow { .. })
        ));
    }

    #[test]
    fn convergents_test() {
        let convs: Vec<_> = sqrt2().convergents::<i64>().take(5).collect();
        let expected: Vec<_> = vec![(1, 1), (3, 2), (7, 5), (17, 12), (41, 29)]
            .into_iter()
            .map(|(n, d)| Rational::new(n, d).unwrap())
            .collect();
        assert_eq!(convs, expected);

        let finite = FnSimpleContinuedFraction::new(|i| if i <= 2 { 2. } else { f64::INFINITY })
            .with_depth(Depth::Finite(2));
        assert_eq!(finite.convergents::<i32>().count(), 3);

        // stops at the zero denominator of [0; 0]
        let zero = FnSimpleContinuedFraction::new(|_| 0.).with_depth(Depth::Finite(1));
        let convs: Vec<_> = zero.convergents::<i32>().collect();
        assert_eq!(convs, vec![Rational::from_integer(0)]);

        // stops on overflow
        let phi = FnSimpleContinuedFraction::new(|_| 1.);
        assert_eq!(phi.convergents::<i8>().count(), 10);
    }
}
