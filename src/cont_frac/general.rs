use super::block::Block;
use super::{EvalOptions, DEFAULT_MAX_ITERATIONS};
use log::{debug, trace};

/// This trait defines a generalized continued fraction
/// `b_0 + a_1 / (b_1 + a_2 / (b_2 + a_3 / (b_3 + ..)))`.
///
/// Implementors only provide the terms. Queries must be idempotent, and past the end
/// of a finite fraction `partial_numerator` returns 0 while `partial_denominator`
/// returns positive infinity.
pub trait ContinuedFraction {
    /// Return the `i`-th partial numerator `a_i`. The value at index 0 is never used.
    fn partial_numerator(&self, i: usize) -> f64;

    /// Return the `i`-th partial denominator `b_i`
    fn partial_denominator(&self, i: usize) -> f64;

    /// Evaluate the fraction truncated after the `n`-th term, by the backward recurrence.
    ///
    /// A zero denominator along the chain results in an infinity (or NaN) following
    /// the float semantics.
    fn eval_upto(&self, n: usize) -> f64 {
        let mut f = 0.;
        for i in (1..=n).rev() {
            f = self.partial_numerator(i) / (self.partial_denominator(i) + f);
        }
        self.partial_denominator(0) + f
    }

    /// Evaluate the fraction with the default [EvalOptions]
    fn eval(&self) -> f64 {
        self.eval_with_options(EvalOptions::default())
    }

    /// Evaluate the fraction by the forward convergent recurrence, until two successive
    /// convergents differ by at most `options.epsilon`, or `options.max_iterations` is reached.
    fn eval_with_options(&self, options: EvalOptions) -> f64 {
        let epsilon = options.epsilon;
        self.eval_until(options.max_iterations, |prev, current| {
            (prev - current).abs() <= epsilon
        })
    }

    /// Evaluate the fraction until `should_stop(previous, current)` returns true,
    /// within [DEFAULT_MAX_ITERATIONS] steps.
    fn eval_with<F: FnMut(f64, f64) -> bool>(&self, should_stop: F) -> f64 {
        self.eval_until(DEFAULT_MAX_ITERATIONS, should_stop)
    }

    /// Run the convergent recurrence for at most `max_iterations` steps (the initial
    /// convergent `b_0` counts as the first one) and return the latest convergent.
    ///
    /// The convergents are rescaled after every step so that the denominator stays one.
    /// When a denominator becomes exactly zero, the convergent is taken as the infinity
    /// with the sign of its numerator. This is not a correct treatment of every
    /// divergent fraction.
    fn eval_until<F: FnMut(f64, f64) -> bool>(
        &self,
        max_iterations: usize,
        mut should_stop: F,
    ) -> f64 {
        let mut block = Block::new(self.partial_denominator(0), 1., 1., 0.);
        let mut prev = block.value();

        for i in 1..max_iterations {
            let a = self.partial_numerator(i);
            let b = self.partial_denominator(i);
            if a == 0. || b == f64::INFINITY {
                debug!("continued fraction terminates at term {}", i);
                return prev;
            }

            let (p, q) = block.gmove(a, b);
            block.update(p, q);
            if !block.normalize() {
                debug!("zero denominator at term {}, convergent {} replaced by infinity", i, p);
            }

            let current = block.value();
            if should_stop(prev, current) {
                trace!("stop condition met at term {} with value {}", i, current);
                return current;
            }
            prev = current;
        }

        debug!("evaluation reached {} iterations with value {}", max_iterations, prev);
        prev
    }
}

/// A generalized continued fraction described by two index functions
/// for the partial numerators and the partial denominators
#[derive(Clone, Copy)]
pub struct FnContinuedFraction<A, B> {
    numerators: A,
    denominators: B,
}

impl<A: Fn(usize) -> f64, B: Fn(usize) -> f64> FnContinuedFraction<A, B> {
    pub fn new(numerators: A, denominators: B) -> Self {
        FnContinuedFraction { numerators, denominators }
    }
}

impl<A: Fn(usize) -> f64, B: Fn(usize) -> f64> ContinuedFraction for FnContinuedFraction<A, B> {
    #[inline]
    fn partial_numerator(&self, i: usize) -> f64 {
        (self.numerators)(i)
    }

    #[inline]
    fn partial_denominator(&self, i: usize) -> f64 {
        (self.denominators)(i)
    }
}
