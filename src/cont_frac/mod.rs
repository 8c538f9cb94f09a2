//! Evaluation of generalized and simple continued fractions
//!
//! There are two abstractions of the continued fraction
//! 1. [ContinuedFraction] represents a generalized continued fraction
//!    `b0 + a1/(b1 + a2/(b2 + ...))` by its partial numerators `a_i` and partial denominators `b_i`
//! 2. [SimpleContinuedFraction] represents a continued fraction whose partial numerators
//!    are all one, `c0 + 1/(c1 + 1/(c2 + ...))`, by its coefficients `c_i`.
//!
//! A sequence ends where the partial numerator is zero or the partial denominator
//! is positive infinity.
//! Every simple continued fraction is also a generalized one, so both evaluation methods
//! ([ContinuedFraction::eval_upto] and [ContinuedFraction::eval]) are available on it.
//!
//! # References:
//! - <https://pi.math.cornell.edu/~gautam/ContinuedFractions.pdf>
//! - <https://crypto.stanford.edu/pbc/notes/contfrac/>
//! - <http://www.numbertheory.org/continued_fractions.html>

mod block;
mod expansion;
mod fixed;
mod general;
mod simple;

pub use expansion::*;
pub use fixed::*;
pub use general::*;
pub use simple::*;

/// Iteration limit used by [ContinuedFraction::eval] and [ContinuedFraction::eval_with]
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Tolerance used by [ContinuedFraction::eval].
/// Zero means iterating until the value stops changing.
pub const DEFAULT_EPSILON: f64 = 0.;

/// Index of the last finite coefficient of a simple continued fraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Depth {
    Finite(usize),
    Infinite,
}

impl Depth {
    #[inline]
    pub fn is_finite(&self) -> bool {
        matches!(self, Depth::Finite(_))
    }

    #[inline]
    pub fn finite(self) -> Option<usize> {
        match self {
            Depth::Finite(d) => Some(d),
            Depth::Infinite => None,
        }
    }
}

impl From<usize> for Depth {
    #[inline]
    fn from(d: usize) -> Self {
        Depth::Finite(d)
    }
}

/// Stopping rule of the convergent evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvalOptions {
    /// Stop once two successive convergents differ by at most this value
    pub epsilon: f64,

    /// Upper bound of the number of recurrence steps
    pub max_iterations: usize,
}

impl Default for EvalOptions {
    fn default() -> Self {
        EvalOptions {
            epsilon: DEFAULT_EPSILON,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl EvalOptions {
    #[inline]
    pub fn with_epsilon(self, epsilon: f64) -> Self {
        EvalOptions { epsilon, ..self }
    }

    #[inline]
    pub fn with_max_iterations(self, max_iterations: usize) -> Self {
        EvalOptions { max_iterations, ..self }
    }
}
