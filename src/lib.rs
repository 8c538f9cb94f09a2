//! Evaluation of continued fractions, and exact reduction of rational numbers.
//!
//! ```
//! use num_contfrac::{simple_cfrac, ContinuedFraction, SimpleContinuedFraction};
//!
//! let cf = simple_cfrac![1, 2, 3, 4];
//! let r = cf.to_rational::<i64>().unwrap();
//! assert_eq!((*r.numer(), *r.denom()), (43, 30));
//! assert!((cf.eval() - 43. / 30.).abs() < 1e-15);
//! ```

mod cont_frac;
mod error;
pub mod gcd;
mod rational;
pub mod symbols;

pub use cont_frac::{
    create, from_number, Convergents, ContinuedFraction, Depth, EvalOptions, ExactInteger,
    FixedCoefficients, FnContinuedFraction, FnSimpleContinuedFraction, RealExpansion,
    SimpleContinuedFraction, DEFAULT_EPSILON, DEFAULT_MAX_ITERATIONS,
};
pub use error::DomainError;
pub use rational::Rational;
