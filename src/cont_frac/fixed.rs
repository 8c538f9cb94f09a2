use super::simple::SimpleContinuedFraction;
use super::Depth;
use crate::rational::Rational;
use num_integer::Integer;
use num_traits::ToPrimitive;
use std::fmt;

/// A simple continued fraction `[c0; c1, c2, ..., ck]` with explicitly stored coefficients
#[derive(Clone, Debug, PartialEq)]
pub struct FixedCoefficients {
    coeffs: Vec<f64>,
}

impl FixedCoefficients {
    /// Create the fraction `[c0; rest...]`
    pub fn new<I: IntoIterator<Item = f64>>(c0: f64, rest: I) -> Self {
        let mut coeffs = vec![c0];
        coeffs.extend(rest);
        FixedCoefficients { coeffs }
    }

    #[inline]
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs[..]
    }

    /// Expand an exact rational with the Euclidean algorithm.
    ///
    /// Coefficients after the first one are positive. Returns None if a
    /// coefficient can't be represented by a float.
    pub fn from_rational<T: Integer + Clone + ToPrimitive>(r: &Rational<T>) -> Option<Self> {
        let mut n = r.numer().clone();
        let mut d = r.denom().clone();
        let mut coeffs = Vec::new();

        loop {
            let (q, rem) = n.div_mod_floor(&d);
            coeffs.push(q.to_f64()?);
            if rem.is_zero() {
                break;
            }
            n = d;
            d = rem;
        }
        Some(FixedCoefficients { coeffs })
    }
}

/// Create a simple continued fraction from a coefficient slice, None if it's empty
pub fn create(coeffs: &[f64]) -> Option<FixedCoefficients> {
    let (c0, rest) = coeffs.split_first()?;
    Some(FixedCoefficients::new(*c0, rest.iter().copied()))
}

/// Create a [FixedCoefficients] from one or more coefficients,
/// e.g. `simple_cfrac![1, 2, 3, 4]` for `1 + 1/(2 + 1/(3 + 1/4))`
#[macro_export]
macro_rules! simple_cfrac {
    ($c0:expr $(, $c:expr)* $(,)?) => {
        $crate::FixedCoefficients::new($c0 as f64, vec![$($c as f64),*])
    };
}

impl SimpleContinuedFraction for FixedCoefficients {
    fn coefficient(&self, i: isize) -> f64 {
        if i < 0 {
            0.
        } else {
            self.coeffs.get(i as usize).copied().unwrap_or(f64::INFINITY)
        }
    }

    #[inline]
    fn depth(&self) -> Depth {
        Depth::Finite(self.coeffs.len() - 1)
    }
}

impl fmt::Display for FixedCoefficients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}", self.coeffs[0])?;
        if self.coeffs.len() > 1 {
            write!(f, "; ")?;
            let tail: Vec<String> = self.coeffs[1..].iter().map(|c| c.to_string()).collect();
            write!(f, "{}", tail.join(", "))?;
        }
        write!(f, "]")
    }
}
