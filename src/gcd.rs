//! Greatest common divisors over any [Integer] type.

use num_integer::Integer;
use num_traits::Signed;

/// Return the non-negative greatest common divisor of `a` and `b`.
///
/// `gcd(0, 0) = 0`, `gcd(a, 0) = |a|` and `gcd(0, b) = |b|`.
#[inline]
pub fn gcd<T: Integer>(a: &T, b: &T) -> T {
    a.gcd(b)
}

/// Return the greatest common divisor of one or more numbers.
///
/// The fold stops as soon as the running divisor reaches one.
pub fn gcd_all<T: Integer + Signed + Clone>(first: &T, rest: &[T]) -> T {
    let mut d = first.abs();
    for v in rest {
        if d.is_one() {
            break;
        }
        d = d.gcd(v);
    }
    d
}

/// Returns true if the two numbers share no common factor greater than one
#[inline]
pub fn is_coprime<T: Integer>(a: &T, b: &T) -> bool {
    a.gcd(b).is_one()
}
