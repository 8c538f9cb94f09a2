use num_integer::Integer;
use num_traits::{CheckedAdd, CheckedMul, Float, One, Zero};
use std::mem::swap;

/// A block of the two latest convergents `p_(k-1)/q_(k-1)` and `p_(k-2)/q_(k-2)`
/// used by the forward recurrence `p_k = b_k p_(k-1) + a_k p_(k-2)`.
/// The method is described in <https://crypto.stanford.edu/pbc/notes/contfrac/compute.html>
#[derive(Debug, Clone, Copy)]
pub struct Block<T> {
    pm1: T, // p_(k-1)
    pm2: T, // p_(k-2)
    qm1: T, // q_(k-1)
    qm2: T, // q_(k-2)
}

impl<T> Block<T> {
    /// create a block with leading convergent a/c and trailing convergent b/d
    pub fn new(a: T, b: T, c: T, d: T) -> Self {
        Block { pm1: a, pm2: b, qm1: c, qm2: d }
    }

    /// push the latest convergent to the block
    pub fn update(&mut self, p: T, q: T) {
        swap(&mut self.pm2, &mut self.pm1); // self.pm2 = self.pm1
        swap(&mut self.qm2, &mut self.qm1); // self.qm2 = self.qm1
        self.pm1 = p;
        self.qm1 = q;
    }
}

impl<T: Zero + One> Block<T> {
    /// create a block that represents a identity operation
    pub fn identity() -> Self {
        Block { pm1: T::one(), pm2: T::zero(), qm1: T::zero(), qm2: T::one() }
    }
}

impl<T: Integer + CheckedAdd + CheckedMul> Block<T> {
    /// move with a coefficient of a simple continued fraction, None on overflow
    pub fn checked_rmove(&self, a: T) -> Option<(T, T)> {
        let p = a.checked_mul(&self.pm1).and_then(|v| v.checked_add(&self.pm2))?;
        let q = a.checked_mul(&self.qm1).and_then(|v| v.checked_add(&self.qm2))?;
        Some((p, q))
    }
}

impl<T: Float> Block<T> {
    /// move with a partial numerator `a` and partial denominator `b`
    #[inline]
    pub fn gmove(&self, a: T, b: T) -> (T, T) {
        (self.pm1 * b + self.pm2 * a, self.qm1 * b + self.qm2 * a)
    }

    /// Rescale the block so that the leading denominator is one.
    ///
    /// If the leading denominator is exactly zero, the leading numerator is replaced by
    /// an infinity with its sign and false is returned. The block is left unscaled.
    pub fn normalize(&mut self) -> bool {
        if self.qm1.is_zero() {
            self.pm1 = if self.pm1 >= T::zero() { T::infinity() } else { T::neg_infinity() };
            false
        } else {
            let q = self.qm1;
            self.pm1 = self.pm1 / q;
            self.pm2 = self.pm2 / q;
            self.qm2 = self.qm2 / q;
            self.qm1 = T::one();
            true
        }
    }

    /// value of the leading convergent, valid after [Block::normalize]
    #[inline]
    pub fn value(&self) -> T {
        self.pm1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_rmove_test() {
        // convergents of [1; 2, 2, 2]
        let mut block = Block::<i64>::identity();
        let mut result = Vec::new();
        for a in vec![1, 2, 2, 2] {
            let (p, q) = block.checked_rmove(a).unwrap();
            block.update(p, q);
            result.push((p, q));
        }
        assert_eq!(result, vec![(1, 1), (3, 2), (7, 5), (17, 12)]);

        let block = Block::<i8>::new(100, 1, 1, 0);
        assert_eq!(block.checked_rmove(2), None);
    }

    #[test]
    fn float_move_test() {
        // leading 3/2, trailing 1/1, next coefficient 2 of sqrt(2)
        let mut block = Block::new(3., 1., 2., 1.);
        let (p, q) = block.gmove(1., 2.);
        assert_eq!((p, q), (7., 5.));
        block.update(p, q);
        assert!(block.normalize());
        assert_eq!(block.value(), 7. / 5.);

        let mut block = Block::new(1., 1., 1., 0.);
        let (p, q) = block.gmove(-1., 0.);
        block.update(p, q);
        assert!(!block.normalize());
        assert_eq!(block.value(), f64::NEG_INFINITY);
    }
}
