//! This module contains several predefined continued fractions

use crate::cont_frac::{ContinuedFraction, SimpleContinuedFraction};

/// Euler's number `e = [2; 1, 2, 1, 1, 4, 1, 1, 6, ...]`
#[derive(Debug, Clone, Copy)]
pub struct E {}

impl SimpleContinuedFraction for E {
    fn coefficient(&self, i: isize) -> f64 {
        match i {
            i if i < 0 => 0.,
            0 => 2.,
            i if i % 3 == 2 => (2 * (i + 1) / 3) as f64,
            _ => 1.,
        }
    }
}

/// Lambert's fraction `tan(x) = x/(1 - x²/(3 - x²/(5 - ...)))`
#[derive(Debug, Clone, Copy)]
pub struct Tan {
    x: f64,
}

pub fn tan(x: f64) -> Tan {
    Tan { x }
}

impl ContinuedFraction for Tan {
    fn partial_numerator(&self, i: usize) -> f64 {
        if i == 1 {
            self.x
        } else {
            -self.x * self.x
        }
    }

    fn partial_denominator(&self, i: usize) -> f64 {
        if i == 0 {
            0.
        } else {
            (2 * i - 1) as f64
        }
    }
}

/// `exp(x) = 1 + x/(1 - x/(x + 2 - 2x/(x + 3 - 3x/(x + 4 - ...))))`
#[derive(Debug, Clone, Copy)]
pub struct Exp {
    x: f64,
}

pub fn exp(x: f64) -> Exp {
    Exp { x }
}

impl ContinuedFraction for Exp {
    fn partial_numerator(&self, i: usize) -> f64 {
        if i <= 1 {
            self.x
        } else {
            -((i - 1) as f64) * self.x
        }
    }

    fn partial_denominator(&self, i: usize) -> f64 {
        if i <= 1 {
            1.
        } else {
            i as f64 + self.x
        }
    }
}
