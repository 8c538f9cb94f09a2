//! Errors raised by exact conversions

/// Errors for operations that are only defined on part of their input domain.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// The continued fraction never terminates, so it has no exact rational value.
    #[error("infinite depth continued fraction cannot convert to a rational")]
    InfiniteDepth,

    /// A rational with zero denominator was requested.
    #[error("denominator must not be 0")]
    ZeroDenominator,

    /// A coefficient is not a finite integer representable by the target type.
    #[error("coefficient {value} at index {index} is not an integer")]
    NonIntegerCoefficient { index: usize, value: f64 },

    /// A coefficient index beyond the range of `isize` was requested.
    #[error("coefficient index {index} is out of range")]
    IndexOutOfRange { index: usize },

    /// The integer recurrence overflowed the target type.
    #[error("integer overflow while folding coefficient at index {index}")]
    Overflow { index: usize },
}
