//! Math context

use quill_sheets_core::RoundingMode;

/// Precision and rounding rules shared by all numeric computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathContext {
    precision: u32,
    rounding_mode: RoundingMode,
}

impl MathContext {
    /// Create a context with the given significant-digit precision and
    /// rounding mode. A precision of 0 means unlimited.
    pub fn new(precision: u32, rounding_mode: RoundingMode) -> Self {
        MathContext {
            precision,
            rounding_mode,
        }
    }

    /// Significant digit precision; 0 means unlimited
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Rounding mode applied when results exceed the precision
    pub fn rounding_mode(&self) -> RoundingMode {
        self.rounding_mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let ctx = MathContext::new(7, RoundingMode::HalfUp);
        assert_eq!(ctx.precision(), 7);
        assert_eq!(ctx.rounding_mode(), RoundingMode::HalfUp);
    }
}
