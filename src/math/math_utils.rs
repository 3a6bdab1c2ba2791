//! Strict floating point comparisons against zero.
//!
//! Bland's rule and the minimum-ratio test both change which column/row
//! they pick depending on whether a value counts as exactly zero, so unlike
//! a typical numeric-tolerance helper module, none of these carry an
//! epsilon: a value must be literally on the other side of zero to qualify.

pub fn float_eq(a: f64, b: f64) -> bool {
    a == b
}

pub fn float_ne(a: f64, b: f64) -> bool {
    a != b
}

pub fn float_lt(a: f64, b: f64) -> bool {
    a < b
}

pub fn float_gt(a: f64, b: f64) -> bool {
    a > b
}

pub fn float_le(a: f64, b: f64) -> bool {
    a <= b
}

pub fn float_ge(a: f64, b: f64) -> bool {
    a >= b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn near_zero_is_not_zero() {
        assert!(!float_eq(1e-9, 0.0));
        assert!(float_gt(1e-9, 0.0));
    }

    #[test]
    fn exact_zero_is_zero() {
        assert!(float_eq(0.0, 0.0));
        assert!(!float_gt(0.0, 0.0));
        assert!(!float_lt(0.0, 0.0));
    }
}
