//! Custom test assertions
//!
//! Provides domain-specific assertions for testing request-monitor components.

use request_monitor::{HealthStatus, HealthSummary};

/// Assertions for HealthSummary
pub trait HealthSummaryAssertions {
    /// Assert the verdict and that some issue mentions `fragment`
    fn assert_status_with_issue(&self, status: HealthStatus, fragment: &str);
}

impl HealthSummaryAssertions for HealthSummary {
    fn assert_status_with_issue(&self, status: HealthStatus, fragment: &str) {
        assert_eq!(
            self.status, status,
            "Expected {} but got {} (issues: {:?})",
            status, self.status, self.issues
        );
        assert!(
            self.issues.iter().any(|issue| issue.contains(fragment)),
            "Expected an issue containing {:?}, got {:?}",
            fragment,
            self.issues
        );
    }
}

/// Assert two values are approximately equal (for floats)
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr) => {
        $crate::assert_approx_eq!($left, $right, 1e-6_f64)
    };
    ($left:expr, $right:expr, $epsilon:expr) => {
        let left_val: f64 = $left as f64;
        let right_val: f64 = $right as f64;
        let diff = (left_val - right_val).abs();
        assert!(
            diff < $epsilon,
            "assertion failed: `(left ~ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` (epsilon: `{:?}`)",
            left_val,
            right_val,
            diff,
            $epsilon
        );
    };
}

/// Assert a collection contains an item matching a predicate
#[macro_export]
macro_rules! assert_contains {
    ($collection:expr, $predicate:expr) => {
        assert!(
            $collection.iter().any($predicate),
            "Collection does not contain expected item"
        );
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_approx_eq_macro() {
        crate::assert_approx_eq!(1.0, 1.0);
        crate::assert_approx_eq!(1.0, 1.0000001);
        crate::assert_approx_eq!(0.1 + 0.2, 0.3, 1e-10_f64);
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn test_approx_eq_failure() {
        crate::assert_approx_eq!(1.0, 2.0);
    }

    #[test]
    fn test_contains_macro() {
        let items = [1, 2, 3, 4, 5];
        crate::assert_contains!(items, |&x| x == 3);
    }
}
