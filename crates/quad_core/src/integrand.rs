//! The closed set of integrands estimated by the sampling kernel.
//!
//! Each integrand is a pure function on a sample in [0, 1) with a known
//! closed-form integral over (0, 1). The set is deliberately closed: the
//! kernel resolves the variant once at entry and the per-sample evaluation
//! compiles to a direct call, never a per-sample selector check.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// An unrecognised integrand selector.
///
/// Produced when parsing a selector string that is not one of
/// `x`, `x3`, `cos100x`, `inv_sqrt`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown integrand '{0}' (expected one of: x, x3, cos100x, inv_sqrt)")]
pub struct ParseIntegrandError(pub String);

/// One of the four integrands the kernel can estimate over (0, 1).
///
/// # Variants
///
/// | Selector   | f(x)          | Exact integral   |
/// |------------|---------------|------------------|
/// | `x`        | x             | 1/2              |
/// | `x3`       | x³            | 1/4              |
/// | `cos100x`  | cos(100·x)    | sin(100)/100     |
/// | `inv_sqrt` | 1/√x          | 2                |
///
/// # Examples
///
/// ```rust
/// use quad_core::Integrand;
///
/// assert_eq!(Integrand::Identity.eval(0.25), 0.25);
/// assert_eq!(Integrand::Cube.eval(0.5), 0.125);
/// assert_eq!(Integrand::InvSqrt.eval(0.25), 2.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Integrand {
    /// f(x) = x.
    Identity,
    /// f(x) = x³.
    Cube,
    /// f(x) = cos(100·x). Highly oscillatory over (0, 1).
    Cos100x,
    /// f(x) = 1/√x. Integrable singularity at x = 0.
    InvSqrt,
}

impl Integrand {
    /// All four variants, in selector order.
    ///
    /// Useful for usage text and for sweeping tests over the full set.
    pub const ALL: [Integrand; 4] = [
        Integrand::Identity,
        Integrand::Cube,
        Integrand::Cos100x,
        Integrand::InvSqrt,
    ];

    /// Evaluates the integrand at a sample point.
    ///
    /// Pure and allocation-free; this is the per-sample hot path.
    ///
    /// `InvSqrt` is singular at x = 0: a sample of exactly 0.0 yields
    /// `+inf`, which is a numeric anomaly for the caller to report, not a
    /// panic.
    #[inline]
    pub fn eval(self, x: f64) -> f64 {
        match self {
            Integrand::Identity => x,
            Integrand::Cube => x * x * x,
            Integrand::Cos100x => (100.0 * x).cos(),
            Integrand::InvSqrt => 1.0 / x.sqrt(),
        }
    }

    /// Returns the closed-form value of the integral over (0, 1).
    ///
    /// Used only for reporting the absolute error of an estimate; the
    /// kernel never consults it.
    #[inline]
    pub fn exact(self) -> f64 {
        match self {
            Integrand::Identity => 0.5,
            Integrand::Cube => 0.25,
            Integrand::Cos100x => 100.0_f64.sin() / 100.0,
            Integrand::InvSqrt => 2.0,
        }
    }

    /// Returns the canonical selector name.
    #[inline]
    pub fn selector(self) -> &'static str {
        match self {
            Integrand::Identity => "x",
            Integrand::Cube => "x3",
            Integrand::Cos100x => "cos100x",
            Integrand::InvSqrt => "inv_sqrt",
        }
    }
}

impl fmt::Display for Integrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

impl FromStr for Integrand {
    type Err = ParseIntegrandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" => Ok(Integrand::Identity),
            "x3" => Ok(Integrand::Cube),
            "cos100x" => Ok(Integrand::Cos100x),
            "inv_sqrt" => Ok(Integrand::InvSqrt),
            other => Err(ParseIntegrandError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_eval_identity() {
        assert_eq!(Integrand::Identity.eval(0.0), 0.0);
        assert_eq!(Integrand::Identity.eval(0.75), 0.75);
    }

    #[test]
    fn test_eval_cube() {
        assert_relative_eq!(Integrand::Cube.eval(0.5), 0.125);
        assert_eq!(Integrand::Cube.eval(0.0), 0.0);
    }

    #[test]
    fn test_eval_cos100x() {
        assert_relative_eq!(Integrand::Cos100x.eval(0.0), 1.0);
        assert_relative_eq!(Integrand::Cos100x.eval(0.5), 50.0_f64.cos());
    }

    #[test]
    fn test_eval_inv_sqrt() {
        assert_relative_eq!(Integrand::InvSqrt.eval(0.25), 2.0);
        assert_relative_eq!(Integrand::InvSqrt.eval(1.0), 1.0);
    }

    #[test]
    fn test_inv_sqrt_singularity_is_infinite_not_panic() {
        let y = Integrand::InvSqrt.eval(0.0);
        assert!(y.is_infinite() && y.is_sign_positive());
    }

    #[test]
    fn test_exact_values() {
        assert_eq!(Integrand::Identity.exact(), 0.5);
        assert_eq!(Integrand::Cube.exact(), 0.25);
        assert_relative_eq!(Integrand::Cos100x.exact(), 100.0_f64.sin() / 100.0);
        assert_eq!(Integrand::InvSqrt.exact(), 2.0);
    }

    #[test]
    fn test_selector_round_trip() {
        for f in Integrand::ALL {
            let parsed: Integrand = f.selector().parse().unwrap();
            assert_eq!(parsed, f);
            assert_eq!(f.to_string(), f.selector());
        }
    }

    #[test]
    fn test_unknown_selector() {
        let err = "sin".parse::<Integrand>().unwrap_err();
        assert_eq!(err, ParseIntegrandError("sin".to_string()));
        assert!(err.to_string().contains("unknown integrand 'sin'"));
    }

    #[test]
    fn test_selector_is_case_sensitive() {
        assert!("X3".parse::<Integrand>().is_err());
        assert!(" x".parse::<Integrand>().is_err());
    }
}
