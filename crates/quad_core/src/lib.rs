//! # quad_core: Integrand Definitions for quadmc
//!
//! ## Core Layer Role
//!
//! quad_core is the bottom layer of the quadmc workspace, providing:
//! - The closed set of integrands estimated by the sampling kernel
//!   (`integrand::Integrand`)
//! - Closed-form reference values for accuracy reporting
//! - Selector parsing for the invocation surface (`x`, `x3`, `cos100x`,
//!   `inv_sqrt`)
//!
//! ## Zero Dependency Principle
//!
//! The core layer depends on no other quad_* crate and carries a single
//! external dependency (`thiserror`, for the selector parse error).
//!
//! ## Usage Examples
//!
//! ```rust
//! use quad_core::Integrand;
//!
//! let f: Integrand = "cos100x".parse().unwrap();
//! assert_eq!(f, Integrand::Cos100x);
//! assert_eq!(f.selector(), "cos100x");
//!
//! // Exact value of the integral over (0, 1), used for error reporting only
//! let exact = f.exact();
//! assert!((exact - 100.0_f64.sin() / 100.0).abs() < 1e-15);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod integrand;

pub use integrand::{Integrand, ParseIntegrandError};
