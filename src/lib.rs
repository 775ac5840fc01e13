//! Outcome: a value-or-failure type for chaining computations that may fail.
//!
//! An [`Outcome`] is either a **success** holding a value or a **failure**
//! holding a captured cause. Computations are run and captured with
//! [`Outcome::run`], transformed with [`Outcome::map`] and
//! [`Outcome::map_error`], given alternatives with
//! [`Outcome::get_or_else_try`], and consumed at the end with one of the
//! extraction methods.
//!
//! Failures stay dormant until consumed. A failed outcome that is dropped
//! without extraction loses its cause; handling it is the caller's job.
//!
//! # Example
//!
//! ```
//! use outcome::Outcome;
//!
//! // Primary computation fails, the alternative succeeds.
//! let port = Outcome::run(|| "eighty".parse::<u16>())
//!     .get_or_else_try(|| "8080".parse::<u16>())
//!     .map(|port| if port >= 1024 { Ok(port) } else { "privileged".parse() })
//!     .get_or_else(3000);
//! assert_eq!(port, 8080);
//!
//! // The cause surfaces only when asked for.
//! let outcome = Outcome::run(|| "x".parse::<u16>()).map_error(|e| e.to_string());
//! assert_eq!(
//!     outcome.get_or_fail(),
//!     Err("invalid digit found in string".to_string())
//! );
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Outcome`].
//! - `tracing`: `trace`-level events when a failure cause is discarded.

mod iter;
mod outcome;
mod panic;
mod trace;

pub use iter::Iter;
pub use outcome::Outcome;
pub use panic::Panic;
