use std::fmt;

use crate::trace;

/// The outcome of an operation that may fail: either a produced value or a
/// captured failure cause.
///
/// An outcome lets a call site chain transformations over a computation that
/// may have failed without inspecting the failure at every step. Failures stay
/// dormant through [`map`](Outcome::map), [`map_error`](Outcome::map_error) and
/// [`get_or_else_try`](Outcome::get_or_else_try), and only surface when the
/// caller asks for them with [`get_or_fail`](Outcome::get_or_fail) or one of the
/// failing views ([`iter_or_fail`](Outcome::iter_or_fail),
/// [`optional_or_fail`](Outcome::optional_or_fail)).
///
/// The cause type `E` is unconstrained. It does not need to implement
/// [`std::error::Error`].
///
/// Dropping a `Failure` without extracting it discards the cause unexamined.
/// Nothing detects this at runtime; the `#[must_use]` lint is the only guard,
/// and handling the cause is the caller's responsibility.
///
/// # Example
///
/// ```
/// use outcome::Outcome;
///
/// let hex = Outcome::run(|| "42".parse::<u32>())
///     .map(|n| Ok(format!("{n:x}")))
///     .get_or_else("default".to_string());
/// assert_eq!(hex, "2a");
/// ```
#[must_use = "this `Outcome` may be a `Failure`, whose cause is lost if it is dropped"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    /// The operation produced a value.
    Success(T),
    /// The operation failed with a cause.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Runs a fallible computation and captures its result.
    ///
    /// The computation is invoked exactly once, on the calling thread. An
    /// `Ok` becomes [`Success`](Outcome::Success) and an `Err` becomes
    /// [`Failure`](Outcome::Failure); the error is never propagated.
    ///
    /// # Example
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let outcome = Outcome::run(|| "not a number".parse::<i32>());
    /// assert!(outcome.is_failure());
    /// ```
    pub fn run(computation: impl FnOnce() -> Result<T, E>) -> Self {
        match computation() {
            Ok(value) => Outcome::Success(value),
            Err(cause) => Outcome::Failure(cause),
        }
    }

    /// Wraps a known value.
    pub fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    /// Wraps a known failure cause.
    pub fn failure(cause: E) -> Self {
        Outcome::Failure(cause)
    }

    /// Returns `true` if this outcome holds a value.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` if this outcome holds a failure cause.
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Borrows the value or cause held by this outcome.
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(cause) => Outcome::Failure(cause),
        }
    }

    /// Mutably borrows the value or cause held by this outcome.
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(cause) => Outcome::Failure(cause),
        }
    }

    /// Returns the value, or `fallback` if this outcome is a failure.
    ///
    /// The fallback is evaluated by the caller before this method runs. Use
    /// [`get_or_else_with`](Outcome::get_or_else_with) when computing it is
    /// expensive or has side effects.
    pub fn get_or_else(self, fallback: T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => {
                trace::discarded::<E>("get_or_else");
                fallback
            }
        }
    }

    /// Returns the value, or computes a fallback if this outcome is a failure.
    ///
    /// `fallback` is only invoked on the failure path, and then exactly once.
    ///
    /// # Example
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::success(42);
    /// assert_eq!(outcome.get_or_else_with(|| unreachable!()), 42);
    /// ```
    pub fn get_or_else_with(self, fallback: impl FnOnce() -> T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => {
                trace::discarded::<E>("get_or_else_with");
                fallback()
            }
        }
    }

    /// Returns the value, or the held cause as an error.
    ///
    /// This is the path that surfaces a captured failure to the caller. The
    /// cause is returned as-is, never wrapped, so it composes with `?`.
    ///
    /// # Example
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// fn parse(input: &str) -> Result<i32, std::num::ParseIntError> {
    ///     let n = Outcome::run(|| input.parse::<i32>()).get_or_fail()?;
    ///     Ok(n * 2)
    /// }
    ///
    /// assert_eq!(parse("21"), Ok(42));
    /// assert!(parse("twenty one").is_err());
    /// ```
    pub fn get_or_fail(self) -> Result<T, E> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(cause) => Err(cause),
        }
    }

    /// Converts this outcome into a `Result`. Same as
    /// [`get_or_fail`](Outcome::get_or_fail).
    pub fn into_result(self) -> Result<T, E> {
        self.get_or_fail()
    }

    /// Returns the value if there is one, discarding any failure cause.
    pub fn success_value(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// Returns the failure cause if there is one, discarding any value.
    pub fn failure_cause(self) -> Option<E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(cause) => Some(cause),
        }
    }

    /// Attempts an alternative computation if this outcome is a failure.
    ///
    /// On success the value is kept and `fallback` is never invoked. On
    /// failure the original cause is discarded and `fallback` is run the same
    /// way as [`Outcome::run`], so the result carries the fallback's failure
    /// type.
    ///
    /// # Example
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let n = Outcome::run(|| "forty two".parse::<i32>())
    ///     .get_or_else_try(|| Ok::<_, String>(54))
    ///     .get_or_fail();
    /// assert_eq!(n, Ok(54));
    /// ```
    pub fn get_or_else_try<F>(self, fallback: impl FnOnce() -> Result<T, F>) -> Outcome<T, F> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(_) => {
                trace::discarded::<E>("get_or_else_try");
                Outcome::run(fallback)
            }
        }
    }

    /// Transforms the value with a fallible function.
    ///
    /// On success, `transform` is applied to the value and its `Err`, if
    /// any, becomes the new failure. On failure, the original cause is kept
    /// and `transform` is never invoked.
    ///
    /// The transform fails with the same cause type as this outcome. To
    /// change the cause type, use [`map_error`](Outcome::map_error) first.
    pub fn map<R>(self, transform: impl FnOnce(T) -> Result<R, E>) -> Outcome<R, E> {
        match self {
            Outcome::Success(value) => Outcome::run(|| transform(value)),
            Outcome::Failure(cause) => Outcome::Failure(cause),
        }
    }

    /// Transforms the failure cause.
    ///
    /// On success the value is kept and `transform` is never invoked.
    /// `transform` cannot fail; if it panics, the panic propagates.
    ///
    /// # Example
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let outcome = Outcome::run(|| "x".parse::<i32>())
    ///     .map_error(|e| format!("wrap: {e}"));
    /// assert_eq!(
    ///     outcome.get_or_fail(),
    ///     Err("wrap: invalid digit found in string".to_string())
    /// );
    /// ```
    pub fn map_error<F>(self, transform: impl FnOnce(E) -> F) -> Outcome<T, F> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(cause) => Outcome::Failure(transform(cause)),
        }
    }

    /// Chains a computation that itself produces an outcome.
    pub fn and_then<R>(self, next: impl FnOnce(T) -> Outcome<R, E>) -> Outcome<R, E> {
        match self {
            Outcome::Success(value) => next(value),
            Outcome::Failure(cause) => Outcome::Failure(cause),
        }
    }

    /// Collapses both variants into a single value.
    pub fn fold<R>(self, on_success: impl FnOnce(T) -> R, on_failure: impl FnOnce(E) -> R) -> R {
        match self {
            Outcome::Success(value) => on_success(value),
            Outcome::Failure(cause) => on_failure(cause),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Outcome::run(|| result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.get_or_fail()
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(value) => write!(f, "success: {}", value),
            Outcome::Failure(cause) => write!(f, "failure: {}", cause),
        }
    }
}
