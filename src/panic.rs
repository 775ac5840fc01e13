use std::any::Any;
use std::fmt;
use std::panic::{self, UnwindSafe};

use crate::outcome::Outcome;

/// A panic captured by [`Outcome::catch_unwind`].
pub struct Panic {
    payload: Box<dyn Any + Send + 'static>,
}

impl Panic {
    /// Returns the panic message, if the payload is a string.
    ///
    /// `panic!` with a literal produces a `&'static str` payload and `panic!`
    /// with format arguments produces a `String`; any other payload (from
    /// `std::panic::panic_any`) has no message.
    pub fn message(&self) -> Option<&str> {
        if let Some(message) = self.payload.downcast_ref::<&'static str>() {
            Some(message)
        } else {
            self.payload.downcast_ref::<String>().map(String::as_str)
        }
    }

    /// Returns the raw panic payload.
    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        self.payload
    }

    /// Continues unwinding with the captured payload.
    pub fn resume(self) -> ! {
        panic::resume_unwind(self.payload)
    }
}

impl fmt::Debug for Panic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Panic")
            .field("message", &self.message())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Panic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => write!(f, "panicked: {}", message),
            None => write!(f, "panicked with a non-string payload"),
        }
    }
}

impl std::error::Error for Panic {}

impl<T> Outcome<T, Panic> {
    /// Runs a computation and captures a panic as the failure cause.
    ///
    /// This is the only operation that intercepts panics; everywhere else a
    /// panicking closure unwinds through the outcome untouched. The panic hook
    /// still runs, so the message is printed as usual.
    ///
    /// # Example
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let outcome = Outcome::catch_unwind(|| -> i32 { panic!("boom") });
    /// let cause = outcome.get_or_fail().unwrap_err();
    /// assert_eq!(cause.message(), Some("boom"));
    /// ```
    pub fn catch_unwind<F>(computation: F) -> Self
    where
        F: FnOnce() -> T + UnwindSafe,
    {
        match panic::catch_unwind(computation) {
            Ok(value) => Outcome::Success(value),
            Err(payload) => Outcome::Failure(Panic { payload }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::AssertUnwindSafe;

    #[test]
    fn test_catch_unwind_success() {
        let outcome = Outcome::catch_unwind(|| 42);
        assert_eq!(outcome.success_value(), Some(42));
    }

    #[test]
    fn test_catch_unwind_static_message() {
        let outcome = Outcome::catch_unwind(|| -> i32 { panic!("test OK") });
        let cause = outcome.failure_cause().unwrap();
        assert_eq!(cause.message(), Some("test OK"));
        assert_eq!(cause.to_string(), "panicked: test OK");
    }

    #[test]
    fn test_catch_unwind_formatted_message() {
        let n = 42;
        let outcome = Outcome::catch_unwind(move || -> i32 { panic!("not {}", n) });
        assert_eq!(outcome.failure_cause().unwrap().message(), Some("not 42"));
    }

    #[test]
    fn test_catch_unwind_opaque_payload() {
        let outcome = Outcome::catch_unwind(|| -> i32 { panic::panic_any(7u8) });
        let cause = outcome.failure_cause().unwrap();
        assert_eq!(cause.message(), None);
        assert_eq!(cause.into_payload().downcast_ref::<u8>(), Some(&7));
    }

    #[test]
    fn test_resume_rethrows() {
        let outcome = Outcome::catch_unwind(|| -> i32 { panic!("first") });
        let rethrown = Outcome::catch_unwind(AssertUnwindSafe(move || match outcome {
            Outcome::Success(value) => value,
            Outcome::Failure(cause) => cause.resume(),
        }));
        assert_eq!(rethrown.failure_cause().unwrap().message(), Some("first"));
    }

    #[test]
    fn test_map_error_on_panic() {
        let outcome = Outcome::catch_unwind(|| -> i32 { panic!("boom") })
            .map_error(|p| p.message().unwrap_or_default().to_string());
        assert_eq!(outcome.get_or_fail(), Err("boom".to_string()));
    }
}
