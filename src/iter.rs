//! Sequence and optional views over an outcome.
//!
//! Both views surface a failure instead of folding it into "no value": asking
//! a failed outcome for its iterator or its `Option` returns the cause as an
//! `Err`, never an empty iterator or `None`.

use std::iter::FusedIterator;

use crate::outcome::Outcome;

/// A finite, single-element iterator over the value of a successful outcome.
///
/// Created by [`Outcome::iter_or_fail`] and [`Outcome::iter_or_fail_ref`]. The iterator is
/// `Clone` when `T` is, so a sequence can be restarted by cloning it before
/// consuming it.
#[derive(Debug, Clone)]
pub struct Iter<T> {
    inner: std::option::IntoIter<T>,
}

impl<T> Iter<T> {
    fn new(value: T) -> Self {
        Self {
            inner: Some(value).into_iter(),
        }
    }
}

impl<T> Iterator for Iter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<T> {}

impl<T> FusedIterator for Iter<T> {}

impl<T, E> Outcome<T, E> {
    /// Returns a single-element iterator over the value, or the held cause.
    ///
    /// A failed outcome never produces an empty iterator.
    ///
    /// # Example
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let values: Vec<i32> = Outcome::<i32, String>::success(42)
    ///     .iter_or_fail()
    ///     .unwrap()
    ///     .collect();
    /// assert_eq!(values, vec![42]);
    ///
    /// let failed = Outcome::<i32, String>::failure("boom".into()).iter_or_fail();
    /// assert_eq!(failed.err(), Some("boom".to_string()));
    /// ```
    pub fn iter_or_fail(self) -> Result<Iter<T>, E> {
        match self {
            Outcome::Success(value) => Ok(Iter::new(value)),
            Outcome::Failure(cause) => Err(cause),
        }
    }

    /// Borrowing form of [`iter_or_fail`](Outcome::iter_or_fail).
    pub fn iter_or_fail_ref(&self) -> Result<Iter<&T>, &E> {
        self.as_ref().iter_or_fail()
    }

    /// Returns the value as `Some`, or the held cause.
    ///
    /// A failed outcome never produces `None`.
    pub fn optional_or_fail(self) -> Result<Option<T>, E> {
        self.get_or_fail().map(Some)
    }
}

impl<T, E> Outcome<Option<T>, E> {
    /// Returns the optional value, or the held cause.
    ///
    /// Unlike [`optional_or_fail`](Outcome::optional_or_fail), this yields
    /// `Ok(None)` when the outcome succeeded with no value.
    ///
    /// # Example
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let found = Outcome::<Option<i32>, String>::success(None);
    /// assert_eq!(found.flatten_optional_or_fail(), Ok(None));
    /// ```
    pub fn flatten_optional_or_fail(self) -> Result<Option<T>, E> {
        self.get_or_fail()
    }
}
