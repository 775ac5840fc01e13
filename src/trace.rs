//! Diagnostics for failure causes that are dropped without being surfaced.
//!
//! With the `tracing` feature enabled, every operation that throws away a
//! cause emits a `trace`-level event under the `outcome` target. Only the
//! cause's type name is recorded, so no `Debug` bound is needed on `E`.

#[cfg(feature = "tracing")]
pub(crate) fn discarded<E>(operation: &'static str) {
    tracing::trace!(
        target: "outcome",
        operation,
        cause = std::any::type_name::<E>(),
        "discarding failure cause"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
pub(crate) fn discarded<E>(_operation: &'static str) {}

#[cfg(all(test, feature = "tracing"))]
mod tests {
    use crate::outcome::Outcome;

    #[test]
    fn test_discard_events_do_not_change_results() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let failed = || Outcome::<i32, String>::failure("boom".into());
            assert_eq!(failed().get_or_else(1), 1);
            assert_eq!(failed().get_or_else_with(|| 2), 2);
            assert_eq!(
                failed().get_or_else_try(|| Ok::<_, ()>(3)),
                Outcome::success(3)
            );
        });
    }
}
