/// Classification for retry policy.
///
/// Used by refresh schedulers to decide whether a failed fetch is worth
/// repeating on the next trigger or should be surfaced as a configuration problem.
///
/// | Class | Retry on next trigger? |
/// |-------|------------------------|
/// | `Never` | No, the request itself is wrong |
/// | `WithBackoff` | Yes, the failure is transient |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetryClass {
    /// Never retry - bad URL, bad request or an unreadable payload.
    /// Retrying the identical request won't help.
    Never,

    /// Retry later with backoff.
    ///
    /// Used for rate limiting (429), server errors (5xx) and responses
    /// the provider flagged as failed.
    WithBackoff,
}
