use {
	log::warn,
	std::{future::Future, time::Duration},
};

/// Bounded retry with linear backoff: after the n-th failed attempt we wait
/// `backoff * n` before trying again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
	/// Total attempts, including the first one.
	pub attempts: u32,
	pub backoff: Duration,
}

impl Default for RetryPolicy {
	fn default() -> Self {
		Self {
			attempts: 3,
			backoff: Duration::from_millis(300),
		}
	}
}

impl RetryPolicy {
	/// A policy that gives up after the first failure.
	pub const fn never() -> Self {
		Self {
			attempts: 1,
			backoff: Duration::ZERO,
		}
	}

	pub fn delay_after(&self, attempt: u32) -> Duration {
		self.backoff * attempt
	}
}

/// Errors that might go away if we just try again: the connection dropped, the
/// pool had nothing to hand out, and so on. Constraint violations and other
/// errors reported by the server itself are final.
pub fn is_transient(error: &sqlx::Error) -> bool {
	matches!(
		error,
		sqlx::Error::Io(_)
			| sqlx::Error::Tls(_)
			| sqlx::Error::PoolTimedOut
			| sqlx::Error::WorkerCrashed
	)
}

/// Runs `operation` until it succeeds, fails with a non-transient error, or the
/// policy runs out of attempts. The last error is returned as is.
pub async fn with_retry<T, F, Fut>(
	policy: &RetryPolicy,
	label: &str,
	mut operation: F,
) -> sqlx::Result<T>
where
	F: FnMut() -> Fut,
	Fut: Future<Output = sqlx::Result<T>>,
{
	let attempts = policy.attempts.max(1);
	let mut attempt = 1;

	loop {
		match operation().await {
			Ok(value) => return Ok(value),
			Err(why) if attempt < attempts && is_transient(&why) => {
				let delay = policy.delay_after(attempt);
				warn!("{label}: attempt {attempt}/{attempts} failed, retrying in {delay:?}. ({why})");
				tokio::time::sleep(delay).await;
				attempt += 1;
			}
			Err(why) => return Err(why),
		}
	}
}
