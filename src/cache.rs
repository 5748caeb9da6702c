//! Time-boxed memoization for upstream API calls.
//!
//! Every call we make to Steam or Leetify goes through a [`TtlCache`], keyed
//! by the call's inputs. Entries expire after a fixed TTL; there is no manual
//! invalidation.

use std::fmt;
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;

/// A keyed cache whose entries expire after a fixed duration.
///
/// Cloning is cheap and clones share the same storage.
#[derive(Clone)]
pub struct TtlCache<K, V>
{
	/// Used for logging.
	name: &'static str,

	/// The underlying storage.
	inner: Cache<K, V>,
}

impl<K, V> fmt::Debug for TtlCache<K, V>
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		f.debug_struct("TtlCache")
			.field("name", &self.name)
			.field("entries", &self.inner.entry_count())
			.field("ttl", &self.inner.policy().time_to_live())
			.finish_non_exhaustive()
	}
}

impl<K, V> TtlCache<K, V>
where
	K: Hash + Eq + Send + Sync + fmt::Debug + 'static,
	V: Clone + Send + Sync + 'static,
{
	/// Creates a new [`TtlCache`].
	///
	/// `name` only shows up in logs.
	pub fn new(name: &'static str, ttl: Duration, max_capacity: u64) -> Self
	{
		let inner = Cache::builder()
			.name(name)
			.max_capacity(max_capacity)
			.time_to_live(ttl)
			.build();

		Self { name, inner }
	}

	/// Returns the cached value for `key`, or runs `fetch` and caches its
	/// result.
	///
	/// Failed fetches are not cached. If multiple callers miss on the same key
	/// at the same time, only one of them runs `fetch`; the others wait for
	/// its result.
	pub async fn get_or_try_fetch<F, E>(&self, key: K, fetch: F) -> Result<V, Arc<E>>
	where
		F: Future<Output = Result<V, E>>,
		E: Send + Sync + 'static,
	{
		let entry = self.inner.entry(key).or_try_insert_with(fetch).await?;

		if entry.is_fresh() {
			tracing::debug!(cache = self.name, key = ?entry.key(), "cache miss");
		} else {
			tracing::trace!(cache = self.name, key = ?entry.key(), "cache hit");
		}

		Ok(entry.into_value())
	}

	/// Returns the cached value for `key`, if there is one.
	pub async fn get(&self, key: &K) -> Option<V>
	{
		self.inner.get(key).await
	}
}
