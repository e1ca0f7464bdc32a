//! Injected cache-client capability.
//!
//! The fetched data itself lives with whichever page fetched it; this
//! client only tracks a version per named query, so readers know when
//! their copy went stale and must be refetched.

use leptos::prelude::*;
use std::collections::HashMap;

/// Names of the cached list queries this app reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    EventTypes,
    Schedules,
}

#[derive(Clone, Copy)]
pub struct QueryClient {
    versions: RwSignal<HashMap<QueryKey, u64>>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self {
            versions: RwSignal::new(HashMap::new()),
        }
    }

    /// Mark a query stale. Every reader subscribed via [`Self::version`]
    /// re-runs its fetch effect.
    pub fn invalidate(&self, key: QueryKey) {
        self.versions.update(|versions| {
            *versions.entry(key).or_insert(0) += 1;
        });
    }

    /// Reactive read of the current version of a query.
    pub fn version(&self, key: QueryKey) -> u64 {
        self.versions
            .with(|versions| versions.get(&key).copied().unwrap_or(0))
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_query_client() -> QueryClient {
    use_context::<QueryClient>()
        .expect("QueryClient not provided in context (provide it in app root)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalidate_bumps_only_the_named_query() {
        let client = QueryClient::new();
        assert_eq!(client.version(QueryKey::Schedules), 0);

        client.invalidate(QueryKey::Schedules);
        assert_eq!(client.version(QueryKey::Schedules), 1);
        assert_eq!(client.version(QueryKey::EventTypes), 0);
    }
}
