//! # Plant Search
//!
//! Search-as-you-type for the plant picker. Each keystroke issues a ticket;
//! a response is applied only if its ticket is still the latest one when it
//! arrives. In-flight requests are not cancelled, their results are dropped.

use std::fmt::Display;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::plant::Plant;

/// Default settle time before a query is sent.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Identifies one issued search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    seq: u64,
    query: String,
}

impl SearchTicket {
    /// Sequence number; later tickets have larger numbers.
    #[must_use]
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// The query this ticket was issued for.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Monotonic ticket counter.
#[derive(Debug, Default)]
pub struct SearchSequencer {
    latest: AtomicU64,
}

impl SearchSequencer {
    /// Creates a sequencer with no tickets issued.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a ticket, superseding every earlier one.
    pub fn issue(&self, query: impl Into<String>) -> SearchTicket {
        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        SearchTicket {
            seq,
            query: query.into(),
        }
    }

    /// Whether `ticket` is the latest issued.
    #[must_use]
    pub fn is_current(&self, ticket: &SearchTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.seq
    }

    /// Supersedes every issued ticket without issuing a new query.
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }
}

/// Result of one [`PlantSearch::run`] or [`PlantSearch::lookup`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome<T = Plant> {
    /// Results for the latest query; replace the dropdown contents.
    Applied(Vec<T>),
    /// A newer query was issued; leave the dropdown alone.
    Superseded,
    /// Nothing to search for; empty the dropdown.
    Cleared,
    /// The latest query failed.
    Failed(String),
}

/// Debounced plant search with last-query-wins semantics.
///
/// Clones share the same sequencer. [`PlantSearch::lookup`] applies the
/// same debounce and staleness rules to other search-as-you-type fields,
/// such as the plant owner picker.
#[derive(Debug, Clone)]
pub struct PlantSearch {
    sequencer: Arc<SearchSequencer>,
    debounce: Duration,
}

impl Default for PlantSearch {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl PlantSearch {
    /// Creates a search with the given settle time.
    #[must_use]
    pub fn new(debounce: Duration) -> Self {
        Self {
            sequencer: Arc::new(SearchSequencer::new()),
            debounce,
        }
    }

    /// Drops whatever search is in flight, e.g. once a plant has been
    /// picked from the dropdown.
    pub fn invalidate(&self) {
        self.sequencer.invalidate();
        tracing::debug!("Pending plant search invalidated");
    }

    /// Runs one query through debounce, fetch and staleness checks.
    ///
    /// A blank query, or one equal to the already selected plant's name,
    /// clears the results without a request. `fetch` is only called if no
    /// newer query arrived during the debounce window.
    pub async fn run<F, Fut, E>(&self, query: &str, selected: Option<&Plant>, fetch: F) -> SearchOutcome
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<Vec<Plant>, E>>,
        E: Display,
    {
        self.sequenced(query, |q| selected.is_some_and(|p| p.plant_name == q), fetch)
            .await
    }

    /// Like [`PlantSearch::run`] for any result type. Only a blank query
    /// skips the request.
    pub async fn lookup<T, F, Fut, E>(&self, query: &str, fetch: F) -> SearchOutcome<T>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<Vec<T>, E>>,
        E: Display,
    {
        self.sequenced(query, |_| false, fetch).await
    }

    async fn sequenced<T, S, F, Fut, E>(&self, query: &str, skip: S, fetch: F) -> SearchOutcome<T>
    where
        S: FnOnce(&str) -> bool,
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<Vec<T>, E>>,
        E: Display,
    {
        let ticket = self.sequencer.issue(query.trim());

        if ticket.query().is_empty() || skip(ticket.query()) {
            return SearchOutcome::Cleared;
        }

        tokio::time::sleep(self.debounce).await;
        if !self.sequencer.is_current(&ticket) {
            return SearchOutcome::Superseded;
        }

        tracing::debug!(seq = ticket.seq(), query = %ticket.query(), "Searching");
        let result = fetch(ticket.query().to_string()).await;

        if !self.sequencer.is_current(&ticket) {
            tracing::debug!(seq = ticket.seq(), "Dropping stale search response");
            return SearchOutcome::Superseded;
        }

        match result {
            Ok(items) => SearchOutcome::Applied(items),
            Err(e) => {
                tracing::warn!(query = %ticket.query(), error = %e, "Search failed");
                SearchOutcome::Failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use tokio::time::sleep;

    fn pokhran() -> Vec<Plant> {
        vec![Plant::new("p-2", "Pokhran Solar Park")]
    }

    #[test]
    fn test_sequencer_latest_wins() {
        let seq = SearchSequencer::new();
        let first = seq.issue("a");
        let second = seq.issue("ab");

        assert!(second.seq() > first.seq());
        assert!(!seq.is_current(&first));
        assert!(seq.is_current(&second));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_typing_sends_one_request() {
        let search = PlantSearch::default();
        let calls = AtomicUsize::new(0);
        let fetch = |_q: String| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok::<_, String>(pokhran()) }
        };

        let (first, second) = tokio::join!(search.run("pok", None, fetch), async {
            sleep(Duration::from_millis(100)).await;
            search.run("pokhran", None, fetch).await
        });

        assert_eq!(first, SearchOutcome::Superseded);
        assert_eq!(second, SearchOutcome::Applied(pokhran()));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_stale_response_is_dropped() {
        let search = PlantSearch::default();

        let slow = |_q: String| async {
            sleep(Duration::from_millis(1_000)).await;
            Ok::<_, String>(vec![Plant::new("p-9", "Tata Motors Pune Block - H")])
        };
        let fast = |_q: String| async { Ok::<_, String>(pokhran()) };

        let (first, second) = tokio::join!(search.run("ta", None, slow), async {
            sleep(Duration::from_millis(500)).await;
            search.run("pokhran", None, fast).await
        });

        assert_eq!(first, SearchOutcome::Superseded);
        assert_eq!(second, SearchOutcome::Applied(pokhran()));
    }

    #[test]
    fn test_invalidate_supersedes_latest() {
        let seq = SearchSequencer::new();
        let ticket = seq.issue("pok");
        seq.invalidate();
        assert!(!seq.is_current(&ticket));
    }

    #[tokio::test(start_paused = true)]
    async fn test_response_after_pick_is_dropped() {
        let search = PlantSearch::default();

        let slow = |_q: String| async {
            sleep(Duration::from_millis(1_000)).await;
            Ok::<_, String>(pokhran())
        };

        let (outcome, ()) = tokio::join!(search.run("pok", None, slow), async {
            sleep(Duration::from_millis(600)).await;
            search.invalidate();
        });

        assert_eq!(outcome, SearchOutcome::Superseded);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_query_clears_without_request() {
        let search = PlantSearch::default();
        let calls = AtomicUsize::new(0);
        let outcome = search
            .run("   ", None, |_q: String| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Ok::<_, String>(pokhran()) }
            })
            .await;

        assert_eq!(outcome, SearchOutcome::Cleared);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_selected_name_is_not_searched_again() {
        let search = PlantSearch::default();
        let selected = Plant::new("p-2", "Pokhran Solar Park");
        let outcome = search
            .run("Pokhran Solar Park", Some(&selected), |_q: String| async {
                Err::<Vec<Plant>, _>("unexpected request")
            })
            .await;
        assert_eq!(outcome, SearchOutcome::Cleared);
    }

    #[tokio::test(start_paused = true)]
    async fn test_lookup_debounces_other_results() {
        let search = PlantSearch::default();
        let calls = AtomicUsize::new(0);
        let fetch = |q: String| {
            calls.fetch_add(1, Ordering::SeqCst);
            async move { Ok::<_, String>(vec![format!("{q}a")]) }
        };

        let (first, second) = tokio::join!(search.lookup("as", fetch), async {
            sleep(Duration::from_millis(100)).await;
            search.lookup("ash", fetch).await
        });

        assert_eq!(first, SearchOutcome::Superseded);
        assert_eq!(second, SearchOutcome::Applied(vec!["asha".to_string()]));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_error_is_reported() {
        let search = PlantSearch::new(Duration::from_millis(50));
        let outcome = search
            .run("pok", None, |_q: String| async { Err::<Vec<Plant>, _>("status 500") })
            .await;
        assert_eq!(outcome, SearchOutcome::Failed("status 500".to_string()));
    }
}
