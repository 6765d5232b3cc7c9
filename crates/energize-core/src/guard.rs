//! Gate for the authenticated area.

use crate::session::SessionStore;
use crate::shell::Location;

/// Outcome of a guard check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// A credential is present; render the guarded content.
    Allow {
        /// The stored token.
        token: String,
    },
    /// No credential; go to `to` and render nothing else.
    Redirect {
        /// Where to send the user.
        to: Location,
        /// Replace the current history entry so "back" does not return to
        /// the guarded page.
        replace: bool,
    },
}

impl GuardDecision {
    /// Whether guarded content may render.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardDecision::Allow { .. })
    }
}

/// Checks the session store on every navigation.
///
/// The decision is never cached, so a token cleared mid-session takes
/// effect on the next check.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteGuard;

impl RouteGuard {
    /// Decides whether the guarded area may render.
    pub fn check<S: SessionStore + ?Sized>(store: &S) -> GuardDecision {
        match store.get() {
            Some(token) => GuardDecision::Allow { token },
            None => {
                tracing::debug!("No session token, redirecting to login");
                GuardDecision::Redirect {
                    to: Location::Login,
                    replace: true,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySessionStore;

    #[test]
    fn test_redirects_without_token() {
        let store = MemorySessionStore::new();
        assert_eq!(
            RouteGuard::check(&store),
            GuardDecision::Redirect {
                to: Location::Login,
                replace: true,
            }
        );
    }

    #[test]
    fn test_allows_with_token() {
        let store = MemorySessionStore::with_token("t-1");
        assert_eq!(
            RouteGuard::check(&store),
            GuardDecision::Allow {
                token: "t-1".to_string()
            }
        );
    }

    #[test]
    fn test_not_cached_between_checks() {
        let store = MemorySessionStore::with_token("t-1");
        assert!(RouteGuard::check(&store).is_allowed());

        store.clear();
        assert!(!RouteGuard::check(&store).is_allowed());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::session::MemorySessionStore;
    use proptest::prelude::*;

    proptest! {
        /// Property: the guard allows iff the last session operation was a set
        #[test]
        fn prop_guard_follows_last_operation(ops in prop::collection::vec(prop::option::of("[a-z0-9]{1,12}"), 1..32)) {
            let store = MemorySessionStore::new();
            for op in &ops {
                match op {
                    Some(token) => store.set(token.clone()),
                    None => store.clear(),
                }
            }
            let last_was_set = ops.last().unwrap().is_some();
            prop_assert_eq!(RouteGuard::check(&store).is_allowed(), last_was_set);
        }
    }
}
