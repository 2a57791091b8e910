use crate::config::Config;
use serde::{Deserialize, Serialize};

/// Ordered sequence of screen configurations with a guaranteed top entry.
///
/// The stack is split into the always-present `active` entry (the
/// rendered screen) and the `backstack` of entries below it, stored
/// bottom-to-top. Because `active` is a plain field rather than the
/// last element of a vector, an empty stack is unrepresentable and the
/// never-empty invariant needs no runtime checks.
///
/// In this application every transition replaces the whole stack with
/// a single entry, so `backstack` stays empty; the representation
/// still supports deeper stacks for callers that want them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavStack {
    active: Config,
    backstack: Vec<Config>,
}

impl NavStack {
    /// Creates a one-entry stack holding only `active`.
    pub fn single(active: Config) -> Self {
        Self {
            active,
            backstack: Vec::new(),
        }
    }

    /// Creates a stack from the entries below the top plus the top itself.
    ///
    /// `backstack` is ordered bottom-to-top and may be empty.
    pub fn new(backstack: Vec<Config>, active: Config) -> Self {
        Self { active, backstack }
    }

    /// The top entry, i.e. the screen currently rendered.
    pub fn active(&self) -> Config {
        self.active
    }

    /// All entries bottom-to-top, the active entry last.
    pub fn entries(&self) -> impl Iterator<Item = Config> + '_ {
        self.backstack.iter().copied().chain(Some(self.active))
    }

    /// Total number of entries. Always at least 1.
    pub fn len(&self) -> usize {
        self.backstack.len() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_has_exactly_one_entry() {
        let stack = NavStack::single(Config::Details);

        assert_eq!(stack.len(), 1);
        assert_eq!(stack.active(), Config::Details);
        assert_eq!(stack.entries().collect::<Vec<_>>(), vec![Config::Details]);
    }

    #[test]
    fn entries_are_ordered_bottom_to_top() {
        let stack = NavStack::new(vec![Config::List], Config::Details);

        assert_eq!(stack.len(), 2);
        assert_eq!(stack.active(), Config::Details);
        assert_eq!(
            stack.entries().collect::<Vec<_>>(),
            vec![Config::List, Config::Details]
        );
    }
}
