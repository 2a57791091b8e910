use serde::{Deserialize, Serialize};

/// Identifier tag selecting which screen is active.
///
/// A `Config` carries no payload; it is only a stack entry that the
/// presentation layer maps to a concrete screen. The set of variants
/// is closed, and every `match` over it is written without a wildcard
/// arm so that adding a screen forces every dispatch site to be
/// updated at compile time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Config {
    List,
    Details,
}

impl Config {
    /// Returns the opposite screen.
    ///
    /// This is the transition function of the two-state navigation
    /// machine: `List` and `Details` are each other's mirror, so
    /// applying it twice returns the original configuration.
    pub fn other(self) -> Self {
        match self {
            Config::List => Config::Details,
            Config::Details => Config::List,
        }
    }

    /// Human-readable screen name, used for window chrome and logs.
    pub fn name(self) -> &'static str {
        match self {
            Config::List => "List",
            Config::Details => "Details",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_is_an_involution() {
        for config in [Config::List, Config::Details] {
            assert_eq!(config.other().other(), config);
        }
    }

    #[test]
    fn other_never_returns_its_input() {
        for config in [Config::List, Config::Details] {
            assert_ne!(config.other(), config);
        }
    }
}
