use crate::config::Config;
use crate::stack::NavStack;

/// Observer invoked with the new stack after every replacement.
pub type Subscriber = Box<dyn FnMut(&NavStack)>;

/// Holds the current [`NavStack`] and lets observers react to changes.
///
/// The store owns no UI state. All access happens on the single UI
/// thread (shared as [`crate::types::NavHandle`]), so there is no
/// locking; subscribers are called synchronously and must not re-enter
/// the store through the same handle.
pub struct NavStore {
    stack: NavStack,
    subscribers: Vec<Subscriber>,
}

impl NavStore {
    /// Creates a store holding `initial` with no subscribers.
    pub fn new(initial: NavStack) -> Self {
        Self {
            stack: initial,
            subscribers: Vec::new(),
        }
    }

    /// Replaces the entire stack atomically.
    ///
    /// Every subscriber is invoked synchronously with the new stack,
    /// after the replacement has taken effect. `NavStack` is non-empty
    /// by construction, so there is no failure path.
    pub fn replace_stack(&mut self, stack: NavStack) {
        log::debug!(
            "navigation: {} -> {}",
            self.stack.active().name(),
            stack.active().name()
        );

        self.stack = stack;
        for subscriber in &mut self.subscribers {
            subscriber(&self.stack);
        }
    }

    /// The current stack. No side effects.
    pub fn current_stack(&self) -> &NavStack {
        &self.stack
    }

    /// Top entry of the current stack.
    pub fn active(&self) -> Config {
        self.stack.active()
    }

    /// Registers an observer for future stack replacements.
    ///
    /// The observer is not called for the stack contents at the time
    /// of subscription, only for changes after it.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&NavStack) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }
}
