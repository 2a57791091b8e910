//! Root and per-screen components.
//!
//! [`RootComponent`] owns the navigation store, maps each [`Config`]
//! to a concrete screen component, and exposes the current stack to
//! the presentation layer. Each screen component captures a shared
//! [`NavHandle`] and offers a single action: jump to the other screen
//! by replacing the whole stack.

use crate::config::Config;
use crate::stack::NavStack;
use crate::store::NavStore;
use crate::types::NavHandle;
use std::cell::{Ref, RefCell};
use std::rc::Rc;

/// Component backing the "List" screen.
pub struct ListComponent {
    nav: NavHandle,
}

impl ListComponent {
    /// Replaces the stack with `[Details]`.
    pub fn go_to_other_screen(&self) {
        self.nav
            .borrow_mut()
            .replace_stack(NavStack::single(Config::Details));
    }
}

/// Component backing the "Details" screen.
pub struct DetailsComponent {
    nav: NavHandle,
}

impl DetailsComponent {
    /// Replaces the stack with `[List]`.
    pub fn go_to_other_screen(&self) {
        self.nav
            .borrow_mut()
            .replace_stack(NavStack::single(Config::List));
    }
}

/// All possible child components, one per [`Config`] variant.
///
/// The enum is matched exhaustively wherever it is dispatched, so a
/// configuration without a matching screen cannot compile.
pub enum Child {
    List(ListComponent),
    Details(DetailsComponent),
}

impl Child {
    /// Forwards to the wrapped component's navigation action.
    pub fn go_to_other_screen(&self) {
        match self {
            Child::List(component) => component.go_to_other_screen(),
            Child::Details(component) => component.go_to_other_screen(),
        }
    }
}

/// Owner of the navigation store and the configuration-to-screen mapping.
///
/// Construction seeds the stack with a single `Details` entry; the
/// stack lives exactly as long as this component.
pub struct RootComponent {
    nav: NavHandle,
}

impl RootComponent {
    /// Creates the root with initial stack `[Details]`.
    pub fn new() -> Self {
        let nav = Rc::new(RefCell::new(NavStore::new(NavStack::single(
            Config::Details,
        ))));
        Self { nav }
    }

    /// The current navigation stack.
    pub fn stack(&self) -> Ref<'_, NavStack> {
        Ref::map(self.nav.borrow(), NavStore::current_stack)
    }

    /// Top entry of the current stack.
    pub fn active_config(&self) -> Config {
        self.nav.borrow().active()
    }

    /// The screen component for the top of the stack.
    pub fn active_child(&self) -> Child {
        self.child(self.active_config())
    }

    /// Registers an observer for stack replacements.
    pub fn subscribe(&self, subscriber: impl FnMut(&NavStack) + 'static) {
        self.nav.borrow_mut().subscribe(subscriber);
    }

    /// Total mapping from configuration to screen component.
    fn child(&self, config: Config) -> Child {
        match config {
            Config::List => Child::List(ListComponent {
                nav: Rc::clone(&self.nav),
            }),
            Config::Details => Child::Details(DetailsComponent {
                nav: Rc::clone(&self.nav),
            }),
        }
    }
}

impl Default for RootComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn initial_configuration_is_details() {
        let root = RootComponent::new();

        assert_eq!(root.active_config(), Config::Details);
        assert_eq!(root.stack().len(), 1);
    }

    #[test]
    fn details_component_navigates_to_list() {
        let root = RootComponent::new();

        root.active_child().go_to_other_screen();

        assert_eq!(root.active_config(), Config::List);
    }

    #[test]
    fn list_component_navigates_back_to_details() {
        let root = RootComponent::new();

        // Details -> List first, then List -> Details.
        root.active_child().go_to_other_screen();
        assert_eq!(root.active_config(), Config::List);

        root.active_child().go_to_other_screen();
        assert_eq!(root.active_config(), Config::Details);
    }

    #[test]
    fn transitions_alternate_strictly() {
        let root = RootComponent::new();

        // Record the active config after each of 100 transitions.
        let seen: Rc<RefCell<Vec<Config>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        root.subscribe(move |stack| sink.borrow_mut().push(stack.active()));

        let mut expected = root.active_config();
        for _ in 0..100 {
            root.active_child().go_to_other_screen();

            expected = expected.other();
            assert_eq!(root.active_config(), expected);

            // Full replacement: the stack never grows.
            assert_eq!(root.stack().len(), 1);
        }

        // An even number of transitions returns to the start.
        assert_eq!(root.active_config(), Config::Details);

        // The observed sequence is List, Details, List, Details, ...
        let seen = seen.borrow();
        assert_eq!(seen.len(), 100);
        for (i, config) in seen.iter().enumerate() {
            let expected = if i % 2 == 0 {
                Config::List
            } else {
                Config::Details
            };
            assert_eq!(*config, expected, "transition {i}");
        }
    }

    #[test]
    fn every_configuration_maps_to_its_own_child() {
        let root = RootComponent::new();

        for config in [Config::List, Config::Details] {
            match (config, root.child(config)) {
                (Config::List, Child::List(_)) => {}
                (Config::Details, Child::Details(_)) => {}
                (config, _) => panic!("{:?} mapped to the wrong child", config),
            }
        }
    }
}
