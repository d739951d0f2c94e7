//! Generic command dispatcher with explicit unhandled-command reporting
//!
//! Commands are closed, compile-time enums; the command→handler mapping is a
//! fixed table established at construction and immutable afterwards. A
//! command absent from the table never executes anything silently: dispatch
//! invokes the `not_found` hook exactly once and reports `NotFound` to the
//! caller. The hook must never panic for a UI-issued command.

use std::collections::HashMap;
use std::hash::Hash;

/// A discrete, named user-issued action
///
/// Identity is the name; commands carry no other attributes.
pub trait Command: Copy + Eq + Hash + std::fmt::Debug {
    /// Stable name of the command, used in not-found reporting and logs
    fn name(&self) -> &'static str;
}

/// Outcome of a single dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome<R> {
    /// A handler was registered and ran to completion
    Handled(R),
    /// No handler is registered; the not-found hook has been invoked
    NotFound,
}

impl<R> DispatchOutcome<R> {
    pub fn is_handled(&self) -> bool {
        matches!(self, DispatchOutcome::Handled(_))
    }
}

/// Handlers are plain functions over the dispatch target; per-command state
/// lives in the target `S`, never in the table.
pub type Handler<S, R> = fn(&mut S) -> R;

/// Immutable command→handler table
///
/// `S` is the dispatch target (the state machine the handlers mutate), `R`
/// the handler return type. Handlers are fire-and-forget from the
/// dispatcher's point of view; success or failure is observed by the caller
/// through `R` or through target state.
pub struct CommandDispatcher<C: Command, S, R = ()> {
    handlers: HashMap<C, Handler<S, R>>,
    not_found: Box<dyn Fn(&str)>,
}

impl<C: Command, S, R> CommandDispatcher<C, S, R> {
    pub fn builder() -> DispatcherBuilder<C, S, R> {
        DispatcherBuilder {
            handlers: HashMap::new(),
            not_found: None,
        }
    }

    /// Dispatch `cmd` against `target`
    ///
    /// Looks up the registered handler and invokes it. When no handler is
    /// registered the not-found hook is invoked with the command's name and
    /// `NotFound` is returned; no state is mutated in that case.
    pub fn dispatch(&self, target: &mut S, cmd: C) -> DispatchOutcome<R> {
        match self.handlers.get(&cmd) {
            Some(handler) => DispatchOutcome::Handled(handler(target)),
            None => {
                (self.not_found)(cmd.name());
                DispatchOutcome::NotFound
            }
        }
    }

    /// Look up the handler for `cmd` without invoking it
    ///
    /// Handlers are `Copy` fn pointers, so owners that embed the dispatcher
    /// inside the dispatch target itself can end the table borrow before
    /// running the handler. Misses are not reported through this path.
    pub fn handler(&self, cmd: C) -> Option<Handler<S, R>> {
        self.handlers.get(&cmd).copied()
    }

    /// True when a handler is registered for `cmd`
    pub fn handles(&self, cmd: C) -> bool {
        self.handlers.contains_key(&cmd)
    }
}

impl<C: Command, S, R> std::fmt::Debug for CommandDispatcher<C, S, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = self.handlers.keys().map(|c| c.name()).collect();
        names.sort_unstable();
        f.debug_struct("CommandDispatcher")
            .field("commands", &names)
            .finish()
    }
}

/// Builder for [`CommandDispatcher`]
///
/// The mapping is sealed by `build()`; there is no re-registration
/// afterwards.
pub struct DispatcherBuilder<C: Command, S, R = ()> {
    handlers: HashMap<C, Handler<S, R>>,
    not_found: Option<Box<dyn Fn(&str)>>,
}

impl<C: Command, S, R> DispatcherBuilder<C, S, R> {
    /// Register a handler for `cmd`
    ///
    /// # Panics
    ///
    /// Panics if `cmd` already has a handler; a double registration is a
    /// programmer error, not a runtime condition.
    pub fn handle(mut self, cmd: C, handler: Handler<S, R>) -> Self {
        let previous = self.handlers.insert(cmd, handler);
        assert!(
            previous.is_none(),
            "duplicate handler registered for command `{}`",
            cmd.name()
        );
        self
    }

    /// Install the hook invoked when an unregistered command is dispatched
    ///
    /// Defaults to a `tracing::debug!` notice.
    pub fn on_not_found(mut self, hook: impl Fn(&str) + 'static) -> Self {
        self.not_found = Some(Box::new(hook));
        self
    }

    pub fn build(self) -> CommandDispatcher<C, S, R> {
        CommandDispatcher {
            handlers: self.handlers,
            not_found: self.not_found.unwrap_or_else(|| {
                Box::new(|name| tracing::debug!(cmd = name, "no handler registered for command"))
            }),
        }
    }
}
