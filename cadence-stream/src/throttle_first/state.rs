// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Pure Idle/Gating state machine of the throttle-first operator.
//!
//! Every transition is a pure function of the current flags and one event;
//! no I/O happens here. The coordinator in `implementation.rs` owns the
//! actual subscriptions and applies the decisions returned by [`Machine`].

/// What to do with a source item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ItemDecision {
    /// Forward the item downstream; a new suppression window is now open.
    Emit,
    /// Drop the item; a window is still open.
    Ignore,
}

/// What to do when the gating stream signals the end of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WindowDecision {
    /// The next source item is eligible for emission again.
    Reopen,
    /// The source already completed while this window was open; signal
    /// completion downstream now.
    Finish,
}

/// What to do when the source stream completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CompletionDecision {
    /// A window is open; completion is withheld until it closes.
    Defer,
    /// Signal completion downstream immediately.
    Finish,
}

/// Operator state: whether a suppression window is open, whether the source
/// has already completed, and whether a terminal notification went out.
///
/// Once `terminated` is set no further transition is taken; the coordinator
/// checks [`Machine::is_terminated`] before delivering any event.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Machine {
    window_open: bool,
    source_done: bool,
    terminated: bool,
}

impl Machine {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) const fn is_terminated(&self) -> bool {
        self.terminated
    }

    pub(crate) const fn is_source_done(&self) -> bool {
        self.source_done
    }

    /// A source item arrived.
    pub(crate) fn on_source_item(&mut self) -> ItemDecision {
        debug_assert!(!self.terminated && !self.source_done);
        if self.window_open {
            ItemDecision::Ignore
        } else {
            self.window_open = true;
            ItemDecision::Emit
        }
    }

    /// The gating stream delivered its first notification, value or
    /// completion alike.
    pub(crate) fn on_window_signal(&mut self) -> WindowDecision {
        debug_assert!(self.window_open && !self.terminated);
        self.window_open = false;
        if self.source_done {
            self.terminated = true;
            WindowDecision::Finish
        } else {
            WindowDecision::Reopen
        }
    }

    /// The source stream completed.
    pub(crate) fn on_source_complete(&mut self) -> CompletionDecision {
        debug_assert!(!self.terminated);
        self.source_done = true;
        if self.window_open {
            CompletionDecision::Defer
        } else {
            self.terminated = true;
            CompletionDecision::Finish
        }
    }

    /// The source stream failed. Always fatal, regardless of state.
    pub(crate) fn on_source_error(&mut self) {
        self.window_open = false;
        self.terminated = true;
    }

    /// The gating stream failed. Always fatal; there is no well-defined next
    /// window to fall back to.
    pub(crate) fn on_window_error(&mut self) {
        self.window_open = false;
        self.terminated = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_item_is_emitted_and_opens_a_window() {
        let mut machine = Machine::new();
        assert_eq!(machine.on_source_item(), ItemDecision::Emit);
    }

    #[test]
    fn items_during_an_open_window_are_ignored() {
        let mut machine = Machine::new();
        machine.on_source_item();
        assert_eq!(machine.on_source_item(), ItemDecision::Ignore);
        assert_eq!(machine.on_source_item(), ItemDecision::Ignore);
    }

    #[test]
    fn window_signal_reopens_for_the_next_item() {
        let mut machine = Machine::new();
        machine.on_source_item();
        assert_eq!(machine.on_window_signal(), WindowDecision::Reopen);
        assert_eq!(machine.on_source_item(), ItemDecision::Emit);
    }

    #[test]
    fn completion_while_idle_finishes_immediately() {
        let mut machine = Machine::new();
        assert_eq!(machine.on_source_complete(), CompletionDecision::Finish);
        assert!(machine.is_terminated());
    }

    #[test]
    fn completion_during_a_window_is_deferred() {
        let mut machine = Machine::new();
        machine.on_source_item();
        assert_eq!(machine.on_source_complete(), CompletionDecision::Defer);
        assert!(!machine.is_terminated());
        assert!(machine.is_source_done());
    }

    #[test]
    fn deferred_completion_resolves_when_the_window_closes() {
        let mut machine = Machine::new();
        machine.on_source_item();
        machine.on_source_complete();
        assert_eq!(machine.on_window_signal(), WindowDecision::Finish);
        assert!(machine.is_terminated());
    }

    #[test]
    fn source_error_terminates_in_any_state() {
        let mut idle = Machine::new();
        idle.on_source_error();
        assert!(idle.is_terminated());

        let mut gating = Machine::new();
        gating.on_source_item();
        gating.on_source_error();
        assert!(gating.is_terminated());
    }

    #[test]
    fn window_error_terminates() {
        let mut machine = Machine::new();
        machine.on_source_item();
        machine.on_window_error();
        assert!(machine.is_terminated());
    }

    #[test]
    fn emit_after_reopen_then_ignore_again() {
        let mut machine = Machine::new();
        machine.on_source_item();
        machine.on_window_signal();
        assert_eq!(machine.on_source_item(), ItemDecision::Emit);
        assert_eq!(machine.on_source_item(), ItemDecision::Ignore);
    }
}
