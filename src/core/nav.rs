// Mobile navigation menu state machine.

/// `closed` or `open`; while open, page scroll is locked. Transitions:
/// toggle on the menu button, forced close on nav-link selection or any
/// pointer interaction outside both the menu and its toggle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn scroll_locked(&self) -> bool {
        self.open
    }

    /// Flip the state; returns the new open flag.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Force-close; returns true when the state actually changed.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}
