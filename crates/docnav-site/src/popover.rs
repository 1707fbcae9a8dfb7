//! Open/closed state of the chrome's popovers.
//!
//! Each popover is owned by the element that renders it and only changes
//! through that element's event handlers.

/// Open/closed flag of a single popover.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Popover {
    open: bool,
}

impl Popover {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Apply an open-state change requested by the popover itself
    /// (e.g., Escape or a click outside).
    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }
}

/// Popovers owned by the curtain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CurtainState {
    pub sidebar: Popover,
    pub outline: Popover,
}

impl CurtainState {
    /// A sidebar link was followed.
    pub fn on_sidebar_item_click(&mut self) {
        self.sidebar.close();
    }

    /// An outline entry was followed.
    pub fn on_outline_item_click(&mut self) {
        self.outline.close();
    }
}

/// Popover owned by the compact top navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompactNavState {
    pub menu: Popover,
}

impl CompactNavState {
    /// A navigation entry was followed.
    pub fn on_item_click(&mut self) {
        self.menu.close();
    }
}
