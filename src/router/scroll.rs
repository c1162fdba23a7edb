//! Scroll Behavior
//!
//! Decides where the page scrolls after a navigation. The site always
//! returns to the top, whatever the navigation direction and whatever
//! position was saved for the destination entry.

use serde::{Deserialize, Serialize};

/// Scroll offset in CSS pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollPosition {
    pub x: u32,
    pub y: u32,
}

impl ScrollPosition {
    pub const TOP: ScrollPosition = ScrollPosition { x: 0, y: 0 };

    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    pub fn is_top(&self) -> bool {
        *self == Self::TOP
    }
}

/// How a navigation was triggered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationKind {
    /// A new entry was pushed (link click, programmatic navigation)
    Push,
    /// The current entry was replaced
    Replace,
    /// History traversal backwards
    Back,
    /// History traversal forwards
    Forward,
}

/// Policy for the scroll position applied after a navigation
pub trait ScrollBehavior {
    /// Position to scroll to; `saved` is the position last recorded on the
    /// destination entry, if any
    fn position(&self, kind: NavigationKind, saved: Option<ScrollPosition>) -> ScrollPosition;
}

/// Always scroll to the top-left corner
#[derive(Debug, Clone, Copy, Default)]
pub struct ResetToTop;

impl ScrollBehavior for ResetToTop {
    fn position(&self, _kind: NavigationKind, _saved: Option<ScrollPosition>) -> ScrollPosition {
        ScrollPosition::TOP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_to_top_ignores_kind_and_saved_position() {
        let saved = Some(ScrollPosition::new(0, 1200));
        for kind in [
            NavigationKind::Push,
            NavigationKind::Replace,
            NavigationKind::Back,
            NavigationKind::Forward,
        ] {
            assert!(ResetToTop.position(kind, saved).is_top());
            assert!(ResetToTop.position(kind, None).is_top());
        }
    }
}
