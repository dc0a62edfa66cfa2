//! Button menu for the `check` command: the selectable top-N limits.
//!
//! The same list renders the keyboard and validates callback payloads.

use crate::types::{Keyboard, KeyboardButton};

/// Limits offered by the default menu, in display order.
pub const DEFAULT_LIMITS: [u32; 4] = [5, 10, 50, 100];

/// Ordered set of top-N limits. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonMenu {
    limits: Vec<u32>,
}

impl ButtonMenu {
    pub fn new(limits: Vec<u32>) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &[u32] {
        &self.limits
    }

    /// Payload carried by the button for `limit`.
    pub fn payload(limit: u32) -> String {
        limit.to_string()
    }

    /// One button per row; label and callback payload are both the decimal limit.
    pub fn keyboard(&self) -> Keyboard {
        let rows = self
            .limits
            .iter()
            .map(|&limit| {
                vec![KeyboardButton {
                    label: limit.to_string(),
                    payload: Self::payload(limit),
                }]
            })
            .collect();
        Keyboard { rows }
    }

    /// Limit selected by a callback payload; `None` when the payload is not one of this menu's buttons.
    pub fn limit_for(&self, payload: &str) -> Option<u32> {
        self.limits
            .iter()
            .copied()
            .find(|&limit| Self::payload(limit) == payload)
    }
}

impl Default for ButtonMenu {
    fn default() -> Self {
        Self::new(DEFAULT_LIMITS.to_vec())
    }
}
