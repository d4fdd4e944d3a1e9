//! Layout regions tracking for overlays
//!
//! Tracks where toasts and the confirmation dialog are rendered for
//! position-aware mouse interactions.

use ratatui::layout::Rect;

use crate::confirm::ConfirmRegions;
use crate::toast::ToastId;

/// Identifies an overlay region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    // Confirmation dialog (modal, topmost)
    ConfirmAccept,
    ConfirmCancel,
    ConfirmPanel,
    Backdrop,

    // Toast stack
    ToastClose(ToastId),
    Toast(ToastId),
}

/// Where one toast was drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastRegion {
    pub id: ToastId,
    pub area: Rect,
    pub close: Option<Rect>,
}

/// Tracks rendered areas of overlays
///
/// Updated during each render pass. Used by mouse event handlers to determine
/// which overlay is under the cursor.
#[derive(Default, Clone, Debug)]
pub struct LayoutRegions {
    /// Toasts in render order (oldest first)
    pub toasts: Vec<ToastRegion>,
    /// Only populated while a dialog is on screen
    pub confirm: Option<ConfirmRegions>,
    /// Whole-frame backdrop behind the dialog; set even if the panel did not fit
    pub backdrop: Option<Rect>,
}

impl LayoutRegions {
    /// Create a new empty LayoutRegions
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all regions before a new render pass
    pub fn clear(&mut self) {
        self.toasts.clear();
        self.confirm = None;
        self.backdrop = None;
    }
}
