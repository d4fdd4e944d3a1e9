//! Layout module for tracking overlay regions
//!
//! This module provides region tracking for position-aware mouse interactions.
//! The `LayoutRegions` struct records where toasts and the confirmation dialog
//! were rendered, and `region_at()` determines which of them is at a given
//! screen position.

mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_regions::{LayoutRegions, Region, ToastRegion};
