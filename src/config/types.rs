// Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

/// Screen corner the toast stack is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    #[default]
    BottomRight,
    BottomLeft,
    TopRight,
    TopLeft,
}

impl ToastPosition {
    pub fn is_bottom(self) -> bool {
        matches!(self, ToastPosition::BottomRight | ToastPosition::BottomLeft)
    }

    pub fn is_right(self) -> bool {
        matches!(self, ToastPosition::BottomRight | ToastPosition::TopRight)
    }
}

/// Toast configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ToastConfig {
    /// Auto-dismiss delay in milliseconds; 0 keeps toasts until closed
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    #[serde(default)]
    pub position: ToastPosition,
    #[serde(default = "default_min_width")]
    pub min_width: u16,
    #[serde(default = "default_max_width")]
    pub max_width: u16,
}

fn default_duration_ms() -> u64 {
    3000
}

fn default_min_width() -> u16 {
    30
}

fn default_max_width() -> u16 {
    40
}

impl ToastConfig {
    pub fn default_duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Width bounds with `min <= max` guaranteed
    pub fn width_bounds(&self) -> (u16, u16) {
        let min = self.min_width.max(8);
        (min, self.max_width.max(min))
    }
}

impl Default for ToastConfig {
    fn default() -> Self {
        ToastConfig {
            duration_ms: default_duration_ms(),
            position: ToastPosition::default(),
            min_width: default_min_width(),
            max_width: default_max_width(),
        }
    }
}

/// Confirmation dialog configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmConfig {
    #[serde(default = "default_confirm_text")]
    pub confirm_text: String,
    #[serde(default = "default_cancel_text")]
    pub cancel_text: String,
}

fn default_confirm_text() -> String {
    "Confirm".to_string()
}

fn default_cancel_text() -> String {
    "Cancel".to_string()
}

impl Default for ConfirmConfig {
    fn default() -> Self {
        ConfirmConfig {
            confirm_text: default_confirm_text(),
            cancel_text: default_cancel_text(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub toast: ToastConfig,
    #[serde(default)]
    pub confirm: ConfirmConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
