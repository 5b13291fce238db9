// SPDX-License-Identifier: MPL-2.0
//! The closed set of notification kinds.

use crate::error::Error;
use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category drives a toast's icon, default title and color treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Operation completed successfully (green).
    Success,
    /// Something failed (red).
    Error,
    /// Non-blocking caution (orange).
    Warning,
    /// Neutral information (blue).
    #[default]
    Info,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Success,
        Category::Error,
        Category::Warning,
        Category::Info,
    ];

    /// Lowercase name used in config files and string APIs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Success => "success",
            Category::Error => "error",
            Category::Warning => "warning",
            Category::Info => "info",
        }
    }

    /// Glyph shown at the start of the toast header.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Category::Success => "✅",
            Category::Error => "❌",
            Category::Warning => "⚠️",
            Category::Info => "ℹ️",
        }
    }

    /// i18n key of the title used when the caller gives none.
    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            Category::Success => "notification-title-success",
            Category::Error => "notification-title-error",
            Category::Warning => "notification-title-warning",
            Category::Info => "notification-title-info",
        }
    }

    /// Accent color for the border and progress bar.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Category::Success => palette::SUCCESS_500,
            Category::Error => palette::ERROR_500,
            Category::Warning => palette::WARNING_500,
            Category::Info => palette::INFO_500,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| Error::InvalidCategory(raw.to_string()))
    }
}
