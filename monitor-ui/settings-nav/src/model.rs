use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::icons;

/// Settings category shown as one row of the navigation sidebar.
///
/// The declaration order is the render order; [`SettingsSection::ALL`]
/// mirrors it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum SettingsSection {
    Projects,
    Environments,
    Display,
    Composer,
    Dictation,
    Shortcuts,
    OpenApps,
    Git,
    Server,
    Codex,
    Features,
}

impl SettingsSection {
    /// Every section in sidebar order.
    pub const ALL: [SettingsSection; 11] = [
        SettingsSection::Projects,
        SettingsSection::Environments,
        SettingsSection::Display,
        SettingsSection::Composer,
        SettingsSection::Dictation,
        SettingsSection::Shortcuts,
        SettingsSection::OpenApps,
        SettingsSection::Git,
        SettingsSection::Server,
        SettingsSection::Codex,
        SettingsSection::Features,
    ];

    /// Stable identifier, also used by serde and [`FromStr`].
    pub fn id(self) -> &'static str {
        match self {
            SettingsSection::Projects => "projects",
            SettingsSection::Environments => "environments",
            SettingsSection::Display => "display",
            SettingsSection::Composer => "composer",
            SettingsSection::Dictation => "dictation",
            SettingsSection::Shortcuts => "shortcuts",
            SettingsSection::OpenApps => "open-apps",
            SettingsSection::Git => "git",
            SettingsSection::Server => "server",
            SettingsSection::Codex => "codex",
            SettingsSection::Features => "features",
        }
    }

    /// Human readable button label.
    pub fn label(self) -> &'static str {
        match self {
            SettingsSection::Projects => "Projects",
            SettingsSection::Environments => "Environments",
            SettingsSection::Display => "Display & Sound",
            SettingsSection::Composer => "Composer",
            SettingsSection::Dictation => "Dictation",
            SettingsSection::Shortcuts => "Shortcuts",
            SettingsSection::OpenApps => "Open in",
            SettingsSection::Git => "Git",
            SettingsSection::Server => "Server",
            SettingsSection::Codex => "Codex",
            SettingsSection::Features => "Features",
        }
    }

    /// Decorative SVG glyph rendered in front of the label.
    pub fn icon(self) -> &'static [u8] {
        match self {
            SettingsSection::Projects => icons::LAYOUT_GRID,
            SettingsSection::Environments => icons::LAYERS,
            SettingsSection::Display => icons::SLIDERS_HORIZONTAL,
            SettingsSection::Composer => icons::FILE_TEXT,
            SettingsSection::Dictation => icons::MIC,
            SettingsSection::Shortcuts => icons::KEYBOARD,
            SettingsSection::OpenApps => icons::EXTERNAL_LINK,
            SettingsSection::Git => icons::GIT_BRANCH,
            SettingsSection::Server => icons::SERVER_COG,
            SettingsSection::Codex => icons::TERMINAL_SQUARE,
            SettingsSection::Features => icons::FLASK_CONICAL,
        }
    }

    /// Parse an identifier, treating anything unknown as "no section".
    ///
    /// This is the path used for externally supplied active values: an
    /// unknown id must never fault, it just leaves every row unhighlighted.
    pub fn from_id_lossy(id: &str) -> Option<Self> {
        match id.parse() {
            Ok(section) => Some(section),
            Err(err) => {
                log::debug!("ignoring settings section: {err}");
                None
            },
        }
    }
}

impl fmt::Display for SettingsSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SettingsSection {
    type Err = SectionParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        SettingsSection::ALL
            .into_iter()
            .find(|section| section.id() == value)
            .ok_or_else(|| SectionParseError::Unknown {
                id: value.to_string(),
            })
    }
}

/// Errors produced when turning text into a [`SettingsSection`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SectionParseError {
    /// The identifier does not name any settings section.
    #[error("unknown settings section `{id}`")]
    Unknown { id: String },
}
