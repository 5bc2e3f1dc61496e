pub(crate) mod event;
pub(crate) mod reducer;
pub(crate) mod state;
pub(crate) mod view;

use iced::Task;
use monitor_ui_settings_nav::{NavMetrics, SettingsSection};
use state::SettingsState;

pub(crate) use event::{SettingsEffect, SettingsEvent, SettingsIntent};

use crate::config::UiConfig;

/// Read-only snapshot consumed by the settings view.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SettingsViewModel {
    pub(crate) active_section: Option<SettingsSection>,
    pub(crate) metrics: NavMetrics,
}

/// Settings screen widget: owns the active section fed to the sidebar.
pub(crate) struct SettingsWidget {
    state: SettingsState,
}

impl SettingsWidget {
    /// Create a widget with default state.
    #[cfg(test)]
    pub(crate) fn new() -> Self {
        Self {
            state: SettingsState::default(),
        }
    }

    /// Create a widget seeded from the UI config.
    pub(crate) fn from_config(config: &UiConfig) -> Self {
        Self {
            state: SettingsState::from_config(config),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: SettingsIntent,
    ) -> Task<SettingsEvent> {
        reducer::reduce(&mut self.state, event)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> SettingsViewModel {
        SettingsViewModel {
            active_section: self.state.active_section(),
            metrics: self.state.metrics(),
        }
    }
}
