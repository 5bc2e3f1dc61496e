use monitor_ui_settings_nav::{NavMetrics, SettingsSection};

use crate::config::UiConfig;

/// Section shown when the config does not name one.
const DEFAULT_SECTION: SettingsSection = SettingsSection::Projects;

/// Active section and layout options for the settings screen.
#[derive(Debug)]
pub(super) struct SettingsState {
    active_section: Option<SettingsSection>,
    metrics: NavMetrics,
}

impl SettingsState {
    pub(super) fn from_config(config: &UiConfig) -> Self {
        let active_section = match config.initial_section.as_deref() {
            Some(id) => SettingsSection::from_id_lossy(id),
            None => Some(DEFAULT_SECTION),
        };

        Self {
            active_section,
            metrics: config.nav.sanitized(),
        }
    }

    pub(super) fn active_section(&self) -> Option<SettingsSection> {
        self.active_section
    }

    pub(super) fn metrics(&self) -> NavMetrics {
        self.metrics
    }

    /// Move to `section`, returning the previous value when it changed.
    pub(super) fn select(
        &mut self,
        section: SettingsSection,
    ) -> Option<Option<SettingsSection>> {
        if self.active_section == Some(section) {
            return None;
        }

        let previous = self.active_section.replace(section);
        Some(previous)
    }
}

impl Default for SettingsState {
    fn default() -> Self {
        Self::from_config(&UiConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use monitor_ui_settings_nav::{NavMetrics, SettingsSection};

    use super::SettingsState;
    use crate::config::UiConfig;

    #[test]
    fn given_default_config_when_building_state_then_projects_is_active() {
        let state = SettingsState::default();

        assert_eq!(state.active_section(), Some(SettingsSection::Projects));
        assert_eq!(state.metrics(), NavMetrics::default());
    }

    #[test]
    fn given_unknown_initial_section_when_building_state_then_nothing_is_active()
    {
        let config = UiConfig {
            initial_section: Some(String::from("nonexistent")),
            ..UiConfig::default()
        };

        let state = SettingsState::from_config(&config);

        assert_eq!(state.active_section(), None);
    }

    #[test]
    fn given_known_initial_section_when_building_state_then_it_is_active() {
        let config = UiConfig {
            initial_section: Some(String::from("open-apps")),
            ..UiConfig::default()
        };

        let state = SettingsState::from_config(&config);

        assert_eq!(state.active_section(), Some(SettingsSection::OpenApps));
    }

    #[test]
    fn given_active_section_when_selecting_same_then_nothing_changes() {
        let mut state = SettingsState::default();

        assert_eq!(state.select(SettingsSection::Projects), None);
        assert_eq!(state.active_section(), Some(SettingsSection::Projects));
    }

    #[test]
    fn given_active_section_when_selecting_other_then_previous_is_returned() {
        let mut state = SettingsState::default();

        let previous = state.select(SettingsSection::Git);

        assert_eq!(previous, Some(Some(SettingsSection::Projects)));
        assert_eq!(state.active_section(), Some(SettingsSection::Git));
    }
}
