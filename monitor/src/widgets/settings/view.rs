use iced::widget::{column, container, row, text};
use iced::{Element, Length};
use monitor_ui_settings_nav::{SettingsNav, SettingsSection};

use super::SettingsViewModel;
use super::event::{SettingsEvent, SettingsIntent};

const PANEL_PADDING: f32 = 24.0;
const PANEL_SPACING: f32 = 8.0;
const PANEL_TITLE_SIZE: f32 = 20.0;
const PANEL_BODY_SIZE: f32 = 13.0;

/// Render the sidebar next to the panel for the active section.
pub(crate) fn view(vm: SettingsViewModel) -> Element<'static, SettingsEvent> {
    let nav = SettingsNav::new(vm.active_section)
        .on_select(|section| {
            SettingsEvent::Intent(SettingsIntent::SelectSection(section))
        })
        .metrics(vm.metrics)
        .view();

    row![nav, section_panel(vm.active_section)]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn section_panel(
    active: Option<SettingsSection>,
) -> Element<'static, SettingsEvent> {
    let (title, body) = match active {
        Some(section) => (section.label(), panel_hint(section)),
        None => ("Settings", "Pick a section from the sidebar."),
    };

    let content = column![
        text(title).size(PANEL_TITLE_SIZE),
        text(body).size(PANEL_BODY_SIZE),
    ]
    .spacing(PANEL_SPACING);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(PANEL_PADDING)
        .into()
}

fn panel_hint(section: SettingsSection) -> &'static str {
    match section {
        SettingsSection::Projects => "Workspace groups and project defaults.",
        SettingsSection::Environments => "Setup scripts per environment.",
        SettingsSection::Display => "Theme, scaling and notification sounds.",
        SettingsSection::Composer => "Message composer behavior.",
        SettingsSection::Dictation => "Voice input model and hotkeys.",
        SettingsSection::Shortcuts => "Keyboard shortcuts.",
        SettingsSection::OpenApps => "Editors and apps offered by Open in.",
        SettingsSection::Git => "Commit message and diff options.",
        SettingsSection::Server => "Remote backend connection.",
        SettingsSection::Codex => "Codex binary, arguments and config.",
        SettingsSection::Features => "Experimental feature flags.",
    }
}
