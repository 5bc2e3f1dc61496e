use iced::{Element, Task, Theme};

use crate::config;
use crate::widgets::settings::{
    SettingsEffect, SettingsEvent, SettingsIntent, SettingsWidget,
};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 720.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    Settings(SettingsEvent),
}

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) settings: SettingsWidget,
}

/// Root application state.
pub(crate) struct App {
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let config = config::load_or_default();
        let widgets = Widgets {
            settings: SettingsWidget::from_config(&config),
        };

        (App { widgets }, Task::none())
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        match self.widgets.settings.vm().active_section {
            Some(section) => format!("Settings · {}", section.label()),
            None => String::from("Settings"),
        }
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        match event {
            AppEvent::Settings(SettingsEvent::Intent(intent)) => {
                self.route_settings_intent(intent)
            },
            AppEvent::Settings(SettingsEvent::Effect(effect)) => {
                route_settings_effect(effect)
            },
        }
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent> {
        crate::widgets::settings::view::view(self.widgets.settings.vm())
            .map(AppEvent::Settings)
    }

    fn route_settings_intent(
        &mut self,
        intent: SettingsIntent,
    ) -> Task<AppEvent> {
        self.widgets
            .settings
            .reduce(intent)
            .map(AppEvent::Settings)
    }
}

fn route_settings_effect(effect: SettingsEffect) -> Task<AppEvent> {
    match effect {
        SettingsEffect::SectionChanged { from, to } => {
            match from {
                Some(from) => log::info!("settings section {from} -> {to}"),
                None => log::info!("settings section -> {to}"),
            }
            Task::none()
        },
    }
}
