use iced::widget::{container, row, text};
use iced::{Element, Length};
use monitor_ui_settings_nav::{SettingsNav, SettingsSection};

#[derive(Debug, Clone)]
enum Message {
    Select(SettingsSection),
}

#[derive(Default)]
struct AppState {
    active: Option<SettingsSection>,
}

fn update(state: &mut AppState, message: Message) {
    match message {
        Message::Select(section) => state.active = Some(section),
    }
}

fn view(state: &AppState) -> Element<'_, Message> {
    let nav = SettingsNav::new(state.active)
        .on_select(Message::Select)
        .view();

    let selected = state
        .active
        .map(|section| format!("Selected: {}", section.label()))
        .unwrap_or_else(|| String::from("Nothing selected"));

    row![
        nav,
        container(text(selected))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(16)
    ]
    .into()
}

fn main() -> iced::Result {
    iced::run(update, view)
}
