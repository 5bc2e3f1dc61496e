use iced::Task;

use super::event::{SettingsEffect, SettingsEvent, SettingsIntent};
use super::state::SettingsState;

/// Reduce a settings intent into state updates and effect events.
pub(super) fn reduce(
    state: &mut SettingsState,
    event: SettingsIntent,
) -> Task<SettingsEvent> {
    match event {
        SettingsIntent::SelectSection(section) => {
            match state.select(section) {
                Some(from) => Task::done(SettingsEvent::Effect(
                    SettingsEffect::SectionChanged { from, to: section },
                )),
                None => Task::none(),
            }
        },
    }
}
