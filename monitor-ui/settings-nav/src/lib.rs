//! Settings sidebar navigation for [`iced`] applications.
//!
//! The crate is split into two layers:
//! - a UI-agnostic model ([`SettingsSection`]) with the fixed section table:
//!   identifier, label and icon for each settings category;
//! - a view helper ([`SettingsNav`]) that renders one button per section and
//!   marks the caller's active section.
//!
//! The nav owns no state. The caller keeps the active section, passes it in
//! on every render and updates it from the message built by
//! [`SettingsNav::on_select`].
//!
//! # Quick Example
//!
//! ```no_run
//! use iced::Element;
//! use monitor_ui_settings_nav::{SettingsNav, SettingsSection};
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     SelectSection(SettingsSection),
//! }
//!
//! struct State {
//!     active: Option<SettingsSection>,
//! }
//!
//! fn update(state: &mut State, message: Message) {
//!     match message {
//!         Message::SelectSection(section) => state.active = Some(section),
//!     }
//! }
//!
//! fn view(state: &State) -> Element<'_, Message> {
//!     SettingsNav::new(state.active)
//!         .on_select(Message::SelectSection)
//!         .view()
//! }
//! ```

mod icons;
mod metrics;
mod model;
mod style;
mod view;

pub use metrics::NavMetrics;
pub use model::{SectionParseError, SettingsSection};
pub use view::{NavEntry, SettingsNav};
