use iced::widget::{Column, Space, button, container, row, svg, text};
use iced::{Element, Length, alignment};

use crate::metrics::NavMetrics;
use crate::model::SettingsSection;
use crate::style;

const ACCENT_STRIP_WIDTH: f32 = 2.0;
const ROW_CONTENT_SPACING: f32 = 10.0;
const ROW_PADDING_X: f32 = 10.0;

type SelectAction<'a, Message> = dyn Fn(SettingsSection) -> Message + 'a;

/// One resolved navigation row, ready to be rendered.
///
/// Produced by [`SettingsNav::entries`]; the same data drives
/// [`SettingsNav::view`].
#[derive(Debug, Clone, PartialEq)]
pub struct NavEntry<Message> {
    pub section: SettingsSection,
    pub label: &'static str,
    pub icon: &'static [u8],
    pub is_active: bool,
    /// Message emitted when the row is pressed, `None` if no handler is set.
    pub on_press: Option<Message>,
}

/// Sidebar listing every [`SettingsSection`] with the active one marked.
///
/// The active section is owned by the caller and only read here. Pressing
/// a row emits the message built by [`SettingsNav::on_select`] and nothing
/// else.
pub struct SettingsNav<'a, Message> {
    active: Option<SettingsSection>,
    on_select: Option<Box<SelectAction<'a, Message>>>,
    metrics: NavMetrics,
}

impl<'a, Message> SettingsNav<'a, Message>
where
    Message: Clone + 'a,
{
    /// Create a nav with the given active section (`None` marks nothing).
    pub fn new(active: Option<SettingsSection>) -> Self {
        Self {
            active,
            on_select: None,
            metrics: NavMetrics::default(),
        }
    }

    /// Build the message emitted when a row is pressed.
    pub fn on_select(
        mut self,
        on_select: impl Fn(SettingsSection) -> Message + 'a,
    ) -> Self {
        self.on_select = Some(Box::new(on_select));
        self
    }

    /// Override layout sizes.
    pub fn metrics(mut self, metrics: NavMetrics) -> Self {
        self.metrics = metrics.sanitized();
        self
    }

    /// Resolve every row in sidebar order.
    pub fn entries(&self) -> Vec<NavEntry<Message>> {
        SettingsSection::ALL
            .into_iter()
            .map(|section| NavEntry {
                section,
                label: section.label(),
                icon: section.icon(),
                is_active: self.active == Some(section),
                on_press: self.on_select.as_ref().map(|build| build(section)),
            })
            .collect()
    }

    /// Render the sidebar.
    pub fn view(self) -> Element<'a, Message> {
        let metrics = self.metrics;
        let buttons = self
            .entries()
            .into_iter()
            .map(|entry| nav_button(entry, metrics));

        let list = Column::with_children(buttons)
            .spacing(metrics.spacing)
            .width(Length::Fill);

        container(list)
            .width(Length::Fixed(metrics.width))
            .height(Length::Fill)
            .padding(metrics.padding)
            .style(style::sidebar_style)
            .into()
    }
}

fn nav_button<'a, Message: Clone + 'a>(
    entry: NavEntry<Message>,
    metrics: NavMetrics,
) -> Element<'a, Message> {
    let is_active = entry.is_active;

    let icon = svg::Svg::new(svg::Handle::from_memory(entry.icon))
        .width(Length::Fixed(metrics.icon_size))
        .height(Length::Fixed(metrics.icon_size))
        .style(style::nav_icon_style(is_active));

    let label = text(entry.label).size(metrics.label_size);

    let content = row![icon, label]
        .spacing(ROW_CONTENT_SPACING)
        .padding([0.0, ROW_PADDING_X])
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center);

    let accent_strip = container(Space::new())
        .width(Length::Fixed(ACCENT_STRIP_WIDTH))
        .height(Length::Fill)
        .style(style::accent_strip_style(is_active));

    let body = row![accent_strip, content]
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center);

    button(body)
        .on_press_maybe(entry.on_press)
        .padding(0)
        .width(Length::Fill)
        .height(Length::Fixed(metrics.button_height))
        .style(style::nav_button_style(is_active))
        .into()
}
