use iced::widget::{button, container, svg};
use iced::{Border, Color, Theme};

const HOVER_BACKGROUND_ALPHA: f32 = 0.5;
const ACTIVE_BACKGROUND_ALPHA: f32 = 0.35;
const BUTTON_RADIUS: f32 = 4.0;

/// Resolved colors for one navigation row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RowColors {
    pub(crate) background: Option<Color>,
    pub(crate) text: Color,
    pub(crate) accent: Color,
}

/// Resolve row colors from the theme palette and interaction status.
pub(crate) fn row_colors(
    theme: &Theme,
    is_active: bool,
    status: button::Status,
) -> RowColors {
    let palette = theme.extended_palette();
    if is_active {
        let mut background = palette.primary.weak.color;
        background.a = ACTIVE_BACKGROUND_ALPHA;
        return RowColors {
            background: Some(background),
            text: palette.background.base.text,
            accent: palette.primary.strong.color,
        };
    }

    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            let mut color = palette.background.strong.color;
            color.a = HOVER_BACKGROUND_ALPHA;
            Some(color)
        },
        button::Status::Active | button::Status::Disabled => None,
    };

    RowColors {
        background,
        text: palette.background.base.text,
        accent: Color::TRANSPARENT,
    }
}

/// Icon tint: accent for the active row, hover color under the pointer.
pub(crate) fn icon_color(
    theme: &Theme,
    is_active: bool,
    status: svg::Status,
) -> Color {
    let palette = theme.extended_palette();
    if is_active || matches!(status, svg::Status::Hovered) {
        palette.primary.strong.color
    } else {
        palette.background.strong.text
    }
}

pub(crate) fn nav_button_style(
    is_active: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style + 'static {
    move |theme, status| {
        let colors = row_colors(theme, is_active, status);
        button::Style {
            background: colors.background.map(Into::into),
            text_color: colors.text,
            border: Border {
                radius: BUTTON_RADIUS.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }
}

pub(crate) fn nav_icon_style(
    is_active: bool,
) -> impl Fn(&Theme, svg::Status) -> svg::Style + 'static {
    move |theme, status| svg::Style {
        color: Some(icon_color(theme, is_active, status)),
    }
}

pub(crate) fn accent_strip_style(
    is_active: bool,
) -> impl Fn(&Theme) -> container::Style + 'static {
    move |theme| {
        let colors = row_colors(theme, is_active, button::Status::Active);
        container::Style {
            background: Some(colors.accent.into()),
            ..container::Style::default()
        }
    }
}

pub(crate) fn sidebar_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.weak.color.into()),
        text_color: Some(palette.background.weak.text),
        ..container::Style::default()
    }
}
