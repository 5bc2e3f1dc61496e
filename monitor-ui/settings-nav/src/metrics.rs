use serde::Deserialize;

const DEFAULT_WIDTH: f32 = 220.0;
const DEFAULT_BUTTON_HEIGHT: f32 = 34.0;
const DEFAULT_ICON_SIZE: f32 = 16.0;
const DEFAULT_SPACING: f32 = 2.0;
const DEFAULT_PADDING: f32 = 8.0;
const DEFAULT_LABEL_SIZE: f32 = 13.0;

/// Layout sizes used by [`crate::SettingsNav::view`].
///
/// Deserializes from partial JSON objects; missing keys keep their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavMetrics {
    /// Fixed width of the sidebar.
    pub width: f32,
    /// Height of one navigation button.
    pub button_height: f32,
    /// Edge length of the square icon.
    pub icon_size: f32,
    /// Vertical gap between buttons.
    pub spacing: f32,
    /// Inner padding of the sidebar container.
    pub padding: f32,
    /// Label font size.
    pub label_size: f32,
}

impl NavMetrics {
    /// Replace non-finite or non-positive sizes with defaults.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        Self {
            width: positive_or(self.width, defaults.width),
            button_height: positive_or(
                self.button_height,
                defaults.button_height,
            ),
            icon_size: positive_or(self.icon_size, defaults.icon_size),
            spacing: non_negative_or(self.spacing, defaults.spacing),
            padding: non_negative_or(self.padding, defaults.padding),
            label_size: positive_or(self.label_size, defaults.label_size),
        }
    }
}

impl Default for NavMetrics {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            button_height: DEFAULT_BUTTON_HEIGHT,
            icon_size: DEFAULT_ICON_SIZE,
            spacing: DEFAULT_SPACING,
            padding: DEFAULT_PADDING,
            label_size: DEFAULT_LABEL_SIZE,
        }
    }
}

fn positive_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

fn non_negative_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::NavMetrics;

    #[test]
    fn given_partial_json_when_deserializing_then_missing_keys_use_defaults() {
        let metrics: NavMetrics =
            serde_json::from_str(r#"{ "width": 260.0 }"#).expect("metrics");

        assert_eq!(metrics.width, 260.0);
        assert_eq!(metrics.button_height, NavMetrics::default().button_height);
        assert_eq!(metrics.label_size, NavMetrics::default().label_size);
    }

    #[test]
    fn given_invalid_sizes_when_sanitized_then_defaults_replace_them() {
        let defaults = NavMetrics::default();
        let metrics = NavMetrics {
            width: -1.0,
            button_height: 0.0,
            icon_size: f32::NAN,
            spacing: -4.0,
            padding: 0.0,
            label_size: f32::INFINITY,
        }
        .sanitized();

        assert_eq!(metrics.width, defaults.width);
        assert_eq!(metrics.button_height, defaults.button_height);
        assert_eq!(metrics.icon_size, defaults.icon_size);
        assert_eq!(metrics.spacing, defaults.spacing);
        assert_eq!(metrics.padding, 0.0);
        assert_eq!(metrics.label_size, defaults.label_size);
    }
}
