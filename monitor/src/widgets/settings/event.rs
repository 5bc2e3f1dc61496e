use monitor_ui_settings_nav::SettingsSection;

/// Intent events handled by the settings presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SettingsIntent {
    /// A sidebar row was pressed.
    SelectSection(SettingsSection),
}

/// Effect events produced by the settings reducer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SettingsEffect {
    /// The active section moved to a different value.
    SectionChanged {
        from: Option<SettingsSection>,
        to: SettingsSection,
    },
}

/// Settings event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum SettingsEvent {
    /// Intent event reduced by the settings widget.
    Intent(SettingsIntent),
    /// External effect orchestrated by app-level routing.
    Effect(SettingsEffect),
}
