//! Embedded icon glyphs for the navigation rows.

pub(crate) const LAYOUT_GRID: &[u8] =
    include_bytes!("../assets/svg/layout-grid.svg");
pub(crate) const LAYERS: &[u8] = include_bytes!("../assets/svg/layers.svg");
pub(crate) const SLIDERS_HORIZONTAL: &[u8] =
    include_bytes!("../assets/svg/sliders-horizontal.svg");
pub(crate) const FILE_TEXT: &[u8] =
    include_bytes!("../assets/svg/file-text.svg");
pub(crate) const MIC: &[u8] = include_bytes!("../assets/svg/mic.svg");
pub(crate) const KEYBOARD: &[u8] =
    include_bytes!("../assets/svg/keyboard.svg");
pub(crate) const EXTERNAL_LINK: &[u8] =
    include_bytes!("../assets/svg/external-link.svg");
pub(crate) const GIT_BRANCH: &[u8] =
    include_bytes!("../assets/svg/git-branch.svg");
pub(crate) const SERVER_COG: &[u8] =
    include_bytes!("../assets/svg/server-cog.svg");
pub(crate) const TERMINAL_SQUARE: &[u8] =
    include_bytes!("../assets/svg/terminal-square.svg");
pub(crate) const FLASK_CONICAL: &[u8] =
    include_bytes!("../assets/svg/flask-conical.svg");
