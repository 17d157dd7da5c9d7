//! Site palette and spacing. Light/dark picked from the persisted theme.

#[derive(Clone, Copy)]
pub struct AppColors;

impl AppColors {
    // Light
    pub const LIGHT_PRIMARY: &'static str = "#2E7D32";
    pub const LIGHT_BACKGROUND: &'static str = "#F1F8E9";
    pub const LIGHT_SURFACE: &'static str = "#FFFFFF";
    pub const LIGHT_ON_SURFACE: &'static str = "#1B2A1C";
    pub const LIGHT_SUCCESS: &'static str = "#1B5E20";
    pub const LIGHT_ERROR: &'static str = "#C62828";

    // Dark
    pub const DARK_PRIMARY: &'static str = "#81C784";
    pub const DARK_BACKGROUND: &'static str = "#121A13";
    pub const DARK_SURFACE: &'static str = "#1E2A1F";
    pub const DARK_ON_SURFACE: &'static str = "#E3EDE3";
    pub const DARK_SUCCESS: &'static str = "#A5D6A7";
    pub const DARK_ERROR: &'static str = "#EF9A9A";

    pub fn primary(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_PRIMARY
        } else {
            Self::LIGHT_PRIMARY
        }
    }
    pub fn background(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_BACKGROUND
        } else {
            Self::LIGHT_BACKGROUND
        }
    }
    pub fn surface(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_SURFACE
        } else {
            Self::LIGHT_SURFACE
        }
    }
    pub fn on_surface(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_ON_SURFACE
        } else {
            Self::LIGHT_ON_SURFACE
        }
    }
    pub fn success(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_SUCCESS
        } else {
            Self::LIGHT_SUCCESS
        }
    }
    pub fn error(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_ERROR
        } else {
            Self::LIGHT_ERROR
        }
    }
}

pub mod spacing {
    pub const SM: &'static str = "8px";
    pub const LG: &'static str = "24px";
    pub const CARD_PADDING: &'static str = "20px";
    pub const CONTENT_WIDTH: &'static str = "640px";
}
