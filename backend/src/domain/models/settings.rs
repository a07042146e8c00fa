//! Display settings validation and presets.

/// Accent colors offered by the settings panel
pub const ACCENT_PRESETS: &[(&str, &str)] = &[
    ("Ice", "#bdffff"),
    ("Lilac", "#d4b8ff"),
    ("Rose", "#ffb8c6"),
    ("Mint", "#b8ffd4"),
    ("Sky", "#b8d4ff"),
    ("Peach", "#ffd4b8"),
    ("Lemon", "#fffab8"),
    ("Silver", "#d0d0d8"),
];

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SettingsError {
    #[error("Invalid color {0}, expected #rrggbb")]
    InvalidColor(String),
}

/// Normalize a `#rrggbb` color to lowercase
pub fn parse_color(color: &str) -> Result<String, SettingsError> {
    let trimmed = color.trim();
    let valid = trimmed.len() == 7
        && trimmed.starts_with('#')
        && trimmed[1..].chars().all(|c| c.is_ascii_hexdigit());
    if valid {
        Ok(trimmed.to_lowercase())
    } else {
        Err(SettingsError::InvalidColor(color.to_string()))
    }
}
