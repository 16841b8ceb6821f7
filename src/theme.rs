//! Theme tokens consumed at draw time.
//!
//! The draw routine never reads ambient theme state itself; it takes a
//! resolved `Palette`. The wasm glue resolves one per draw from CSS
//! custom properties so a theme flip shows up on the very next frame, and
//! any missing token falls back to a hardcoded color so a theming gap can
//! never make rendering hard-fail.

pub const TOKEN_BACKGROUND: &str = "--quiet-background";
pub const TOKEN_QUIET_LINE: &str = "--quiet-line";
pub const TOKEN_STRONG_LINE: &str = "--strong-line";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

/// The colors one draw pass works with, as CSS color strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Fill painted behind the grid.
    pub background: String,
    /// Base-pass line color.
    pub quiet_line: String,
    /// Highlight-pass line color.
    pub strong_line: String,
}

impl Palette {
    /// Hardcoded colors used when a token is missing.
    pub fn fallback(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self {
                background: "#f5f4f0".to_owned(),
                quiet_line: "#1c1c1c".to_owned(),
                strong_line: "#1c1c1c".to_owned(),
            },
            ThemeMode::Dark => Self {
                background: "#111113".to_owned(),
                quiet_line: "#e8e6e1".to_owned(),
                strong_line: "#ffffff".to_owned(),
            },
        }
    }

    /// Resolve the palette through an injected token accessor. `lookup`
    /// returning `None` or an empty string counts as a missing token
    /// (computed style reports unset custom properties as "").
    pub fn resolve(mode: ThemeMode, mut lookup: impl FnMut(&str) -> Option<String>) -> Self {
        let fallback = Self::fallback(mode);
        let mut token = |name: &str, fallback: String| match lookup(name) {
            Some(value) if !value.trim().is_empty() => value.trim().to_owned(),
            _ => fallback,
        };
        Self {
            background: token(TOKEN_BACKGROUND, fallback.background),
            quiet_line: token(TOKEN_QUIET_LINE, fallback.quiet_line),
            strong_line: token(TOKEN_STRONG_LINE, fallback.strong_line),
        }
    }
}
