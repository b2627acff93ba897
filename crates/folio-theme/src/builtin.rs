//! Built-in theme definitions.
//!
//! Each theme is defined as an embedded TOML constant. These provide the
//! full shipped palette set without requiring external theme files.

use folio_types::error::{FolioError, Result};

use crate::theme::{Theme, ThemeSpec};

// ---------------------------------------------------------------------------
// cyber: neon cyan on deep navy. The default.
// ---------------------------------------------------------------------------

const CYBER: &str = r##"
background = "#0a0e17"
foreground = "#e0e6f0"
prompt = "#00d9ff"
accent = "#00d9ff"
selection = "#1a2744"
cursor = "#00d9ff"
gradient_from = "#00d9ff"
gradient_to = "#00ff88"
"##;

// ---------------------------------------------------------------------------
// matrix: phosphor green on near-black.
// ---------------------------------------------------------------------------

const MATRIX: &str = r##"
background = "#0d0208"
foreground = "#00ff41"
prompt = "#008f11"
accent = "#00ff41"
selection = "#003b00"
cursor = "#00ff41"
gradient_from = "#00ff41"
gradient_to = "#00d9ff"
"##;

// ---------------------------------------------------------------------------
// aurora: violet and pink over midnight blue.
// ---------------------------------------------------------------------------

const AURORA: &str = r##"
background = "#0f0f23"
foreground = "#ccccff"
prompt = "#ff79c6"
accent = "#bd93f9"
selection = "#44475a"
cursor = "#ff79c6"
gradient_from = "#ff79c6"
gradient_to = "#bd93f9"
"##;

// ---------------------------------------------------------------------------
// sunset: coral and amber over plum.
// ---------------------------------------------------------------------------

const SUNSET: &str = r##"
background = "#1a1423"
foreground = "#ffecd2"
prompt = "#ff6b6b"
accent = "#ffa502"
selection = "#2d1f3d"
cursor = "#ff6b6b"
gradient_from = "#ff6b6b"
gradient_to = "#ffa502"
"##;

/// Names of all built-in themes, in registry order. The first is the
/// session default.
pub fn builtin_names() -> &'static [&'static str] {
    &["cyber", "matrix", "aurora", "sunset"]
}

/// Load a built-in theme by name.
pub fn load_builtin(name: &str) -> Result<Theme> {
    let toml_src = match name {
        "cyber" => CYBER,
        "matrix" => MATRIX,
        "aurora" => AURORA,
        "sunset" => SUNSET,
        _ => {
            return Err(FolioError::Theme(format!("unknown built-in theme: {name}")));
        },
    };
    let spec: ThemeSpec = toml::from_str(toml_src)?;
    Theme::from_spec(name, &spec)
}

/// Load every built-in theme in registry order.
pub fn builtin_themes() -> Result<Vec<Theme>> {
    builtin_names().iter().map(|n| load_builtin(n)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_builtins_load() {
        for name in builtin_names() {
            let theme = load_builtin(name).unwrap();
            assert_eq!(theme.name, *name);
        }
    }

    #[test]
    fn unknown_builtin_rejected() {
        assert!(load_builtin("vaporwave").is_err());
    }

    #[test]
    fn builtin_order_is_stable() {
        let themes = builtin_themes().unwrap();
        let names: Vec<&str> = themes.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["cyber", "matrix", "aurora", "sunset"]);
    }

    #[test]
    fn matrix_palette_matches_source() {
        let theme = load_builtin("matrix").unwrap();
        assert_eq!(theme.foreground.to_hex(), "#00ff41");
        assert_eq!(theme.prompt.to_hex(), "#008f11");
    }
}
