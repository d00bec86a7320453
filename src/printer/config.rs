//! # Printer and Session Configuration
//!
//! Two kinds of configuration live here:
//!
//! - [`PrinterModel`]: fixed hardware facts (glyph code spaces, gaiji lead
//!   byte), one constant per supported model.
//! - [`SessionConfig`]: the files a session needs (JIS tables and fonts) and
//!   how each font is sized and positioned in its cell. Loaded from JSON.
//!
//! ## Example Configuration
//!
//! ```json
//! {
//!   "jis0201_file": "data/JIS0201.TXT",
//!   "jis0208_file": "data/JIS0208.TXT",
//!   "jis0212_file": "data/JIS0212.TXT",
//!   "jis0213_file": "data/JIS0213-2004.TXT",
//!   "emoji": { "font": "fonts/OpenMoji-black-glyf.ttf", "size": 20 },
//!   "kanji": { "font": "fonts/NotoSansJP-Medium.otf", "size": 24, "offset_y": -8 },
//!   "fallback": { "font": "fonts/unifont_jp-16.0.03.otf", "size": 24, "offset_x": 2 }
//! }
//! ```
//!
//! Omitted keys keep their defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::GaijiError;
use crate::protocol::gaiji;

// ============================================================================
// PRINTER MODEL
// ============================================================================

/// # Printer Model
///
/// Hardware characteristics that shape the glyph cache.
///
/// | Property | TM-T88IV |
/// |----------|----------|
/// | Gaiji lead byte | 0xEC |
/// | Gaiji slots | 94 (24×24) |
/// | Download character slots | 95 (12×24) |
#[derive(Debug, Clone, Copy)]
pub struct PrinterModel {
    /// Printer model name
    pub name: &'static str,

    /// Default raw TCP port
    pub port: u16,
}

impl PrinterModel {
    /// # Epson TM-T88IV (Japanese model)
    pub const TM88IV: Self = Self {
        name: "Epson TM-T88IV",
        port: 9100,
    };

    /// Gaiji low bytes, in device order
    pub fn gaiji_codes(&self) -> Vec<u8> {
        gaiji::gaiji_codes()
    }

    /// Download character codes, in device order
    pub fn download_codes(&self) -> Vec<u8> {
        gaiji::download_codes()
    }
}

impl Default for PrinterModel {
    fn default() -> Self {
        Self::TM88IV
    }
}

// ============================================================================
// FONT PROFILES
// ============================================================================

/// Font file plus placement of its glyphs within a cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontProfile {
    /// Path to a TrueType/OpenType font
    pub font: PathBuf,
    /// Em size in pixels
    pub size: u32,
    /// Horizontal pen offset in pixels
    #[serde(default)]
    pub offset_x: i32,
    /// Vertical pen offset in pixels
    #[serde(default)]
    pub offset_y: i32,
}

impl FontProfile {
    pub fn new(font: impl Into<PathBuf>, size: u32, offset_x: i32, offset_y: i32) -> Self {
        Self {
            font: font.into(),
            size,
            offset_x,
            offset_y,
        }
    }

    /// OpenMoji (monochrome outlines), 20px
    pub fn default_emoji() -> Self {
        Self::new("OpenMoji-black-glyf.ttf", 20, 0, 0)
    }

    /// Noto Sans JP Medium, 24px, raised 8px to sit on the cell baseline
    pub fn default_kanji() -> Self {
        Self::new("NotoSansJP-Medium.otf", 24, 0, -8)
    }

    /// GNU Unifont (JP), 24px, nudged 2px right
    pub fn default_fallback() -> Self {
        Self::new("unifont_jp-16.0.03.otf", 24, 2, 0)
    }
}

// ============================================================================
// SESSION CONFIGURATION
// ============================================================================

/// Files and font placement for one printer session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub jis0201_file: PathBuf,
    pub jis0208_file: PathBuf,
    pub jis0212_file: PathBuf,
    pub jis0213_file: PathBuf,
    pub emoji: FontProfile,
    pub kanji: FontProfile,
    pub fallback: FontProfile,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            jis0201_file: PathBuf::from("JIS0201.TXT"),
            jis0208_file: PathBuf::from("JIS0208.TXT"),
            jis0212_file: PathBuf::from("JIS0212.TXT"),
            jis0213_file: PathBuf::from("JIS0213-2004.TXT"),
            emoji: FontProfile::default_emoji(),
            kanji: FontProfile::default_kanji(),
            fallback: FontProfile::default_fallback(),
        }
    }
}

impl SessionConfig {
    /// Parse a JSON configuration; missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, GaijiError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, GaijiError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            GaijiError::Configuration(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&json)
    }

    /// Every file the session will open, tables first.
    pub fn required_files(&self) -> [&Path; 7] {
        [
            self.jis0201_file.as_path(),
            self.jis0208_file.as_path(),
            self.jis0212_file.as_path(),
            self.jis0213_file.as_path(),
            self.emoji.font.as_path(),
            self.kanji.font.as_path(),
            self.fallback.font.as_path(),
        ]
    }

    /// Check that every required file exists.
    pub fn validate(&self) -> Result<(), GaijiError> {
        for path in self.required_files() {
            if !path.exists() {
                return Err(GaijiError::Configuration(format!(
                    "Required file not found: {}",
                    path.display()
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.kanji, FontProfile::new("NotoSansJP-Medium.otf", 24, 0, -8));
        assert_eq!(config.emoji.size, 20);
        assert_eq!(config.fallback.offset_x, 2);
        assert_eq!(config.jis0213_file, PathBuf::from("JIS0213-2004.TXT"));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SessionConfig::from_json(
            r#"{ "emoji": { "font": "seguiemj.ttf", "size": 20, "offset_y": 4 } }"#,
        )
        .unwrap();
        assert_eq!(config.emoji, FontProfile::new("seguiemj.ttf", 20, 0, 4));
        assert_eq!(config.kanji, FontProfile::default_kanji());
    }

    #[test]
    fn test_invalid_json() {
        let err = SessionConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, GaijiError::Json(_)));
    }

    #[test]
    fn test_validate_reports_each_missing_file() {
        let dir = std::env::temp_dir().join(format!("gaiji-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let touch = |name: &str| {
            let path = dir.join(name);
            std::fs::write(&path, b"").unwrap();
            path
        };

        let complete = SessionConfig {
            jis0201_file: touch("JIS0201.TXT"),
            jis0208_file: touch("JIS0208.TXT"),
            jis0212_file: touch("JIS0212.TXT"),
            jis0213_file: touch("JIS0213-2004.TXT"),
            emoji: FontProfile::new(touch("emoji.ttf"), 20, 0, 0),
            kanji: FontProfile::new(touch("kanji.otf"), 24, 0, -8),
            fallback: FontProfile::new(touch("fallback.otf"), 24, 2, 0),
        };
        assert!(complete.validate().is_ok());

        for i in 0..7 {
            let mut config = complete.clone();
            let missing = dir.join(format!("not_exist_{}", i));
            match i {
                0 => config.jis0201_file = missing.clone(),
                1 => config.jis0208_file = missing.clone(),
                2 => config.jis0212_file = missing.clone(),
                3 => config.jis0213_file = missing.clone(),
                4 => config.emoji.font = missing.clone(),
                5 => config.kanji.font = missing.clone(),
                _ => config.fallback.font = missing.clone(),
            }
            match config.validate() {
                Err(GaijiError::Configuration(msg)) => {
                    assert!(msg.contains(&format!("not_exist_{}", i)), "{}", msg)
                }
                other => panic!("expected configuration error, got {:?}", other),
            }
        }

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_tm88iv() {
        let model = PrinterModel::TM88IV;
        assert_eq!(model.port, 9100);
        assert_eq!(model.gaiji_codes().len(), 94);
        assert_eq!(model.download_codes().len(), 95);
    }
}
