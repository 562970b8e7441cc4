//! Ray fan and overlay settings
//!
//! Loaded from JSON, validated before use.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{DEFAULT_BEAM_LENGTH, DEFAULT_BEAM_TOTAL, DEFAULT_FOV};

/// Environment variable naming a JSON settings file
pub const SETTINGS_ENV: &str = "MAZE_CASTER_SETTINGS";

/// Why a settings value was rejected
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("field of view must be in (0, π), got {0}")]
    InvalidFov(f64),
    #[error("beam total must be at least 1")]
    NoBeams,
    #[error("beam length must be positive and finite, got {0}")]
    InvalidBeamLength(f64),
    #[error("could not parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("could not read settings file: {0}")]
    Io(#[from] std::io::Error),
}

/// Ray fan and map overlay settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Field of view (radians)
    pub fov: f64,
    /// Number of beams in the fan (one slice column each)
    pub beam_total: u32,
    /// Beam reach in map units
    pub beam_length: f64,

    // === Map overlay ===
    /// Draw every beam on the 2D map
    pub show_beams: bool,
    /// Mark beam hits on the 2D map
    pub show_hit_points: bool,

    // === HUD ===
    /// Draw the score counter
    pub show_score: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fov: DEFAULT_FOV,
            beam_total: DEFAULT_BEAM_TOTAL,
            beam_length: DEFAULT_BEAM_LENGTH,

            show_beams: true,
            show_hit_points: true,

            show_score: true,
        }
    }
}

impl Settings {
    /// Check value ranges
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.fov.is_finite() && self.fov > 0.0 && self.fov < PI) {
            return Err(SettingsError::InvalidFov(self.fov));
        }
        if self.beam_total == 0 {
            return Err(SettingsError::NoBeams);
        }
        if !(self.beam_length.is_finite() && self.beam_length > 0.0) {
            return Err(SettingsError::InvalidBeamLength(self.beam_length));
        }
        Ok(())
    }

    /// Parse and validate settings; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Pretty JSON, suitable for writing back to a settings file
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read and validate a settings file
    pub fn from_file(path: &std::path::Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Settings from the file named by `MAZE_CASTER_SETTINGS`, or defaults
    ///
    /// A missing or invalid file is logged and replaced by the defaults.
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(SETTINGS_ENV) else {
            log::info!("Using default settings");
            return Self::default();
        };

        let path = std::path::PathBuf::from(path);
        match Self::from_file(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::error!("Ignoring settings in {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.beam_total, 80);
        assert_eq!(settings.beam_length, 100.0);
        assert!((settings.fov - PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_bad_ranges() {
        let bad_fov = Settings {
            fov: 0.0,
            ..Default::default()
        };
        assert!(matches!(bad_fov.validate(), Err(SettingsError::InvalidFov(_))));

        let wide_fov = Settings {
            fov: PI,
            ..Default::default()
        };
        assert!(matches!(wide_fov.validate(), Err(SettingsError::InvalidFov(_))));

        let no_beams = Settings {
            beam_total: 0,
            ..Default::default()
        };
        assert!(matches!(no_beams.validate(), Err(SettingsError::NoBeams)));

        let nan_length = Settings {
            beam_length: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            nan_length.validate(),
            Err(SettingsError::InvalidBeamLength(_))
        ));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "beam_total": 40, "show_beams": false }"#).unwrap();
        assert_eq!(settings.beam_total, 40);
        assert!(!settings.show_beams);
        assert_eq!(settings.beam_length, 100.0);
        assert!(settings.show_hit_points);
    }

    #[test]
    fn test_json_errors() {
        assert!(matches!(
            Settings::from_json("not json"),
            Err(SettingsError::Parse(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "beam_length": -5.0 }"#),
            Err(SettingsError::InvalidBeamLength(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::from_file(std::path::Path::new("/nonexistent/maze-caster.json"));
        assert!(matches!(err, Err(SettingsError::Io(_))));
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            fov: PI / 3.0,
            beam_total: 120,
            beam_length: 150.0,
            show_beams: false,
            show_hit_points: false,
            show_score: false,
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    // Only test touching SETTINGS_ENV; the steps run in sequence so the
    // variable never races with itself.
    #[test]
    fn test_load_from_env() {
        let dir = std::env::temp_dir();
        let good = dir.join(format!("maze-caster-good-{}.json", std::process::id()));
        let bad = dir.join(format!("maze-caster-bad-{}.json", std::process::id()));
        std::fs::write(&good, r#"{ "beam_total": 40 }"#).unwrap();
        std::fs::write(&bad, r#"{ "beam_total": 0 }"#).unwrap();

        unsafe { std::env::set_var(SETTINGS_ENV, &good) };
        assert_eq!(Settings::load().beam_total, 40);

        unsafe { std::env::set_var(SETTINGS_ENV, &bad) };
        assert_eq!(Settings::load(), Settings::default());

        unsafe { std::env::set_var(SETTINGS_ENV, dir.join("maze-caster-missing.json")) };
        assert_eq!(Settings::load(), Settings::default());

        unsafe { std::env::remove_var(SETTINGS_ENV) };
        assert_eq!(Settings::load(), Settings::default());

        let _ = std::fs::remove_file(good);
        let _ = std::fs::remove_file(bad);
    }
}
