//! Centralized configuration with TOML preset support.
//!
//! Orienter tuning and the action binding table are consolidated here.
//! Options serialize to/from TOML so a host can ship presets beside its
//! assets.

mod camera;
mod keybindings;

use std::path::Path;

pub use camera::OrienterOptions;
pub use keybindings::ActionBindings;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::TrackcamError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[orienter]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
#[serde(default)]
pub struct Options {
    /// Camera orienter parameters.
    pub orienter: OrienterOptions,
    /// Action → physical input table.
    #[schemars(skip)]
    pub keybindings: ActionBindings,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, TrackcamError> {
        let opts: Self = toml::from_str(content)
            .map_err(|e| TrackcamError::OptionsParse(e.to_string()))?;
        opts.orienter.motion_curve.validate()?;
        Ok(opts)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, TrackcamError> {
        let content = std::fs::read_to_string(path).map_err(TrackcamError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), TrackcamError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TrackcamError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(TrackcamError::Io)?;
        }
        std::fs::write(path, content).map_err(TrackcamError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{actions, MouseButton, PhysicalInput};
    use crate::util::easing::MotionCurve;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[orienter]
look_duration = 2.5
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.orienter.look_duration, 2.5);
        // Everything else should be default
        assert_eq!(opts.orienter.track_duration, 5.0);
        assert_eq!(opts.orienter.motion_curve, MotionCurve::Linear);
        assert_eq!(opts.keybindings, ActionBindings::default());
    }

    #[test]
    fn keybindings_replace_the_default_table() {
        let toml_str = r#"
[keybindings]
"Attack1" = ["MouseLeft", "KeyF"]
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(
            opts.keybindings.inputs(actions::ATTACK1),
            Some(
                &[
                    PhysicalInput::Mouse(MouseButton::Left),
                    PhysicalInput::key("KeyF"),
                ][..]
            )
        );
        assert!(!opts.keybindings.contains(actions::JUMP));
    }

    #[test]
    fn invalid_input_name_is_rejected() {
        let toml_str = r#"
[keybindings]
"Jump" = [""]
"#;
        assert!(matches!(
            Options::from_toml(toml_str),
            Err(TrackcamError::OptionsParse(_))
        ));
    }

    #[test]
    fn non_monotonic_curve_is_rejected() {
        let toml_str = r#"
[orienter.motion_curve]
kind = "keyframes"
points = [[0.6, 0.5], [0.3, 0.9]]
"#;
        assert!(matches!(
            Options::from_toml(toml_str),
            Err(TrackcamError::InvalidCurve(_))
        ));
    }

    #[test]
    fn invalid_hermite_controls_are_rejected() {
        for controls in ["c1 = nan\nc2 = 1.0", "c1 = 5.0\nc2 = 1.0", "c1 = 0.3\nc2 = inf"] {
            let toml_str = format!(
                "[orienter.motion_curve]\nkind = \"cubic_hermite\"\n{controls}\n"
            );
            assert!(
                matches!(
                    Options::from_toml(&toml_str),
                    Err(TrackcamError::InvalidCurve(_))
                ),
                "accepted {controls:?}"
            );
        }
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir()
            .join(format!("trackcam-options-{}", std::process::id()));
        let path = dir.join("preset.toml");
        let mut opts = Options::default();
        opts.orienter.motion_curve =
            MotionCurve::CubicHermite { c1: 0.33, c2: 1.0 };
        opts.save(&path).unwrap();

        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Options::load(Path::new("/definitely/not/here.toml"))
            .unwrap_err();
        assert!(matches!(err, TrackcamError::Io(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("orienter"));
        assert!(!props.contains_key("keybindings"));

        let orienter = &props["orienter"]["properties"];
        assert!(orienter.get("look_duration").is_some());
        assert!(orienter.get("motion_curve").is_some());
    }
}
