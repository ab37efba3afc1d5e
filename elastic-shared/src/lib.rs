#![cfg_attr(not(feature = "std"), no_std)]

use elastic_core::{
    ConfigError, Ease, FollowerConfig, MagnetConfig, RenderState, StickyRegion, TransitionRequest,
    Vector2D,
};
use serde::{Deserialize, Serialize};

/// Represents a 2D position in viewport coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<Position> for Vector2D {
    fn from(p: Position) -> Self {
        Vector2D::new(p.x, p.y)
    }
}

impl From<Vector2D> for Position {
    fn from(v: Vector2D) -> Self {
        Position::new(v.x, v.y)
    }
}

/// Easing curve as written in settings files
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EaseSpec {
    Linear,
    Power4Out,
    ElasticOut { amplitude: f32, period: f32 },
}

impl From<EaseSpec> for Ease {
    fn from(spec: EaseSpec) -> Self {
        match spec {
            EaseSpec::Linear => Ease::Linear,
            EaseSpec::Power4Out => Ease::Power4Out,
            EaseSpec::ElasticOut { amplitude, period } => Ease::ElasticOut { amplitude, period },
        }
    }
}

impl From<Ease> for EaseSpec {
    fn from(ease: Ease) -> Self {
        match ease {
            Ease::Linear => EaseSpec::Linear,
            Ease::Power4Out => EaseSpec::Power4Out,
            Ease::ElasticOut { amplitude, period } => EaseSpec::ElasticOut { amplitude, period },
        }
    }
}

/// Sticky region as reported by the page: center plus bounding box size
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RegionDescriptor {
    pub center_x: f32,
    pub center_y: f32,
    pub width: f32,
    pub height: f32,
}

impl RegionDescriptor {
    pub fn from_rect(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            center_x: left + width / 2.0,
            center_y: top + height / 2.0,
            width,
            height,
        }
    }
}

impl From<RegionDescriptor> for StickyRegion {
    fn from(d: RegionDescriptor) -> Self {
        StickyRegion::new(Vector2D::new(d.center_x, d.center_y), d.width, d.height)
    }
}

/// Follower tuning, every field optional in JSON
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FollowerSettings {
    pub initial_position: Position,
    pub position_smoothing: f32,
    pub scale_smoothing: f32,
    pub rest_scale: f32,
    pub stuck_scale: f32,
    pub stick_pull: f32,
    pub stuck_distance_factor: f32,
    pub stuck_clamp_x: f32,
    pub stuck_clamp_y: f32,
    pub stuck_gain: f32,
    pub free_speed_factor: f32,
    pub free_clamp_x: f32,
    pub free_clamp_y: f32,
    pub transition_duration: f32,
    pub transition_ease: EaseSpec,
}

impl Default for FollowerSettings {
    fn default() -> Self {
        Self::from(&FollowerConfig::default())
    }
}

impl From<&FollowerConfig> for FollowerSettings {
    fn from(c: &FollowerConfig) -> Self {
        Self {
            initial_position: c.initial_position.into(),
            position_smoothing: c.position_smoothing,
            scale_smoothing: c.scale_smoothing,
            rest_scale: c.rest_scale,
            stuck_scale: c.stuck_scale,
            stick_pull: c.stick_pull,
            stuck_distance_factor: c.stuck_distance_factor,
            stuck_clamp_x: c.stuck_clamp_x,
            stuck_clamp_y: c.stuck_clamp_y,
            stuck_gain: c.stuck_gain,
            free_speed_factor: c.free_speed_factor,
            free_clamp_x: c.free_clamp_x,
            free_clamp_y: c.free_clamp_y,
            transition_duration: c.transition_duration,
            transition_ease: c.transition_ease.into(),
        }
    }
}

impl FollowerSettings {
    /// Converts into a validated core config.
    pub fn into_config(self) -> Result<FollowerConfig, ConfigError> {
        let config = FollowerConfig {
            initial_position: self.initial_position.into(),
            position_smoothing: self.position_smoothing,
            scale_smoothing: self.scale_smoothing,
            rest_scale: self.rest_scale,
            stuck_scale: self.stuck_scale,
            stick_pull: self.stick_pull,
            stuck_distance_factor: self.stuck_distance_factor,
            stuck_clamp_x: self.stuck_clamp_x,
            stuck_clamp_y: self.stuck_clamp_y,
            stuck_gain: self.stuck_gain,
            free_speed_factor: self.free_speed_factor,
            free_clamp_x: self.free_clamp_x,
            free_clamp_y: self.free_clamp_y,
            transition_duration: self.transition_duration,
            transition_ease: self.transition_ease.into(),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Sticky element magnet tuning
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MagnetSettings {
    pub pull: f32,
    pub duration: f32,
    pub ease: EaseSpec,
}

impl Default for MagnetSettings {
    fn default() -> Self {
        let c = MagnetConfig::default();
        Self {
            pull: c.pull,
            duration: c.duration,
            ease: c.ease.into(),
        }
    }
}

impl MagnetSettings {
    pub fn into_config(self) -> Result<MagnetConfig, ConfigError> {
        let config = MagnetConfig {
            pull: self.pull,
            duration: self.duration,
            ease: self.ease.into(),
        };
        config.validate()?;
        Ok(config)
    }
}

/// One rendered frame, as handed to a renderer or written to a trace
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PoseFrame {
    pub frame: u64,
    pub translate_x: f32,
    pub translate_y: f32,
    pub rotation: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub stuck: bool,
}

impl PoseFrame {
    pub fn from_render(frame: u64, state: &RenderState) -> Self {
        Self {
            frame,
            translate_x: state.translate.x,
            translate_y: state.translate.y,
            rotation: state.rotation,
            scale_x: state.scale.x,
            scale_y: state.scale.y,
            stuck: state.stuck,
        }
    }
}

/// Eased scale change requested while the follower is stuck
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TransitionMessage {
    pub scale_x: f32,
    pub scale_y: f32,
    pub duration: f32,
    pub ease: EaseSpec,
}

impl From<TransitionRequest> for TransitionMessage {
    fn from(r: TransitionRequest) -> Self {
        Self {
            scale_x: r.scale.x,
            scale_y: r.scale.y,
            duration: r.duration,
            ease: r.ease.into(),
        }
    }
}

/// Recorded pointer path with the sticky regions it crosses
#[cfg(feature = "std")]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Script {
    #[serde(default)]
    pub settings: FollowerSettings,
    #[serde(default)]
    pub magnet: MagnetSettings,
    #[serde(default)]
    pub regions: Vec<RegionDescriptor>,
    pub samples: Vec<Position>,
}

#[cfg(feature = "std")]
impl Script {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: FollowerSettings =
            serde_json::from_str(r#"{ "position_smoothing": 0.25 }"#).unwrap();
        assert_eq!(settings.position_smoothing, 0.25);
        assert_eq!(settings.stuck_scale, 2.0);
        assert_eq!(settings.transition_ease, EaseSpec::Power4Out);

        let config = settings.into_config().unwrap();
        assert_eq!(config.position_smoothing, 0.25);
        assert_eq!(config.initial_position, Vector2D::new(-100.0, -100.0));
    }

    #[test]
    fn test_invalid_settings_are_rejected() {
        let settings = FollowerSettings {
            scale_smoothing: 0.0,
            ..FollowerSettings::default()
        };
        assert!(matches!(
            settings.into_config(),
            Err(ConfigError::InvalidSmoothing { field: "scale_smoothing", .. })
        ));
    }

    #[test]
    fn test_ease_spec_json_shape() {
        let json = serde_json::to_value(EaseSpec::ElasticOut {
            amplitude: 1.0,
            period: 0.3,
        })
        .unwrap();
        assert_eq!(json["kind"], "elastic_out");
        assert_eq!(json["amplitude"], 1.0);

        let magnet: MagnetSettings = serde_json::from_str(r#"{ "pull": 0.5 }"#).unwrap();
        let config = magnet.into_config().unwrap();
        assert_eq!(config.pull, 0.5);
        assert!(matches!(config.ease, Ease::ElasticOut { .. }));
    }

    #[test]
    fn test_region_descriptor_from_rect() {
        let region: StickyRegion = RegionDescriptor::from_rect(0.0, 0.0, 200.0, 100.0).into();
        assert_eq!(region.center, Vector2D::new(100.0, 50.0));
        assert_eq!(region.width, 200.0);
    }

    #[test]
    fn test_script_parses_with_defaults() {
        let script = Script::from_json(
            r#"{
                "regions": [{ "center_x": 10.0, "center_y": 10.0, "width": 20.0, "height": 20.0 }],
                "samples": [{ "x": 0.0, "y": 0.0 }, { "x": 10.0, "y": 10.0 }]
            }"#,
        )
        .unwrap();
        assert_eq!(script.regions.len(), 1);
        assert_eq!(script.samples[1], Position::new(10.0, 10.0));
        assert_eq!(script.settings, FollowerSettings::default());
    }
}
