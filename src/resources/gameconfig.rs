//! Game configuration resource.
//!
//! Manages the level settings: map size, start and destination points, wind
//! and cloud tuning, time limit and difficulty. Provides defaults matching the
//! stock level, INI load/save, JSON round-tripping and validation.
//!
//! # Configuration File Format
//!
//! ```ini
//! [map]
//! width = 800
//! height = 600
//! left = 0
//!
//! [player]
//! start_x = 620
//! start_y = 500
//! accel_step = 0.1
//! steer_decay = 0.9
//! wind_damping_x = 0.2
//! wind_damping_y = 0.3
//!
//! [destination]
//! x = 60
//! y = 297
//! name = Liverpool
//!
//! [wind]
//! max_speed = 13
//! change_frequency = 0.1
//! max_change = 5
//! smoothing = 0.05
//! gust_probability = 0.05
//!
//! [clouds]
//! base_count = 5
//! per_level = 3
//! speed_multiplier = 2
//! width = 80
//! height = 40
//!
//! [session]
//! time_limit = 60
//! level = 1
//! craft = L19
//! seed = 1234
//! auto_restart_on_loss = true
//! time_scale = 1
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use glam::Vec2;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::components::kinematics::KinematicsTuning;
use crate::error::ConfigError;
use crate::resources::clouds::{CloudParams, MAX_CLOUDS};
use crate::resources::craftprofiles::{CraftProfile, CraftProfiles};
use crate::resources::wind::WindParams;

const DEFAULT_CONFIG_PATH: &str = "./zeppelin.ini";

/// Playable area. `x` runs from `left` to `width`, `y` from 0 to `height`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapBounds {
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for MapBounds {
    fn default() -> Self {
        Self {
            left: 0.0,
            width: 800.0,
            height: 600.0,
        }
    }
}

impl MapBounds {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Inclusive containment test.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub start_x: f32,
    pub start_y: f32,
    /// Speed change per frame while accelerate/decelerate is held.
    pub accel_step: f32,
    pub steer_decay: f32,
    pub wind_damping_x: f32,
    pub wind_damping_y: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            start_x: 620.0,
            start_y: 500.0,
            accel_step: 0.1,
            steer_decay: 0.9,
            wind_damping_x: 0.2,
            wind_damping_y: 0.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DestinationConfig {
    pub x: f32,
    pub y: f32,
    /// Shown in the win notice.
    pub name: String,
}

impl Default for DestinationConfig {
    fn default() -> Self {
        Self {
            x: 60.0,
            y: 297.0,
            name: "Liverpool".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Round length in seconds, counted from the first move.
    pub time_limit: f32,
    /// Difficulty level, starting at 1. Only affects the cloud count.
    pub level: u32,
    /// Craft profile name.
    pub craft: String,
    /// Seed for wind and clouds. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Restart automatically when a lost round's notice is acknowledged.
    pub auto_restart_on_loss: bool,
    /// Multiplier applied to every frame delta (0.5 = half speed).
    pub time_scale: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            time_limit: 60.0,
            level: 1,
            craft: "L19".to_string(),
            seed: None,
            auto_restart_on_loss: true,
            time_scale: 1.0,
        }
    }
}

/// Game configuration resource.
///
/// Construct with [`GameConfig::new`] for the stock level, optionally load
/// an INI file over it, then [`validate`](GameConfig::validate) before
/// building a session.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub map: MapBounds,
    pub player: PlayerConfig,
    pub destination: DestinationConfig,
    pub wind: WindParams,
    pub clouds: CloudParams,
    pub session: SessionConfig,
    /// Path to the configuration file.
    #[serde(skip)]
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with the stock level values.
    pub fn new() -> Self {
        Self {
            map: MapBounds::default(),
            player: PlayerConfig::default(),
            destination: DestinationConfig::default(),
            wind: WindParams::default(),
            clouds: CloudParams::default(),
            session: SessionConfig::default(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current values. Values that fail to parse
    /// are logged and ignored. Returns an error if the file cannot be read.
    pub fn load_from_file(&mut self) -> Result<(), ConfigError> {
        let mut ini = Ini::new();
        ini.load(&self.config_path).map_err(ConfigError::Load)?;
        self.apply_ini(&ini);

        info!(
            "Loaded config from {:?}: map {}x{}, level {}, craft {}, time limit {}s",
            self.config_path,
            self.map.width,
            self.map.height,
            self.session.level,
            self.session.craft,
            self.session.time_limit
        );
        Ok(())
    }

    /// Parse INI text over the current values.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), ConfigError> {
        let mut ini = Ini::new();
        ini.read(text.to_string()).map_err(ConfigError::Load)?;
        self.apply_ini(&ini);
        Ok(())
    }

    fn apply_ini(&mut self, ini: &Ini) {
        // [map] section
        read_f32(ini, "map", "width", &mut self.map.width);
        read_f32(ini, "map", "height", &mut self.map.height);
        read_f32(ini, "map", "left", &mut self.map.left);

        // [player] section
        read_f32(ini, "player", "start_x", &mut self.player.start_x);
        read_f32(ini, "player", "start_y", &mut self.player.start_y);
        read_f32(ini, "player", "accel_step", &mut self.player.accel_step);
        read_f32(ini, "player", "steer_decay", &mut self.player.steer_decay);
        read_f32(ini, "player", "wind_damping_x", &mut self.player.wind_damping_x);
        read_f32(ini, "player", "wind_damping_y", &mut self.player.wind_damping_y);

        // [destination] section
        read_f32(ini, "destination", "x", &mut self.destination.x);
        read_f32(ini, "destination", "y", &mut self.destination.y);
        if let Some(name) = ini.get("destination", "name") {
            self.destination.name = name;
        }

        // [wind] section
        read_f32(ini, "wind", "max_speed", &mut self.wind.max_speed);
        read_f32(ini, "wind", "change_frequency", &mut self.wind.change_frequency);
        read_f32(ini, "wind", "max_change", &mut self.wind.max_change);
        read_f32(ini, "wind", "smoothing", &mut self.wind.smoothing);
        read_f32(ini, "wind", "gust_probability", &mut self.wind.gust_probability);

        // [clouds] section
        read_u32(ini, "clouds", "base_count", &mut self.clouds.base_count);
        read_u32(ini, "clouds", "per_level", &mut self.clouds.per_level);
        read_f32(ini, "clouds", "speed_multiplier", &mut self.clouds.speed_multiplier);
        read_f32(ini, "clouds", "width", &mut self.clouds.width);
        read_f32(ini, "clouds", "height", &mut self.clouds.height);

        // [session] section
        read_f32(ini, "session", "time_limit", &mut self.session.time_limit);
        read_u32(ini, "session", "level", &mut self.session.level);
        read_f32(ini, "session", "time_scale", &mut self.session.time_scale);
        if let Some(craft) = ini.get("session", "craft") {
            self.session.craft = craft;
        }
        match ini.getuint("session", "seed") {
            Ok(Some(seed)) => self.session.seed = Some(seed),
            Ok(None) => {}
            Err(e) => warn!("Ignoring [session] seed: {}", e),
        }
        match ini.getbool("session", "auto_restart_on_loss") {
            Ok(Some(flag)) => self.session.auto_restart_on_loss = flag,
            Ok(None) => {}
            Err(e) => warn!("Ignoring [session] auto_restart_on_loss: {}", e),
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), ConfigError> {
        let mut ini = Ini::new();

        let mut set = |section: &str, key: &str, value: String| {
            ini.set(section, key, Some(value));
        };

        set("map", "width", self.map.width.to_string());
        set("map", "height", self.map.height.to_string());
        set("map", "left", self.map.left.to_string());

        set("player", "start_x", self.player.start_x.to_string());
        set("player", "start_y", self.player.start_y.to_string());
        set("player", "accel_step", self.player.accel_step.to_string());
        set("player", "steer_decay", self.player.steer_decay.to_string());
        set("player", "wind_damping_x", self.player.wind_damping_x.to_string());
        set("player", "wind_damping_y", self.player.wind_damping_y.to_string());

        set("destination", "x", self.destination.x.to_string());
        set("destination", "y", self.destination.y.to_string());
        set("destination", "name", self.destination.name.clone());

        set("wind", "max_speed", self.wind.max_speed.to_string());
        set("wind", "change_frequency", self.wind.change_frequency.to_string());
        set("wind", "max_change", self.wind.max_change.to_string());
        set("wind", "smoothing", self.wind.smoothing.to_string());
        set("wind", "gust_probability", self.wind.gust_probability.to_string());

        set("clouds", "base_count", self.clouds.base_count.to_string());
        set("clouds", "per_level", self.clouds.per_level.to_string());
        set("clouds", "speed_multiplier", self.clouds.speed_multiplier.to_string());
        set("clouds", "width", self.clouds.width.to_string());
        set("clouds", "height", self.clouds.height.to_string());

        set("session", "time_limit", self.session.time_limit.to_string());
        set("session", "level", self.session.level.to_string());
        set("session", "craft", self.session.craft.clone());
        if let Some(seed) = self.session.seed {
            set("session", "seed", seed.to_string());
        }
        set(
            "session",
            "auto_restart_on_loss",
            self.session.auto_restart_on_loss.to_string(),
        );
        set("session", "time_scale", self.session.time_scale.to_string());

        ini.write(&self.config_path)?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut config: GameConfig = serde_json::from_str(json)?;
        config.config_path = PathBuf::from(DEFAULT_CONFIG_PATH);
        Ok(config)
    }

    /// Check every value against its allowed range using the stock craft.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_with(&CraftProfiles::builtin())
    }

    /// Check every value against its allowed range.
    pub fn validate_with(&self, crafts: &CraftProfiles) -> Result<(), ConfigError> {
        if !(self.map.width > 0.0 && self.map.height > 0.0) {
            return Err(ConfigError::invalid("map.width", "map size must be positive"));
        }
        if !(self.map.left >= 0.0 && self.map.left < self.map.width) {
            return Err(ConfigError::invalid(
                "map.left",
                "left bound must lie inside the map",
            ));
        }
        if !self.map.contains(self.start()) {
            return Err(ConfigError::invalid("player.start_x", "start is outside the map"));
        }
        if !self.map.contains(self.destination()) {
            return Err(ConfigError::invalid(
                "destination.x",
                "destination is outside the map",
            ));
        }
        if !(self.player.accel_step >= 0.0) {
            return Err(ConfigError::invalid("player.accel_step", "must be >= 0"));
        }
        if !(0.0..=1.0).contains(&self.player.steer_decay) {
            return Err(ConfigError::invalid("player.steer_decay", "must be in [0, 1]"));
        }
        if !(self.player.wind_damping_x >= 0.0 && self.player.wind_damping_y >= 0.0) {
            return Err(ConfigError::invalid("player.wind_damping_x", "must be >= 0"));
        }
        if !(self.wind.max_speed >= 0.0) {
            return Err(ConfigError::invalid("wind.max_speed", "must be >= 0"));
        }
        if !(self.wind.max_change >= 0.0) {
            return Err(ConfigError::invalid("wind.max_change", "must be >= 0"));
        }
        if !(self.wind.smoothing > 0.0 && self.wind.smoothing <= 1.0) {
            return Err(ConfigError::invalid("wind.smoothing", "must be in (0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.wind.change_frequency) {
            return Err(ConfigError::invalid("wind.change_frequency", "must be in [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.wind.gust_probability) {
            return Err(ConfigError::invalid("wind.gust_probability", "must be in [0, 1]"));
        }
        if !(self.clouds.width > 0.0 && self.clouds.height > 0.0) {
            return Err(ConfigError::invalid("clouds.width", "cloud size must be positive"));
        }
        if !(self.clouds.speed_multiplier >= 0.0) {
            return Err(ConfigError::invalid("clouds.speed_multiplier", "must be >= 0"));
        }
        if !(self.session.time_limit > 0.0) {
            return Err(ConfigError::invalid("session.time_limit", "must be positive"));
        }
        if self.session.level == 0 {
            return Err(ConfigError::invalid("session.level", "levels start at 1"));
        }
        match self.clouds.count_for_level(self.session.level) {
            Some(count) if count <= MAX_CLOUDS => {}
            _ => {
                return Err(ConfigError::invalid(
                    "session.level",
                    format!("level needs more than {} clouds", MAX_CLOUDS),
                ));
            }
        }
        if !(self.session.time_scale > 0.0 && self.session.time_scale.is_finite()) {
            return Err(ConfigError::invalid("session.time_scale", "must be positive"));
        }
        let profile = crafts
            .get(&self.session.craft)
            .ok_or_else(|| ConfigError::UnknownCraft(self.session.craft.clone()))?;
        if !(profile.min_speed >= 0.0 && profile.min_speed <= profile.max_speed) {
            return Err(ConfigError::invalid(
                "session.craft",
                "craft speed range must satisfy 0 <= min <= max",
            ));
        }
        Ok(())
    }

    pub fn start(&self) -> Vec2 {
        Vec2::new(self.player.start_x, self.player.start_y)
    }

    pub fn destination(&self) -> Vec2 {
        Vec2::new(self.destination.x, self.destination.y)
    }

    pub fn bounds(&self) -> MapBounds {
        self.map
    }

    /// Kinematics tuning for `profile` with this config's steering and wind coupling.
    pub fn kinematics_tuning(&self, profile: &CraftProfile) -> KinematicsTuning {
        profile.tuning(KinematicsTuning {
            steer_decay: self.player.steer_decay,
            wind_damping: Vec2::new(self.player.wind_damping_x, self.player.wind_damping_y),
            ..KinematicsTuning::default()
        })
    }
}

fn read_f32(ini: &Ini, section: &str, key: &str, slot: &mut f32) {
    match ini.getfloat(section, key) {
        Ok(Some(value)) => *slot = value as f32,
        Ok(None) => {}
        Err(e) => warn!("Ignoring [{}] {}: {}", section, key, e),
    }
}

fn read_u32(ini: &Ini, section: &str, key: &str, slot: &mut u32) {
    match ini.getuint(section, key) {
        Ok(Some(value)) => match u32::try_from(value) {
            Ok(value) => *slot = value,
            Err(_) => warn!("Ignoring [{}] {}: {} is too large", section, key, value),
        },
        Ok(None) => {}
        Err(e) => warn!("Ignoring [{}] {}: {}", section, key, e),
    }
}
