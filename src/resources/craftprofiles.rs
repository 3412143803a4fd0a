//! Registry of selectable craft.
//!
//! Each profile names a zeppelin the player can fly and carries the speed
//! range fed into [`KinematicsTuning`]. The two stock craft share their
//! physics and differ only in name and sprite.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

use crate::components::kinematics::KinematicsTuning;

#[derive(Debug, Clone, PartialEq)]
pub struct CraftProfile {
    pub display_name: String,
    /// Key the presentation layer uses to look up the craft sprite.
    pub sprite_key: String,
    pub min_speed: f32,
    pub max_speed: f32,
}

impl CraftProfile {
    pub fn new(display_name: &str, sprite_key: &str) -> Self {
        Self {
            display_name: display_name.to_string(),
            sprite_key: sprite_key.to_string(),
            min_speed: 1.0,
            max_speed: 20.0,
        }
    }

    /// Build kinematics tuning from this profile, keeping the other fields of `base`.
    pub fn tuning(&self, base: KinematicsTuning) -> KinematicsTuning {
        KinematicsTuning {
            min_speed: self.min_speed,
            max_speed: self.max_speed,
            ..base
        }
    }
}

/// Craft profiles keyed by their short name (`"L19"`, `"L20"`).
#[derive(Resource, Debug, Clone)]
pub struct CraftProfiles {
    profiles: FxHashMap<String, CraftProfile>,
}

impl Default for CraftProfiles {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CraftProfiles {
    /// The stock craft.
    pub fn builtin() -> Self {
        let mut profiles = FxHashMap::default();
        profiles.insert(
            "L19".to_string(),
            CraftProfile::new("Zeppelin L19", "zeppelin_l19"),
        );
        profiles.insert(
            "L20".to_string(),
            CraftProfile::new("Zeppelin L20", "zeppelin_l20"),
        );
        Self { profiles }
    }

    pub fn get(&self, name: &str) -> Option<&CraftProfile> {
        self.profiles.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.profiles.contains_key(name)
    }

    /// Add or replace a profile.
    pub fn insert(&mut self, name: &str, profile: CraftProfile) {
        self.profiles.insert(name.to_string(), profile);
    }

    /// Profile names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.profiles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
