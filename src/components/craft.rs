use bevy_ecs::prelude::Component;

/// Marks the player's craft entity and remembers which profile it flies.
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct Craft {
    pub profile: String,
}

impl Craft {
    pub fn new(profile: impl Into<String>) -> Self {
        Craft {
            profile: profile.into(),
        }
    }
}
