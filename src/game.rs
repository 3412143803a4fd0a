//! Session controller.
//!
//! A [`Session`] owns one ECS [`World`] holding a single level: the craft
//! entity, the wind field, the cloud layer, the round state and the HUD. The
//! presentation layer calls [`Session::step`] once per rendered frame with the
//! frame delta and the player's input, then reads back positions, wind, HUD
//! text, notices and sound cues to draw and play.
//!
//! # Frame order
//!
//! [`build_frame_schedule`] chains the systems so that, within one frame, the
//! wind is stepped before it is applied, the craft is integrated before the
//! round is evaluated, and the HUD is formatted from the final state.

use bevy_ecs::prelude::*;
use crossbeam_channel::Receiver;
use fastrand::Rng;
use glam::Vec2;
use log::info;

use crate::components::craft::Craft;
use crate::components::kinematics::PlayerKinematics;
use crate::error::ConfigError;
use crate::events::round::observe_round_ended;
use crate::events::sound::SoundCue;
use crate::resources::clouds::{CloudLayer, CloudParticle};
use crate::resources::craftprofiles::{CraftProfile, CraftProfiles};
use crate::resources::cues::setup_cues;
use crate::resources::gameconfig::GameConfig;
use crate::resources::hud::Hud;
use crate::resources::input::FrameInput;
use crate::resources::session::{Outcome, RoundNotice, SessionState};
use crate::resources::wind::WindField;
use crate::resources::worldtime::WorldTime;
use crate::systems::audio::{forward_sound_cues, update_sound_cues};
use crate::systems::clouds::cloud_system;
use crate::systems::hud::hud_system;
use crate::systems::input::player_input_system;
use crate::systems::movement::integrate_system;
use crate::systems::session::{evaluate_session_system, session_timer_system};
use crate::systems::time::update_world_time;
use crate::systems::wind::{apply_wind_system, wind_system};

/// Build the per-frame schedule. The chain order is part of the game feel.
pub fn build_frame_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(
        (
            player_input_system,
            wind_system,
            apply_wind_system,
            integrate_system,
            cloud_system,
            session_timer_system,
            evaluate_session_system,
            hud_system,
            // cue systems must be together and last
            forward_sound_cues,
            update_sound_cues,
        )
            .chain(),
    );
    update
}

/// One level being played.
pub struct Session {
    world: World,
    schedule: Schedule,
    craft: Entity,
    cue_rx: Receiver<SoundCue>,
}

impl Session {
    /// Validate `config` against the stock craft and build the level.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_crafts(config, CraftProfiles::builtin())
    }

    /// Validate `config` against `crafts` and build the level.
    ///
    /// Wind and clouds draw from generators forked off one seeded root, so a
    /// fixed `session.seed` replays the same weather.
    pub fn with_crafts(config: GameConfig, crafts: CraftProfiles) -> Result<Self, ConfigError> {
        config.validate_with(&crafts)?;

        let profile: CraftProfile = crafts
            .get(&config.session.craft)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownCraft(config.session.craft.clone()))?;

        let mut root = match config.session.seed {
            Some(seed) => Rng::with_seed(seed),
            None => Rng::new(),
        };
        let mut cloud_rng = root.fork();
        let wind_rng = root.fork();

        let mut world = World::new();
        world.insert_resource(WorldTime::default().with_time_scale(config.session.time_scale));
        world.insert_resource(FrameInput::default());
        world.insert_resource(Hud::default());
        world.insert_resource(SessionState::new(config.session.time_limit));
        world.insert_resource(WindField::new(config.wind, wind_rng));
        world.insert_resource(CloudLayer::spawn(
            &config.clouds,
            config.session.level,
            config.map.size(),
            &mut cloud_rng,
        ));
        let cue_rx = setup_cues(&mut world);

        let craft = world
            .spawn((
                Craft::new(config.session.craft.clone()),
                PlayerKinematics::new(config.start(), config.kinematics_tuning(&profile)),
            ))
            .id();

        world.add_observer(observe_round_ended);

        info!(
            "Session ready: {} at ({}, {}) heading for {} at ({}, {}), level {}, {} clouds",
            profile.display_name,
            config.player.start_x,
            config.player.start_y,
            config.destination.name,
            config.destination.x,
            config.destination.y,
            config.session.level,
            world.resource::<CloudLayer>().len()
        );

        world.insert_resource(crafts);
        world.insert_resource(config);
        world.flush();

        let mut schedule = build_frame_schedule();
        schedule
            .initialize(&mut world)
            .expect("Failed to initialize frame schedule");

        Ok(Self {
            world,
            schedule,
            craft,
            cue_rx,
        })
    }

    /// Advance the level by one frame.
    ///
    /// A `restart` edge in `input` restarts the round before anything else
    /// happens this frame.
    pub fn step(&mut self, dt: f32, input: FrameInput) {
        if input.restart {
            self.restart();
        }
        update_world_time(&mut self.world, dt);
        *self.world.resource_mut::<FrameInput>() = input;

        self.schedule.run(&mut self.world);

        self.world.clear_trackers();
    }

    /// Start the round over: craft back at the start, full timer, no notice.
    ///
    /// Wind and clouds carry on as they are.
    pub fn restart(&mut self) {
        let start = self.world.resource::<GameConfig>().start();
        if let Some(mut kinematics) = self.world.get_mut::<PlayerKinematics>(self.craft) {
            kinematics.reset(start);
        }
        self.world.resource_mut::<SessionState>().reset();
        self.world
            .resource_mut::<Messages<SoundCue>>()
            .write(SoundCue::EngineStop);
        info!("Round restarted");
    }

    /// Dismiss the end-of-round notice.
    ///
    /// After a lost round this also restarts when `auto_restart_on_loss` is
    /// set. A won round stays frozen until [`restart`](Self::restart).
    pub fn acknowledge(&mut self) -> Option<RoundNotice> {
        let notice = self.world.resource_mut::<SessionState>().take_notice();
        if notice.is_some()
            && self.outcome().is_loss()
            && self.world.resource::<GameConfig>().session.auto_restart_on_loss
        {
            self.restart();
        }
        notice
    }

    fn kinematics(&self) -> &PlayerKinematics {
        self.world
            .get::<PlayerKinematics>(self.craft)
            .expect("craft entity always carries PlayerKinematics")
    }

    pub fn position(&self) -> Vec2 {
        self.kinematics().position()
    }

    pub fn velocity(&self) -> Vec2 {
        self.kinematics().velocity()
    }

    pub fn speed(&self) -> f32 {
        self.kinematics().speed()
    }

    pub fn has_started(&self) -> bool {
        self.kinematics().has_started()
    }

    pub fn is_paused(&self) -> bool {
        self.kinematics().is_paused()
    }

    pub fn current_wind(&self) -> Vec2 {
        self.world.resource::<WindField>().current_wind()
    }

    pub fn clouds(&self) -> &[CloudParticle] {
        self.world.resource::<CloudLayer>().particles()
    }

    /// Scaled seconds simulated since the session was built.
    pub fn elapsed(&self) -> f32 {
        self.world.resource::<WorldTime>().elapsed
    }

    pub fn frame_count(&self) -> u64 {
        self.world.resource::<WorldTime>().frame_count
    }

    pub fn remaining_time(&self) -> f32 {
        self.world.resource::<SessionState>().remaining_time()
    }

    pub fn outcome(&self) -> Outcome {
        self.world.resource::<SessionState>().outcome()
    }

    pub fn is_over(&self) -> bool {
        self.world.resource::<SessionState>().is_over()
    }

    pub fn notice(&self) -> Option<&RoundNotice> {
        self.world.resource::<SessionState>().notice()
    }

    pub fn hud(&self) -> &Hud {
        self.world.resource::<Hud>()
    }

    pub fn config(&self) -> &GameConfig {
        self.world.resource::<GameConfig>()
    }

    pub fn craft_profile(&self) -> Option<&CraftProfile> {
        let name = &self.world.get::<Craft>(self.craft)?.profile;
        self.world.resource::<CraftProfiles>().get(name)
    }

    /// Receiver for sound cues. Clones share the same queue.
    pub fn cue_receiver(&self) -> Receiver<SoundCue> {
        self.cue_rx.clone()
    }

    /// Take every cue forwarded so far.
    pub fn drain_cues(&self) -> Vec<SoundCue> {
        self.cue_rx.try_iter().collect()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
