//! Wave engine — the core of the game.
//!
//! `WaveEngine` owns the hecs world (ship and bolts), the formation
//! grid, and the difficulty timer; it consumes one `InputFrame` and
//! a time delta per frame and produces `WaveSnapshot`s. Completely
//! headless (no rendering or input dependency), enabling
//! deterministic testing.

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use invaders_core::constants::*;
use invaders_core::enums::WaveOutcome;
use invaders_core::events::AudioEvent;
use invaders_core::input::InputFrame;
use invaders_core::state::WaveSnapshot;

use crate::formation::Formation;
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new wave.
pub struct WaveConfig {
    /// RNG seed for determinism. Same seed + same inputs = same wave.
    pub seed: u64,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The wave engine. Owns the ECS world and all simulation state.
pub struct WaveEngine {
    world: World,
    formation: Formation,
    rng: ChaCha8Rng,
    score: u32,
    lives: u32,
    /// Seconds between formation steps; shrinks multiplicatively on
    /// every kill, with no floor.
    step_interval: f64,
    /// Time accumulated toward the next formation step.
    step_clock: f64,
    sound_enabled: bool,
    audio_events: Vec<AudioEvent>,
    despawn_buffer: Vec<hecs::Entity>,
}

impl WaveEngine {
    /// Create a new wave: full formation, fresh ship, starting lives.
    pub fn new(config: WaveConfig) -> Self {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        world_setup::spawn_ship(&mut world);
        let formation = Formation::new(&mut rng);
        Self {
            world,
            formation,
            rng,
            score: 0,
            lives: SHIP_LIVES,
            step_interval: INITIAL_STEP_INTERVAL,
            step_clock: 0.0,
            sound_enabled: true,
            audio_events: Vec::new(),
            despawn_buffer: Vec::new(),
        }
    }

    /// Advance the wave by one frame and return the resulting
    /// snapshot. Phases run in a fixed order — ship intents, the
    /// formation step clock, bolt motion, collision resolution,
    /// out-of-bounds cleanup — and collision sees the positions
    /// computed earlier this same frame.
    pub fn update(&mut self, input: InputFrame, dt: f64) -> WaveSnapshot {
        systems::ship::run(&mut self.world, input, &mut self.audio_events);
        self.advance_step_clock(dt);
        systems::movement::run(&mut self.world);
        systems::collision::run(
            &mut self.world,
            &mut self.formation,
            &mut self.score,
            &mut self.lives,
            &mut self.step_interval,
            &mut self.audio_events,
            &mut self.despawn_buffer,
        );
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);

        let audio_events = if self.sound_enabled {
            std::mem::take(&mut self.audio_events)
        } else {
            self.audio_events.clear();
            Vec::new()
        };
        systems::snapshot::build_snapshot(
            &self.world,
            &self.formation,
            self.score,
            self.lives,
            self.step_interval,
            self.outcome(),
            audio_events,
        )
    }

    // --- Queries for the application layer ---

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn aliens_remaining(&self) -> u32 {
        self.formation.remaining()
    }

    /// True while the ship is destroyed and not yet replaced.
    pub fn ship_absent(&self) -> bool {
        let mut query = self.world.query::<&invaders_core::components::Ship>();
        query.iter().next().is_none()
    }

    /// True once any surviving alien has crossed the defense line.
    /// A breach loses the wave regardless of remaining lives.
    pub fn defense_line_breached(&self) -> bool {
        self.formation.defense_line_breached()
    }

    /// The wave's terminal result, once decided. A cleared formation
    /// wins even if the last kill and a breach coincide.
    pub fn outcome(&self) -> Option<WaveOutcome> {
        if self.formation.remaining() == 0 {
            Some(WaveOutcome::Won)
        } else if self.defense_line_breached() || (self.ship_absent() && self.lives == 0) {
            Some(WaveOutcome::Lost)
        } else {
            None
        }
    }

    /// Current seconds between formation steps.
    pub fn step_interval(&self) -> f64 {
        self.step_interval
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    /// Toggle the sound gate. While muted the engine emits no audio
    /// events at all.
    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.sound_enabled = enabled;
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a read-only reference to the formation grid.
    pub fn formation(&self) -> &Formation {
        &self.formation
    }

    // --- Mutation for the application layer ---

    /// Put a fresh ship on the field after a non-fatal life loss.
    /// No-op while a ship is still present.
    pub fn replace_ship(&mut self) {
        if self.ship_absent() {
            world_setup::spawn_ship(&mut self.world);
        }
    }

    // --- Internals ---

    /// Accumulate dt toward the next discrete formation step. When
    /// the interval elapses: march (or turn and descend), advance
    /// the firing countdown, possibly fire an alien bolt, and reset
    /// the clock. At most one step per frame. A cleared formation
    /// never steps or fires.
    fn advance_step_clock(&mut self, dt: f64) {
        self.step_clock += dt;
        if self.step_clock < self.step_interval || self.formation.remaining() == 0 {
            return;
        }
        self.step_clock = 0.0;
        self.formation.step();
        if self.formation.advance_fire_countdown(&mut self.rng) {
            if let Some(shooter) = self.formation.select_shooter(&mut self.rng) {
                world_setup::spawn_alien_bolt(&mut self.world, shooter);
                self.audio_events.push(AudioEvent::AlienFired);
            }
        }
    }

    // --- Test hooks ---

    /// Spawn a bolt at an exact position (for collision tests).
    #[cfg(test)]
    pub fn spawn_test_bolt(
        &mut self,
        x: f64,
        y: f64,
        allegiance: invaders_core::enums::Allegiance,
    ) -> hecs::Entity {
        use invaders_core::components::Bolt;
        use invaders_core::enums::Allegiance;
        use invaders_core::types::{Position, Velocity};

        let vy = match allegiance {
            Allegiance::Player => BOLT_SPEED,
            Allegiance::Alien => -BOLT_SPEED,
        };
        self.world
            .spawn((Bolt { allegiance }, Position::new(x, y), Velocity::new(0.0, vy)))
    }

    /// Get a mutable reference to the formation (for boundary and
    /// breach scenarios).
    #[cfg(test)]
    pub fn formation_mut(&mut self) -> &mut Formation {
        &mut self.formation
    }

    #[cfg(test)]
    pub fn set_lives(&mut self, lives: u32) {
        self.lives = lives;
    }
}
