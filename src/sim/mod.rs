//! Simulation module
//!
//! All gameplay logic lives here. It must stay free of rendering and
//! platform dependencies:
//! - Time comes in as arguments (see `clock`)
//! - Input comes in as a per-frame snapshot (see `input`)
//! - Particle randomness comes from a seeded RNG

pub mod camera;
pub mod clock;
pub mod frame;
pub mod input;
pub mod particles;
pub mod player;
pub mod state;
pub mod vehicle;

pub use camera::{CameraView, projection};
pub use clock::{Clock, ManualClock, SystemClock};
pub use frame::{FrameEvents, step};
pub use input::{FrameInput, LookTracker};
pub use particles::{EmitPolicy, Particle, ParticlePool};
pub use player::{Player, Possession};
pub use state::{DRIVABLE_ID, GameState};
pub use vehicle::{Appearance, DrivableVehicle, ExplosionState, StationaryVehicle, VehicleId};
