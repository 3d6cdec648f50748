//! Shared simulation engine
//!
//! Everything the ten rule modules have in common lives here. The engine is
//! pure and host-agnostic:
//! - Fixed nominal frame interval only
//! - Seeded RNG only (seeds flow in from the host)
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod entity;
pub mod input;
pub mod session;
pub mod spawner;

pub use clock::FrameClock;
pub use collision::{Aabb, aabb_overlap, circle_overlap, circle_rect_overlap};
pub use entity::{Collectible, Obstacle};
pub use input::{FrameInput, GridDir, InputAdapter, Key, RawEvent};
pub use session::{GameSession, SessionStatus};
pub use spawner::{Cadence, scaled_speed};
