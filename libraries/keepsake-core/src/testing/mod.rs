//! Test doubles for the platform collaborators
//!
//! Each double is a cheap cloneable handle over shared state: hand one clone
//! to the controller under test and keep the other to drive and inspect it.

mod audio;
mod scheduler;
mod surface;

pub use audio::MockAudio;
pub use scheduler::ManualScheduler;
pub use surface::{ElementState, RecordingSurface};
