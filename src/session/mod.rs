//! Game sessions.
//!
//! - `GameSession`: owns the secret and history, runs the state machine
//! - `SessionSnapshot`: persistence format, validated on restore
//! - `SharedSession`: mutex-serialized access with event observers

pub mod event;
pub mod game;
pub mod shared;
pub mod snapshot;
pub mod status;

pub use event::SessionEvent;
pub use game::GameSession;
pub use shared::{ObserverId, SharedSession};
pub use snapshot::SessionSnapshot;
pub use status::{GameStatus, GuessRecord};
