//! Domain reducers. Each returns `true` when it consumed the message.
//!
//! Reducers only touch `AppState` and push `Command`s; DOM and network work
//! happens in `command_executors`.

pub mod exercises;
pub mod profile;
pub mod progress;
pub mod session;
pub mod workouts;
