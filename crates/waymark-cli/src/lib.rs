// NOTE: waymark Architecture
//
// Single source of truth:
// - The engine's WaypointController owns the ordered points, the selection and the mode
// - Map, table and edit panel are passive: they draw view models and send intents back
// - Every mutation recomputes all three views; nothing is patched incrementally
//
// Hosts:
// - `edit` drives the controller from a ratatui editor (map canvas, table, fields)
// - `show`/`plan`/`upload` drive the same controller headless through a FrameRecorder,
//   so file validation and the empty-mission guard are identical in both paths
//
// Upload runs off the input loop:
// - One worker thread per request, outcome delivered over an mpsc channel
// - The editor keeps accepting input while a request is in flight

mod args;
mod commands;
mod handlers;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, TargetArgs};
pub use commands::run;
