//! # Presentation Layer
//!
//! User interface logic for the CLI, an adaptation of MVVM.
//!
//! ## Console output (plain/JSON)
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(json)==> serde_json --> stdout
//!                                                                  ==(plain)=> [ View ] --> stdout
//! ```
//!
//! ## Interactive editor
//!
//! The engine's `WaypointController` pushes map, table and edit panel view
//! models into `EditorApp` (the `MissionView` host). Widgets in `views/tui`
//! only read those models plus local UI state such as focus and viewport.
//!
//! ```text
//! [ Input ] --> [ Editor loop ] --> [ WaypointController ] --> [ EditorApp ] --> [ Widgets ]
//! ```
//!
//! ## Rules
//!
//! * ViewModels carry raw data and implement `Serialize`; `--format json`
//!   dumps them whole.
//! * Views own layout and colour, never mission logic.
//! * Viewport, focus and typed-but-unapplied field text live in the editor,
//!   never in a view model.

pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
