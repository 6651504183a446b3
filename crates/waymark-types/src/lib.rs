pub mod coord;
pub mod error;
pub mod mission;
pub mod mode;
pub mod snapshot;
pub mod upload;

pub use coord::{Coord, PRECISION, format_component, parse_component};
pub use error::{Error, Result};
pub use mission::{MissionCommand, MissionFrame, MissionItem, MissionPlan};
pub use mode::{Interaction, Mode, ModeEvent};
pub use snapshot::{RawComponent, RawPoint, SnapshotPoint};
pub use upload::{UploadPoint, UploadRequest, UploadTarget};
