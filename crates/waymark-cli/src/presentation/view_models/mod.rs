pub mod common;
pub mod mission;
pub mod result;
pub mod system;

pub use common::{Guidance, StatusBadge, StatusLevel};
pub use mission::{MissionPlanViewModel, PlanItemRow, WaypointListViewModel, WaypointRow};
pub use result::CommandResultViewModel;
pub use system::{ConfigStatus, GuidanceViewModel, InitResultViewModel, UploadResultViewModel};
