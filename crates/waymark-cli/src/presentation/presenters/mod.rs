pub mod mission;
pub mod system;

pub use mission::{present_mission_plan, present_waypoint_list};
pub use system::{present_guidance, present_init_result, present_upload_report};
