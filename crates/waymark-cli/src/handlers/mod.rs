mod context;

pub mod edit;
pub mod guidance;
pub mod init;
pub mod plan;
pub mod show;
pub mod upload;

pub use context::HandlerContext;
