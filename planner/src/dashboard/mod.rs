pub mod bridge;
pub mod model;

pub use bridge::DashboardBridge;
pub use model::DashboardModel;
