mod dashboard;
mod relay;

pub use dashboard::DashboardImpl;
pub use relay::NotificationRelay;
