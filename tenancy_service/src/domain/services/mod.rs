mod request_lifecycle;

pub use request_lifecycle::RequestLifecycleImpl;
