pub mod config;
pub mod controller;
pub mod response;

pub use config::ConfigBuilder;
pub use controller::Controller;
pub use response::CoreResponse;
