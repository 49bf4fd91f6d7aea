pub mod context;
pub mod controller;
pub mod model;
pub mod response;

pub use context::{AppState, Application};
