pub mod entry;
pub mod health;

pub use entry::EntryController;
pub use health::HealthController;
