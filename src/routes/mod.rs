use crate::app::Application;
use crate::app::controller::{EntryController, HealthController};

/// Register every controller on the application.
pub fn register(app: &mut Application) {
    app.register_controller::<HealthController>();
    app.register_controller::<EntryController>();
}
