pub mod entry;

use crate::app::Application;

/// Declare every entity table on the application.
pub fn register(app: &mut Application) {
    app.register_entity(entry::Entity);
}
