pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::Settings;

use std::path::Path;

use crate::error::AppResult;

/// Loads settings from `explicit` when given, otherwise from the default
/// location. A missing default file yields default settings.
pub fn load_settings(paths: &AppPaths, explicit: Option<&Path>) -> AppResult<Settings> {
    match explicit {
        Some(path) => settings::load_required(path),
        None => settings::load(&paths.settings_file()),
    }
}
