pub mod find;
pub mod get;
pub mod list;

use crate::profile::NetworkProfile;

const NOT_FOUND: &str = "profile not found";

fn describe(profile: &NetworkProfile) -> String {
    if profile.is_empty() {
        return NOT_FOUND.to_string();
    }

    let name = profile.name().unwrap_or("(unnamed)");
    format!("{name} {}", profile.id().braced())
}
