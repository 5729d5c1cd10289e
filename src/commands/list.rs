use crate::context::AppContext;
use crate::error::AppResult;
use crate::profile::NetworkProfile;

use super::describe;

pub fn run(ctx: &AppContext) -> AppResult<()> {
    let profiles = ctx.repository.list_all();
    let lines = format_list(&profiles);
    ctx.output.emit(&lines, &profiles)
}

fn format_list(profiles: &[NetworkProfile]) -> Vec<String> {
    if profiles.is_empty() {
        return vec!["0 profiles".to_string()];
    }

    profiles
        .iter()
        .enumerate()
        .map(|(index, profile)| format!("{}. {}", index + 1, describe(profile)))
        .collect()
}
