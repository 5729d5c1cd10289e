use crate::cli::FindArgs;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::profile::NetworkProfile;

use super::describe;

pub fn run(ctx: &AppContext, args: FindArgs) -> AppResult<()> {
    let name = validate_name(&args.name)?;
    let profile = ctx.repository.find_by_name(name);

    let text = describe(profile.as_ref().unwrap_or(&NetworkProfile::empty()));
    ctx.output.emit(&[text], &profile)
}

fn validate_name(raw: &str) -> AppResult<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidInput(
            "profile name must not be empty".to_string(),
        ));
    }

    Ok(trimmed)
}
