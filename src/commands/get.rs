use uuid::Uuid;

use crate::cli::GetArgs;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};

use super::describe;

pub fn run(ctx: &AppContext, args: GetArgs) -> AppResult<()> {
    let id = parse_id(&args.id)?;
    let profile = ctx.repository.lookup(id);

    let text = describe(&profile);
    let json = (!profile.is_empty()).then_some(&profile);
    ctx.output.emit(&[text], &json)
}

fn parse_id(raw: &str) -> AppResult<Uuid> {
    let trimmed = raw.trim();
    Uuid::parse_str(trimmed)
        .map_err(|err| AppError::InvalidInput(format!("`{trimmed}` is not a GUID: {err}")))
}
