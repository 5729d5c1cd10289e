use serde::Serialize;

use crate::error::AppResult;

pub fn render<T: Serialize>(value: &T) -> AppResult<String> {
    let payload = serde_json::to_string_pretty(value)?;
    Ok(payload)
}

pub fn print<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", render(value)?);
    Ok(())
}
