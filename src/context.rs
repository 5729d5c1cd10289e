use std::path::Path;

use log::info;

use crate::config::{self, AppPaths};
use crate::error::AppResult;
use crate::output::Output;
use crate::profile::ProfileRepository;
use crate::registry::SystemRegistry;

#[derive(Debug)]
pub struct AppContext {
    pub repository: ProfileRepository<SystemRegistry>,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(
        json: bool,
        base_path: Option<&str>,
        config_file: Option<&Path>,
    ) -> AppResult<Self> {
        let paths = AppPaths::discover()?;
        let settings = config::load_settings(&paths, config_file)?;
        let base_path = settings.base_path(base_path);
        info!("reading profiles from HKLM\\{base_path}");

        let repository =
            ProfileRepository::new(SystemRegistry::local_machine()).with_base_path(base_path);
        let output = Output::new(json);

        Ok(Self { repository, output })
    }
}
