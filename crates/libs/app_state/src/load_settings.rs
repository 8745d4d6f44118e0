use crate::AppSettings;
use color_eyre::eyre::Result;
use std::path::Path;
use tracing::debug;

/// Loads `config/settings.yaml`, with `APP__SECTION__KEY` environment overrides.
pub fn load_app_settings() -> Result<AppSettings> {
    // Need to load from dotenv to get it to overwrite the db url from env.
    dotenv::from_path(".env").ok();
    let config_path = Path::new("config/settings.yaml").canonicalize()?;
    load_settings_from_path(&config_path)
}

pub fn load_settings_from_path(config_path: &Path) -> Result<AppSettings> {
    debug!("Loading settings from {}", config_path.display());
    let builder = config::Config::builder()
        .add_source(config::File::from(config_path))
        .add_source(
            config::Environment::with_prefix("APP")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("api.allowed_origins")
                .try_parsing(true),
        );

    let settings = builder.build()?.try_deserialize::<AppSettings>()?;
    Ok(settings)
}
