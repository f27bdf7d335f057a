use std::path::PathBuf;

use color_eyre::eyre::Result;
use lazy_static::lazy_static;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::{self, layer::SubscriberExt, util::SubscriberInitExt};

use super::config::get_app_config_path;

// taken form https://ratatui.rs/recipes/apps/log-with-tracing/

lazy_static! {
    pub static ref PROJECT_NAME: String = env!("CARGO_CRATE_NAME").to_uppercase().to_string();
    pub static ref LOG_ENV: String = format!("{}_LOGLEVEL", PROJECT_NAME.clone());
    pub static ref LOG_FILE: String = format!("{}.log", env!("CARGO_PKG_NAME"));
}

fn project_directory() -> Option<PathBuf> {
    dirs_next::data_dir().map(|data_dir| data_dir.join(env!("CARGO_CRATE_NAME")))
}

pub fn get_log_dir() -> PathBuf {
    if let Some(p) = project_directory() {
        p
    } else if let Ok(p) = get_app_config_path() {
        p
    } else {
        PathBuf::from(".").join(".data")
    }
}

/// Log level filter: `RUST_LOG` wins, then `TUGGEST_LOGLEVEL`, then info
/// for this crate only
fn log_filter() -> String {
    std::env::var("RUST_LOG")
        .or_else(|_| std::env::var(LOG_ENV.clone()))
        .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")))
}

/// Everything goes to a file; the terminal belongs to the storybook.
pub fn initialize_logging(log_to: &Option<PathBuf>) -> Result<()> {
    let log_path = match log_to {
        Some(p) => p.clone(),
        None => {
            let directory = get_log_dir();
            std::fs::create_dir_all(directory.clone())?;
            directory.join(LOG_FILE.clone())
        }
    };

    let log_file = std::fs::File::create(&log_path)?;
    let file_subscriber = tracing_subscriber::fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false);
    tracing_subscriber::registry()
        .with(file_subscriber)
        .with(ErrorLayer::default())
        .with(tracing_subscriber::filter::EnvFilter::new(log_filter()))
        .init();

    info!(path = %log_path.display(), "logging initialised");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_names_follow_crate() {
        assert_eq!(*PROJECT_NAME, "TUGGEST");
        assert_eq!(*LOG_ENV, "TUGGEST_LOGLEVEL");
        assert_eq!(*LOG_FILE, "tuggest.log");
    }
}
