use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{bail, Context, Result};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use tuggest::autocomplete::AutocompleteOption;

const CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_prompt")]
    pub prompt: String,

    #[serde(default = "default_max_number_of_options")]
    pub max_number_of_options: usize,

    #[serde(default)]
    pub clear_on_select: bool,

    /// Debounce applied to keystrokes before the async story "fetches"
    #[serde(default = "default_fetch_delay_ms")]
    pub fetch_delay_ms: u64,

    /// Replaces the fruit catalogue used by the basic story
    #[serde(default)]
    pub options: Option<Vec<AutocompleteOption>>,

    #[serde(default)]
    pub theme: Theme,
}

impl Config {
    pub fn new(write: &bool) -> Result<Self> {
        let config_path = get_app_config_path()?.join(CONFIG_FILE);
        if *write {
            write_default_config(&config_path).context("failed to write default config")?;
        }
        Self::load(&config_path)
    }

    /// Reads the config at `path`, falling back to defaults when there
    /// is no file there
    pub fn load(path: &Path) -> Result<Self> {
        match File::open(path) {
            Ok(f) => serde_yml::from_reader(BufReader::new(f)).context("unable to parse config"),
            Err(_) => Ok(Config::default()),
        }
    }
}

fn default_prompt() -> String {
    "❯".into()
}

fn default_max_number_of_options() -> usize {
    tuggest::autocomplete::coordinator::DEFAULT_MAX_NUMBER_OF_OPTIONS
}

fn default_fetch_delay_ms() -> u64 {
    300
}

fn default_use_theme() -> bool {
    false
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            max_number_of_options: default_max_number_of_options(),
            clear_on_select: false,
            fetch_delay_ms: default_fetch_delay_ms(),
            options: None,
            theme: Theme::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default = "default_use_theme")]
    use_theme: bool,

    #[serde(default = "default_title_colour")]
    title: Color,

    #[serde(default = "default_highlight_colour")]
    highlight: Color,

    #[serde(default = "default_footer_colour")]
    footer: Color,

    #[serde(default = "default_error_colour")]
    error: Color,
}

impl Theme {
    pub fn title(&self) -> Color {
        if self.use_theme {
            self.title
        } else {
            Color::Green
        }
    }
    pub fn highlight(&self) -> Color {
        if self.use_theme {
            self.highlight
        } else {
            Color::Green
        }
    }
    pub fn footer(&self) -> Color {
        if self.use_theme {
            self.footer
        } else {
            Color::Cyan
        }
    }
    pub fn error(&self) -> Color {
        if self.use_theme {
            self.error
        } else {
            Color::Red
        }
    }
}

fn default_title_colour() -> Color {
    Color::Rgb(0x96, 0xe0, 0x72)
}
fn default_highlight_colour() -> Color {
    Color::Rgb(0x96, 0xe0, 0x72)
}
fn default_footer_colour() -> Color {
    Color::Rgb(0x00, 0xe8, 0xc6)
}
fn default_error_colour() -> Color {
    Color::Rgb(0xee, 0x5d, 0x43)
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            use_theme: default_use_theme(),
            title: default_title_colour(),
            highlight: default_highlight_colour(),
            footer: default_footer_colour(),
            error: default_error_colour(),
        }
    }
}

pub fn get_app_config_path() -> Result<PathBuf> {
    let path = if cfg!(target_os = "macos") {
        dirs_next::home_dir().map(|h| h.join(".config"))
    } else {
        dirs_next::config_dir()
    };
    let Some(mut path) = path else {
        bail!("unable to find config path")
    };
    path.push(env!("CARGO_PKG_NAME"));
    fs::create_dir_all(&path)?;
    Ok(path)
}

fn write_default_config(path: &Path) -> Result<()> {
    let config = Config::default();
    fs::write(path, serde_yml::to_string(&config)?)?;
    Ok(())
}
