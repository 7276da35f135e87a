//! Configuration loader with multi-source merging

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use portfolio_application::AppConfig;
use std::path::{Path, PathBuf};

const PROJECT_FILES: [&str; 2] = ["portfolio.toml", ".portfolio.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    pub fn load(config_path: Option<&Path>) -> Result<AppConfig, Box<figment::Error>> {
        Self::figment(config_path, Path::new("."), Self::global_config_path())
            .extract()
            .map_err(Box::new)
    }

    /// Load only default configuration plus environment (for --no-config)
    pub fn load_defaults() -> Result<AppConfig, Box<figment::Error>> {
        Figment::new()
            .merge(Serialized::defaults(AppConfig::default()))
            .merge(Self::env_providers())
            .extract()
            .map_err(Box::new)
    }

    fn figment(config_path: Option<&Path>, project_dir: &Path, global: Option<PathBuf>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        // Add global config (XDG or fallback)
        if let Some(global_path) = global
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        // Add project-level config file (first name that exists)
        if let Some(path) = Self::find_project_file(project_dir) {
            figment = figment.merge(Toml::file(&path));
        }

        // Add explicit config path (highest priority for files)
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Self::env_providers())
    }

    fn env_providers() -> Figment {
        // The mail account variables keep the names the site has always used.
        let mail = Env::raw()
            .only(&["EMAIL_USER", "EMAIL_PASS"])
            .map(|key| {
                if key.as_str().eq_ignore_ascii_case("EMAIL_USER") {
                    "mail.user".into()
                } else {
                    "mail.password".into()
                }
            });

        Figment::new()
            .merge(mail)
            .merge(Env::prefixed("PORTFOLIO_").split("__"))
    }

    fn find_project_file(dir: &Path) -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    /// Get the global config file path
    ///
    /// Returns `$XDG_CONFIG_HOME/portfolio/config.toml` if set,
    /// otherwise the platform config directory equivalent
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("portfolio").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        Self::find_project_file(Path::new("."))
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&Path>) {
        println!("Configuration sources (in priority order):");

        println!("  [ENV  ] PORTFOLIO_*, EMAIL_USER, EMAIL_PASS");

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:<5}] Explicit: {}", mark, path.display());
        }

        // Project config
        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./portfolio.toml or ./.portfolio.toml");
        }

        // Global config
        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}
