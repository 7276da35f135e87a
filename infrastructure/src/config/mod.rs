//! Configuration loading for portfolio-relay
//!
//! This module handles file discovery and merging of configuration from
//! multiple sources. The priority order (highest to lowest):
//!
//! 1. Environment: `PORTFOLIO_*` (sections split by `__`), `EMAIL_USER`, `EMAIL_PASS`
//! 2. `--config <path>` specified file
//! 3. Project root: `./portfolio.toml` or `./.portfolio.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/portfolio/config.toml`
//! 5. Default values

mod loader;

pub use loader::ConfigLoader;
