use crate::*;
use confique::Config as _;
use std::sync::OnceLock;

#[derive(Debug, confique::Config)]
pub struct Config {
    /// Spaces per indent level.
    #[config(env = "FORMAT_SQL_INDENT", default = 4)]
    pub indent: usize,
    /// Only normalize keyword casing; skip the multi-line layout.
    #[config(env = "FORMAT_SQL_UPPERCASE_ONLY", default = false)]
    pub uppercase_only: bool,
}

impl Config {
    pub fn layout(&self) -> Layout {
        Layout {
            indent: self.indent,
        }
    }
}

/// Process-wide configuration, loaded from the environment on first use.
pub fn config() -> Result<&'static Config> {
    static CONFIG: OnceLock<Config> = OnceLock::new();
    if let Some(config) = CONFIG.get() {
        return Ok(config);
    }
    let loaded = Config::builder().env().load()?;
    debug!(?loaded, "loaded configuration");
    Ok(CONFIG.get_or_init(|| loaded))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_uses_configured_indent() {
        let config = Config {
            indent: 2,
            uppercase_only: false,
        };
        assert_eq!(config.layout(), Layout { indent: 2 });
    }

    #[test]
    fn defaults_load_without_environment() {
        crate::testing::common_init();
        let config = Config::builder()
            .load()
            .expect("defaults should satisfy every field");
        assert_eq!(config.indent, 4);
        assert!(!config.uppercase_only);
        assert_eq!(config.layout(), Layout::default());
    }

    #[test]
    fn cached_config_is_shared() {
        let first = config().expect("config should load") as *const Config;
        let second = config().expect("config should load") as *const Config;
        assert_eq!(first, second);
    }
}
