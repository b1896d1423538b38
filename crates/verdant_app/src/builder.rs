use serde::Deserialize;
use verdant_core::Color;

use crate::config::ConfigError;
use crate::traits::VerdantApp;

/// Window and runner settings.
///
/// Every field has a default, so a config file only lists what it changes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
    /// 1 disables multisampling; 4 is the only other supported value.
    pub msaa_samples: u32,
    /// Linear RGBA.
    pub clear_color: [f32; 4],
    pub log_level: log::LevelFilter,
    /// Close the window when Escape is pressed.
    pub exit_on_escape: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Verdant".to_string(),
            width: 800,
            height: 600,
            vsync: true,
            msaa_samples: 4,
            clear_color: Color::RAY_WHITE.to_array(),
            log_level: log::LevelFilter::Info,
            exit_on_escape: true,
        }
    }
}

impl AppConfig {
    /// Reads `path` (see [`crate::config`]); defaults when it does not exist.
    pub fn load_or_default(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        crate::config::ConfigFile::load(path)?.app()
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        match self.msaa_samples {
            1 | 4 => Ok(()),
            n => Err(ConfigError::InvalidMsaa(n)),
        }
    }

    #[inline]
    pub fn clear_color(&self) -> Color {
        Color::from(self.clear_color)
    }
}

/// Entry point. Configure with the builder methods, then call [`App::run`].
pub struct App<A: VerdantApp> {
    config: AppConfig,
    app_state: A,
}

impl<A: VerdantApp + 'static> App<A> {
    pub fn new(app_state: A) -> Self {
        Self {
            config: AppConfig::default(),
            app_state,
        }
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.config.title = title.to_string();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.config.width = width;
        self.config.height = height;
        self
    }

    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.config.vsync = vsync;
        self
    }

    pub fn with_msaa(mut self, samples: u32) -> Self {
        self.config.msaa_samples = samples;
        self
    }

    pub fn with_clear_color(mut self, color: Color) -> Self {
        self.config.clear_color = color.to_array();
        self
    }

    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Runs the event loop until the window closes, Escape is pressed, or a
    /// callback fails. The first callback error is returned.
    pub fn run(self) -> anyhow::Result<()> {
        self.config.validate()?;
        crate::runner::run_internal(self.config, self.app_state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Nothing;
    impl VerdantApp for Nothing {}

    #[test]
    fn builder_overrides_config() {
        let app = App::new(Nothing)
            .with_title("Grass Blade Mesh")
            .with_size(800, 450)
            .with_msaa(1)
            .with_clear_color(Color::WHITE);
        let cfg = app.config();
        assert_eq!(cfg.title, "Grass Blade Mesh");
        assert_eq!((cfg.width, cfg.height), (800, 450));
        assert_eq!(cfg.msaa_samples, 1);
        assert_eq!(cfg.clear_color(), Color::WHITE);
    }

    #[test]
    fn default_clear_color_is_ray_white() {
        assert_eq!(AppConfig::default().clear_color(), Color::RAY_WHITE);
    }
}
