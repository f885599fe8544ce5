//! # Logger
//!
//! Console logging setup for binaries and test harnesses that embed the kata calculators.
//! The calculator crates only emit `tracing` events; this crate installs the global
//! subscriber that renders them.
//!
//! * Compact, ANSI-coloured output by default, JSON lines with [`LoggerBuilder::json`].
//! * `RUST_LOG` is honoured unless [`LoggerBuilder::env_filter`] pins the directives
//!   (e.g., `"kata_pricing=trace,kata_kinematics=debug"`).
//!
//! ## Example
//!
//! ```rust
//! # use kata_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder()
//!     .name("katas")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;

use private::Sealed;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

#[derive(Debug)]
pub struct LoggerConfig {
    console: bool,
    stderr: bool,
    json: bool,
    level: LevelFilter,
    env_filter: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self { console: true, stderr: false, json: false, level: LevelFilter::INFO, env_filter: None }
    }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}

/// A builder for configuring and initializing the global tracing subscriber.
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName> {
    config: LoggerConfig,
    name: N,
}

impl LoggerBuilder<NoName> {
    /// Sets the name of the logger.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName> {
        LoggerBuilder { name: WithName(name.into()), config: self.config }
    }
}

impl LoggerBuilder<WithName> {
    /// Configures the minimum log level to be emitted.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Adds an explicit env filter (e.g., `kata_pricing=trace`).
    ///
    /// `RUST_LOG` is ignored when an explicit filter is set.
    /// Invalid filters will cause [`LoggerBuilder::init`] to return an error.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    /// Enables console logging.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Writes to stderr instead of stdout.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn stderr(mut self, enabled: bool) -> Self {
        self.config.stderr = enabled;
        self
    }

    /// Emits JSON lines instead of the compact human format.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn json(mut self) -> Self {
        self.config.json = true;
        self
    }

    /// Consumes the builder and initializes the global tracing subscriber.
    ///
    /// # Errors
    /// Returns [`LoggerError::Subscriber`] if a global subscriber has already been set.
    /// Returns [`LoggerError::InvalidConfiguration`] for invalid builder settings.
    pub fn init(self) -> Result<Logger, LoggerError> {
        validate_config(&self.config, &self.name.0)?;

        let env_filter = build_env_filter(&self.config)?;

        let mut layers = Vec::new();

        if self.config.console {
            let boxed = match (self.config.json, self.config.stderr) {
                (true, true) => layer().json().with_writer(std::io::stderr).boxed(),
                (true, false) => layer().json().boxed(),
                (false, true) => {
                    layer().compact().with_ansi(true).with_writer(std::io::stderr).boxed()
                },
                (false, false) => layer().compact().with_ansi(true).boxed(),
            };
            layers.push(boxed);
        }

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging layers enabled. Enable console output.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;

        tracing::debug!(logger = %self.name.0, "Logging system initialized");

        Ok(Logger { name: self.name.0, level: self.config.level })
    }
}

/// A handle to the initialized logging system.
#[must_use = "The handle identifies the installed subscriber."]
#[derive(Debug)]
pub struct Logger {
    name: String,
    level: LevelFilter,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`] to configure the global tracing subscriber.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kata_logger::{LevelFilter, Logger};
    ///
    /// let builder = Logger::builder().name("katas").level(LevelFilter::WARN).json();
    /// # drop(builder);
    /// ```
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { config: LoggerConfig::default(), name: NoName }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The default level the subscriber was installed with.
    #[must_use]
    pub const fn level(&self) -> LevelFilter {
        self.level
    }
}

fn validate_config(config: &LoggerConfig, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }

    if config.level == LevelFilter::OFF && config.env_filter.is_none() {
        return Err(LoggerError::InvalidConfiguration {
            message: "level OFF without an env filter would discard every event".into(),
            context: None,
        });
    }

    Ok(())
}

fn build_env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());
    config.env_filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |filter| {
            builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{filter}': {e}").into(),
                context: None,
            })
        },
    )
}
