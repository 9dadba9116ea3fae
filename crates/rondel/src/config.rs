use directories::ProjectDirs;
use gyro::gesture::DEFAULT_TOUCH_SLOP;
use gyro::layout;
use gyro::{AutoSpin, IconName, Placement, RingConfiguration};
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use strum::{Display as StrumDisplay, EnumString};
use thiserror::Error;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    /// Ring center on the bottom edge, lower half off-screen.
    #[default]
    #[strum(to_string = "bottom", serialize = "BottomCenter", serialize = "b")]
    Bottom,
    #[strum(to_string = "center", serialize = "centre", serialize = "c")]
    Center,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum SpinDirection {
    #[default]
    #[strum(to_string = "clockwise", serialize = "cw")]
    Clockwise,
    #[strum(
        to_string = "counterclockwise",
        serialize = "counter-clockwise",
        serialize = "anticlockwise",
        serialize = "ccw"
    )]
    CounterClockwise,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SpinConfig {
    pub enabled: bool,
    pub direction: SpinDirection,
    /// Degrees added per step.
    pub increment: f64,
    /// Length of one step.
    pub duration_ms: u64,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            direction: SpinDirection::Clockwise,
            increment: AutoSpin::DEFAULT_INCREMENT,
            duration_ms: AutoSpin::DEFAULT_DURATION.as_millis() as u64,
        }
    }
}

impl SpinConfig {
    pub fn auto_spin(&self) -> Option<AutoSpin> {
        self.enabled.then(|| {
            let increment = match self.direction {
                SpinDirection::Clockwise => self.increment.abs(),
                SpinDirection::CounterClockwise => -self.increment.abs(),
            };
            AutoSpin::new(increment, Duration::from_millis(self.duration_ms))
        })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub center: IconName,
    pub items: Vec<IconName>,
    pub item_size: f64,
    pub center_size: f64,
    pub radius: f64,
    pub anchor: Anchor,
    /// Distance from the bottom edge to the ring center with `anchor = "bottom"`.
    pub margin: f64,
    pub touch_slop: f64,
    pub toast_ms: u64,
    pub spin: SpinConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            center: IconName::from("emblem-system-symbolic"),
            items: [
                "document-edit-symbolic",
                "list-add-symbolic",
                "object-select-symbolic",
                "applications-engineering-symbolic",
                "x-office-calendar-symbolic",
                "user-trash-symbolic",
            ]
            .into_iter()
            .map(IconName::from)
            .collect(),
            item_size: layout::DEFAULT_ITEM_SIZE,
            center_size: layout::DEFAULT_CENTER_SIZE,
            radius: layout::DEFAULT_RADIUS,
            anchor: Anchor::Bottom,
            margin: 30.0,
            touch_slop: DEFAULT_TOUCH_SLOP,
            toast_ms: 2000,
            spin: SpinConfig::default(),
        }
    }
}

impl Config {
    pub fn ring_configuration(&self) -> RingConfiguration {
        RingConfiguration {
            items: self.items.clone(),
            center: self.center.clone(),
            item_size: self.item_size,
            center_size: self.center_size,
            radius: self.radius,
        }
    }

    pub fn placement(&self) -> Placement {
        match self.anchor {
            Anchor::Bottom => Placement::BottomEdge {
                margin: self.margin,
            },
            Anchor::Center => Placement::Centered,
        }
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("item_size", self.item_size)?;
        positive("center_size", self.center_size)?;
        positive("radius", self.radius)?;
        finite("margin", self.margin)?;
        if !self.touch_slop.is_finite() || self.touch_slop < 0.0 {
            return Err(ConfigError::Invalid {
                field: "touch_slop",
                reason: "must be a finite, non-negative number",
            });
        }
        finite("spin.increment", self.spin.increment)?;
        if self.spin.duration_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "spin.duration_ms",
                reason: "must be greater than zero",
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: "must be a finite number greater than zero",
        })
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: "must be a finite number",
        })
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
    #[error("Invalid `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("io", "rondel", "rondel").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

/// Reads `path` (if present) layered under `RONDEL_*` environment variables.
/// Nested keys use a double underscore, e.g. `RONDEL_SPIN__ENABLED=false`.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from(path.to_path_buf()).required(false))
        .add_source(
            config::Environment::with_prefix("RONDEL")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config: Config = s.try_deserialize()?;
    config.validate()?;
    Ok(config)
}

pub fn load_or_default(path: &Path) -> Config {
    match load_config(path) {
        Ok(c) => c,
        Err(e) => {
            log::warn!(
                "Ignoring configuration at {}: {}. Using defaults.",
                path.display(),
                e
            );
            Config::default()
        }
    }
}

pub fn write_default_config(path: &Path) -> std::io::Result<PathBuf> {
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(path, DEFAULT_CONFIG)?;
    }
    Ok(path.to_path_buf())
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

use crate::events::AppEvent;
use async_channel::{Receiver, Sender};

/// Quiet period that ends one burst of file events. Editors often save as
/// truncate + write + rename, which should reload once.
const RELOAD_DEBOUNCE: Duration = Duration::from_millis(200);

/// Makes `path` absolute against the working directory, so a bare
/// `rondel.toml` still has a directory to watch.
pub fn resolve_config_path(path: &Path) -> std::io::Result<PathBuf> {
    std::path::absolute(path)
}

/// Directory to watch and the config file inside it. The directory is
/// created if needed and canonicalized, so `..` and symlinks are gone and the
/// file path compares equal to what notify reports.
fn watch_target(config_path: &Path) -> std::io::Result<(PathBuf, PathBuf)> {
    let path = resolve_config_path(config_path)?;
    let (Some(dir), Some(name)) = (path.parent(), path.file_name()) else {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("{} does not name a file", path.display()),
        ));
    };
    fs_err::create_dir_all(dir)?;
    let dir = fs_err::canonicalize(dir)?;
    let file = dir.join(name);
    Ok((dir, file))
}

fn is_config_event(event: &notify::Event, file: &Path) -> bool {
    matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    ) && event.paths.iter().any(|p| p == file)
}

/// Discards queued events until the channel stays quiet for `quiet`.
async fn settle<T>(rx: &Receiver<T>, quiet: Duration) -> usize {
    let mut dropped = 0;
    while let Ok(Ok(_)) = tokio::time::timeout(quiet, rx.recv()).await {
        dropped += 1;
    }
    dropped
}

pub async fn run_async_watcher(tx: Sender<AppEvent>, config_path: PathBuf) {
    let (config_dir, config_file) = match watch_target(&config_path) {
        Ok(target) => target,
        Err(e) => {
            log::error!(
                "Cannot watch {} for changes: {}",
                config_path.display(),
                e
            );
            return;
        }
    };

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", ConfigError::from(e));
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch {}: {}", config_dir.display(), e);
        return;
    }
    log::info!("Watching {} for changes", config_file.display());

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) if is_config_event(&event, &config_file) => {
                let dropped = settle(&bridge_rx, RELOAD_DEBOUNCE).await;
                log::debug!(
                    "{} changed ({} follow-up events coalesced)",
                    config_file.display(),
                    dropped
                );
                if tx.send(AppEvent::ConfigReload).await.is_err() {
                    break;
                }
            }
            Ok(_) => {}
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}
