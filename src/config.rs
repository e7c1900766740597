//! Process configuration, read once from the environment at startup.
//!
//! Every knob has a default, and a value that fails to parse falls back to
//! that default rather than aborting.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

use canvas::config::CanvasConfig;
use tracing::info;

const DEFAULT_DATA_DIR: &str = "./dotd-data";
const DEFAULT_PERSIST_QUEUE_CAPACITY: usize = 64;
const DEFAULT_MIN_WIDGET_SIZE: f64 = canvas::consts::MIN_WIDGET_WIDTH;
const DEFAULT_MAX_ZOOM_OUT: f64 = canvas::consts::MAX_ZOOM_OUT;
const DEFAULT_MAX_ZOOM_IN: f64 = canvas::consts::MAX_ZOOM_IN;

/// Runtime configuration for the store, the worker and new engines.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root holding `canvases/` and `media/`.
    pub data_dir: PathBuf,
    /// Bounded capacity of the persistence request queue.
    pub persist_queue_capacity: usize,
    /// Limits handed to every [`canvas::engine::Engine`].
    pub canvas: CanvasConfig,
}

impl Config {
    #[must_use]
    pub fn from_env() -> Self {
        let data_dir = std::env::var("DOTD_DATA_DIR")
            .ok()
            .filter(|v| !v.is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);
        let min_widget_size = env_parse("DOTD_MIN_WIDGET_SIZE", DEFAULT_MIN_WIDGET_SIZE);

        let canvas = CanvasConfig {
            min_widget_width: min_widget_size,
            min_widget_height: min_widget_size,
            max_zoom_out: env_parse("DOTD_MAX_ZOOM_OUT", DEFAULT_MAX_ZOOM_OUT),
            max_zoom_in: env_parse("DOTD_MAX_ZOOM_IN", DEFAULT_MAX_ZOOM_IN),
            ..CanvasConfig::default()
        };
        let config = Self {
            data_dir,
            persist_queue_capacity: env_parse("DOTD_PERSIST_QUEUE_CAPACITY", DEFAULT_PERSIST_QUEUE_CAPACITY).max(1),
            canvas,
        };

        info!(
            data_dir = %config.data_dir.display(),
            persist_queue_capacity = config.persist_queue_capacity,
            min_widget_size,
            max_zoom_out = config.canvas.max_zoom_out,
            max_zoom_in = config.canvas.max_zoom_in,
            "configuration loaded"
        );
        config
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}
