use std::sync::Mutex;

use super::*;

/// Serializes tests that touch `DOTD_*` variables.
static ENV_LOCK: Mutex<()> = Mutex::new(());

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// # Safety
/// Callers must hold `ENV_LOCK`.
unsafe fn clear_dotd_env() {
    unsafe {
        std::env::remove_var("DOTD_DATA_DIR");
        std::env::remove_var("DOTD_PERSIST_QUEUE_CAPACITY");
        std::env::remove_var("DOTD_MIN_WIDGET_SIZE");
        std::env::remove_var("DOTD_MAX_ZOOM_OUT");
        std::env::remove_var("DOTD_MAX_ZOOM_IN");
    }
}

// =============================================================================
// env_parse
// =============================================================================

#[test]
fn env_parse_missing_returns_default() {
    let val: usize = env_parse("__DOTD_TEST_NONEXISTENT__", 42);
    assert_eq!(val, 42);
}

#[test]
fn env_parse_present_valid() {
    unsafe { std::env::set_var("__DOTD_TEST_EP_VALID__", "2.5") };
    let val: f64 = env_parse("__DOTD_TEST_EP_VALID__", 0.0);
    assert!(approx_eq(val, 2.5));
    unsafe { std::env::remove_var("__DOTD_TEST_EP_VALID__") };
}

#[test]
fn env_parse_present_invalid_returns_default() {
    unsafe { std::env::set_var("__DOTD_TEST_EP_INVALID__", "lots") };
    let val: usize = env_parse("__DOTD_TEST_EP_INVALID__", 7);
    assert_eq!(val, 7);
    unsafe { std::env::remove_var("__DOTD_TEST_EP_INVALID__") };
}

// =============================================================================
// Config::from_env
// =============================================================================

#[test]
fn from_env_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe { clear_dotd_env() };
    let config = Config::from_env();
    assert_eq!(config.data_dir, PathBuf::from("./dotd-data"));
    assert_eq!(config.persist_queue_capacity, 64);
    assert_eq!(config.canvas, CanvasConfig::default());
}

#[test]
fn from_env_applies_overrides() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_dotd_env();
        std::env::set_var("DOTD_DATA_DIR", "/tmp/dotd-test");
        std::env::set_var("DOTD_PERSIST_QUEUE_CAPACITY", "8");
        std::env::set_var("DOTD_MIN_WIDGET_SIZE", "40");
        std::env::set_var("DOTD_MAX_ZOOM_OUT", "8");
        std::env::set_var("DOTD_MAX_ZOOM_IN", "0.25");
    }

    let config = Config::from_env();
    assert_eq!(config.data_dir, PathBuf::from("/tmp/dotd-test"));
    assert_eq!(config.persist_queue_capacity, 8);
    assert!(approx_eq(config.canvas.min_widget_width, 40.0));
    assert!(approx_eq(config.canvas.min_widget_height, 40.0));
    assert!(approx_eq(config.canvas.max_zoom_out, 8.0));
    assert!(approx_eq(config.canvas.max_zoom_in, 0.25));

    unsafe { clear_dotd_env() };
}

#[test]
fn from_env_zero_capacity_is_raised_to_one() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_dotd_env();
        std::env::set_var("DOTD_PERSIST_QUEUE_CAPACITY", "0");
    }
    assert_eq!(Config::from_env().persist_queue_capacity, 1);
    unsafe { clear_dotd_env() };
}
