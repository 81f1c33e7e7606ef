pub mod headless;
pub mod human;
pub mod tui;
pub mod watch;

pub use headless::{HeadlessConfig, HeadlessMode};
pub use human::HumanMode;
pub use watch::WatchMode;

use anyhow::{Result, bail};
use std::time::Duration;

/// Screen refresh period for the TUI modes (~30 FPS)
pub const RENDER_INTERVAL: Duration = Duration::from_millis(33);

/// Convert a `--speed` value (seconds between ticks) into a tick interval
pub fn tick_interval(seconds: f64) -> Result<Duration> {
    if !seconds.is_finite() || seconds <= 0.0 {
        bail!("speed must be a positive number of seconds, got {seconds}");
    }
    Ok(Duration::from_secs_f64(seconds))
}

/// Tick interval for the 1-4 speed keys
pub fn preset_interval(level: u8) -> Option<Duration> {
    let millis = match level {
        1 => 500,
        2 => 125,
        3 => 50,
        4 => 16,
        _ => return None,
    };
    Some(Duration::from_millis(millis))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_interval() {
        assert_eq!(tick_interval(0.5).unwrap(), Duration::from_millis(500));
        assert!(tick_interval(0.0).is_err());
        assert!(tick_interval(-1.0).is_err());
        assert!(tick_interval(f64::NAN).is_err());
    }

    #[test]
    fn test_presets_get_faster() {
        let presets: Vec<Duration> = (1..=4).filter_map(preset_interval).collect();
        assert_eq!(presets.len(), 4);
        assert!(presets.windows(2).all(|pair| pair[0] > pair[1]));
        assert_eq!(preset_interval(0), None);
        assert_eq!(preset_interval(5), None);
    }
}
