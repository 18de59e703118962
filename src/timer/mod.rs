//! Countdown timer with a textual progress bar
//!
//! One tick per second over `minutes * 60 + 1` ticks. The caller supplies a
//! callback that receives each rendered line and a cancellation token that
//! aborts the countdown between ticks.

use std::time::Duration;

use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

/// Number of slots in the rendered progress bar.
pub const BAR_WIDTH: usize = 20;

const FILLED: &str = "#";
const EMPTY: &str = "-";

/// Render the progress line for one tick: a fixed-width bar plus the
/// remaining time as mm:ss.
pub fn render_bar(tick: u64, total_ticks: u64, width: usize) -> String {
    // A zero-length countdown is a single tick at 100%.
    let fraction = if total_ticks == 0 {
        1.0
    } else {
        tick as f64 / total_ticks as f64
    };
    let filled = ((fraction * width as f64).floor() as usize).min(width);

    let remaining = total_ticks.saturating_sub(tick);
    format!(
        "[{}{}] {:02}:{:02}",
        FILLED.repeat(filled),
        EMPTY.repeat(width - filled),
        remaining / 60,
        remaining % 60
    )
}

fn total_ticks(minutes: u64) -> u64 {
    minutes.saturating_mul(60)
}

/// Run the countdown for `minutes`, invoking `on_tick` with the rendered
/// line once per second. Returns `true` when the countdown ran to
/// completion, `false` when the token was cancelled first.
pub async fn run_countdown<F>(minutes: u64, cancel: &CancellationToken, mut on_tick: F) -> bool
where
    F: FnMut(&str),
{
    let total_ticks = total_ticks(minutes);
    for tick in 0..=total_ticks {
        on_tick(&render_bar(tick, total_ticks, BAR_WIDTH));
        if tick == total_ticks {
            break;
        }
        tokio::select! {
            _ = cancel.cancelled() => return false,
            _ = sleep(Duration::from_secs(1)) => {}
        }
    }
    true
}
