//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `keepsake_core` linkage.
//! - Keep output deterministic apart from the sampled "today".

use keepsake_core::{next_occurrence, Countdown};

fn main() {
    println!("keepsake_core ping={}", keepsake_core::ping());
    println!("keepsake_core version={}", keepsake_core::core_version());

    // Sample "now" once and reuse it for resolver and formatter.
    let today = chrono::Local::now().date_naive();
    match next_occurrence(1, 1, today) {
        Ok(next) => {
            let countdown = Countdown::between(today, next);
            println!("next new year {} ({})", next, countdown.display());
        }
        Err(err) => eprintln!("resolver error: {err}"),
    }
}
