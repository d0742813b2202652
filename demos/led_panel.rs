//! Drive an LED panel from stdin.
//!
//! Each line is one intent: `advance`, `retreat`, `reset`, `disable`,
//! `enable` (or `next`, `prev`, `unmount`, `mount`). The snapshot after each
//! intent is printed. An optional first argument names a TOML config file.
//!
//! ```text
//! printf 'next\nnext\nunmount\nnext\nmount\n' | cargo run --example led_panel
//! ```

use ledlab::{Intent, LedPanel, PanelConfig};
use std::io::{self, BufRead};
use std::path::PathBuf;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let config = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .map(|path| PanelConfig::load_or_default(&path))
        .unwrap_or_default();

    let mut panel: LedPanel = LedPanel::with_config(&config);
    println!("{}", panel.snapshot());

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("error: {e}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Intent>() {
            Ok(intent) => println!("{}", panel.dispatch(intent)),
            Err(e) => eprintln!("error: {e}"),
        }
    }
}
