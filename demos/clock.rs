//! Mount a clock, print a few ticks, then unmount it.
//!
//! ```text
//! RUST_LOG=info cargo run --example clock
//! ```

use ledlab::{Clock, ClockConfig};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    let config = ClockConfig::default();
    let handle = Clock::mount(&config, |message| println!("{message}"));
    let mut readings = handle.subscribe();

    println!("{}", handle.display());
    for _ in 0..3 {
        if readings.changed().await.is_err() {
            break;
        }
        println!("{}", handle.display());
    }

    handle.unmount();
}
