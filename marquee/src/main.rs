mod app;
mod args;
mod keyboard;
mod signals;
mod source;

use log::{error, info};
use marquee_core::MarqueeError;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging (stderr, so frames on stdout stay clean)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting Marquee - scrolling text banners for the terminal");

    match app::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            let code = e
                .downcast_ref::<MarqueeError>()
                .map_or(1, MarqueeError::exit_code);
            ExitCode::from(code)
        }
    }
}
