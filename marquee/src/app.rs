use crate::args::{locale_language, Args, USAGE};
use crate::keyboard::KeyboardButton;
use crate::signals;
use crate::source::{LineSource, OneShotSource};
use anyhow::{Context, Result};
use crossterm::{cursor::Show, execute};
use log::info;
use marquee_core::{
    run_conversation, BannerDisplay, CancelToken, Config, ConversationEnd, DisplaySettings,
    MarqueeResult, TerminalSurface, TrueTypeLoader,
};
use std::io;
use std::panic;
use std::time::Duration;

/// Language used when neither the command line, config, nor locale name one
const DEFAULT_LANGUAGE: &str = "en-US";

/// How long a termination request waits for the conversation to stop on its own
const SHUTDOWN_GRACE: Duration = Duration::from_millis(500);

pub async fn run() -> Result<()> {
    let args = Args::parse(std::env::args().skip(1))?;
    if args.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let mut config = Config::load(args.config.clone()).context("failed to load configuration")?;
    if let Some(font) = &args.font {
        config.font.path = font.clone();
    }
    let language = args
        .language
        .clone()
        .or_else(|| config.input.language.clone())
        .or_else(locale_language)
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
    info!("Loaded configuration: {:?}", config);

    install_panic_hook();

    let cancel = CancelToken::new();
    let session_cancel = cancel.clone();
    let utterance = args.utterance();
    let mut session = tokio::task::spawn_blocking(move || {
        converse(&config, utterance, &language, session_cancel)
    });

    let end = tokio::select! {
        joined = &mut session => joined.context("conversation thread panicked")??,
        () = signals::shutdown_requested() => {
            cancel.cancel();
            match tokio::time::timeout(SHUTDOWN_GRACE, session).await {
                Ok(joined) => joined.context("conversation thread panicked")??,
                Err(_) => {
                    // Blocked waiting for input, which cannot be interrupted
                    info!("Shutting down while waiting for input");
                    let _ = execute!(io::stdout(), Show);
                    std::process::exit(0);
                }
            }
        }
    };

    info!("Conversation ended: {:?}", end);
    Ok(())
}

/// Runs on a blocking thread: every wait in here is synchronous
fn converse(
    config: &Config,
    utterance: Option<String>,
    language: &str,
    cancel: CancelToken,
) -> MarqueeResult<ConversationEnd> {
    let display = BannerDisplay::new(
        TrueTypeLoader::new(&config.font.path),
        TerminalSurface::stdout(),
        KeyboardButton::new(),
        cancel,
    );
    let mut display = display.with_settings(DisplaySettings::from(config));

    // A bad font is fatal at startup, not after the first utterance arrives
    display.preflight()?;

    match utterance {
        Some(text) => run_conversation(&mut OneShotSource::new(text), &mut display, language),
        None => run_conversation(&mut LineSource::new(io::stdin().lock()), &mut display, language),
    }
}

/// Installs a panic hook that shows the cursor again before printing the panic.
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(io::stdout(), Show);
        original_hook(panic_info);
    }));
}
