//! Wastedris runner (default binary).
//!
//! The main thread owns the terminal mode and reads keys; the engine's
//! gravity thread applies gravity; both draw through the session's renderer.

use anyhow::Result;
use log::{info, warn};

use wastedris::config::AppConfig;
use wastedris::engine::{drive, Engine};
use wastedris::input::TerminalInput;
use wastedris::term::TerminalRenderer;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    config.init_logging()?;

    // Restore the terminal even when a thread panics.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = TerminalRenderer::new().exit();
        default_hook(info);
    }));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&config);

    // Always try to restore terminal state.
    if let Err(e) = term.exit() {
        warn!("terminal restore failed: {:#}", e);
    }
    result
}

fn run(config: &AppConfig) -> Result<()> {
    let mut engine = Engine::new();
    let session = engine.start(config.session_options(), Box::new(TerminalRenderer::new()))?;

    // Once the game ends on its own the reader is still blocked on a key,
    // which doubles as the "press any key" wait.
    let status = drive(session, &mut TerminalInput::new())?;
    info!(
        "session ended: {:?} ({:?})",
        status,
        session.stop_cause()
    );

    engine.stop()?;
    Ok(())
}
