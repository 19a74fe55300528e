//! Interactive crack-time simulator.

use std::process::ExitCode;

use crack_sim::{Simulator, install_interrupt_handler, spawn_stdin_reader};
use tokio_util::sync::CancellationToken;

#[cfg(feature = "tracing")]
fn init_tracing() {
    use std::io::IsTerminal;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    #[cfg(feature = "tracing")]
    init_tracing();

    let token = CancellationToken::new();
    if let Err(_e) = install_interrupt_handler(token.clone()) {
        #[cfg(feature = "tracing")]
        tracing::warn!("Ctrl-C handler unavailable: {}", _e);
    }

    let mut lines = spawn_stdin_reader();
    let mut simulator = Simulator::new(std::io::stdout());

    let result = match simulator.write_banner() {
        Ok(()) => simulator.run(&mut lines, token).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            #[cfg(feature = "tracing")]
            tracing::error!("Simulator failed: {}", e);
            #[cfg(not(feature = "tracing"))]
            eprintln!("crack-sim: {}", e);
            ExitCode::FAILURE
        }
    }
}
