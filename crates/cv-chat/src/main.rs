//! CareVoice chat: text-to-intent REPL for the healthcare assistant.
//!
//! Usage: `cv-chat [--scenarios] [config.toml]`

use std::io;

use tracing_subscriber::EnvFilter;

use cv_chat::config::ChatConfig;
use cv_chat::scenarios::run_scenarios;
use cv_chat::session::ChatSession;

fn main() -> anyhow::Result<()> {
    let mut scenarios = false;
    let mut config_path = None;
    for arg in std::env::args().skip(1) {
        if arg == "--scenarios" {
            scenarios = true;
        } else {
            config_path = Some(arg);
        }
    }

    let config = match &config_path {
        Some(path) => ChatConfig::from_file(path)?,
        None => ChatConfig::default(),
    };

    // Logs go to stderr at warn unless RUST_LOG says otherwise.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if config.log_json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = config_path.as_deref().unwrap_or("<defaults>"),
        "cv-chat starting"
    );

    let session = ChatSession::from_config(&config)?;

    if scenarios {
        run_scenarios(&session, &mut io::stdout().lock())?;
        return Ok(());
    }

    println!("\n{}", "▓".repeat(60));
    println!("  CAREVOICE ➜ Text-to-Intent REPL");
    println!("  Type a command and press Enter.");
    println!("  Type 'quit' or 'exit' to stop.");
    println!("{}\n", "▓".repeat(60));

    println!("  Loading zero-shot model …");
    match session.warm_up() {
        Ok(()) => println!("  Ready!\n"),
        Err(e) => println!("  Model unavailable ({e:#}), using keywords only.\n"),
    }

    session.run_repl(io::stdin().lock(), &mut io::stdout().lock())?;
    Ok(())
}
