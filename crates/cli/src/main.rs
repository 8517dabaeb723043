//! Terminal client entry point.
mod app;
mod config;
mod device;
mod message;
mod terminal;
mod ui;

use anyhow::Result;
use app::Game;
use config::CliConfig;
use hunt_content::PawnCatalog;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::from_env();
    let mut game = Game::new(config, &PawnCatalog::builtin());

    let mut terminal = terminal::init()?;
    let _guard = terminal::TerminalGuard;
    let mut device = device::CrosstermDevice::new();

    game.run(&mut device, &mut terminal)
}
