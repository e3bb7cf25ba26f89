//! Terminal battle-menu entry point.
mod config;
mod demo;
mod event_loop;
mod host;
mod input;
mod state;
mod terminal;
mod theme;
mod ui;
mod widgets;

use anyhow::Result;
use config::CliConfig;
use demo::ActionBindings;
use event_loop::EventLoop;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::from_env();
    let tree = demo::demo_tree()?;
    let actions = ActionBindings::demo(&tree);

    let (mut terminal, _guard) = terminal::init()?;
    EventLoop::new(tree, actions, config).run(&mut terminal).await
}
