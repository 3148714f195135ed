mod autopilot;
mod map;

use anyhow::Result;
use mazewalk_engine::logging::{LoggingConfig, init_logging};
use mazewalk_engine::{MazeSession, WorldConfig};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = WorldConfig::from_env()?;
    let mut session = MazeSession::new(&config)?;

    println!();
    println!(
        "  mazewalk  {}x{}  seed {}",
        session.grid().width(),
        session.grid().height(),
        session.seed()
    );
    println!();
    print!("{}", map::render_map(&session));
    println!();

    let report = autopilot::collect_all(&mut session)?;

    log::info!(
        "walkthrough done: {} ticks, {} moving, {} blocked, exit {}",
        report.ticks,
        report.moved,
        report.blocked,
        if session.pickups().exit_open() { "open" } else { "closed" }
    );

    println!();
    print!("{}", map::render_map(&session));
    println!();
    Ok(())
}
