//! Headless demo: folds a net, applies pose changes and logs snapshots.
//!
//! Usage: `cubenet [options.toml] [request ...]` where each request is a
//! quarter turn (`xp`, `yn`, ...), an orientation key (`LB`), `canonical`
//! or `random`. Run with `RUST_LOG=info` to see the output.

use std::path::Path;

use cubenet::options::Options;
use cubenet::session::{CubeCommand, CubeSession, RotationRequest};

const DT: f32 = 1.0 / 60.0;

/// Ticks of autoplay to run: one full unfold/fold cycle at default speed.
const AUTOPLAY_TICKS: usize = 600;

fn log_snapshot(session: &CubeSession, label: &str) {
    match serde_json::to_string(&session.snapshot()) {
        Ok(json) => log::info!("{label}: {json}"),
        Err(e) => log::error!("{label}: snapshot failed: {e}"),
    }
}

fn run(args: &[String]) -> Result<(), cubenet::CubeNetError> {
    let (options, requests) = match args.split_first() {
        Some((first, rest)) if first.ends_with(".toml") => {
            (Options::load(Path::new(first))?, rest)
        }
        _ => (Options::default(), args),
    };
    let requests = requests
        .iter()
        .map(|r| r.parse::<RotationRequest>())
        .collect::<Result<Vec<_>, _>>()?;

    let mut session = CubeSession::from_options(&options)?;
    log::info!(
        "net {} from base cell {}:\n{}",
        session.net_name().unwrap_or("?"),
        session.base_index(),
        session.grid()
    );
    log_snapshot(&session, "initial");

    session.set_autoplay(true);
    for i in 0..AUTOPLAY_TICKS {
        session.tick(DT);
        if i % 150 == 0 {
            log::info!(
                "progress {:>5.1} ({})",
                session.fold().progress(),
                session.fold().mode().label()
            );
        }
    }
    session.set_autoplay(false);
    session.set_progress(100.0);

    for request in requests {
        let outcome = session.execute(CubeCommand::Rotate { request })?;
        log::info!("{request:?}: {outcome:?}");
        while session.pose().is_transitioning() {
            session.tick(DT);
        }
        log_snapshot(&session, &format!("after {request:?}"));
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = run(&args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
