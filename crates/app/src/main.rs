//! Entry point for Sway3D.
//! Logging + CLI flags for demo selection and run length.

use anyhow::Result;
use platform::trace::{NullSink, TraceSink};
use platform::{DemoConfig, DemoKind};

fn parse_demo_arg() -> DemoKind {
    // Accept: --demo=building|bounce|sphere
    let mut demo = DemoKind::Building; // default
    for arg in std::env::args() {
        if let Some(val) = arg.strip_prefix("--demo=") {
            demo = match DemoKind::parse(val) {
                Some(kind) => kind,
                None => {
                    eprintln!("[warn] Unknown demo '{}', falling back to building.", val);
                    DemoKind::Building
                }
            };
        }
    }
    demo
}

fn parse_u32_arg(prefix: &str, default: u32) -> u32 {
    for arg in std::env::args() {
        if let Some(val) = arg.strip_prefix(prefix) {
            if let Ok(parsed) = val.parse::<u32>() {
                return parsed;
            }
            eprintln!("[warn] Bad value '{}' for {}, using {}.", val, prefix, default);
        }
    }
    default
}

fn parse_seed_arg() -> u64 {
    for arg in std::env::args() {
        if let Some(val) = arg.strip_prefix("--seed=") {
            if let Ok(parsed) = val.parse::<u64>() {
                return parsed;
            }
            eprintln!("[warn] Bad value '{}' for --seed=, using 0.", val);
        }
    }
    0
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let defaults = DemoConfig::default();
    let cfg = DemoConfig {
        demo: parse_demo_arg(),
        frames: parse_u32_arg("--frames=", defaults.frames),
        seed: parse_seed_arg(),
        press_every: parse_u32_arg("--press-every=", defaults.press_every),
        ..defaults
    };
    // 0 disables the per-frame trace.
    let trace_every = parse_u32_arg("--trace-every=", 60);

    log::info!(
        "Starting Sway3D. Demo: {}, frames={}, seed={}, press_every={}, trace_every={}",
        cfg.demo.name(),
        cfg.frames,
        cfg.seed,
        cfg.press_every,
        trace_every
    );

    let stats = if trace_every > 0 {
        let mut sink = TraceSink::new(trace_every);
        platform::run_demo(&cfg, &mut sink)?
    } else {
        let mut sink = NullSink;
        platform::run_demo(&cfg, &mut sink)?
    };

    log::info!(
        "Demo finished: {} frames, {} presses, final position {:?}",
        stats.frames_run,
        stats.presses,
        stats.final_position
    );
    log::info!("Graceful shutdown. Bye!");
    Ok(())
}
