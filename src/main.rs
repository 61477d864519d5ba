//! LogicLab Firmware — Main Entry Point
//!
//! Hexagonal architecture driven by a single cooperative polling loop.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  PinBank           StdioConsole   MonotonicClock  LogEventSink │
//! │  (BoardPort)       (ConsolePort)  (TimePort)      (EventSink)  │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              LabService (pure logic)                   │    │
//! │  │  catalog · edge detect · latch · timer                 │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! On ESP32 the board is real GPIO; on the host it is simulated and the
//! console additionally accepts `in`/`clk`/`rst`/`mode`/`show`.

#![deny(unused_must_use)]

use std::time::Duration;

use anyhow::Result;
use log::info;

use logiclab::adapters::console::StdioConsole;
use logiclab::adapters::log_sink::LogEventSink;
use logiclab::adapters::time::MonotonicClock;
use logiclab::app::ports::TimePort;
use logiclab::app::service::LabService;
use logiclab::config::SystemConfig;

fn main() -> Result<()> {
    // ── 1. Bootstrap ──────────────────────────────────────────
    #[cfg(target_os = "espidf")]
    {
        esp_idf_svc::sys::link_patches();
        esp_idf_logger::init()?;
    }
    #[cfg(not(target_os = "espidf"))]
    init_host_logging();

    info!("LogicLab v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration ──────────────────────────────────────
    let config = load_config()?;
    info!(
        "Config: poll={}ms timer={}ms initial='{}'",
        config.poll_interval_ms, config.timer_period_ms, config.initial_circuit
    );

    // ── 3. Board + console ────────────────────────────────────
    #[cfg(target_os = "espidf")]
    let (mut board, mut console) = (
        logiclab::adapters::hardware::take_board()?,
        StdioConsole::spawn()?,
    );

    #[cfg(not(target_os = "espidf"))]
    let (mut board, mut console) = {
        use logiclab::adapters::sim::SimBoard;
        use logiclab::adapters::sim_console::SimConsole;

        let (board, probes) = SimBoard::build();
        (board, SimConsole::new(StdioConsole::spawn()?, probes))
    };

    let clock = MonotonicClock::new();
    let mut sink = LogEventSink::new();

    // ── 4. Lab service ────────────────────────────────────────
    let delay = Duration::from_millis(u64::from(config.poll_interval_ms));
    let mut app = LabService::new(config);
    app.start(&mut board, &mut console, clock.now_ms(), &mut sink);

    info!("System ready. Entering polling loop.");

    // ── 5. Polling loop ───────────────────────────────────────
    loop {
        app.tick(&mut board, &mut console, clock.now_ms(), &mut sink);
        std::thread::sleep(delay);
    }
}

/// Host: `log` records go to stderr through `tracing-subscriber`, so
/// stdout carries only the console.  Filter from `LOGICLAB_LOG`.
#[cfg(not(target_os = "espidf"))]
fn init_host_logging() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_env("LOGICLAB_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Host: optional JSON file named by the first argument.  Target: defaults.
#[cfg(not(target_os = "espidf"))]
fn load_config() -> Result<SystemConfig> {
    use anyhow::Context;

    let Some(path) = std::env::args().nth(1) else {
        return Ok(SystemConfig::default());
    };
    let json = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let config = SystemConfig::from_json(&json).with_context(|| format!("loading {path}"))?;
    info!("Config loaded from {}", path);
    Ok(config)
}

#[cfg(target_os = "espidf")]
fn load_config() -> Result<SystemConfig> {
    Ok(SystemConfig::default())
}
