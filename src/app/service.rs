//! Application service — the hexagonal core.
//!
//! [`LabService`] owns every piece of mutable lab state (selected
//! circuit, clock history, flip-flop, counter, timer phase).  There are
//! no globals: one service instance is driven by one polling loop, and
//! all I/O flows through port traits injected at call sites.
//!
//! ```text
//!   BoardPort ──▶ ┌──────────────────────────┐ ──▶ EventSink
//!                 │        LabService         │
//! ConsolePort ◀──▶│  select · evaluate · latch│
//!                 └──────────────────────────┘
//! ```
//!
//! One [`tick`](LabService::tick):
//!
//! 1. sample the eight inputs
//! 2. handle at most one buffered console line
//! 3. sample the clock line (edge computed once, history always updated)
//! 4. evaluate the selected circuit via its catalog [`Behaviour`]

use log::{debug, info, warn};

use crate::config::SystemConfig;
use crate::error::CircuitError;
use crate::logic::circuit::{Behaviour, Category, Circuit};
use crate::logic::edge::EdgeDetector;
use crate::logic::sequential::latch;
use crate::logic::timer::AstableTimer;
use crate::logic::InputVector;

use super::commands::{Command, to_command_line};
use super::events::{AppEvent, StatusSnapshot};
use super::ports::{BoardPort, ConsolePort, EventSink};

pub const BANNER: &str = "Digital Logic Lab Simulator Initialized";
pub const INVALID_COMMAND: &str = "Invalid command. Type 'menu' for options.";

/// Counter value shown on outputs 0..COUNTER_BITS.
const COUNTER_BITS: usize = 4;

// ───────────────────────────────────────────────────────────────
// LabState
// ───────────────────────────────────────────────────────────────

/// Mutable lab state.  Only the selected circuit's part is live; the
/// rest sits inert until the next switch or reset clears it.
#[derive(Debug, Clone, Copy)]
struct LabState {
    selection: Circuit,
    clock: EdgeDetector,
    flip_flop: bool,
    counter: u8,
    timer: AstableTimer,
}

// ───────────────────────────────────────────────────────────────
// LabService
// ───────────────────────────────────────────────────────────────

pub struct LabService {
    config: SystemConfig,
    state: LabState,
    cycles: u64,
}

impl LabService {
    /// Construct the service from configuration.
    ///
    /// Does **not** touch the board — call [`start`](Self::start) next.
    pub fn new(config: SystemConfig) -> Self {
        let state = LabState {
            selection: config.initial_circuit,
            clock: EdgeDetector::new(),
            flip_flop: false,
            counter: 0,
            timer: AstableTimer::new(config.timer_period_ms),
        };
        Self {
            config,
            state,
            cycles: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Print the banner and menu, then clear the board.
    pub fn start(
        &mut self,
        board: &mut impl BoardPort,
        console: &mut impl ConsolePort,
        now_ms: u64,
        sink: &mut impl EventSink,
    ) {
        console.write_line(BANNER);
        self.print_menu(console);
        self.clear(board, now_ms);
        sink.emit(&AppEvent::Started(self.state.selection));
        info!("LabService started with {}", self.state.selection);
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// Run one polling cycle.
    pub fn tick(
        &mut self,
        board: &mut impl BoardPort,
        console: &mut impl ConsolePort,
        now_ms: u64,
        sink: &mut impl EventSink,
    ) {
        self.cycles += 1;

        // 1. Inputs
        let inputs = board.read_inputs();

        // 2. Console (at most one line per cycle). Rejections are
        //    already reported to the console inside handle_line.
        if let Some(line) = console.poll_line() {
            if let Err(e) = self.handle_line(&line, board, console, now_ms, sink) {
                debug!("Console line '{}' not applied: {}", line, e);
            }
        }

        // 3. Clock history
        let edge = self.state.clock.sample(board.read_clock());

        // 4. Evaluate
        self.evaluate(&inputs, edge, board, console, now_ms, sink);
    }

    fn evaluate(
        &mut self,
        inputs: &InputVector,
        edge: bool,
        board: &mut impl BoardPort,
        console: &mut impl ConsolePort,
        now_ms: u64,
        sink: &mut impl EventSink,
    ) {
        match self.state.selection.behaviour() {
            Behaviour::Gate(gate) => {
                let level = gate(inputs.level(0), inputs.level(1));
                board.write_output(0, level);
                if self.config.report_gate_output {
                    console.write_line(if level { "Output: HIGH" } else { "Output: LOW" });
                }
            }

            Behaviour::Combinational { eval, width } => {
                write_bits(board, eval(inputs), width);
            }

            Behaviour::FlipFlop(next) => {
                let reset = board.read_reset();
                self.state.flip_flop =
                    latch(self.state.flip_flop, edge, reset, false, |s| next(s, inputs));
                board.write_output(0, self.state.flip_flop);
            }

            Behaviour::Timer => {
                if self.state.timer.poll(now_ms) {
                    let level = !board.output_level(0);
                    board.write_output(0, level);
                    sink.emit(&AppEvent::TimerToggled(level));
                }
            }

            Behaviour::Counter(step) => {
                let reset = board.read_reset();
                self.state.counter = latch(self.state.counter, edge, reset, 0, step);
                write_bits(board, self.state.counter, COUNTER_BITS);
            }

            Behaviour::Decoder(decode) => {
                board.write_segments(decode(inputs));
            }
        }
    }

    // ── Command handling ──────────────────────────────────────

    /// Process one console line: keyword or circuit name.
    ///
    /// On an unknown name the selection is left alone, the invalid-command
    /// notice is printed, and `Err(InvalidName)` is returned.
    pub fn handle_line(
        &mut self,
        raw: &str,
        board: &mut impl BoardPort,
        console: &mut impl ConsolePort,
        now_ms: u64,
        sink: &mut impl EventSink,
    ) -> Result<(), CircuitError> {
        let line = raw.trim();
        if line.is_empty() {
            return Ok(());
        }

        match Command::parse(line) {
            Ok(Command::Menu) => self.print_menu(console),
            Ok(Command::Reset) => self.reset(board, now_ms, sink),
            Ok(Command::Status) => self.print_status(board, console),
            Ok(Command::Select(circuit)) => self.switch_to(circuit, board, console, now_ms, sink),
            Err(e) => {
                self.reject(line, console, sink);
                return Err(e);
            }
        }
        Ok(())
    }

    /// Validate `name` against the catalog and switch to it.
    pub fn select(
        &mut self,
        name: &str,
        board: &mut impl BoardPort,
        console: &mut impl ConsolePort,
        now_ms: u64,
        sink: &mut impl EventSink,
    ) -> Result<(), CircuitError> {
        let Some(circuit) = Circuit::from_name(name) else {
            self.reject(name, console, sink);
            return Err(CircuitError::InvalidName);
        };
        self.switch_to(circuit, board, console, now_ms, sink);
        Ok(())
    }

    /// Make `circuit` active, announce it, and run a full reset.
    pub fn switch_to(
        &mut self,
        circuit: Circuit,
        board: &mut impl BoardPort,
        console: &mut impl ConsolePort,
        now_ms: u64,
        sink: &mut impl EventSink,
    ) {
        let from = self.state.selection;
        self.state.selection = circuit;

        let mut msg = String::from("Circuit set to: ");
        msg.push_str(circuit.name());
        console.write_line(&msg);

        sink.emit(&AppEvent::CircuitSelected { from, to: circuit });
        info!("Circuit: {} -> {}", from, circuit);

        self.reset(board, now_ms, sink);
    }

    /// Full reset without changing the selection.
    pub fn reset(&mut self, board: &mut impl BoardPort, now_ms: u64, sink: &mut impl EventSink) {
        self.clear(board, now_ms);
        sink.emit(&AppEvent::StateReset(self.state.selection));
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn selection(&self) -> Circuit {
        self.state.selection
    }

    pub fn flip_flop(&self) -> bool {
        self.state.flip_flop
    }

    pub fn counter_value(&self) -> u8 {
        self.state.counter
    }

    /// Timestamp the astable timer last toggled (or was restarted).
    pub fn timer_phase_ms(&self) -> u64 {
        self.state.timer.last_toggle_ms()
    }

    /// Polling cycles executed since construction.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Snapshot for the `status` command.
    pub fn status(&self, board: &mut impl BoardPort) -> StatusSnapshot {
        let selection = self.state.selection;
        StatusSnapshot {
            circuit: selection.name(),
            category: selection.category().label(),
            flip_flop: self.state.flip_flop,
            counter: self.state.counter,
            clock: self.state.clock.previous(),
            mode: board.read_mode(),
            cycles: self.cycles,
        }
    }

    // ── Internal ──────────────────────────────────────────────

    fn clear(&mut self, board: &mut impl BoardPort, now_ms: u64) {
        board.clear_all();
        self.state.flip_flop = false;
        self.state.counter = 0;
        self.state.timer.restart(now_ms);
        debug!("State cleared at {} ms", now_ms);
    }

    fn reject(&self, line: &str, console: &mut impl ConsolePort, sink: &mut impl EventSink) {
        warn!("Rejected console command '{}'", line);
        console.write_line(INVALID_COMMAND);
        sink.emit(&AppEvent::InvalidCommand(to_command_line(line)));
    }

    fn print_menu(&self, console: &mut impl ConsolePort) {
        console.write_line("");
        console.write_line("==== Digital Logic Lab Simulator ====");
        console.write_line("Available Circuits:");
        for category in Category::ALL {
            let names: Vec<&str> = Circuit::in_category(category).map(Circuit::name).collect();
            console.write_line(&format!("{}: {}", category.label(), names.join(", ")));
        }
        console.write_line("");
        console.write_line("Commands: 'menu', 'reset', 'status', or circuit name");
        console.write_line("=====================================");
    }

    fn print_status(&self, board: &mut impl BoardPort, console: &mut impl ConsolePort) {
        match serde_json::to_string(&self.status(board)) {
            Ok(json) => console.write_line(&json),
            Err(e) => warn!("Status serialisation failed: {}", e),
        }
    }
}

/// Drive outputs `0..width` from the low bits of `bits`.
fn write_bits(board: &mut impl BoardPort, bits: u8, width: usize) {
    for i in 0..width {
        board.write_output(i, (bits >> i) & 1 == 1);
    }
}
