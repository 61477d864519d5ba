//! Integration tests for the LabService → circuit → board pipeline.
//!
//! Every test drives whole polling cycles through `tick`, the same way
//! the firmware loop does.

use super::mock_hw::{BoardCall, CollectingSink, MockBoard, ScriptedConsole};

use logiclab::app::events::AppEvent;
use logiclab::app::service::LabService;
use logiclab::config::SystemConfig;
use logiclab::logic::circuit::Circuit;
use logiclab::logic::gates::SEGMENT_PATTERNS;

struct Rig {
    app: LabService,
    board: MockBoard,
    console: ScriptedConsole,
    sink: CollectingSink,
    now_ms: u64,
}

impl Rig {
    fn new() -> Self {
        let mut rig = Self {
            app: LabService::new(SystemConfig::default()),
            board: MockBoard::new(),
            console: ScriptedConsole::new(),
            sink: CollectingSink::new(),
            now_ms: 0,
        };
        rig.app
            .start(&mut rig.board, &mut rig.console, 0, &mut rig.sink);
        rig
    }

    fn with(circuit: &str) -> Self {
        let mut rig = Self::new();
        rig.app
            .select(circuit, &mut rig.board, &mut rig.console, rig.now_ms, &mut rig.sink)
            .expect("catalog circuit");
        rig
    }

    fn tick(&mut self) {
        self.now_ms += 10;
        self.app
            .tick(&mut self.board, &mut self.console, self.now_ms, &mut self.sink);
    }

    /// One full clock pulse: high cycle then low cycle.
    fn pulse(&mut self) {
        self.board.clock = true;
        self.tick();
        self.board.clock = false;
        self.tick();
    }
}

// ── Startup ───────────────────────────────────────────────────

#[test]
fn start_prints_banner_and_menu_and_clears_board() {
    let rig = Rig::new();
    assert_eq!(rig.console.printed[0], "Digital Logic Lab Simulator Initialized");
    assert!(rig.console.saw("Basic Gates: AND, OR, NOT, NAND, NOR, XOR, XNOR"));
    assert!(rig.console.saw("Decoders: BCD Decoder with 7-Segment Display"));
    assert_eq!(rig.board.calls, vec![BoardCall::ClearAll]);
    assert_eq!(rig.sink.events, vec![AppEvent::Started(Circuit::And)]);
    assert_eq!(rig.app.selection(), Circuit::And);
}

// ── Basic gates ───────────────────────────────────────────────

#[test]
fn and_gate_follows_inputs() {
    let mut rig = Rig::with("AND");
    rig.board.set_inputs(0b11);
    rig.tick();
    assert!(rig.board.outputs[0]);
    assert_eq!(rig.console.last(), Some("Output: HIGH"));

    rig.board.set_inputs(0b01);
    rig.tick();
    assert!(!rig.board.outputs[0]);
    assert_eq!(rig.console.last(), Some("Output: LOW"));
}

#[test]
fn not_gate_ignores_input_b() {
    let mut rig = Rig::with("NOT");
    rig.board.set_inputs(0b10);
    rig.tick();
    assert!(rig.board.outputs[0]);
}

#[test]
fn gate_reporting_can_be_disabled() {
    let config = SystemConfig {
        report_gate_output: false,
        ..Default::default()
    };
    let mut app = LabService::new(config);
    let mut board = MockBoard::new();
    let mut console = ScriptedConsole::new();
    let mut sink = CollectingSink::new();
    app.start(&mut board, &mut console, 0, &mut sink);
    let printed = console.printed.len();

    board.set_inputs(0b11);
    app.tick(&mut board, &mut console, 10, &mut sink);
    assert!(board.outputs[0]);
    assert_eq!(console.printed.len(), printed);
}

// ── Combinational ─────────────────────────────────────────────

#[test]
fn full_adder_three_ones() {
    let mut rig = Rig::with("Full Adder");
    rig.board.set_inputs(0b111);
    rig.tick();
    assert!(rig.board.outputs[0], "sum");
    assert!(rig.board.outputs[1], "carry");
}

#[test]
fn half_adder_one_plus_zero() {
    let mut rig = Rig::with("Half Adder");
    rig.board.set_inputs(0b01);
    rig.tick();
    assert_eq!(rig.board.output_bits(), 0b01);
}

#[test]
fn multiplexer_selects_d_line() {
    let mut rig = Rig::with("Multiplexer (MUX)");
    // S1=1 S0=1, D (input 4) high, every other data line low.
    rig.board.set_inputs(0b0001_1100);
    rig.tick();
    assert!(rig.board.outputs[0]);
}

// ── Sequential ────────────────────────────────────────────────

#[test]
fn d_flip_flop_latches_on_rising_edge_only() {
    let mut rig = Rig::with("D Flip-Flop");
    rig.board.set_inputs(0b1);
    rig.tick();
    assert!(!rig.app.flip_flop(), "no edge yet");

    rig.pulse();
    assert!(rig.app.flip_flop());
    assert!(rig.board.outputs[0]);

    // D drops while clock idles: latched value holds.
    rig.board.set_inputs(0b0);
    rig.tick();
    rig.tick();
    assert!(rig.app.flip_flop());
    assert!(rig.board.outputs[0]);
}

#[test]
fn jk_flip_flop_toggles_each_edge() {
    let mut rig = Rig::with("JK Flip-Flop");
    rig.board.set_inputs(0b11);
    rig.pulse();
    assert!(rig.app.flip_flop());
    rig.pulse();
    assert!(!rig.app.flip_flop());
    rig.pulse();
    assert!(rig.app.flip_flop());
}

#[test]
fn held_clock_is_a_single_edge() {
    let mut rig = Rig::with("JK Flip-Flop");
    rig.board.set_inputs(0b11);
    rig.board.clock = true;
    for _ in 0..5 {
        rig.tick();
    }
    assert!(rig.app.flip_flop());
}

#[test]
fn flip_flop_output_refreshes_without_edges() {
    let mut rig = Rig::with("D Flip-Flop");
    rig.board.set_inputs(0b1);
    rig.pulse();
    assert!(rig.app.flip_flop());

    rig.board.outputs = [false; 8];
    rig.tick();
    assert!(rig.board.outputs[0]);
}

#[test]
fn reset_dominates_flip_flop_edge() {
    let mut rig = Rig::with("D Flip-Flop");
    rig.board.set_inputs(0b1);
    rig.pulse();
    assert!(rig.app.flip_flop());

    rig.board.reset = false;
    rig.board.clock = true;
    rig.tick();
    assert!(!rig.app.flip_flop());
    assert!(!rig.board.outputs[0]);
}

// ── Counters ──────────────────────────────────────────────────

#[test]
fn up_counter_wraps_after_sixteen() {
    let mut rig = Rig::with("Binary Up Counter");
    for _ in 0..17 {
        rig.pulse();
    }
    assert_eq!(rig.app.counter_value(), 1);
    assert_eq!(rig.board.output_bits(), 0b0001);
}

#[test]
fn down_counter_wraps_below_zero() {
    let mut rig = Rig::with("Binary Down Counter");
    rig.pulse();
    assert_eq!(rig.app.counter_value(), 15);
    assert_eq!(rig.board.output_bits(), 0b1111);
}

#[test]
fn counter_outputs_refresh_without_edges() {
    let mut rig = Rig::with("Binary Up Counter");
    rig.pulse();
    rig.pulse();
    rig.pulse();
    rig.board.outputs = [false; 8];
    rig.tick();
    assert_eq!(rig.board.output_bits(), 0b0011);
}

#[test]
fn counter_reset_is_active_low_and_dominant() {
    let mut rig = Rig::with("Binary Up Counter");
    for _ in 0..5 {
        rig.pulse();
    }
    rig.board.reset = false;
    rig.pulse();
    assert_eq!(rig.app.counter_value(), 0);
    assert_eq!(rig.board.output_bits(), 0);

    rig.board.reset = true;
    rig.pulse();
    assert_eq!(rig.app.counter_value(), 1);
}

#[test]
fn switching_into_counter_with_clock_high_is_not_an_edge() {
    let mut rig = Rig::with("AND");
    rig.board.clock = true;
    rig.tick();
    rig.app
        .select("Binary Up Counter", &mut rig.board, &mut rig.console, rig.now_ms, &mut rig.sink)
        .unwrap();
    rig.tick();
    assert_eq!(rig.app.counter_value(), 0);
}

// ── Decoder ───────────────────────────────────────────────────

#[test]
fn bcd_decoder_clamps_twelve_to_nine() {
    let mut rig = Rig::with("BCD Decoder with 7-Segment Display");
    rig.board.set_inputs(12);
    rig.tick();
    assert_eq!(rig.board.segments, 0b0110_1111);
}

#[test]
fn bcd_decoder_shows_each_digit() {
    let mut rig = Rig::with("BCD Decoder with 7-Segment Display");
    for digit in 0u8..10 {
        rig.board.set_inputs(digit);
        rig.tick();
        assert_eq!(rig.board.segments, SEGMENT_PATTERNS[usize::from(digit)]);
    }
}

// ── Timer ─────────────────────────────────────────────────────

#[test]
fn astable_toggles_once_per_period() {
    let mut rig = Rig::with("Astable Multivibrator");
    // 99 cycles × 10 ms = 990 ms: not yet.
    for _ in 0..99 {
        rig.tick();
    }
    assert!(!rig.board.outputs[0]);
    rig.tick();
    assert!(rig.board.outputs[0]);
    for _ in 0..100 {
        rig.tick();
    }
    assert!(!rig.board.outputs[0]);
    assert!(rig.sink.events.contains(&AppEvent::TimerToggled(true)));
    assert!(rig.sink.events.contains(&AppEvent::TimerToggled(false)));
}

#[test]
fn astable_ignores_clock_and_reset() {
    let mut rig = Rig::with("Astable Multivibrator");
    rig.board.reset = false;
    for _ in 0..50 {
        rig.pulse();
    }
    assert!(rig.board.outputs[0]);
}

// ── Selection & reset ─────────────────────────────────────────

#[test]
fn switching_circuit_clears_state_and_outputs() {
    let mut rig = Rig::with("Binary Up Counter");
    for _ in 0..3 {
        rig.pulse();
    }
    rig.app
        .select("D Flip-Flop", &mut rig.board, &mut rig.console, rig.now_ms, &mut rig.sink)
        .unwrap();
    assert_eq!(rig.app.counter_value(), 0);
    assert!(!rig.app.flip_flop());
    assert_eq!(rig.board.output_bits(), 0);
    assert_eq!(rig.board.calls.last(), Some(&BoardCall::ClearAll));
    assert_eq!(rig.app.timer_phase_ms(), rig.now_ms);
    assert_eq!(rig.console.last(), Some("Circuit set to: D Flip-Flop"));
    assert!(rig.sink.events.contains(&AppEvent::CircuitSelected {
        from: Circuit::UpCounter,
        to: Circuit::DFlipFlop,
    }));
}

#[test]
fn invalid_select_leaves_everything_alone() {
    let mut rig = Rig::with("Binary Up Counter");
    rig.pulse();
    let calls = rig.board.calls.len();

    let result = rig
        .app
        .select("XYZ", &mut rig.board, &mut rig.console, rig.now_ms, &mut rig.sink);
    assert!(result.is_err());
    assert_eq!(rig.app.selection(), Circuit::UpCounter);
    assert_eq!(rig.app.counter_value(), 1);
    assert_eq!(rig.board.calls.len(), calls);
    assert_eq!(
        rig.console.last(),
        Some("Invalid command. Type 'menu' for options.")
    );
}
