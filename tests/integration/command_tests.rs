//! Console command dispatch, end to end through `tick`.

use super::mock_hw::{CollectingSink, MockBoard, ScriptedConsole};

use logiclab::adapters::sim::SimBoard;
use logiclab::app::commands::to_command_line;
use logiclab::app::events::AppEvent;
use logiclab::app::service::{INVALID_COMMAND, LabService};
use logiclab::config::SystemConfig;
use logiclab::error::CircuitError;
use logiclab::logic::circuit::Circuit;

fn make_app() -> (LabService, MockBoard, ScriptedConsole, CollectingSink) {
    let mut app = LabService::new(SystemConfig::default());
    let mut board = MockBoard::new();
    let mut console = ScriptedConsole::new();
    let mut sink = CollectingSink::new();
    app.start(&mut board, &mut console, 0, &mut sink);
    (app, board, console, sink)
}

#[test]
fn unknown_command_is_rejected_without_side_effects() {
    let (mut app, mut board, mut console, mut sink) = make_app();
    console.type_line("XYZ");
    app.tick(&mut board, &mut console, 10, &mut sink);

    assert_eq!(app.selection(), Circuit::And);
    assert!(console.saw(INVALID_COMMAND));
    assert!(
        sink.events
            .contains(&AppEvent::InvalidCommand(to_command_line("XYZ")))
    );
}

#[test]
fn handle_line_reports_invalid_name() {
    let (mut app, mut board, mut console, mut sink) = make_app();
    let result = app.handle_line("Flux Capacitor", &mut board, &mut console, 0, &mut sink);
    assert_eq!(result, Err(CircuitError::InvalidName));
}

#[test]
fn circuit_name_is_trimmed_and_selected() {
    let (mut app, mut board, mut console, mut sink) = make_app();
    console.type_line("  Half Adder \r");
    app.tick(&mut board, &mut console, 10, &mut sink);
    assert_eq!(app.selection(), Circuit::HalfAdder);
    assert!(console.saw("Circuit set to: Half Adder"));
}

#[test]
fn names_are_case_sensitive() {
    let (mut app, mut board, mut console, mut sink) = make_app();
    console.type_line("half adder");
    app.tick(&mut board, &mut console, 10, &mut sink);
    assert_eq!(app.selection(), Circuit::And);
    assert!(console.saw(INVALID_COMMAND));
}

#[test]
fn one_line_per_cycle() {
    let (mut app, mut board, mut console, mut sink) = make_app();
    console.type_line("XOR");
    console.type_line("NOR");
    app.tick(&mut board, &mut console, 10, &mut sink);
    assert_eq!(app.selection(), Circuit::Xor);
    assert_eq!(console.pending.len(), 1);
    app.tick(&mut board, &mut console, 20, &mut sink);
    assert_eq!(app.selection(), Circuit::Nor);
}

#[test]
fn empty_line_is_ignored() {
    let (mut app, mut board, mut console, mut sink) = make_app();
    let printed = console.printed.len();
    let result = app.handle_line("   ", &mut board, &mut console, 0, &mut sink);
    assert!(result.is_ok());
    assert_eq!(console.printed.len(), printed);
}

#[test]
fn menu_reprints_catalog() {
    let (mut app, mut board, mut console, mut sink) = make_app();
    console.printed.clear();
    app.handle_line("menu", &mut board, &mut console, 0, &mut sink)
        .unwrap();
    assert!(console.saw("Combinational: Half Adder, Full Adder, Multiplexer (MUX)"));
    assert!(console.saw("Sequential: D Flip-Flop, JK Flip-Flop"));
    assert!(console.saw("Timers: Astable Multivibrator"));
    assert!(console.saw("Counters: Binary Up Counter, Binary Down Counter"));
}

#[test]
fn reset_keeps_selection_and_clears_state() {
    let (mut app, mut board, mut console, mut sink) = make_app();
    app.handle_line("Binary Up Counter", &mut board, &mut console, 0, &mut sink)
        .unwrap();
    board.clock = true;
    app.tick(&mut board, &mut console, 10, &mut sink);
    assert_eq!(app.counter_value(), 1);

    app.handle_line("reset", &mut board, &mut console, 500, &mut sink)
        .unwrap();
    assert_eq!(app.selection(), Circuit::UpCounter);
    assert_eq!(app.counter_value(), 0);
    assert_eq!(app.timer_phase_ms(), 500);
    assert_eq!(board.output_bits(), 0);
    assert_eq!(
        sink.events.last(),
        Some(&AppEvent::StateReset(Circuit::UpCounter))
    );
}

#[test]
fn status_prints_json_snapshot() {
    let (mut app, mut board, mut console, mut sink) = make_app();
    app.handle_line("JK Flip-Flop", &mut board, &mut console, 0, &mut sink)
        .unwrap();
    board.mode = true;
    app.handle_line("status", &mut board, &mut console, 0, &mut sink)
        .unwrap();

    let json: serde_json::Value = serde_json::from_str(console.last().unwrap()).unwrap();
    assert_eq!(json["circuit"], "JK Flip-Flop");
    assert_eq!(json["category"], "Sequential");
    assert_eq!(json["flip_flop"], false);
    assert_eq!(json["counter"], 0);
    assert_eq!(json["mode"], true);
}

#[test]
fn sim_board_runs_through_pin_bank() {
    let (mut board, probes) = SimBoard::build();
    let mut app = LabService::new(SystemConfig::default());
    let mut console = ScriptedConsole::new();
    let mut sink = CollectingSink::new();
    app.start(&mut board, &mut console, 0, &mut sink);

    console.type_line("Full Adder");
    probes.inputs[0].set(true);
    probes.inputs[2].set(true);
    app.tick(&mut board, &mut console, 10, &mut sink);
    // 1 + 0 + 1 = 0b10
    assert_eq!(probes.output_bits(), 0b10);

    console.type_line("BCD Decoder with 7-Segment Display");
    probes.inputs[2].set(false);
    probes.inputs[3].set(true);
    probes.inputs[1].set(true);
    app.tick(&mut board, &mut console, 20, &mut sink);
    // 0b1011 = 11 → clamped to 9
    assert_eq!(probes.segment_pattern(), 0b0110_1111);
}
