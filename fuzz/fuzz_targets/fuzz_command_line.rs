//! Fuzz target: console line handling
//!
//! Drives arbitrary text through the command parser and the full
//! `LabService::handle_line` path on a simulated board.  Asserts that
//! nothing panics, that stored lines never exceed the console capacity,
//! and that a rejected line leaves the selection untouched.
//!
//! cargo fuzz run fuzz_command_line

#![no_main]

use libfuzzer_sys::fuzz_target;
use logiclab::adapters::sim::SimBoard;
use logiclab::app::commands::{CONSOLE_LINE_MAX, Command, to_command_line};
use logiclab::app::events::AppEvent;
use logiclab::app::ports::{ConsolePort, EventSink};
use logiclab::app::service::LabService;
use logiclab::config::SystemConfig;

struct NullConsole;

impl ConsolePort for NullConsole {
    fn poll_line(&mut self) -> Option<logiclab::app::commands::CommandLine> {
        None
    }

    fn write_line(&mut self, _line: &str) {}
}

struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &AppEvent) {}
}

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    let line = to_command_line(&text);
    assert!(line.len() <= CONSOLE_LINE_MAX);
    assert!(text.starts_with(line.as_str()));

    let _ = Command::parse(text.trim());

    let (mut board, _probes) = SimBoard::build();
    let mut app = LabService::new(SystemConfig::default());
    let mut console = NullConsole;
    let mut sink = NullSink;
    app.start(&mut board, &mut console, 0, &mut sink);

    let before = app.selection();
    if app
        .handle_line(line.as_str(), &mut board, &mut console, 0, &mut sink)
        .is_err()
    {
        assert_eq!(app.selection(), before, "rejected line changed selection");
    }
});
