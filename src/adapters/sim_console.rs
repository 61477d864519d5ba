//! Console decorator for the host simulator.
//!
//! Intercepts a few extra words that flip simulated lines, so the lab can
//! be exercised from a terminal without hardware.  Everything else is
//! passed through untouched to the [`LabService`](crate::app::service::LabService).
//!
//! | Command          | Effect                          |
//! |------------------|---------------------------------|
//! | `in <0-7> <0|1>` | set switch input                |
//! | `clk <0|1>`      | set clock line                  |
//! | `rst <0|1>`      | set reset line (0 = asserted)   |
//! | `mode <0|1>`     | set mode line                   |
//! | `show`           | print output and segment levels |

use super::sim::SimProbes;
use crate::app::commands::CommandLine;
use crate::app::ports::ConsolePort;
use crate::pins::INPUT_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SimCommand {
    Input(usize, bool),
    Clock(bool),
    Reset(bool),
    Mode(bool),
    Show,
}

/// `None` if `line` is not a simulator word at all.
fn parse(line: &str) -> Option<Result<SimCommand, &'static str>> {
    let mut words = line.split_whitespace();
    let head = words.next()?;
    let level = |w: Option<&str>| match w {
        Some("0") => Ok(false),
        Some("1") => Ok(true),
        _ => Err("level must be 0 or 1"),
    };
    let cmd = match head {
        "in" => {
            let index = words
                .next()
                .and_then(|w| w.parse::<usize>().ok())
                .filter(|i| *i < INPUT_COUNT)
                .ok_or("usage: in <0-7> <0|1>");
            index.and_then(|i| level(words.next()).map(|l| SimCommand::Input(i, l)))
        }
        "clk" => level(words.next()).map(SimCommand::Clock),
        "rst" => level(words.next()).map(SimCommand::Reset),
        "mode" => level(words.next()).map(SimCommand::Mode),
        "show" => Ok(SimCommand::Show),
        _ => return None,
    };
    Some(cmd)
}

pub struct SimConsole<C> {
    inner: C,
    probes: SimProbes,
}

impl<C: ConsolePort> SimConsole<C> {
    pub fn new(inner: C, probes: SimProbes) -> Self {
        Self { inner, probes }
    }

    fn apply(&mut self, cmd: SimCommand) {
        match cmd {
            SimCommand::Input(i, level) => self.probes.inputs[i].set(level),
            SimCommand::Clock(level) => self.probes.clock.set(level),
            SimCommand::Reset(level) => self.probes.reset.set(level),
            SimCommand::Mode(level) => self.probes.mode.set(level),
            SimCommand::Show => {
                let line = format!(
                    "out=0b{:08b} seg=0b{:07b}",
                    self.probes.output_bits(),
                    self.probes.segment_pattern()
                );
                self.inner.write_line(&line);
            }
        }
    }
}

impl<C: ConsolePort> ConsolePort for SimConsole<C> {
    fn poll_line(&mut self) -> Option<CommandLine> {
        let line = self.inner.poll_line()?;
        match parse(line.trim()) {
            None => Some(line),
            Some(Ok(cmd)) => {
                self.apply(cmd);
                None
            }
            Some(Err(usage)) => {
                self.inner.write_line(usage);
                None
            }
        }
    }

    fn write_line(&mut self, line: &str) {
        self.inner.write_line(line);
    }
}
