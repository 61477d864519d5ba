//! Serial console adapter.
//!
//! A background thread blocks on stdin (UART0 / USB-CDC through the
//! ESP-IDF VFS on target, the terminal on the host) and forwards each
//! complete line over a channel.  The polling loop only ever calls
//! [`ConsolePort::poll_line`], which is a non-blocking `try_recv`, so the
//! lab state itself stays single-threaded.

use std::io::{BufRead, ErrorKind};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use log::{info, warn};

use crate::app::commands::{CommandLine, to_command_line};
use crate::app::ports::ConsolePort;

const READER_STACK_KB: usize = 6;

/// Back-off after a read that produced nothing (non-blocking VFS, errors).
const READ_RETRY: Duration = Duration::from_millis(20);

pub struct StdioConsole {
    rx: Receiver<CommandLine>,
    _reader: JoinHandle<()>,
}

impl StdioConsole {
    /// Start the stdin reader thread.
    pub fn spawn() -> std::io::Result<Self> {
        let (tx, rx) = mpsc::channel();

        let reader = std::thread::Builder::new()
            .name("console-rx".into())
            .stack_size(READER_STACK_KB * 1024)
            .spawn(move || {
                forward_lines(std::io::stdin().lock(), &tx);
                info!("console reader stopped");
            })?;

        Ok(Self {
            rx,
            _reader: reader,
        })
    }
}

/// Send every line of `reader` to `tx` until EOF or the receiver is gone.
///
/// Bytes that are not UTF-8 are replaced, so a garbled line still reaches
/// the lab (and is rejected there).  Read errors never end the loop.
fn forward_lines(mut reader: impl BufRead, tx: &Sender<CommandLine>) {
    let mut buf = Vec::new();
    loop {
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) if buf.is_empty() => return,
            Ok(_) => {
                let text = String::from_utf8_lossy(&buf);
                let line = to_command_line(text.trim_end_matches(['\r', '\n']));
                buf.clear();
                if tx.send(line).is_err() {
                    return;
                }
            }
            // Partial bytes stay in `buf` until the line completes.
            Err(e) if matches!(e.kind(), ErrorKind::Interrupted | ErrorKind::WouldBlock) => {
                std::thread::sleep(READ_RETRY);
            }
            Err(e) => {
                warn!("console read failed: {}", e);
                std::thread::sleep(READ_RETRY);
            }
        }
    }
}

impl ConsolePort for StdioConsole {
    fn poll_line(&mut self) -> Option<CommandLine> {
        self.rx.try_recv().ok()
    }

    fn write_line(&mut self, line: &str) {
        println!("{line}");
    }
}
