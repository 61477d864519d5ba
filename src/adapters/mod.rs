//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter         | Implements   | Connects to                      |
//! |-----------------|--------------|----------------------------------|
//! | `pin_bank`      | BoardPort    | any embedded-hal digital pins    |
//! | `hardware`      | —            | ESP32 GPIO → `PinBank`           |
//! | `sim`           | —            | simulated lines → `PinBank`      |
//! | `console`       | ConsolePort  | stdin / stdout (UART on target)  |
//! | `sim_console`   | ConsolePort  | host line-flipping decorator     |
//! | `time`          | TimePort     | ESP32 system timer / `Instant`   |
//! | `log_sink`      | EventSink    | `log` facade                     |

pub mod console;
#[cfg(target_os = "espidf")]
pub mod hardware;
pub mod log_sink;
pub mod pin_bank;
pub mod sim;
#[cfg(not(target_os = "espidf"))]
pub mod sim_console;
pub mod time;
