//! Circuit catalog and dispatch table.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  CATALOG (indexed by Circuit as usize)                          │
//! │  ┌──────────────┬──────────────────┬─────────────┬─────────────┐ │
//! │  │ Circuit      │ name             │ category    │ behaviour   │ │
//! │  ├──────────────┼──────────────────┼─────────────┼─────────────┤ │
//! │  │ And          │ "AND"            │ BasicGate   │ Gate(fn)    │ │
//! │  │ HalfAdder    │ "Half Adder"     │ Combin.     │ Comb{fn,w}  │ │
//! │  │ JkFlipFlop   │ "JK Flip-Flop"   │ Sequential  │ FlipFlop(fn)│ │
//! │  │ UpCounter    │ "Binary Up ..."  │ Counter     │ Counter(fn) │ │
//! │  │ ...          │                  │             │             │ │
//! │  └──────────────┴──────────────────┴─────────────┴─────────────┘ │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Console names are matched exactly (case-sensitive) against `name`.

use serde::{Deserialize, Serialize};

use super::InputVector;
use super::{gates, sequential};

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// Every circuit the lab can emulate.
/// Must stay in sync with [`CATALOG`] (same order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Circuit {
    #[serde(rename = "AND")]
    And = 0,
    #[serde(rename = "OR")]
    Or = 1,
    #[serde(rename = "NOT")]
    Not = 2,
    #[serde(rename = "NAND")]
    Nand = 3,
    #[serde(rename = "NOR")]
    Nor = 4,
    #[serde(rename = "XOR")]
    Xor = 5,
    #[serde(rename = "XNOR")]
    Xnor = 6,
    #[serde(rename = "Half Adder")]
    HalfAdder = 7,
    #[serde(rename = "Full Adder")]
    FullAdder = 8,
    #[serde(rename = "Multiplexer (MUX)")]
    Multiplexer = 9,
    #[serde(rename = "D Flip-Flop")]
    DFlipFlop = 10,
    #[serde(rename = "JK Flip-Flop")]
    JkFlipFlop = 11,
    #[serde(rename = "Astable Multivibrator")]
    Astable = 12,
    #[serde(rename = "Binary Up Counter")]
    UpCounter = 13,
    #[serde(rename = "Binary Down Counter")]
    DownCounter = 14,
    #[serde(rename = "BCD Decoder with 7-Segment Display")]
    BcdDecoder = 15,
}

impl Circuit {
    pub const COUNT: usize = 16;

    /// Exact, case-sensitive lookup by console name.
    pub fn from_name(name: &str) -> Option<Self> {
        CATALOG.iter().find(|d| d.name == name).map(|d| d.id)
    }

    pub fn descriptor(self) -> &'static CircuitDescriptor {
        &CATALOG[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    pub fn category(self) -> Category {
        self.descriptor().category
    }

    pub fn behaviour(self) -> Behaviour {
        self.descriptor().behaviour
    }

    /// Circuits in `category`, catalog order.
    pub fn in_category(category: Category) -> impl Iterator<Item = Circuit> {
        CATALOG
            .iter()
            .filter(move |d| d.category == category)
            .map(|d| d.id)
    }
}

impl core::fmt::Display for Circuit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Processing family a circuit belongs to.  Drives menu grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    BasicGate,
    Combinational,
    Sequential,
    Timer,
    Counter,
    Decoder,
}

impl Category {
    /// Menu order.
    pub const ALL: [Category; 6] = [
        Self::BasicGate,
        Self::Combinational,
        Self::Sequential,
        Self::Timer,
        Self::Counter,
        Self::Decoder,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::BasicGate => "Basic Gates",
            Self::Combinational => "Combinational",
            Self::Sequential => "Sequential",
            Self::Timer => "Timers",
            Self::Counter => "Counters",
            Self::Decoder => "Decoders",
        }
    }
}

// ---------------------------------------------------------------------------
// Behaviour (tagged function pointers)
// ---------------------------------------------------------------------------

/// Two-input gate: (A, B) → output 0.
pub type GateFn = fn(bool, bool) -> bool;
/// Stateless multi-output circuit: inputs → bitmask over outputs.
pub type CombinationalFn = fn(&InputVector) -> u8;
/// Flip-flop next-state on a rising edge.
pub type FlipFlopFn = fn(bool, &InputVector) -> bool;
/// Counter next-value on a rising edge.
pub type CounterFn = fn(u8) -> u8;
/// Inputs → seven-segment pattern.
pub type DecoderFn = fn(&InputVector) -> u8;

/// How the service evaluates a circuit each cycle.
#[derive(Clone, Copy)]
pub enum Behaviour {
    Gate(GateFn),
    Combinational { eval: CombinationalFn, width: usize },
    FlipFlop(FlipFlopFn),
    Timer,
    Counter(CounterFn),
    Decoder(DecoderFn),
}

impl core::fmt::Debug for Behaviour {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Gate(_) => write!(f, "Gate"),
            Self::Combinational { width, .. } => write!(f, "Combinational(width={width})"),
            Self::FlipFlop(_) => write!(f, "FlipFlop"),
            Self::Timer => write!(f, "Timer"),
            Self::Counter(_) => write!(f, "Counter"),
            Self::Decoder(_) => write!(f, "Decoder"),
        }
    }
}

/// One row of the dispatch table.
#[derive(Debug)]
pub struct CircuitDescriptor {
    pub id: Circuit,
    pub name: &'static str,
    pub category: Category,
    pub behaviour: Behaviour,
}

const fn row(
    id: Circuit,
    name: &'static str,
    category: Category,
    behaviour: Behaviour,
) -> CircuitDescriptor {
    CircuitDescriptor {
        id,
        name,
        category,
        behaviour,
    }
}

/// The fixed circuit catalog, indexed by `Circuit as usize`.
pub static CATALOG: [CircuitDescriptor; Circuit::COUNT] = [
    // ── Basic gates ──────────────────────────────────────────
    row(Circuit::And, "AND", Category::BasicGate, Behaviour::Gate(gates::and)),
    row(Circuit::Or, "OR", Category::BasicGate, Behaviour::Gate(gates::or)),
    row(Circuit::Not, "NOT", Category::BasicGate, Behaviour::Gate(gates::not)),
    row(Circuit::Nand, "NAND", Category::BasicGate, Behaviour::Gate(gates::nand)),
    row(Circuit::Nor, "NOR", Category::BasicGate, Behaviour::Gate(gates::nor)),
    row(Circuit::Xor, "XOR", Category::BasicGate, Behaviour::Gate(gates::xor)),
    row(Circuit::Xnor, "XNOR", Category::BasicGate, Behaviour::Gate(gates::xnor)),
    // ── Combinational ────────────────────────────────────────
    row(
        Circuit::HalfAdder,
        "Half Adder",
        Category::Combinational,
        Behaviour::Combinational { eval: gates::half_adder, width: 2 },
    ),
    row(
        Circuit::FullAdder,
        "Full Adder",
        Category::Combinational,
        Behaviour::Combinational { eval: gates::full_adder, width: 2 },
    ),
    row(
        Circuit::Multiplexer,
        "Multiplexer (MUX)",
        Category::Combinational,
        Behaviour::Combinational { eval: gates::mux4, width: 1 },
    ),
    // ── Sequential ───────────────────────────────────────────
    row(
        Circuit::DFlipFlop,
        "D Flip-Flop",
        Category::Sequential,
        Behaviour::FlipFlop(sequential::d_next),
    ),
    row(
        Circuit::JkFlipFlop,
        "JK Flip-Flop",
        Category::Sequential,
        Behaviour::FlipFlop(sequential::jk_from_inputs),
    ),
    // ── Timers ───────────────────────────────────────────────
    row(Circuit::Astable, "Astable Multivibrator", Category::Timer, Behaviour::Timer),
    // ── Counters ─────────────────────────────────────────────
    row(
        Circuit::UpCounter,
        "Binary Up Counter",
        Category::Counter,
        Behaviour::Counter(sequential::count_up),
    ),
    row(
        Circuit::DownCounter,
        "Binary Down Counter",
        Category::Counter,
        Behaviour::Counter(sequential::count_down),
    ),
    // ── Decoders ─────────────────────────────────────────────
    row(
        Circuit::BcdDecoder,
        "BCD Decoder with 7-Segment Display",
        Category::Decoder,
        Behaviour::Decoder(gates::bcd_to_segments),
    ),
];
