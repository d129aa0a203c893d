//! qembed Local Statevector Simulator
//!
//! Executes [`qembed_ir::Circuit`]s exactly on a dense statevector and
//! samples measurement outcomes over many shots.
//!
//! # Features
//!
//! - **Exact Evolution**: Full statevector, one pass per run regardless of shots
//! - **Born-rule Sampling**: Weighted draws from `|amplitude|²`
//! - **Parallel Shots**: Large runs are split into independently seeded chunks
//!   sampled on the rayon pool and merged by addition
//! - **Self-checking**: Normalization is verified after every gate
//!
//! # Performance
//!
//! | Qubits | Memory | Simulation Speed |
//! |--------|--------|------------------|
//! | 4 | 256 B | Instant |
//! | 10 | ~16 KB | Instant |
//! | 20 | ~16 MB | Moderate |
//! | 25+ | ~512 MB+ | Not recommended |
//!
//! # Example
//!
//! ```rust
//! use qembed_ir::Circuit;
//! use qembed_sim::{SimulatorConfig, StatevectorSimulator};
//!
//! let sim = StatevectorSimulator::with_config(SimulatorConfig::new().with_seed(7)).unwrap();
//! let counts = sim.run(&Circuit::bell().unwrap(), 1000).unwrap();
//!
//! // Expect ~50% |00⟩ and ~50% |11⟩
//! assert_eq!(counts.get("00") + counts.get("11"), 1000);
//! ```

pub mod config;
pub mod counts;
pub mod error;
pub mod simulator;
pub mod statevector;

pub use config::SimulatorConfig;
pub use counts::Counts;
pub use error::{SimError, SimResult};
pub use simulator::StatevectorSimulator;
pub use statevector::{NORM_TOLERANCE, Statevector};
