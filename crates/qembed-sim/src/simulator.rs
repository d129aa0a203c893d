//! Shot sampling over the final statevector.

use std::time::Instant;

use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use tracing::{debug, instrument};

use qembed_ir::{Circuit, InstructionKind};

use crate::config::SimulatorConfig;
use crate::counts::Counts;
use crate::error::{SimError, SimResult};
use crate::statevector::Statevector;

/// Shots drawn from one RNG stream. Chunk `k` is seeded with `seed + k`, so
/// a seeded run yields the same counts whether or not it runs in parallel.
const SHOTS_PER_CHUNK: u32 = 1024;

/// Classical bit layout derived from a circuit's measurements.
struct MeasurementMap {
    /// Qubit feeding each classical bit; unmeasured bits read `0`.
    sources: Vec<Option<usize>>,
}

impl MeasurementMap {
    /// Returns `None` when the circuit measures nothing.
    fn from_circuit(circuit: &Circuit) -> Option<Self> {
        let mut sources = vec![None; circuit.num_clbits()];
        let mut measured = false;
        for inst in circuit.instructions() {
            for (qubit, clbit) in inst.measured_pairs() {
                if let Some(slot) = sources.get_mut(clbit.index()) {
                    *slot = Some(qubit.index());
                    measured = true;
                }
            }
        }
        measured.then_some(Self { sources })
    }

    fn bitstring(&self, outcome: usize) -> String {
        self.sources
            .iter()
            .map(|source| match source {
                Some(q) if (outcome >> q) & 1 == 1 => '1',
                _ => '0',
            })
            .collect()
    }
}

fn merge_outcomes(
    mut acc: FxHashMap<usize, u64>,
    partial: FxHashMap<usize, u64>,
) -> FxHashMap<usize, u64> {
    for (outcome, n) in partial {
        *acc.entry(outcome).or_insert(0) += n;
    }
    acc
}

/// Local statevector simulator.
///
/// Evolves the circuit once, then draws every shot from the Born-rule
/// distribution of the final state. Measurements are treated as terminal.
#[derive(Debug, Clone, Default)]
pub struct StatevectorSimulator {
    config: SimulatorConfig,
}

impl StatevectorSimulator {
    /// Create a new simulator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a simulator from a validated configuration.
    pub fn with_config(config: SimulatorConfig) -> SimResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the active configuration.
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    fn check_size(&self, circuit: &Circuit) -> SimResult<()> {
        if circuit.num_qubits() > self.config.max_qubits as usize {
            return Err(SimError::CircuitTooLarge {
                num_qubits: circuit.num_qubits(),
                max_qubits: self.config.max_qubits,
            });
        }
        Ok(())
    }

    /// Evolve `|0...0⟩` through every gate of the circuit.
    ///
    /// Fails if a gate acts on a qubit after that qubit has been measured.
    #[instrument(skip(self, circuit), fields(circuit = circuit.name()))]
    pub fn statevector(&self, circuit: &Circuit) -> SimResult<Statevector> {
        self.check_size(circuit)?;

        let mut measured = vec![false; circuit.num_qubits()];
        let mut sv = Statevector::new(circuit.num_qubits())?;

        for inst in circuit.instructions() {
            match &inst.kind {
                InstructionKind::Gate(gate) => {
                    if let Some(&qubit) = inst
                        .qubits
                        .iter()
                        .find(|q| measured.get(q.index()).copied().unwrap_or(false))
                    {
                        return Err(SimError::MeasuredQubitReused {
                            qubit,
                            gate_name: gate.name(),
                        });
                    }
                }
                InstructionKind::Measure => {
                    for q in &inst.qubits {
                        if let Some(flag) = measured.get_mut(q.index()) {
                            *flag = true;
                        }
                    }
                }
            }
            sv.apply(inst)?;
        }

        debug!("Evolved {} instructions", circuit.num_ops());
        Ok(sv)
    }

    /// Run `shots` shots, seeded from the configuration or from entropy.
    pub fn run(&self, circuit: &Circuit, shots: u32) -> SimResult<Counts> {
        let seed = self
            .config
            .seed
            .unwrap_or_else(|| rand::thread_rng().r#gen());
        self.run_seeded(circuit, shots, seed)
    }

    /// Run the configured number of shots.
    pub fn run_configured(&self, circuit: &Circuit) -> SimResult<Counts> {
        self.run(circuit, self.config.shots)
    }

    /// Run `shots` shots with an explicit seed.
    ///
    /// Counts always sum to `shots`, except for a circuit without
    /// measurements, which yields an empty histogram. Gates are evolved
    /// either way, so engine errors are never skipped.
    #[instrument(skip(self, circuit), fields(circuit = circuit.name()))]
    pub fn run_seeded(&self, circuit: &Circuit, shots: u32, seed: u64) -> SimResult<Counts> {
        let start = Instant::now();

        if shots == 0 {
            return Err(SimError::InvalidShots(shots));
        }
        self.check_size(circuit)?;

        let sv = self.statevector(circuit)?;
        let Some(layout) = MeasurementMap::from_circuit(circuit) else {
            debug!("Circuit declares no measurements, returning empty counts");
            return Ok(Counts::new());
        };

        let dist = WeightedIndex::new(sv.probabilities())
            .map_err(|e| SimError::Sampling(e.to_string()))?;

        let num_chunks = shots.div_ceil(SHOTS_PER_CHUNK);
        let sample_chunk = |chunk: u32| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(u64::from(chunk)));
            let chunk_shots = SHOTS_PER_CHUNK.min(shots - chunk * SHOTS_PER_CHUNK);
            let mut partial = FxHashMap::default();
            for _ in 0..chunk_shots {
                *partial.entry(dist.sample(&mut rng)).or_insert(0) += 1;
            }
            partial
        };

        let outcomes = if shots >= self.config.parallel_threshold {
            debug!("Sampling {} shots across {} chunks in parallel", shots, num_chunks);
            (0..num_chunks)
                .into_par_iter()
                .map(sample_chunk)
                .reduce(FxHashMap::default, merge_outcomes)
        } else {
            (0..num_chunks)
                .map(sample_chunk)
                .fold(FxHashMap::default(), merge_outcomes)
        };

        let counts: Counts = outcomes
            .into_iter()
            .map(|(outcome, n)| (layout.bitstring(outcome), n))
            .collect();

        debug!(
            "Sampled {} shots into {} outcomes in {:?}",
            shots,
            counts.len(),
            start.elapsed()
        );
        Ok(counts)
    }
}
