//! Benchmarks for statevector evolution and shot sampling.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qembed_ir::{Circuit, QubitId};
use qembed_sim::{SimulatorConfig, StatevectorSimulator};

fn layered_circuit(n: u32) -> Circuit {
    let mut circuit = Circuit::with_size("layered", n, n).unwrap();
    for q in 0..n {
        circuit.h(QubitId(q)).unwrap();
        circuit.ry(0.3 * f64::from(q + 1), QubitId(q)).unwrap();
    }
    circuit.cx_chain().unwrap();
    for q in 0..n {
        circuit.rz(0.7, QubitId(q)).unwrap();
    }
    circuit.measure_all().unwrap();
    circuit
}

fn bench_statevector(c: &mut Criterion) {
    let mut group = c.benchmark_group("statevector");
    let sim = StatevectorSimulator::new();

    for n in [4, 8, 12, 16] {
        let circuit = layered_circuit(n);
        group.bench_with_input(BenchmarkId::new("evolve", n), &circuit, |b, circuit| {
            b.iter(|| sim.statevector(black_box(circuit)).unwrap());
        });
    }

    group.finish();
}

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling");
    let circuit = layered_circuit(8);

    for shots in [1_000u32, 10_000, 100_000] {
        let sim = StatevectorSimulator::with_config(SimulatorConfig::new().with_seed(1)).unwrap();
        group.bench_with_input(BenchmarkId::new("run", shots), &shots, |b, &shots| {
            b.iter(|| sim.run(black_box(&circuit), shots).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_statevector, bench_sampling);
criterion_main!(benches);
