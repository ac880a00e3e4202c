use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dx_core::{catalog, SymptomVector, SYMPTOM_COUNT};
use dx_score::{diagnose, diagnose_vector};

fn inputs() -> Vec<[f64; SYMPTOM_COUNT]> {
    (0..64u32)
        .map(|seed| {
            let mut values = [0.0; SYMPTOM_COUNT];
            for (slot, value) in values.iter_mut().enumerate() {
                *value = ((seed as usize * 7 + slot * 3) % 11) as f64 / 10.0;
            }
            values
        })
        .collect()
}

fn bench_diagnose(c: &mut Criterion) {
    let inputs = inputs();
    c.bench_function("diagnose_slice", |b| {
        b.iter(|| {
            for values in &inputs {
                let _ = diagnose(black_box(values)).unwrap();
            }
        })
    });

    let vectors: Vec<_> = inputs.iter().copied().map(SymptomVector::new).collect();
    c.bench_function("diagnose_vector", |b| {
        b.iter(|| {
            for vector in &vectors {
                let _ = diagnose_vector(black_box(vector), catalog());
            }
        })
    });
}

criterion_group!(benches, bench_diagnose);
criterion_main!(benches);
