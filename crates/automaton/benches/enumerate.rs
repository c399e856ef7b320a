use std::hint::black_box;

use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;
use rand::rngs::StdRng;
use rand::SeedableRng;

use dfarust_automaton::generate_words;
use dfarust_automaton::is_accepted;
use dfarust_automaton::random_dfa;

pub fn criterion_benchmark_generate_words(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);

    for (num_of_states, num_of_symbols, max_length) in [(10, 2, 12), (50, 3, 8), (100, 4, 6)] {
        let dfa = random_dfa(&mut rng, num_of_states, num_of_symbols, 0.9);

        c.bench_function(
            &format!("generate_words {num_of_states}x{num_of_symbols} up to {max_length}"),
            |bencher| {
                bencher.iter(|| {
                    let _ = black_box(generate_words(&dfa, max_length));
                })
            },
        );
    }
}

pub fn criterion_benchmark_is_accepted(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let dfa = random_dfa(&mut rng, 100, 2, 1.0);
    let word: Vec<&str> = ["a", "b", "b", "a"].iter().copied().cycle().take(10_000).collect();

    c.bench_function("is_accepted 10000 symbols", |bencher| {
        bencher.iter(|| black_box(is_accepted(&dfa, &word[..])))
    });
}

criterion_group!(
    benches,
    criterion_benchmark_generate_words,
    criterion_benchmark_is_accepted,
);
criterion_main!(benches);
