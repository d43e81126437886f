// Benchmarks for the shared LRU cache: single-caller mixed access with a
// skewed key distribution, and multi-thread throughput on one instance.
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use lru_kv::LruKvCache;
use std::sync::Arc;
use std::thread;

const CACHE_SIZE: usize = 1_000;
const NUM_OPERATIONS: usize = 10_000;
const THREADS: usize = 4;
const OPS_PER_THREAD: usize = 2_500;

// Simple linear congruential generator for reproducible benchmarks
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(1103515245).wrapping_add(12345) & 0x7fffffff;
        self.state
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() as f64) / (0x7fffffff_u64 as f64)
    }
}

// Helper function to generate Zipf-like distribution
fn zipf_sample(n: usize, skew: f64) -> Vec<usize> {
    let mut rng = SimpleRng::new(42);

    let mut norm: f64 = 0.0;
    for i in 1..=n {
        norm += 1.0 / (i as f64).powf(skew);
    }

    let mut samples = Vec::with_capacity(NUM_OPERATIONS);
    for _ in 0..NUM_OPERATIONS {
        let u: f64 = rng.next_f64();
        let mut sum: f64 = 0.0;
        let mut sample: usize = 1;

        while sample <= n {
            sum += 1.0 / (sample as f64).powf(skew) / norm;
            if sum >= u {
                break;
            }
            sample += 1;
        }

        samples.push(sample.saturating_sub(1) % n);
    }

    samples
}

fn benchmark_mixed_access(c: &mut Criterion) {
    let samples = zipf_sample(CACHE_SIZE * 2, 0.8);
    let keys: Vec<String> = (0..CACHE_SIZE * 2).map(|i| format!("key_{}", i)).collect();

    let mut group = c.benchmark_group("LRU KV Mixed Access");
    group.throughput(Throughput::Elements(NUM_OPERATIONS as u64));

    group.bench_function("set-heavy", |b| {
        b.iter(|| {
            let cache = LruKvCache::new(CACHE_SIZE).unwrap();
            for &idx in &samples {
                cache.set(&keys[idx], "payload").unwrap();
            }
            black_box(cache.len())
        })
    });

    group.bench_function("get-heavy", |b| {
        let cache = LruKvCache::new(CACHE_SIZE).unwrap();
        for &idx in samples.iter().take(CACHE_SIZE) {
            cache.set(&keys[idx], "payload").unwrap();
        }
        b.iter(|| {
            let mut hits = 0usize;
            for &idx in &samples {
                if cache.get(&keys[idx]).is_some() {
                    hits += 1;
                }
            }
            black_box(hits)
        })
    });

    group.finish();
}

fn benchmark_shared_instance(c: &mut Criterion) {
    let mut group = c.benchmark_group("LRU KV Shared Instance");
    group.throughput(Throughput::Elements((THREADS * OPS_PER_THREAD) as u64));

    group.bench_function("4 threads mixed", |b| {
        b.iter(|| {
            let cache = Arc::new(LruKvCache::new(CACHE_SIZE).unwrap());
            let handles: Vec<_> = (0..THREADS)
                .map(|t| {
                    let cache = Arc::clone(&cache);
                    thread::spawn(move || {
                        for i in 0..OPS_PER_THREAD {
                            let key = format!("key_{}", (t * 31 + i) % CACHE_SIZE);
                            if i % 2 == 0 {
                                cache.set(&key, "payload").unwrap();
                            } else {
                                black_box(cache.get(&key));
                            }
                        }
                    })
                })
                .collect();
            for handle in handles {
                handle.join().unwrap();
            }
            black_box(cache.len())
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_mixed_access, benchmark_shared_instance);
criterion_main!(benches);
