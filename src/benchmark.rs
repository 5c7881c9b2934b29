use std::error::Error;
use std::fmt;
use std::time::{Duration, Instant};

use log::{info, warn};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};
use sort_methods::sorters::*;
use sort_methods::Sorter;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct BenchConfig {
    warmup_iterations: u32,
    bench_iterations: u32,
    array_size: usize,
    /// Input size for the O(n²) sorts.
    quadratic_array_size: usize,
    seed_count: u64,
    bogo_max_len: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            warmup_iterations: 10,
            bench_iterations: 100,
            array_size: 10_000,
            quadratic_array_size: 1_000,
            seed_count: 200,
            bogo_max_len: 5,
        }
    }
}

impl BenchConfig {
    /// Reads the JSON file named by the first argument, if any.
    fn load() -> Result<Self, Box<dyn Error>> {
        match std::env::args().nth(1) {
            Some(path) => {
                let raw = std::fs::read_to_string(&path)?;
                let config = serde_json::from_str(&raw)?;
                info!("loaded config from {}", path);
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }
}

#[derive(Serialize)]
struct BenchmarkResult {
    name: String,
    ops_per_second: f64,
    avg_ns: f64,
    correct: bool,
}

#[derive(Serialize)]
struct FullResults {
    results: Vec<BenchmarkResult>,
    correctness: bool,
}

/// Demo element ordered by name only.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Player {
    name: String,
}

impl Player {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

fn comparison_sorters<T: Ord + Clone>() -> Vec<Box<dyn Sorter<T>>> {
    vec![
        Box::new(BubbleSort),
        Box::new(SelectionSort),
        Box::new(InsertionSort),
        Box::new(GnomeSort),
        Box::new(CocktailShakerSort),
        Box::new(ShellSort),
        Box::new(MergeSort),
        Box::new(QuickSort),
        Box::new(HeapSort),
        Box::new(AdaptiveMergeSort),
        Box::new(IntroSort),
        Box::new(BitonicSort),
    ]
}

fn render<T: fmt::Display>(data: &[T]) -> String {
    data.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn run_demo<T: fmt::Display>(sorter: &dyn Sorter<T>, data: &mut [T]) {
    info!("{}:", sorter.name());
    info!("Before: {}", render(data));
    match sorter.sort(data) {
        Ok(()) => info!("After : {}", render(data)),
        Err(err) => warn!("{}: SKIPPED ({})", sorter.name(), err),
    }
}

fn demo_type<T: Ord + Clone + fmt::Display>(title: &str, original: &[T], config: &BenchConfig) {
    info!("--- TESTING TYPE: {} ---", title);

    for sorter in comparison_sorters::<T>() {
        let mut data = original.to_vec();
        run_demo(sorter.as_ref(), &mut data);
    }

    if original.len() <= config.bogo_max_len {
        let mut data = original.to_vec();
        run_demo(&BogoSort, &mut data);
    } else {
        info!("bogo_sort: SKIPPED (list was too big)");
    }
}

fn demo_radix() {
    info!("--- TESTING RADIX SORT (integers only) ---");
    let nums: Vec<i32> = vec![170, 45, 75, 90, 2, 802, 2];

    let mut lsd = nums.clone();
    run_demo(&RadixSortLsd, &mut lsd[..]);

    let mut msd = nums;
    run_demo(&RadixSortMsd, &mut msd[..]);
}

fn generate_random_data(seed: u64, size: usize) -> Vec<u64> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    (0..size).map(|_| rng.gen_range(0..1_000_000_000)).collect()
}

fn is_sorted(data: &[u64]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

fn verify_sort(sorter: &dyn Sorter<u64>, seeds: &[u64], size: usize) -> bool {
    for &seed in seeds {
        let mut data = generate_random_data(seed, size);
        if sorter.sort(&mut data).is_err() || !is_sorted(&data) {
            return false;
        }
    }

    // Edge cases
    let mut empty: Vec<u64> = vec![];
    if sorter.sort(&mut empty).is_err() {
        return false;
    }

    let mut single = vec![42u64];
    if sorter.sort(&mut single).is_err() {
        return false;
    }

    let mut two = vec![5u64, 3u64];
    sorter.sort(&mut two).is_ok() && two == vec![3u64, 5u64]
}

fn benchmark_sorter(
    sorter: &dyn Sorter<u64>,
    seeds: &[u64],
    size: usize,
    config: &BenchConfig,
) -> BenchmarkResult {
    // Verify correctness first
    let correct = verify_sort(sorter, &seeds[..seeds.len().min(5)], size);

    if !correct {
        warn!("{} failed verification", sorter.name());
        return BenchmarkResult {
            name: sorter.name().to_string(),
            ops_per_second: 0.0,
            avg_ns: f64::INFINITY,
            correct: false,
        };
    }

    // Warmup
    for &seed in seeds.iter().take(config.warmup_iterations as usize) {
        let mut data = generate_random_data(seed, size);
        let result = sorter.sort(&mut data);
        debug_assert!(result.is_ok());
    }

    // Benchmark
    let mut total_time = Duration::ZERO;
    let mut iterations = 0u32;

    for &seed in seeds.iter().cycle().take(config.bench_iterations as usize) {
        let mut data = generate_random_data(seed, size);

        let start = Instant::now();
        let result = std::hint::black_box(sorter.sort(&mut data));
        total_time += start.elapsed();
        debug_assert!(result.is_ok());
        iterations += 1;
    }

    let avg_ns = total_time.as_nanos() as f64 / iterations.max(1) as f64;
    let ops_per_second = 1_000_000_000.0 / avg_ns;
    info!("{}: {} elements, {:.0} ns/sort", sorter.name(), size, avg_ns);

    BenchmarkResult {
        name: sorter.name().to_string(),
        ops_per_second,
        avg_ns,
        correct,
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = BenchConfig::load()?;

    info!("===== TESTING ALGORITHMS =====");
    demo_type("INT", &[5, 3, 9, 1, 4, 7, 2, 6], &config);
    demo_type("STRING", &["Juan", "Ana", "Pedro", "Luis"], &config);
    demo_type(
        "PLAYER",
        &[
            Player::new("Carlos"),
            Player::new("Ana"),
            Player::new("Daniel"),
            Player::new("Beatriz"),
        ],
        &config,
    );
    demo_radix();
    info!("===== TESTING COMPLETE =====");

    // Generate seeds for reproducible benchmarks
    let seeds: Vec<u64> = (0..config.seed_count.max(1)).map(|i| 12345 + i * 7).collect();

    let quadratic: Vec<Box<dyn Sorter<u64>>> = vec![
        Box::new(BubbleSort),
        Box::new(SelectionSort),
        Box::new(InsertionSort),
        Box::new(GnomeSort),
        Box::new(CocktailShakerSort),
        Box::new(ShellSort),
    ];
    let fast: Vec<Box<dyn Sorter<u64>>> = vec![
        Box::new(HeapSort),
        Box::new(MergeSort),
        Box::new(QuickSort),
        Box::new(AdaptiveMergeSort),
        Box::new(IntroSort),
        Box::new(RadixSortLsd),
        Box::new(RadixSortMsd),
    ];

    let mut results = Vec::new();
    let mut all_correct = true;

    let mut record = |result: BenchmarkResult| {
        all_correct &= result.correct;
        results.push(result);
    };

    for sorter in &quadratic {
        record(benchmark_sorter(sorter.as_ref(), &seeds, config.quadratic_array_size, &config));
    }
    for sorter in &fast {
        record(benchmark_sorter(sorter.as_ref(), &seeds, config.array_size, &config));
    }
    // Bitonic needs a power-of-two length
    record(benchmark_sorter(
        &BitonicSort,
        &seeds,
        config.array_size.next_power_of_two(),
        &config,
    ));
    info!("bogo_sort: not benchmarked");

    let full_results = FullResults {
        results,
        correctness: all_correct,
    };

    println!("{}", serde_json::to_string(&full_results)?);
    Ok(())
}
