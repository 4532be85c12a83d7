//! fnv1a benchmark harness
//! Compares FNV-1a against SHA-256 on bulk data and on batches of short keys

use clap::Parser;
use fnv1a::{Fnv1a32, Fnv1a64, Transform};
use rayon::prelude::*;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

#[derive(Parser, Debug)]
#[command(name = "bench", about = "FNV-1a throughput benchmark")]
struct BenchConfig {
    /// Hash this file instead of generated data
    #[arg(long)]
    file: Option<PathBuf>,

    /// Generated data size in bytes
    #[arg(long, default_value_t = 100_000_000)]
    size: usize,

    /// Key length for the batch runs
    #[arg(long, default_value_t = 32)]
    key_len: usize,

    /// Worker threads for the parallel batch run
    #[arg(long, default_value_t = 8)]
    threads: usize,

    #[arg(long, default_value_t = 3)]
    repeat: usize,

    /// Results file, appended to
    #[arg(long, default_value = "bench_results.csv")]
    csv: PathBuf,
}

struct BenchResult {
    algorithm: String,
    threads: usize,
    size: usize,
    mb_per_sec: f64,
    digest_hex: String,
}

fn load_or_generate_data(config: &BenchConfig) -> Vec<u8> {
    if let Some(path) = &config.file {
        println!("📂 Loading file: {}", path.display());
        let mut file = File::open(path).expect("Failed to open file");
        let mut data = Vec::new();
        file.read_to_end(&mut data).expect("Failed to read file");
        println!("   Loaded {} bytes ({:.2} MB)", data.len(), data.len() as f64 / 1_000_000.0);
        data
    } else {
        println!("🎲 Generating random data: {} bytes ({} MB)", config.size, config.size / 1_000_000);
        // LCG fill, printable ASCII so the case-folding runs have letters to fold
        let mut data = vec![0u8; config.size];
        let mut rng_state = 0x123456789abcdef0u64;
        for byte in data.iter_mut() {
            rng_state = rng_state.wrapping_mul(6364136223846793005).wrapping_add(1);
            *byte = b' ' + ((rng_state >> 33) % 95) as u8;
        }
        data
    }
}

fn throughput(bytes: usize, start: Instant) -> f64 {
    (bytes as f64 / 1_000_000.0) / start.elapsed().as_secs_f64()
}

fn bench_sha256(data: &[u8]) -> (f64, String) {
    let start = Instant::now();
    let result = Sha256::digest(data);
    let mb_per_sec = throughput(data.len(), start);
    (mb_per_sec, hex::encode(&result[..8]))
}

fn bench_fnv1a32(data: &[u8]) -> (f64, String) {
    let start = Instant::now();
    let result = Fnv1a32::hash_u8(data, Transform::Identity);
    let mb_per_sec = throughput(data.len(), start);
    (mb_per_sec, hex::encode(result.to_be_bytes()))
}

fn bench_fnv1a64(data: &[u8], transform: Transform) -> (f64, String) {
    let start = Instant::now();
    let result = Fnv1a64::hash_u8(data, transform);
    let mb_per_sec = throughput(data.len(), start);
    (mb_per_sec, hex::encode(result.to_be_bytes()))
}

/// Hashes every key-sized slice on its own and folds the results, so the
/// digest is stable whatever the thread count.
fn bench_keys(data: &[u8], key_len: usize, pool: Option<&rayon::ThreadPool>) -> (f64, String) {
    let start = Instant::now();
    let combine = |keys: &[u8]| {
        keys.chunks(key_len)
            .map(|key| Fnv1a64::hash_u8(key, Transform::Identity))
            .fold(0u64, |acc, h| acc ^ h)
    };
    let result = match pool {
        Some(pool) => pool.install(|| {
            data.par_chunks(key_len * 4096)
                .map(combine)
                .reduce(|| 0u64, |a, b| a ^ b)
        }),
        None => combine(data),
    };
    let mb_per_sec = throughput(data.len(), start);
    (mb_per_sec, hex::encode(result.to_be_bytes()))
}

fn median(mut speeds: Vec<f64>) -> f64 {
    speeds.sort_by(|a, b| a.total_cmp(b));
    speeds[speeds.len() / 2]
}

fn run_series(
    label: &str,
    threads: usize,
    config: &BenchConfig,
    data: &[u8],
    results: &mut Vec<BenchResult>,
    mut run: impl FnMut() -> (f64, String),
) -> f64 {
    println!("📊 Running {}...", label);
    let mut speeds = Vec::with_capacity(config.repeat);
    for i in 0..config.repeat {
        print!("   Run {}/{}: ", i + 1, config.repeat);
        std::io::stdout().flush().expect("Failed to flush stdout");
        let (speed, digest) = run();
        speeds.push(speed);
        println!("{:.2} MB/s (digest: {})", speed, digest);
        if i == 0 {
            results.push(BenchResult {
                algorithm: label.to_string(),
                threads,
                size: data.len(),
                mb_per_sec: speed,
                digest_hex: digest,
            });
        }
    }
    let med = median(speeds);
    println!("   Median: {:.2} MB/s\n", med);
    med
}

fn run_benchmark(config: &BenchConfig, data: &[u8]) -> Vec<BenchResult> {
    let mut results = Vec::new();

    println!("\n🔥 BENCHMARK CONFIGURATION");
    println!("   Data size: {} bytes ({:.2} MB)", data.len(), data.len() as f64 / 1_000_000.0);
    println!("   Key length: {} bytes", config.key_len);
    println!("   Threads: {}", config.threads);
    println!("   Repeats: {}", config.repeat);
    println!();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
        .expect("Failed to build thread pool");

    print!("🔧 Warming up... ");
    std::io::stdout().flush().expect("Failed to flush stdout");
    let _ = bench_sha256(data);
    let _ = bench_fnv1a64(data, Transform::Identity);
    println!("done\n");

    let sha_median = run_series("SHA-256", 1, config, data, &mut results, || bench_sha256(data));
    let m = run_series("FNV-1a 32", 1, config, data, &mut results, || bench_fnv1a32(data));
    println!("   {:.2}x SHA-256\n", m / sha_median);
    let m = run_series("FNV-1a 64", 1, config, data, &mut results, || {
        bench_fnv1a64(data, Transform::Identity)
    });
    println!("   {:.2}x SHA-256\n", m / sha_median);
    let m = run_series("FNV-1a 64 lower", 1, config, data, &mut results, || {
        bench_fnv1a64(data, Transform::AsciiLower)
    });
    println!("   {:.2}x SHA-256\n", m / sha_median);
    let m = run_series("FNV-1a 64 keys", 1, config, data, &mut results, || {
        bench_keys(data, config.key_len, None)
    });
    println!("   {:.2}x SHA-256\n", m / sha_median);
    let m = run_series("FNV-1a 64 keys MT", config.threads, config, data, &mut results, || {
        bench_keys(data, config.key_len, Some(&pool))
    });
    println!("   {:.2}x SHA-256\n", m / sha_median);

    results
}

fn print_results_table(results: &[BenchResult]) {
    println!("\n╔═════════════════════════════════════════════════════════════════════╗");
    println!("║                          BENCHMARK RESULTS                          ║");
    println!("╠═════════════════════════════════════════════════════════════════════╣");
    println!("║ Algorithm         │ Threads │    MB/s │ Speedup │ Digest            ║");
    println!("╠═════════════════════════════════════════════════════════════════════╣");

    let baseline = results[0].mb_per_sec;
    for result in results {
        let speedup = result.mb_per_sec / baseline;
        println!("║ {:17} │ {:7} │ {:7.2} │ {:6.2}x │ {:17} ║",
                 result.algorithm,
                 result.threads,
                 result.mb_per_sec,
                 speedup,
                 result.digest_hex);
    }

    println!("╚═════════════════════════════════════════════════════════════════════╝\n");
}

fn append_to_csv(path: &Path, results: &[BenchResult]) {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("System clock before UNIX epoch")
        .as_secs();

    let file_exists = path.exists();
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .expect("Failed to open CSV file");

    if !file_exists {
        writeln!(file, "algorithm,threads,size,mb_s,digest,timestamp")
            .expect("Failed to write CSV header");
    }

    for result in results {
        writeln!(file, "{},{},{},{:.2},{},{}",
                 result.algorithm,
                 result.threads,
                 result.size,
                 result.mb_per_sec,
                 result.digest_hex,
                 timestamp)
            .expect("Failed to write CSV row");
    }

    println!("✅ Results appended to {}", path.display());
}

fn main() {
    println!("\n╔═══════════════════════════════════════════════════════════╗");
    println!("║                        FNV1A v0.1                         ║");
    println!("║                  FNV-1a Hash Benchmark                    ║");
    println!("║                                                           ║");
    println!("║  ⚠️  NOT CRYPTOGRAPHICALLY SECURE ⚠️                        ║");
    println!("╚═══════════════════════════════════════════════════════════╝\n");

    let config = BenchConfig::parse();
    if config.key_len == 0 || config.threads == 0 || config.repeat == 0 {
        eprintln!("--key-len, --threads and --repeat must be at least 1");
        std::process::exit(1);
    }

    let data = load_or_generate_data(&config);
    let results = run_benchmark(&config, &data);

    print_results_table(&results);
    append_to_csv(&config.csv, &results);

    println!("\n🎉 Benchmark complete!");
}
