use std::io::{self, BufRead};
use std::process;
use std::time::Duration;

use clap::Parser;
use pinbuf_bench::report::format_ns;
use pinbuf_bench::{run_with, AccessPattern, BenchConfig, Measurement};

/// Command-line arguments for the `pinbuf-bench` binary
#[derive(Parser, Debug)]
#[command(
    name = "pinbuf-bench",
    about = "Compare checked and unchecked u32 buffer access",
    version
)]
struct Cli {
    /// Buffer sizes in elements, comma-separated (default: 64 .. 16777216)
    #[arg(long, value_delimiter = ',')]
    sizes: Vec<usize>,
    /// Access patterns, comma-separated: sequential-read, random-read, random-write
    #[arg(long, value_delimiter = ',')]
    patterns: Vec<AccessPattern>,
    /// Recorded samples per measurement
    #[arg(long, default_value_t = 20)]
    samples: u32,
    /// Discarded warm-up samples per measurement
    #[arg(long, default_value_t = 3)]
    warmup: u32,
    /// Minimum duration of one sample, in milliseconds
    #[arg(long, default_value_t = 10)]
    sample_time_ms: u64,
    /// Seed for the random-read fill and shuffle
    #[arg(long, default_value_t = BenchConfig::DEFAULT_SEED)]
    read_seed: u64,
    /// Seed for the random-write shuffle
    #[arg(long, default_value_t = BenchConfig::DEFAULT_SEED)]
    write_seed: u64,
    /// Exit as soon as the report is printed
    #[arg(long)]
    no_wait: bool,
}

impl Cli {
    fn config(&self) -> BenchConfig {
        let defaults = BenchConfig::default();
        BenchConfig {
            sizes: if self.sizes.is_empty() {
                defaults.sizes
            } else {
                self.sizes.clone()
            },
            patterns: if self.patterns.is_empty() {
                defaults.patterns
            } else {
                self.patterns.clone()
            },
            warmup_samples: self.warmup,
            samples: self.samples,
            target_sample_time: Duration::from_millis(self.sample_time_ms),
            read_seed: self.read_seed,
            write_seed: self.write_seed,
        }
    }
}

fn progress(m: &Measurement) {
    eprintln!(
        "pinbuf-bench: {:<15} size={:<9} {:<9} mean={:>12} ({} iters/sample)",
        m.pattern.name(),
        m.size,
        m.kind.name(),
        format_ns(m.summary.mean_ns),
        m.iterations,
    );
}

fn wait_for_enter() {
    eprintln!("Press Enter to exit...");
    let mut line = String::new();
    // EOF or a closed stdin just ends the wait.
    let _ = io::stdin().lock().read_line(&mut line);
}

/// Entry point: parse arguments, run the matrix, print the report
fn main() {
    let cli = Cli::parse();
    let config = cli.config();

    match run_with(&config, progress) {
        Ok(report) => println!("{report}"),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }

    if !cli.no_wait {
        wait_for_enter();
    }
}
