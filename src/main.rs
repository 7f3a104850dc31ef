//! School statistics CLI

use clap::{Parser, Subcommand};
use school_stats::data::StudentGenerator;
use school_stats::execution::AggregationContext;
use school_stats::report::{print_batches, rank_groups, rankings_to_batch, OutputFormat};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "school-stats")]
#[command(about = "Sequential vs. partitioned parallel aggregation of student results")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate students, aggregate both ways, and show the top schools
    Run {
        /// Number of students to generate
        #[arg(short = 'n', long, default_value = "100000")]
        students: usize,

        /// Number of worker threads for the parallel run
        #[arg(short, long, default_value = "4")]
        threads: usize,

        /// Number of schools students are spread over
        #[arg(short, long, default_value = "100")]
        schools: u32,

        /// Random seed for data generation
        #[arg(long, default_value = "42")]
        seed: u64,

        /// How many schools to list
        #[arg(long, default_value = "3")]
        top: usize,

        /// Output format for the ranking (table, csv)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Compare timings across worker counts 1..=max-threads
    Benchmark {
        /// Number of students to generate
        #[arg(short = 'n', long, default_value = "1000000")]
        students: usize,

        /// Number of schools students are spread over
        #[arg(short, long, default_value = "100")]
        schools: u32,

        /// Largest worker count to try
        #[arg(short, long, default_value = "8")]
        max_threads: usize,

        /// Number of iterations per worker count
        #[arg(short, long, default_value = "1")]
        iterations: usize,
    },
}

fn main() {
    // Set up logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            students,
            threads,
            schools,
            seed,
            top,
            format,
        } => {
            let format = match OutputFormat::parse(&format) {
                Some(f) => f,
                None => {
                    eprintln!("Unknown output format '{}'. Valid formats: table, csv", format);
                    std::process::exit(1);
                }
            };

            println!("Generating {} students over {} schools...", students, schools);
            let start = Instant::now();
            let records = match StudentGenerator::with_seed(schools, seed).generate(students) {
                Ok(records) => records,
                Err(e) => {
                    eprintln!("Error generating data: {}", e);
                    std::process::exit(1);
                }
            };
            println!("Generated data in {:?}", start.elapsed());
            println!();

            let ctx = AggregationContext::new().with_exact_workers(threads);
            let result = match ctx.compare(&records) {
                Ok(result) => result,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };

            let metrics = &result.metrics;
            println!(
                "Single-threaded: {:>10.2} ms",
                metrics.sequential_time.as_secs_f64() * 1000.0
            );
            println!(
                "Parallel ({} threads): {:>10.2} ms",
                metrics.workers,
                metrics.parallel_time.as_secs_f64() * 1000.0
            );
            println!("Speedup: {:.2}x", metrics.speedup());
            println!("Results match: {} schools", result.parallel.len());
            println!();

            println!(
                "Top {} schools by students with at least one perfect score:",
                top
            );
            let ranks = rank_groups(&result.parallel, top);
            let printed = rankings_to_batch(&ranks)
                .map_err(|e| e.to_string())
                .and_then(|batch| print_batches(&[batch], format).map_err(|e| e.to_string()));
            if let Err(e) = printed {
                eprintln!("Error printing rankings: {}", e);
                std::process::exit(1);
            }
        }

        Commands::Benchmark {
            students,
            schools,
            max_threads,
            iterations,
        } => {
            println!(
                "Running aggregation benchmark ({} students, {} schools, iterations={})",
                students, schools, iterations
            );
            println!();

            let records = match StudentGenerator::new(schools).generate(students) {
                Ok(records) => records,
                Err(e) => {
                    eprintln!("Error generating data: {}", e);
                    std::process::exit(1);
                }
            };

            let iterations = iterations.max(1);
            for workers in 1..=max_threads.max(1) {
                let ctx = AggregationContext::new().with_workers(workers);
                let mut sequential = std::time::Duration::ZERO;
                let mut parallel = std::time::Duration::ZERO;

                for _ in 0..iterations {
                    match ctx.compare(&records) {
                        Ok(result) => {
                            sequential += result.metrics.sequential_time;
                            parallel += result.metrics.parallel_time;
                        }
                        Err(e) => {
                            eprintln!("Workers {:>2}: ERROR - {}", workers, e);
                            std::process::exit(1);
                        }
                    }
                }

                let sequential = sequential / iterations as u32;
                let parallel = parallel / iterations as u32;
                println!(
                    "Workers {:>2}: sequential {:>8.3}ms, parallel {:>8.3}ms, speedup {:.2}x",
                    workers,
                    sequential.as_secs_f64() * 1000.0,
                    parallel.as_secs_f64() * 1000.0,
                    sequential.as_secs_f64() / parallel.as_secs_f64().max(f64::EPSILON)
                );
            }
        }
    }
}
