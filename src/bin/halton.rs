use clap::*;

use halton_rs::core::error::*;
use halton_rs::samplers::*;

use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process;

use log::*;

#[derive(Debug, Parser)]
#[clap(author, about, version)]
struct CommandOptions {
    /// Number of samples, starting at index 0.
    #[arg(short, long, value_name = "num")]
    pub num: Option<u64>,

    /// Number of dimensions; the bases are the first primes.
    #[arg(short, long, value_name = "dim")]
    pub dim: Option<u32>,

    /// Specific sequence indices.
    #[arg(long, value_delimiter = ',', value_name = "i0,i1,...")]
    pub indices: Option<Vec<u64>>,

    /// Specific bases, one per dimension.
    #[arg(long, value_delimiter = ',', value_name = "b0,b1,...")]
    pub bases: Option<Vec<u64>>,

    /// Write the table as JSON to the given filename.
    #[arg(short, long, value_name = "filename")]
    pub outfile: Option<PathBuf>,

    /// Suppress all text output other than error messages.
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log messages at or above this level (0 -> INFO,
    /// 1 -> WARNING, 2 -> ERROR).
    #[arg(long, value_name = "num")]
    pub minloglevel: Option<i32>,
}

fn init_logger(opts: &CommandOptions) {
    if let Some(minloglevel) = opts.minloglevel {
        const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
        let log_level = LOG_LEVELS[(minloglevel + 2).clamp(0, 4) as usize];
        env::set_var("RUST_LOG", log_level);
    } else {
        //default log level : warn
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_owned());
        env::set_var("RUST_LOG", log_level);
    }

    env_logger::Builder::from_default_env()
        .format_target(false)
        .format_module_path(false)
        .init();
}

fn write_json(sequence: &HaltonSequence, path: &Path) -> Result<(), HaltonError> {
    let json = serde_json::to_string_pretty(sequence)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    return Ok(());
}

fn print_table(sequence: &HaltonSequence) {
    print!("index");
    for base in sequence.bases() {
        print!("\tbase {}", base);
    }
    println!();
    for (index, point) in sequence.indices().iter().zip(sequence.points()) {
        print!("{}", index);
        for value in point {
            print!("\t{:.8}", value);
        }
        println!();
    }
}

fn generate_table(opts: &CommandOptions) -> i32 {
    if !opts.quiet {
        let version = env!("CARGO_PKG_VERSION");
        println!("halton-rs version {}", version);
        println!();
    }

    let params = HaltonParams {
        num: opts.num,
        dim: opts.dim,
        indices: opts.indices.clone(),
        bases: opts.bases.clone(),
    };
    match create_halton_sequence(&params) {
        Ok(sequence) => {
            info!(
                "{} samples in {} dimensions",
                sequence.indices().len(),
                sequence.bases().len()
            );
            if let Some(outfile) = opts.outfile.as_ref() {
                if let Err(e) = write_json(&sequence, outfile) {
                    error!("{}", e);
                    return -1;
                }
            } else if !opts.quiet {
                print_table(&sequence);
            }
            return 0;
        }
        Err(e) => {
            error!("{}", e);
            return -1;
        }
    }
}

pub fn main() {
    let opts = CommandOptions::parse();
    init_logger(&opts);
    let code = generate_table(&opts);
    process::exit(code);
}
