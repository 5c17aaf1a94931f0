use std::{fs, io, path::PathBuf, process::ExitCode};

use chord::sample;
use clap::Parser;
use colored::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use simulator::{fmt_open_err, nodefile, path_str, schema::{self, Plan}};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(default_value = "nodes.txt")]
    output: PathBuf,
    /// How many distinct node ids to draw.
    #[arg(long, default_value_t = schema::DEFAULT_COUNT)]
    count: usize,
    /// Exclusive upper bound of the id domain.
    #[arg(long, default_value_t = schema::DEFAULT_MAX_ID)]
    max_id: u64,
    /// Seed for deterministic output.
    #[arg(long)]
    seed: Option<u64>,
    /// Generate every node file listed in a TOML plan instead.
    #[arg(long)]
    plan: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match &cli.plan {
        Some(plan) => generate_plan(plan),
        None => generate_nodefile(&cli.output, cli.count, cli.max_id, cli.seed),
    };

    if let Err(err) = result {
        println!("{}", err.red().bold());
        ExitCode::FAILURE
    }
    else {
        println!("{}", "Done".green().bold());
        ExitCode::SUCCESS
    }
}

fn generate_plan(path: &PathBuf) -> Result<(), String> {
    let plan_toml = fs::read_to_string(path)
        .map_err(|e| fmt_open_err(e, path))?;

    let plan: Plan = toml::from_str(&plan_toml)
        .map_err(|e| format!(
            "invalid toml file {}: {}",
            path_str(path), e
        ))?;

    for info in &plan.nodefiles {
        println!("{} {}", "Building".green().bold(), info.name);
        generate_nodefile(
            &PathBuf::from(&info.name),
            info.count,
            info.max_id,
            info.seed)?;
    }
    Ok(())
}

fn generate_nodefile(
    path: &PathBuf,
    count: usize,
    max_id: u64,
    seed: Option<u64>) -> Result<(), String>
{
    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    // Sample before touching the file: an invalid count must not
    // truncate an existing node list.
    let ids = sample::distinct_ids(&mut rng, count, max_id)
        .map_err(|e| e.to_string())?;

    let file = fs::File::options()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)
        .map_err(|e| fmt_open_err(e, path))?;

    nodefile::to_writer(io::BufWriter::new(file), &ids)
        .map_err(|e| format!(
            "failed to write {}: {}",
            path_str(path), e.to_string()
        ))
}
