use std::{fs, io, path::PathBuf, process::ExitCode};

use chord::{
    id::{self, IdSpace},
    ring::Ring,
};
use clap::Parser;
use colored::*;
use simulator::{fmt_open_err, nodefile, path_str};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(default_value = "nodes.txt")]
    nodefile: PathBuf,
    /// Key to resolve on the ring.
    #[arg(long, default_value_t = 200)]
    key: u64,
    /// Width of the identifier space in bits.
    #[arg(long, default_value_t = id::DEFAULT_BITS)]
    bits: u32,
    /// Also print every node's finger table.
    #[arg(long, action)]
    tables: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        println!("{}", err.red().bold());
        ExitCode::FAILURE
    }
    else {
        ExitCode::SUCCESS
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    if cli.bits < 1 || cli.bits > 32 {
        return Err("--bits must be between 1 and 32".to_string());
    }
    let space = IdSpace::new(cli.bits);

    if !space.contains(cli.key) {
        return Err(format!(
            "key {} does not fit a {}-bit identifier space",
            cli.key, cli.bits
        ));
    }

    let file = fs::File::open(&cli.nodefile)
        .map_err(|e| fmt_open_err(e, &cli.nodefile))?;

    let ids = nodefile::from_reader(io::BufReader::new(file))
        .map_err(|e| format!(
            "invalid node file {}: {}",
            path_str(&cli.nodefile), e.to_string()
        ))?;

    let ring = Ring::build(space, &ids)
        .map_err(|e| e.to_string())?;

    let successor = ring.find_successor(ring.first(), cli.key);
    println!(
        "Successor of key {} is node {}",
        cli.key,
        ring.id(successor)
    );

    if cli.tables {
        print_tables(&ring);
    }
    Ok(())
}

fn print_tables(ring: &Ring) {
    for n in ring.iter() {
        println!();
        println!("{}", format!("Node {} finger table:", ring.id(n)).bold());
        for finger in ring.fingers(n) {
            println!("start: {:4}  node: {}", finger.start, ring.id(finger.node));
        }
    }
}
