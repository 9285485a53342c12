mod report;

use std::fs;
use std::process::exit;

use clap::Parser;
use fatmeta::Volume;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(short, long)]
    quiet: bool,
    #[clap(short, action = clap::ArgAction::Count)]
    verbosity: u8,
    /// disk image formatted with FAT12/16
    image: String,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("can't open image: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Decode(#[from] fatmeta::error::Error),
}

fn run(path: &str) -> Result<(), CliError> {
    let image = fs::read(path)?;
    let volume = Volume::new(&image)?;
    report::geometry(volume.geometry());

    println!();
    println!("Root directory:");
    for entry in volume.root_directory()?.iter() {
        report::entry(&entry);
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    let level = match (args.quiet, args.verbosity) {
        (true, _) => log::LevelFilter::Off,
        (_, 0) => log::LevelFilter::Info,
        (_, 1) => log::LevelFilter::Debug,
        (_, _) => log::LevelFilter::Trace,
    };
    log::set_max_level(level);
    env_logger::builder().filter(None, level).target(env_logger::Target::Stdout).init();

    if let Some(error) = run(&args.image).err() {
        eprintln!("{}", error);
        exit(1);
    }
}
