use std::path::PathBuf;
use std::process;

use clap::Parser;
use mizmerge_miz::{MergeReport, merge_mission_files};

#[derive(Debug, Parser)]
#[command(name = "mizmerge", version)]
#[command(about = "Merge client flights from one mission file into another")]
struct Cli {
    /// Mission file containing the client flights to extract.
    miz1: PathBuf,
    /// Mission file that receives the client flights.
    miz2: PathBuf,
    /// Output file path (default: `<MIZ2 stem>_merged.<ext>` next to MIZ2).
    #[arg(long)]
    output: Option<PathBuf>,
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match merge_mission_files(&cli.miz1, &cli.miz2, cli.output.as_deref()) {
        Ok(report) => print_summary(&report),
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_summary(report: &MergeReport) {
    println!(
        "Merged {} client flight group(s) into '{}'.",
        report.groups_merged,
        report.output_path.display()
    );
    if !report.countries_created.is_empty() {
        println!(
            "Created {} new country entry(ies): {}",
            report.countries_created.len(),
            report.countries_created.join(", ")
        );
    }
}
