use clap::{Parser, ValueEnum};
use log::LevelFilter;
use sawplan::pack::Strategy;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Pack under a single strategy instead of computing and comparing all of them
    #[arg(long, value_enum, value_name = "STRATEGY")]
    pub strategy: Option<CliStrategy>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum CliStrategy {
    Vertical,
    Horizontal,
    Mixed,
}

impl From<CliStrategy> for Strategy {
    fn from(cli_strategy: CliStrategy) -> Self {
        match cli_strategy {
            CliStrategy::Vertical => Strategy::ForceVertical,
            CliStrategy::Horizontal => Strategy::ForceHorizontal,
            CliStrategy::Mixed => Strategy::Mixed,
        }
    }
}
