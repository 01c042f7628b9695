use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "molweight")]
#[command(about = "Compute the molecular weight of a chemical formula")]
pub struct Cli {
    /// Formula to evaluate, e.g. "Mg(OH)2". Read from stdin when omitted
    pub formula: Option<String>,

    /// TOML file overriding the evaluator limits
    #[arg(long, default_value = "molweight.toml")]
    pub config: PathBuf,

    /// Significant digits used when printing the weight
    #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u8).range(1..=17))]
    pub digits: u8,

    /// Exit with status 1 when the formula cannot be parsed
    #[arg(long)]
    pub strict: bool,

    /// Print the element table and exit
    #[arg(long)]
    pub list_elements: bool,

    /// Log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
