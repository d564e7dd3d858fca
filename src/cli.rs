use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "dynsort",
    about = "Sort each input with a stable merge sort and merge them into one sorted stream"
)]
pub struct Args {
    /// Reverse the result of comparisons
    #[arg(short = 'r', long)]
    pub reverse: bool,

    /// Compare according to the leading numeric value
    #[arg(short = 'n', long = "numeric-sort")]
    pub numeric: bool,

    /// Use NUL as record delimiter
    #[arg(short = 'z', long = "zero-terminated")]
    pub zero_terminated: bool,

    /// Write result to FILE instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<String>,

    /// Report length and capacity of the merged array on stderr
    #[arg(long)]
    pub stats: bool,

    /// Input files ("-" reads stdin)
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,
}

impl Args {
    /// Get the record delimiter (newline or NUL)
    pub fn record_delimiter(&self) -> u8 {
        if self.zero_terminated { 0u8 } else { b'\n' }
    }
}
