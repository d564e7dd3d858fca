use crate::cli::Args;

/// Runtime configuration derived from CLI arguments
#[derive(Clone, Debug)]
pub struct Config {
    pub reverse: bool,
    pub numeric: bool,
    pub stats: bool,
    pub record_delimiter: u8,
    pub output_file: Option<String>,
    pub input_files: Vec<String>,
}

impl Config {
    /// Build configuration from parsed CLI arguments
    pub fn from_args(args: &Args) -> Self {
        Config {
            reverse: args.reverse,
            numeric: args.numeric,
            stats: args.stats,
            record_delimiter: args.record_delimiter(),
            output_file: args.output.clone(),
            input_files: args.files.clone(),
        }
    }

    /// Inputs to read, with stdin standing in when none are named
    pub fn inputs(&self) -> Vec<String> {
        if self.input_files.is_empty() {
            vec!["-".to_string()]
        } else {
            self.input_files.clone()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            reverse: false,
            numeric: false,
            stats: false,
            record_delimiter: b'\n',
            output_file: None,
            input_files: vec![],
        }
    }
}
