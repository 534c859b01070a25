use std::path::PathBuf;

pub const DEFAULT_INSTRUCTIONS: &str = "./resources/instructions.json";
pub const DEFAULT_PSEUDO: &str = "./resources/pseudo-instructions.json";
pub const DEFAULT_OUTPUT: &str = "./resources/merged.json";

/// Where to read the two tables from and where to write the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergeConfig {
    pub instructions: PathBuf,
    pub pseudo: PathBuf,
    pub output: PathBuf,
    /// Indent the output instead of writing it on one line.
    pub pretty: bool,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            instructions: PathBuf::from(DEFAULT_INSTRUCTIONS),
            pseudo: PathBuf::from(DEFAULT_PSEUDO),
            output: PathBuf::from(DEFAULT_OUTPUT),
            pretty: false,
        }
    }
}

impl MergeConfig {
    pub fn new(
        instructions: impl Into<PathBuf>,
        pseudo: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            instructions: instructions.into(),
            pseudo: pseudo.into(),
            output: output.into(),
            pretty: false,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}
