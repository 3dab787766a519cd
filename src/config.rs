use std::path::{Path, PathBuf};

const DEFAULT_INPUT_DIR: &str = "input";
const DEFAULT_OUTPUT_DIR: &str = "output";
const DEFAULT_INPUT_FILE: &str = "itcont.txt";
const DEFAULT_ZIP_FILE: &str = "medianvals_by_zip.txt";
const DEFAULT_DATE_FILE: &str = "medianvals_by_date.txt";

/// Paths for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub zip_output: PathBuf,
    pub date_output: PathBuf,
    /// True when fewer than three paths were given and the defaults were used
    pub used_defaults: bool,
}

impl RunConfig {
    /// Resolve paths from positional arguments (excluding the program name)
    ///
    /// Expects `<input> <zip-output> <date-output>`. With fewer than three
    /// arguments every path falls back to its default; extra arguments are ignored.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        match args.as_slice() {
            [input, zip_output, date_output, ..] => Self {
                input: PathBuf::from(input),
                zip_output: PathBuf::from(zip_output),
                date_output: PathBuf::from(date_output),
                used_defaults: false,
            },
            _ => Self::defaults(),
        }
    }

    /// Default relative paths, joined with the host's separator
    pub fn defaults() -> Self {
        Self {
            input: Path::new(DEFAULT_INPUT_DIR).join(DEFAULT_INPUT_FILE),
            zip_output: Path::new(DEFAULT_OUTPUT_DIR).join(DEFAULT_ZIP_FILE),
            date_output: Path::new(DEFAULT_OUTPUT_DIR).join(DEFAULT_DATE_FILE),
            used_defaults: true,
        }
    }
}
