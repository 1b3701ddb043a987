use std::{
    fmt::{self, Display},
    fs::File,
    io::{self, BufWriter, Read, Write},
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::error::{Bin2cError, Bin2cResult};

pub const STDOUT_SENTINEL: &str = "-";

pub fn read_file(file_path: &Path) -> Bin2cResult<Vec<u8>> {
    let mut file = File::open(file_path).map_err(|err| Bin2cError::file_access(file_path, err))?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)
        .map_err(|err| Bin2cError::file_access(file_path, err))?;
    Ok(buffer)
}

/// Where the generated declaration goes, resolved once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// Opens the target for writing, creating or truncating a file target.
    pub fn open(&self) -> Bin2cResult<Box<dyn Write>> {
        match self {
            OutputTarget::Stdout => Ok(Box::new(io::stdout().lock())),
            OutputTarget::File(path) => {
                let file = File::create(path).map_err(|err| Bin2cError::file_access(path, err))?;
                Ok(Box::new(BufWriter::new(file)))
            }
        }
    }

    pub fn path(&self) -> PathBuf {
        match self {
            OutputTarget::Stdout => PathBuf::from("<stdout>"),
            OutputTarget::File(path) => path.clone(),
        }
    }
}

impl FromStr for OutputTarget {
    type Err = Bin2cError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err(Bin2cError::InvalidArgument(
                "output path must not be empty".to_owned(),
            )),
            STDOUT_SENTINEL => Ok(OutputTarget::Stdout),
            path => Ok(OutputTarget::File(PathBuf::from(path))),
        }
    }
}

impl Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path().display())
    }
}
