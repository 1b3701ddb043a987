use std::{io::Write, path::Path};

use log::{debug, info};

use crate::{error::Bin2cResult, io::OutputTarget};

pub mod error;
pub mod ident;
pub mod io;
pub mod logging;
pub mod render;

/// Converts the file at `input` into a byte-array declaration written to
/// `output`.
pub fn convert(input: &Path, output: &OutputTarget) -> Bin2cResult<()> {
    let identifier = ident::identifier_from_path(input)?;
    let bytes = io::read_file(input)?;
    debug!(
        "read {} bytes from {}, identifier {}",
        bytes.len(),
        input.display(),
        identifier
    );

    let write_err = |err: std::io::Error| error::Bin2cError::file_access(output.path(), err);
    let mut sink = output.open()?;
    render::write_declaration(&mut sink, &identifier, &bytes).map_err(write_err)?;
    sink.flush().map_err(write_err)?;

    info!("wrote {} to {}", identifier, output);
    Ok(())
}
