//! Raw binary ROM images.

use std::path::Path;

use crate::registry::BuildError;

/// Read a raw ROM image, requiring at least `size` bytes; the first
/// `size` bytes are returned. Oversized files are legal (some dumps carry
/// trailing padding).
pub fn read_image(path: &Path, size: usize) -> Result<Vec<u8>, BuildError> {
    let mut data = std::fs::read(path).map_err(|err| BuildError::Io {
        path: path.to_path_buf(),
        err,
    })?;

    if data.len() < size {
        return Err(BuildError::RomTooShort {
            path: path.to_path_buf(),
            expected: size,
            actual: data.len(),
        });
    }

    data.truncate(size);
    Ok(data)
}
