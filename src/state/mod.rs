//! Structural State Persistence
//!
//! A model's state file is a fixed-size binary record: `layer_count` then
//! `sub_layer_count`, each a native-width signed integer in native byte
//! order. No header, no version tag, no checksum — the layout is not
//! portable across targets or builds with a different pointer width.
//!
//! Loading either yields a fully populated, validated record or fails; a
//! partially read record never reaches the caller.

use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::mem;
use std::path::Path;

use log::debug;

use crate::error::{Result, StrataError};

/// Size of one persisted integer field in bytes.
const FIELD_SIZE: usize = mem::size_of::<isize>();

/// Total size of a state file in bytes.
pub const STATE_FILE_SIZE: usize = 2 * FIELD_SIZE;

/// The two structural integers that define a model's shape.
///
/// Weight contents are deliberately absent: the persistence format carries
/// structure only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelShape {
    pub layer_count: isize,
    pub sub_layer_count: isize,
}

/// Write `shape` to `path`, overwriting any existing file.
pub fn save_shape(path: &Path, shape: &ModelShape) -> Result<()> {
    let mut buf = [0u8; STATE_FILE_SIZE];
    buf[..FIELD_SIZE].copy_from_slice(&shape.layer_count.to_ne_bytes());
    buf[FIELD_SIZE..].copy_from_slice(&shape.sub_layer_count.to_ne_bytes());

    let mut file = File::create(path).map_err(|e| StrataError::StateWriteError {
        path: path.to_path_buf(),
        source: e,
    })?;
    file.write_all(&buf).map_err(|e| StrataError::StateWriteError {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!("Wrote state file: {}", path.display());
    Ok(())
}

/// Read a full shape record from `path`.
///
/// # Errors
/// - [`StrataError::StateNotFound`] if the file does not exist
/// - [`StrataError::CorruptState`] if the file is shorter than a full record
///   or holds non-positive counts
/// - [`StrataError::StateReadError`] for any other I/O failure
pub fn load_shape(path: &Path) -> Result<ModelShape> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(StrataError::StateNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) => {
            return Err(StrataError::StateReadError {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let mut buf = [0u8; STATE_FILE_SIZE];
    file.read_exact(&mut buf).map_err(|e| match e.kind() {
        ErrorKind::UnexpectedEof => StrataError::CorruptState {
            path: path.to_path_buf(),
            reason: format!("expected {STATE_FILE_SIZE} bytes"),
        },
        _ => StrataError::StateReadError {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let mut field = [0u8; FIELD_SIZE];
    field.copy_from_slice(&buf[..FIELD_SIZE]);
    let layer_count = isize::from_ne_bytes(field);
    field.copy_from_slice(&buf[FIELD_SIZE..]);
    let sub_layer_count = isize::from_ne_bytes(field);

    if layer_count <= 0 || sub_layer_count <= 0 {
        return Err(StrataError::CorruptState {
            path: path.to_path_buf(),
            reason: format!("non-positive counts: {layer_count} x {sub_layer_count}"),
        });
    }

    debug!("Read state file: {}", path.display());
    Ok(ModelShape {
        layer_count,
        sub_layer_count,
    })
}
