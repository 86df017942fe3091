use std::io::ErrorKind;
use std::path::Path;

use crate::AmalgError;
use crate::AmalgResult;

/// Read the exact byte content of `file` resolved against `dir`.
///
/// The content is read in one bulk operation and returned untouched: no
/// newline normalization, embedded NUL and control bytes preserved. A file
/// that cannot be opened maps `NotFound` to [`AmalgError::MissingInclude`]
/// (a missing include means a broken source tree) and every other failure
/// to [`AmalgError::Io`]. Either way the failure is fatal to the run.
pub fn load_content(dir: &Path, file: &str) -> AmalgResult<Vec<u8>> {
	let path = dir.join(file);

	std::fs::read(&path).map_err(|error| {
		if error.kind() == ErrorKind::NotFound {
			AmalgError::MissingInclude {
				path: path.display().to_string(),
			}
		} else {
			AmalgError::Io(error)
		}
	})
}
