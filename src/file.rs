/// File-backed outlet, useful for testing
///
/// The power state is persisted as a single byte (`'0'` or `'1'`) in a file.
/// A missing file means the outlet has never been switched and reports the
/// default "on" state.
use crate::error::Error;
use crate::outlet::Outlet;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Outlet backend persisting its state in a one-byte file
pub struct FileOutlet {
    filename: PathBuf,
}

impl FileOutlet {
    pub fn new(filename: impl Into<PathBuf>) -> Self {
        FileOutlet {
            filename: filename.into(),
        }
    }
}

impl Outlet for FileOutlet {
    fn set(&mut self, power: bool) -> Result<(), Error> {
        fs::write(&self.filename, if power { b"1" } else { b"0" })?;
        Ok(())
    }

    fn get(&mut self) -> Result<bool, Error> {
        match fs::read(&self.filename) {
            Ok(bytes) => {
                let state = bytes.first().ok_or_else(|| {
                    io::Error::new(io::ErrorKind::UnexpectedEof, "empty outlet state file")
                })?;
                Ok(*state != b'0')
            }
            // Never switched: default "on" state
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(true),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut outlet = FileOutlet::new(dir.path().join("outlet"));

        outlet.set(true).unwrap();
        assert!(outlet.get().unwrap());

        outlet.set(false).unwrap();
        assert!(!outlet.get().unwrap());
    }

    #[test]
    fn missing_file_reports_on() {
        let dir = tempfile::tempdir().unwrap();
        let mut outlet = FileOutlet::new(dir.path().join("never-written"));
        assert!(outlet.get().unwrap());
    }

    #[test]
    fn state_file_holds_a_single_byte() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("outlet");
        let mut outlet = FileOutlet::new(&path);

        outlet.set(true).unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"1");

        outlet.set(false).unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"0");
    }

    #[test]
    fn empty_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("outlet");
        fs::write(&path, b"").unwrap();

        let mut outlet = FileOutlet::new(&path);
        assert!(matches!(outlet.get(), Err(Error::Io(_))));
    }

    #[test]
    fn unreadable_path_propagates_io_error() {
        let dir = tempfile::tempdir().unwrap();
        // The directory itself is not a readable state file
        let mut outlet = FileOutlet::new(dir.path());
        assert!(matches!(outlet.get(), Err(Error::Io(_))));
    }
}
