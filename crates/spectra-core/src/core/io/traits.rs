use super::IoError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Anything that can be written out as a table.
pub trait TableFile {
    /// Column names, in the order rows are written.
    fn header(&self) -> Vec<String>;

    /// Writes the header and every row to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the underlying writer fails.
    fn write_to(&self, writer: &mut impl Write) -> Result<(), IoError>;

    /// Writes the table to a new file at `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), IoError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
