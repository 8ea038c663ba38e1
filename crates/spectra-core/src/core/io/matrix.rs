use super::IoError;
use crate::core::exciton::Hamiltonian;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Reads a site-basis Hamiltonian from CSV: one matrix row per line, no header.
///
/// Blank lines are skipped, lines starting with `#` are comments, and surrounding
/// whitespace is trimmed. The matrix is validated by [`Hamiltonian::from_rows`].
pub fn read_hamiltonian<R: Read>(reader: R) -> Result<Hamiltonian, IoError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let line = record.position().map_or(rows.len() + 1, |p| p.line() as usize);
        if record.iter().all(str::is_empty) {
            continue;
        }

        let row = record
            .iter()
            .enumerate()
            .map(|(column, field)| {
                field.parse::<f64>().map_err(|_| IoError::Parse {
                    line,
                    column: column + 1,
                    value: field.to_string(),
                })
            })
            .collect::<Result<Vec<f64>, IoError>>()?;
        rows.push(row);
    }

    debug!(rows = rows.len(), "Read Hamiltonian matrix rows");
    Ok(Hamiltonian::from_rows(&rows)?)
}

pub fn read_hamiltonian_from_path<P: AsRef<Path>>(path: P) -> Result<Hamiltonian, IoError> {
    let file = File::open(path)?;
    read_hamiltonian(BufReader::new(file))
}
