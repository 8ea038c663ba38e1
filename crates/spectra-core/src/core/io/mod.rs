//! Tabular input and output.
//!
//! Results are written as CSV so that any plotting tool can pick them up. The
//! [`traits::TableFile`] trait is the common interface; [`tables`] implements it for the
//! spectra and exciton states, and [`matrix`] reads user-supplied Hamiltonians.

pub mod matrix;
pub mod tables;
pub mod traits;

use crate::core::exciton::HamiltonianError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed value '{value}' on line {line}, column {column}")]
    Parse {
        line: usize,
        column: usize,
        value: String,
    },

    #[error("Invalid Hamiltonian: {0}")]
    Hamiltonian(#[from] HamiltonianError),
}
