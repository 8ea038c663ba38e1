use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const SYMMETRY_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum HamiltonianError {
    #[error("Hamiltonian must have at least one site")]
    NoSites,

    #[error("Hamiltonian must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("Hamiltonian is not symmetric: H[{row}][{col}] = {upper} but H[{col}][{row}] = {lower}")]
    NotSymmetric {
        row: usize,
        col: usize,
        upper: f64,
        lower: f64,
    },

    #[error("Hamiltonian entry ({row}, {col}) is not finite")]
    NonFinite { row: usize, col: usize },

    #[error("Expected {expected} per-site values, got {actual}")]
    SiteCountMismatch { expected: usize, actual: usize },

    #[error("Invalid chain parameter '{name}': {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

/// Connectivity of the oscillator chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChainTopology {
    /// Open chain: nearest neighbours only.
    #[default]
    Linear,
    /// Closed chain: the last site also couples to the first. Only differs from
    /// [`ChainTopology::Linear`] for three or more sites.
    Ring,
}

impl fmt::Display for ChainTopology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainTopology::Linear => write!(f, "linear"),
            ChainTopology::Ring => write!(f, "ring"),
        }
    }
}

impl FromStr for ChainTopology {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Ok(ChainTopology::Linear),
            "ring" => Ok(ChainTopology::Ring),
            other => Err(format!(
                "unknown chain topology '{}' (expected 'linear' or 'ring')",
                other
            )),
        }
    }
}

/// Scalar parameters of a uniform chain of coupled oscillators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainParameters {
    pub sites: usize,
    pub site_energy: f64,
    pub coupling: f64,
    pub topology: ChainTopology,
}

impl ChainParameters {
    pub fn linear(sites: usize, site_energy: f64, coupling: f64) -> Self {
        Self {
            sites,
            site_energy,
            coupling,
            topology: ChainTopology::Linear,
        }
    }

    pub fn with_sites(self, sites: usize) -> Self {
        Self { sites, ..self }
    }

    pub fn validate(&self) -> Result<(), HamiltonianError> {
        if self.sites == 0 {
            return Err(HamiltonianError::NoSites);
        }
        if !self.site_energy.is_finite() {
            return Err(HamiltonianError::InvalidParameter {
                name: "site_energy",
                value: self.site_energy,
            });
        }
        if !self.coupling.is_finite() {
            return Err(HamiltonianError::InvalidParameter {
                name: "coupling",
                value: self.coupling,
            });
        }
        Ok(())
    }
}

/// A validated real symmetric site-basis Hamiltonian.
#[derive(Debug, Clone, PartialEq)]
pub struct Hamiltonian {
    matrix: DMatrix<f64>,
}

impl Hamiltonian {
    /// Builds `H[i][i] = v₀`, `H[i][i±1] = V`, plus the corner couplings for a ring.
    pub fn chain(params: &ChainParameters) -> Result<Self, HamiltonianError> {
        params.validate()?;
        let n = params.sites;
        let is_ring = params.topology == ChainTopology::Ring && n >= 3;

        let matrix = DMatrix::from_fn(n, n, |i, j| {
            if i == j {
                params.site_energy
            } else if i.abs_diff(j) == 1 || (is_ring && i.abs_diff(j) == n - 1) {
                params.coupling
            } else {
                0.0
            }
        });
        Ok(Self { matrix })
    }

    /// Validates an arbitrary matrix: non-empty, square, finite and symmetric.
    pub fn from_matrix(matrix: DMatrix<f64>) -> Result<Self, HamiltonianError> {
        let (rows, cols) = matrix.shape();
        if rows == 0 || cols == 0 {
            return Err(HamiltonianError::NoSites);
        }
        if rows != cols {
            return Err(HamiltonianError::NotSquare { rows, cols });
        }

        for row in 0..rows {
            for col in 0..cols {
                if !matrix[(row, col)].is_finite() {
                    return Err(HamiltonianError::NonFinite { row, col });
                }
            }
        }

        for row in 0..rows {
            for col in (row + 1)..cols {
                let upper = matrix[(row, col)];
                let lower = matrix[(col, row)];
                let scale = upper.abs().max(lower.abs()).max(1.0);
                if (upper - lower).abs() > SYMMETRY_TOLERANCE * scale {
                    return Err(HamiltonianError::NotSymmetric {
                        row,
                        col,
                        upper,
                        lower,
                    });
                }
            }
        }

        Ok(Self { matrix })
    }

    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, HamiltonianError> {
        let n = rows.len();
        if n == 0 {
            return Err(HamiltonianError::NoSites);
        }
        if let Some(bad) = rows.iter().find(|row| row.len() != n) {
            return Err(HamiltonianError::NotSquare {
                rows: n,
                cols: bad.len(),
            });
        }
        let flat: Vec<f64> = rows.iter().flatten().copied().collect();
        Self::from_matrix(DMatrix::from_row_slice(n, n, &flat))
    }

    /// Replaces the diagonal with per-site energies, e.g. a static disorder realisation.
    pub fn with_site_energies(mut self, energies: &[f64]) -> Result<Self, HamiltonianError> {
        let n = self.sites();
        if energies.len() != n {
            return Err(HamiltonianError::SiteCountMismatch {
                expected: n,
                actual: energies.len(),
            });
        }
        for (i, &energy) in energies.iter().enumerate() {
            if !energy.is_finite() {
                return Err(HamiltonianError::NonFinite { row: i, col: i });
            }
            self.matrix[(i, i)] = energy;
        }
        Ok(self)
    }

    pub fn sites(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    pub fn into_matrix(self) -> DMatrix<f64> {
        self.matrix
    }
}

/// Closed-form eigenvalues of a uniform chain, in ascending order when `V < 0`.
///
/// Linear: `v₀ + 2V·cos(πk/(N+1))`, `k = 1..N`. Ring: `v₀ + 2V·cos(2πk/N)`, `k = 0..N-1`.
pub fn analytic_chain_energies(params: &ChainParameters) -> Vec<f64> {
    let n = params.sites;
    let is_ring = params.topology == ChainTopology::Ring && n >= 3;
    if is_ring {
        (0..n)
            .map(|k| {
                params.site_energy + 2.0 * params.coupling * (2.0 * PI * k as f64 / n as f64).cos()
            })
            .collect()
    } else {
        (1..=n)
            .map(|k| {
                params.site_energy
                    + 2.0 * params.coupling * (PI * k as f64 / (n as f64 + 1.0)).cos()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_places_site_energy_on_diagonal_and_coupling_on_first_off_diagonals() {
        let h = Hamiltonian::chain(&ChainParameters::linear(4, 17000.0, -100.0)).unwrap();
        let m = h.matrix();
        assert_eq!(h.sites(), 4);
        for i in 0..4usize {
            for j in 0..4usize {
                let expected = match i.abs_diff(j) {
                    0 => 17000.0,
                    1 => -100.0,
                    _ => 0.0,
                };
                assert_eq!(m[(i, j)], expected, "H[{i}][{j}]");
            }
        }
    }

    #[test]
    fn chain_is_equal_to_its_transpose_for_many_parameters() {
        for sites in 1..=12 {
            for (v0, v) in [(0.0, 1.0), (17000.0, -100.0), (-3.5, 42.0)] {
                for topology in [ChainTopology::Linear, ChainTopology::Ring] {
                    let params = ChainParameters {
                        sites,
                        site_energy: v0,
                        coupling: v,
                        topology,
                    };
                    let h = Hamiltonian::chain(&params).unwrap();
                    assert_eq!(h.matrix(), &h.matrix().transpose());
                }
            }
        }
    }

    #[test]
    fn single_site_chain_has_no_coupling() {
        let h = Hamiltonian::chain(&ChainParameters::linear(1, 5.0, 3.0)).unwrap();
        assert_eq!(h.matrix(), &DMatrix::from_element(1, 1, 5.0));
    }

    #[test]
    fn ring_adds_corner_couplings_only_from_three_sites() {
        let mut params = ChainParameters::linear(4, 0.0, 1.0);
        params.topology = ChainTopology::Ring;
        let ring = Hamiltonian::chain(&params).unwrap();
        assert_eq!(ring.matrix()[(0, 3)], 1.0);
        assert_eq!(ring.matrix()[(3, 0)], 1.0);

        let two_site_ring = Hamiltonian::chain(&params.with_sites(2)).unwrap();
        let two_site_linear =
            Hamiltonian::chain(&ChainParameters::linear(2, 0.0, 1.0)).unwrap();
        assert_eq!(two_site_ring, two_site_linear);
    }

    #[test]
    fn chain_rejects_zero_sites_and_non_finite_parameters() {
        assert_eq!(
            Hamiltonian::chain(&ChainParameters::linear(0, 1.0, 1.0)).unwrap_err(),
            HamiltonianError::NoSites
        );
        assert!(matches!(
            Hamiltonian::chain(&ChainParameters::linear(3, f64::NAN, 1.0)),
            Err(HamiltonianError::InvalidParameter {
                name: "site_energy",
                ..
            })
        ));
        assert!(matches!(
            Hamiltonian::chain(&ChainParameters::linear(3, 1.0, f64::INFINITY)),
            Err(HamiltonianError::InvalidParameter {
                name: "coupling",
                ..
            })
        ));
    }

    #[test]
    fn from_matrix_rejects_non_square_input() {
        let err = Hamiltonian::from_matrix(DMatrix::zeros(2, 3)).unwrap_err();
        assert_eq!(err, HamiltonianError::NotSquare { rows: 2, cols: 3 });
    }

    #[test]
    fn from_matrix_rejects_non_symmetric_input() {
        let m = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 1.0]);
        let err = Hamiltonian::from_matrix(m).unwrap_err();
        assert_eq!(
            err,
            HamiltonianError::NotSymmetric {
                row: 0,
                col: 1,
                upper: 2.0,
                lower: 3.0
            }
        );
    }

    #[test]
    fn from_matrix_rejects_empty_and_non_finite_input() {
        assert_eq!(
            Hamiltonian::from_matrix(DMatrix::zeros(0, 0)).unwrap_err(),
            HamiltonianError::NoSites
        );
        let m = DMatrix::from_row_slice(2, 2, &[1.0, f64::NAN, f64::NAN, 1.0]);
        assert_eq!(
            Hamiltonian::from_matrix(m).unwrap_err(),
            HamiltonianError::NonFinite { row: 0, col: 1 }
        );
    }

    #[test]
    fn from_matrix_tolerates_rounding_noise_in_symmetry() {
        let m = DMatrix::from_row_slice(2, 2, &[17000.0, -100.0, -100.0 + 1e-12, 17000.0]);
        assert!(Hamiltonian::from_matrix(m).is_ok());
    }

    #[test]
    fn from_rows_checks_every_row_length() {
        let rows = vec![vec![1.0, 0.0], vec![0.0]];
        assert_eq!(
            Hamiltonian::from_rows(&rows).unwrap_err(),
            HamiltonianError::NotSquare { rows: 2, cols: 1 }
        );
        let rows = vec![vec![1.0, 0.5], vec![0.5, 2.0]];
        let h = Hamiltonian::from_rows(&rows).unwrap();
        assert_eq!(h.matrix()[(1, 1)], 2.0);
        assert!(Hamiltonian::from_rows(&[]).is_err());
    }

    #[test]
    fn site_energies_override_the_diagonal() {
        let h = Hamiltonian::chain(&ChainParameters::linear(3, 0.0, -1.0))
            .unwrap()
            .with_site_energies(&[1.0, 2.0, 3.0])
            .unwrap();
        assert_eq!(h.matrix()[(0, 0)], 1.0);
        assert_eq!(h.matrix()[(2, 2)], 3.0);
        assert_eq!(h.matrix()[(0, 1)], -1.0);

        let err = Hamiltonian::chain(&ChainParameters::linear(3, 0.0, -1.0))
            .unwrap()
            .with_site_energies(&[1.0])
            .unwrap_err();
        assert_eq!(
            err,
            HamiltonianError::SiteCountMismatch {
                expected: 3,
                actual: 1
            }
        );
    }

    #[test]
    fn analytic_energies_for_two_sites() {
        let energies = analytic_chain_energies(&ChainParameters::linear(2, 17000.0, -100.0));
        assert!((energies[0] - 16900.0).abs() < 1e-9);
        assert!((energies[1] - 17100.0).abs() < 1e-9);
    }

    #[test]
    fn topology_parses_from_str() {
        assert_eq!("Ring".parse::<ChainTopology>(), Ok(ChainTopology::Ring));
        assert!("star".parse::<ChainTopology>().is_err());
        assert_eq!(ChainTopology::Linear.to_string(), "linear");
    }
}
