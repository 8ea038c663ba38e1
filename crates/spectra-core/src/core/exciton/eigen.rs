use super::hamiltonian::Hamiltonian;
use nalgebra::{DMatrix, DVectorView, SymmetricEigen};
use std::cmp::Ordering;
use tracing::trace;

/// Eigenvalues and eigenvectors of a [`Hamiltonian`].
///
/// Column `i` of [`ExcitonStates::vectors`] holds the site coefficients of the state with
/// energy `energies()[i]`. The order is whatever the eigensolver produced; call
/// [`ExcitonStates::sorted`] when an ascending order is needed.
#[derive(Debug, Clone, PartialEq)]
pub struct ExcitonStates {
    energies: Vec<f64>,
    vectors: DMatrix<f64>,
}

impl ExcitonStates {
    pub fn diagonalize(hamiltonian: &Hamiltonian) -> Self {
        trace!(sites = hamiltonian.sites(), "Diagonalizing Hamiltonian");
        let eigen = SymmetricEigen::new(hamiltonian.matrix().clone());
        Self {
            energies: eigen.eigenvalues.iter().copied().collect(),
            vectors: eigen.eigenvectors,
        }
    }

    pub fn len(&self) -> usize {
        self.energies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.energies.is_empty()
    }

    /// Number of sites, i.e. the length of each eigenvector.
    pub fn sites(&self) -> usize {
        self.vectors.nrows()
    }

    pub fn energies(&self) -> &[f64] {
        &self.energies
    }

    pub fn vectors(&self) -> &DMatrix<f64> {
        &self.vectors
    }

    pub fn vector(&self, state: usize) -> DVectorView<'_, f64> {
        self.vectors.column(state)
    }

    pub fn is_sorted(&self) -> bool {
        self.energies.windows(2).all(|w| w[0] <= w[1])
    }

    /// Reorders states by ascending energy, carrying the eigenvector columns along.
    pub fn sorted(self) -> Self {
        let mut order: Vec<usize> = (0..self.energies.len()).collect();
        order.sort_by(|&a, &b| {
            self.energies[a]
                .partial_cmp(&self.energies[b])
                .unwrap_or(Ordering::Equal)
        });

        let energies = order.iter().map(|&i| self.energies[i]).collect();
        let vectors = DMatrix::from_fn(self.vectors.nrows(), order.len(), |row, col| {
            self.vectors[(row, order[col])]
        });
        Self { energies, vectors }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::exciton::hamiltonian::{
        ChainParameters, ChainTopology, analytic_chain_energies,
    };
    use std::f64::consts::FRAC_1_SQRT_2;

    const TOLERANCE: f64 = 1e-8;

    fn states_for(params: &ChainParameters) -> ExcitonStates {
        ExcitonStates::diagonalize(&Hamiltonian::chain(params).unwrap()).sorted()
    }

    #[test]
    fn two_oscillators_split_symmetrically_around_site_energy() {
        let states = states_for(&ChainParameters::linear(2, 17000.0, -100.0));
        assert!((states.energies()[0] - 16900.0).abs() < TOLERANCE);
        assert!((states.energies()[1] - 17100.0).abs() < TOLERANCE);

        let lower = states.vector(0);
        assert!((lower[0].abs() - FRAC_1_SQRT_2).abs() < TOLERANCE);
        assert!((lower[0] - lower[1]).abs() < TOLERANCE);

        let upper = states.vector(1);
        assert!((upper[0].abs() - FRAC_1_SQRT_2).abs() < TOLERANCE);
        assert!((upper[0] + upper[1]).abs() < TOLERANCE);
    }

    #[test]
    fn eigenvalues_match_closed_form_for_linear_chains() {
        for sites in 1..=15 {
            let params = ChainParameters::linear(sites, 100.0, -7.5);
            let states = states_for(&params);
            let mut expected = analytic_chain_energies(&params);
            expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
            for (got, want) in states.energies().iter().zip(&expected) {
                assert!((got - want).abs() < TOLERANCE, "N={sites}: {got} vs {want}");
            }
        }
    }

    #[test]
    fn eigenvalues_match_closed_form_for_rings() {
        let params = ChainParameters {
            sites: 8,
            site_energy: 0.0,
            coupling: 1.0,
            topology: ChainTopology::Ring,
        };
        let states = states_for(&params);
        let mut expected = analytic_chain_energies(&params);
        expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
        for (got, want) in states.energies().iter().zip(&expected) {
            assert!((got - want).abs() < TOLERANCE);
        }
    }

    #[test]
    fn eigenvectors_are_orthonormal_and_satisfy_eigen_equation() {
        let params = ChainParameters::linear(6, 3.0, 0.75);
        let h = Hamiltonian::chain(&params).unwrap();
        let states = ExcitonStates::diagonalize(&h);
        let v = states.vectors();

        let gram = v.transpose() * v;
        assert!((gram - DMatrix::identity(6, 6)).norm() < TOLERANCE);

        for (i, &energy) in states.energies().iter().enumerate() {
            let residual = h.matrix() * states.vector(i) - states.vector(i) * energy;
            assert!(residual.norm() < TOLERANCE);
        }
    }

    #[test]
    fn sorting_keeps_vectors_paired_with_energies() {
        let h = Hamiltonian::chain(&ChainParameters::linear(5, 0.0, 2.0)).unwrap();
        let sorted = ExcitonStates::diagonalize(&h).sorted();
        assert!(sorted.is_sorted());
        assert_eq!(sorted.len(), 5);
        assert_eq!(sorted.sites(), 5);
        for (i, &energy) in sorted.energies().iter().enumerate() {
            let residual = h.matrix() * sorted.vector(i) - sorted.vector(i) * energy;
            assert!(residual.norm() < TOLERANCE);
        }
    }
}
