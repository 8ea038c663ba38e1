//! Coupled-oscillator (Frenkel exciton) model of a molecular aggregate.
//!
//! A chain of `N` identical transitions with site energy `v₀` and nearest-neighbour
//! coupling `V` is described in the site basis by a real symmetric Hamiltonian. Its
//! eigenstates are the exciton states; projecting the per-site transition dipoles onto
//! each eigenvector gives the oscillator strength that state carries in the absorption
//! spectrum.
//!
//! - [`hamiltonian`] - building and validating the site-basis matrix
//! - [`eigen`] - dense symmetric diagonalization via `nalgebra`
//! - [`dipole`] - transition dipoles and per-state weights

pub mod dipole;
pub mod eigen;
pub mod hamiltonian;

pub use dipole::{Transition, TransitionDipoles, brightest, total_weight, transitions};
pub use eigen::ExcitonStates;
pub use hamiltonian::{
    ChainParameters, ChainTopology, Hamiltonian, HamiltonianError, analytic_chain_energies,
};
