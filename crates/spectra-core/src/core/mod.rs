//! # Core Module
//!
//! Stateless numerical building blocks: the Fourier convention layer, the exciton
//! Hamiltonian and its eigenstates, spectrum assembly, and tabular I/O.
//!
//! ## Architecture
//!
//! - **Fourier transforms** ([`fourier`]) - forward/inverse DFT with an explicit sign
//!   and normalization convention, frequency axes and test signals
//! - **Exciton model** ([`exciton`]) - chain Hamiltonians, diagonalization and
//!   transition-dipole weights
//! - **Spectra** ([`spectrum`]) - frequency windows, stick spectra and lineshape
//!   broadening
//! - **Tables** ([`io`]) - CSV output of results and CSV input of custom Hamiltonians
//!
//! The heavy lifting is delegated: `rustfft` computes the transforms and
//! `nalgebra::SymmetricEigen` diagonalizes. This module pins down the conventions around
//! those calls so results do not depend on library defaults.

pub mod exciton;
pub mod fourier;
pub mod io;
pub mod spectrum;
