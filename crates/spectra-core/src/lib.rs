//! # SPECTRA Core Library
//!
//! Discrete Fourier Transforms with a documented sign convention, and absorption
//! spectra of coupled-oscillator (exciton) chains.
//!
//! ## Architecture
//!
//! The library follows a three-layer layout:
//!
//! - **[`core`]: The Foundation.** Pure numerical pieces: the DFT convention layer
//!   (`fourier`), the exciton Hamiltonian and eigenstates (`exciton`), stick and
//!   broadened spectra (`spectrum`), and CSV tables (`io`).
//!
//! - **[`engine`]: Configuration and plumbing.** Validated configuration types with
//!   builders, the aggregated [`engine::error::EngineError`], and progress reporting.
//!
//! - **[`workflows`]: The Public API.** End-to-end procedures: transform a test signal
//!   and check the round trip, compute an absorption spectrum, or sweep the chain
//!   length.
//!
//! ## Example
//!
//! ```
//! use spectra::core::exciton::{ChainParameters, ExcitonStates, Hamiltonian};
//!
//! let h = Hamiltonian::chain(&ChainParameters::linear(2, 17000.0, -100.0)).unwrap();
//! let states = ExcitonStates::diagonalize(&h).sorted();
//! assert!((states.energies()[0] - 16900.0).abs() < 1e-8);
//! assert!((states.energies()[1] - 17100.0).abs() < 1e-8);
//! ```

pub mod core;
pub mod engine;
pub mod workflows;

pub use rustfft::num_complex::Complex64;
