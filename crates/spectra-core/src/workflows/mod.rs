//! # Workflows Module
//!
//! End-to-end procedures, the entry points a front end calls.
//!
//! - **Transform** ([`transform`]) - build a test signal, transform it forward and back,
//!   and report the round-trip error and conjugate symmetry
//! - **Absorption** ([`absorption`]) - build the exciton Hamiltonian, diagonalize it,
//!   assemble the stick spectrum and optionally broaden it; [`absorption::sweep`] repeats
//!   the diagonalization over a range of chain lengths
//!
//! Every workflow takes a validated configuration from [`crate::engine::config`] and a
//! [`crate::engine::progress::ProgressReporter`].

pub mod absorption;
pub mod transform;
