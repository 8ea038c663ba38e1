use super::eigen::ExcitonStates;
use super::hamiltonian::HamiltonianError;
use nalgebra::DVector;
use serde::Serialize;

/// Per-site transition dipoles projected onto the field polarization.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionDipoles {
    components: DVector<f64>,
}

impl TransitionDipoles {
    /// A unit dipole on every site, all parallel to the field.
    pub fn uniform(sites: usize) -> Result<Self, HamiltonianError> {
        if sites == 0 {
            return Err(HamiltonianError::NoSites);
        }
        Ok(Self {
            components: DVector::from_element(sites, 1.0),
        })
    }

    pub fn from_components(components: Vec<f64>) -> Result<Self, HamiltonianError> {
        if components.is_empty() {
            return Err(HamiltonianError::NoSites);
        }
        if let Some(i) = components.iter().position(|c| !c.is_finite()) {
            return Err(HamiltonianError::NonFinite { row: i, col: 0 });
        }
        Ok(Self {
            components: DVector::from_vec(components),
        })
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn components(&self) -> &[f64] {
        self.components.as_slice()
    }
}

/// One optical transition: an eigenstate, its energy and its dipole weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transition {
    pub state: usize,
    pub energy: f64,
    pub weight: f64,
}

/// Projects the dipoles onto every eigenstate.
///
/// The weight of state `i` is `(Σ_n c_n(i)·μ_n)² / N`. With uniform unit dipoles the
/// weights of all states sum to one.
pub fn transitions(
    states: &ExcitonStates,
    dipoles: &TransitionDipoles,
) -> Result<Vec<Transition>, HamiltonianError> {
    let sites = states.sites();
    if dipoles.len() != sites {
        return Err(HamiltonianError::SiteCountMismatch {
            expected: sites,
            actual: dipoles.len(),
        });
    }

    Ok(states
        .energies()
        .iter()
        .enumerate()
        .map(|(state, &energy)| {
            let projection = states.vector(state).dot(&dipoles.components);
            Transition {
                state,
                energy,
                weight: projection * projection / sites as f64,
            }
        })
        .collect())
}

pub fn total_weight(transitions: &[Transition]) -> f64 {
    transitions.iter().map(|t| t.weight).sum()
}

/// The transition with the largest weight; ties go to the first one.
pub fn brightest(transitions: &[Transition]) -> Option<&Transition> {
    transitions
        .iter()
        .fold(None, |best: Option<&Transition>, t| match best {
            Some(b) if b.weight >= t.weight => Some(b),
            _ => Some(t),
        })
}
