use super::IoError;
use super::traits::TableFile;
use crate::core::exciton::{ExcitonStates, Transition};
use crate::core::spectrum::{BroadenedSpectrum, StickSpectrum};
use std::io::Write;

/// A CSV writer that leaves the header to the caller.
pub(crate) fn csv_writer<W: Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer)
}

impl TableFile for StickSpectrum {
    fn header(&self) -> Vec<String> {
        vec!["frequency".into(), "intensity".into()]
    }

    fn write_to(&self, writer: &mut impl Write) -> Result<(), IoError> {
        let mut wtr = csv_writer(writer);
        wtr.write_record(self.header())?;
        for (frequency, intensity) in self.axis().into_iter().zip(self.intensities()) {
            wtr.serialize((frequency, intensity))?;
        }
        wtr.flush()?;
        Ok(())
    }
}

impl TableFile for BroadenedSpectrum {
    fn header(&self) -> Vec<String> {
        vec!["frequency".into(), "intensity".into()]
    }

    fn write_to(&self, writer: &mut impl Write) -> Result<(), IoError> {
        let mut wtr = csv_writer(writer);
        wtr.write_record(self.header())?;
        for (frequency, intensity) in self.axis().iter().zip(self.intensities()) {
            wtr.serialize((frequency, intensity))?;
        }
        wtr.flush()?;
        Ok(())
    }
}

/// Exciton states alongside their transitions: one row per state with its energy,
/// dipole weight and site coefficients `c0..c{N-1}`.
#[derive(Debug, Clone, Copy)]
pub struct StateTable<'a> {
    pub states: &'a ExcitonStates,
    pub transitions: &'a [Transition],
}

impl TableFile for StateTable<'_> {
    fn header(&self) -> Vec<String> {
        let mut header = vec!["state".to_string(), "energy".into(), "weight".into()];
        header.extend((0..self.states.sites()).map(|site| format!("c{}", site)));
        header
    }

    fn write_to(&self, writer: &mut impl Write) -> Result<(), IoError> {
        let mut wtr = csv_writer(writer);
        wtr.write_record(self.header())?;
        for t in self.transitions {
            let mut record = vec![
                t.state.to_string(),
                t.energy.to_string(),
                t.weight.to_string(),
            ];
            record.extend(self.states.vector(t.state).iter().map(|c| c.to_string()));
            wtr.write_record(&record)?;
        }
        wtr.flush()?;
        Ok(())
    }
}
