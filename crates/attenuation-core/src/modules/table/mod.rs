mod parser;
mod wcsim;

pub use parser::parse_table_source;

use crate::domain::{Effect, TuningError, TuningResult};
use std::fs;
use std::path::{Path, PathBuf};

pub const TABLE_COLUMN_COUNT: usize = 4;

/// One tabulated sample: photon energy and the three loss lengths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttenuationRow {
    pub energy_ev: f64,
    pub absorption_cm: f64,
    pub scattering_cm: f64,
    pub mie_cm: f64,
}

impl AttenuationRow {
    pub const fn new(energy_ev: f64, absorption_cm: f64, scattering_cm: f64, mie_cm: f64) -> Self {
        Self {
            energy_ev,
            absorption_cm,
            scattering_cm,
            mie_cm,
        }
    }

    pub fn length_cm(&self, effect: Effect) -> f64 {
        match effect {
            Effect::Absorption => self.absorption_cm,
            Effect::Rayleigh => self.scattering_cm,
            Effect::Mie => self.mie_cm,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("failed to read attenuation table '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("line {line}: expected 4 columns, found {found}")]
    ColumnCount { line: usize, found: usize },
    #[error("line {line}: invalid number '{token}'")]
    InvalidNumber { line: usize, token: String },
    #[error("attenuation table needs at least 2 rows, found {found}")]
    TooFewRows { found: usize },
    #[error("row {row}: values must be finite and lengths positive")]
    InvalidValue { row: usize },
    #[error("row {row}: energy {energy_ev} eV is below the previous row")]
    Unsorted { row: usize, energy_ev: f64 },
}

impl From<TableError> for TuningError {
    fn from(error: TableError) -> Self {
        let placeholder = match &error {
            TableError::Read { .. } => {
                return TuningError::io_system("IO.TABLE_READ", error.to_string());
            }
            TableError::ColumnCount { .. } | TableError::InvalidNumber { .. } => {
                "INPUT.TABLE_PARSE"
            }
            TableError::TooFewRows { .. }
            | TableError::InvalidValue { .. }
            | TableError::Unsorted { .. } => "INPUT.TABLE_SHAPE",
        };
        TuningError::input_validation(placeholder, error.to_string())
    }
}

/// Immutable per-energy attenuation table, sorted by ascending energy.
///
/// Columns are stored separately so interpolation can run on plain slices.
#[derive(Debug, Clone, PartialEq)]
pub struct AttenuationTable {
    energies_ev: Vec<f64>,
    absorption_cm: Vec<f64>,
    scattering_cm: Vec<f64>,
    mie_cm: Vec<f64>,
}

impl AttenuationTable {
    pub fn from_rows(rows: &[AttenuationRow]) -> Result<Self, TableError> {
        if rows.len() < 2 {
            return Err(TableError::TooFewRows { found: rows.len() });
        }

        let mut previous_energy = f64::NEG_INFINITY;
        for (index, row) in rows.iter().enumerate() {
            let lengths = [row.absorption_cm, row.scattering_cm, row.mie_cm];
            let valid = row.energy_ev.is_finite()
                && lengths.iter().all(|length| length.is_finite() && *length > 0.0);
            if !valid {
                return Err(TableError::InvalidValue { row: index + 1 });
            }
            if row.energy_ev < previous_energy {
                return Err(TableError::Unsorted {
                    row: index + 1,
                    energy_ev: row.energy_ev,
                });
            }
            previous_energy = row.energy_ev;
        }

        Ok(Self {
            energies_ev: rows.iter().map(|row| row.energy_ev).collect(),
            absorption_cm: rows.iter().map(|row| row.absorption_cm).collect(),
            scattering_cm: rows.iter().map(|row| row.scattering_cm).collect(),
            mie_cm: rows.iter().map(|row| row.mie_cm).collect(),
        })
    }

    pub fn parse(source: &str) -> Result<Self, TableError> {
        let rows = parse_table_source(source)?;
        Self::from_rows(&rows)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| TableError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::parse(&source)?;
        tracing::info!(
            path = %path.display(),
            rows = table.len(),
            "loaded attenuation table"
        );
        Ok(table)
    }

    /// Loads `path` when given, otherwise returns the built-in WCSim water table.
    pub fn load_or_builtin(path: Option<&Path>) -> TuningResult<Self> {
        match path {
            Some(path) => Ok(Self::load(path)?),
            None => {
                tracing::info!("using built-in WCSim water attenuation table");
                Ok(Self::wcsim_water())
            }
        }
    }

    /// Water absorption, Rayleigh and Mie lengths as coded in WCSim.
    pub fn wcsim_water() -> Self {
        let rows = wcsim::water_rows();
        Self {
            energies_ev: rows.iter().map(|row| row.energy_ev).collect(),
            absorption_cm: rows.iter().map(|row| row.absorption_cm).collect(),
            scattering_cm: rows.iter().map(|row| row.scattering_cm).collect(),
            mie_cm: rows.iter().map(|row| row.mie_cm).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.energies_ev.len()
    }

    pub fn is_empty(&self) -> bool {
        self.energies_ev.is_empty()
    }

    pub fn energies_ev(&self) -> &[f64] {
        &self.energies_ev
    }

    pub fn lengths_cm(&self, effect: Effect) -> &[f64] {
        match effect {
            Effect::Absorption => &self.absorption_cm,
            Effect::Rayleigh => &self.scattering_cm,
            Effect::Mie => &self.mie_cm,
        }
    }

    pub fn row(&self, index: usize) -> Option<AttenuationRow> {
        Some(AttenuationRow::new(
            *self.energies_ev.get(index)?,
            self.absorption_cm[index],
            self.scattering_cm[index],
            self.mie_cm[index],
        ))
    }

    pub fn rows(&self) -> impl Iterator<Item = AttenuationRow> + '_ {
        (0..self.len()).filter_map(|index| self.row(index))
    }

    pub fn energy_range_ev(&self) -> (f64, f64) {
        (self.energies_ev[0], self.energies_ev[self.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::{AttenuationRow, AttenuationTable, TableError};
    use crate::domain::{Effect, TuningError, TuningErrorCategory};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn builtin_water_table_is_sorted_and_complete() {
        let table = AttenuationTable::wcsim_water();
        assert_eq!(table.len(), 60);
        assert_eq!(table.energy_range_ev(), (1.56962, 6.19998));
        assert!(table.energies_ev().windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(table.lengths_cm(Effect::Absorption)[0], 16.1419);
        assert_eq!(table.lengths_cm(Effect::Rayleigh)[59], 488.754);
        assert_eq!(table.lengths_cm(Effect::Mie)[29], 1_250_000.0);
        assert_eq!(
            AttenuationTable::from_rows(&table.rows().collect::<Vec<_>>()).unwrap(),
            table
        );
    }

    #[test]
    fn rows_are_validated() {
        let single = [AttenuationRow::new(2.0, 1.0, 1.0, 1.0)];
        assert!(matches!(
            AttenuationTable::from_rows(&single),
            Err(TableError::TooFewRows { found: 1 })
        ));

        let unsorted = [
            AttenuationRow::new(3.0, 1.0, 1.0, 1.0),
            AttenuationRow::new(2.0, 1.0, 1.0, 1.0),
        ];
        assert!(matches!(
            AttenuationTable::from_rows(&unsorted),
            Err(TableError::Unsorted { row: 2, .. })
        ));

        let negative = [
            AttenuationRow::new(2.0, 1.0, 1.0, 1.0),
            AttenuationRow::new(3.0, -1.0, 1.0, 1.0),
        ];
        assert!(matches!(
            AttenuationTable::from_rows(&negative),
            Err(TableError::InvalidValue { row: 2 })
        ));
    }

    #[test]
    fn load_reads_whitespace_table_from_disk() {
        let temp = TempDir::new().expect("tempdir should be created");
        let path = temp.path().join("attenuation_wcsim.dat");
        fs::write(&path, "2.0 100 200 300\n3.0\t50\t100\t150\n").expect("table should be written");

        let table = AttenuationTable::load(&path).expect("table should load");
        assert_eq!(table.len(), 2);
        assert_eq!(table.row(1), Some(AttenuationRow::new(3.0, 50.0, 100.0, 150.0)));
        assert_eq!(table.row(2), None);
    }

    #[test]
    fn missing_file_maps_to_io_error() {
        let temp = TempDir::new().expect("tempdir should be created");
        let error: TuningError = AttenuationTable::load(temp.path().join("missing.dat"))
            .expect_err("missing table should fail")
            .into();
        assert_eq!(error.category(), TuningErrorCategory::IoSystemError);
        assert_eq!(error.placeholder(), "IO.TABLE_READ");
        assert_eq!(error.exit_code(), 3);
    }

    #[test]
    fn parse_errors_map_to_input_validation() {
        let error: TuningError = AttenuationTable::parse("2.0 1 1\n")
            .expect_err("short row should fail")
            .into();
        assert_eq!(error.placeholder(), "INPUT.TABLE_PARSE");
        assert_eq!(error.message(), "line 1: expected 4 columns, found 3");
    }

    #[test]
    fn builtin_is_used_without_a_path() {
        let table = AttenuationTable::load_or_builtin(None).expect("builtin table");
        assert_eq!(table, AttenuationTable::wcsim_water());
    }
}
