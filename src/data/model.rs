use std::collections::BTreeSet;
use std::fmt;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Column names
// ---------------------------------------------------------------------------

/// Name of the binary label column appended after the features.
pub const LABEL_COLUMN: &str = "Diagnosis";

/// The 30 feature columns of the diagnostic dataset, in source order.
pub const FEATURE_NAMES: [&str; 30] = [
    "mean radius",
    "mean texture",
    "mean perimeter",
    "mean area",
    "mean smoothness",
    "mean compactness",
    "mean concavity",
    "mean concave points",
    "mean symmetry",
    "mean fractal dimension",
    "radius error",
    "texture error",
    "perimeter error",
    "area error",
    "smoothness error",
    "compactness error",
    "concavity error",
    "concave points error",
    "symmetry error",
    "fractal dimension error",
    "worst radius",
    "worst texture",
    "worst perimeter",
    "worst area",
    "worst smoothness",
    "worst compactness",
    "worst concavity",
    "worst concave points",
    "worst symmetry",
    "worst fractal dimension",
];

// ---------------------------------------------------------------------------
// Diagnosis – the label value of one row
// ---------------------------------------------------------------------------

/// Binary diagnosis label. The discriminants are the source encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Diagnosis {
    Malignant = 0,
    Benign = 1,
}

impl Diagnosis {
    /// Both labels in ascending code order.
    pub const ALL: [Diagnosis; 2] = [Diagnosis::Malignant, Diagnosis::Benign];

    pub fn code(self) -> i64 {
        self as i64
    }

    /// Human readable name used by the distribution view.
    pub fn label(self) -> &'static str {
        match self {
            Diagnosis::Malignant => "Malignant",
            Diagnosis::Benign => "Benign",
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Diagnosis::Malignant),
            1 => Some(Diagnosis::Benign),
            _ => None,
        }
    }
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete, immutable table
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq)]
pub enum DatasetError {
    #[error("dataset has no rows")]
    Empty,
    #[error("{names} column names given for {columns} columns")]
    NameCount { names: usize, columns: usize },
    #[error("column '{name}' has {len} values but there are {rows} labels")]
    ColumnLength { name: String, len: usize, rows: usize },
    #[error("duplicate column name '{0}'")]
    DuplicateColumn(String),
    #[error("feature column may not be named 'Diagnosis'")]
    ReservedName,
    #[error("feature columns differ from the diagnostic feature set")]
    FeatureNames,
    #[error("row {row}: unknown diagnosis code {code}")]
    UnknownLabel { row: usize, code: i64 },
}

/// Feature table plus diagnosis labels, stored column-major.
///
/// There are no mutating methods: once built, the column set and row count
/// are fixed for the lifetime of the value.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    feature_names: Vec<String>,
    features: Vec<Vec<f64>>,
    diagnosis: Vec<Diagnosis>,
}

impl Dataset {
    /// Build a dataset from named feature columns and one label per row.
    pub fn new(
        feature_names: Vec<String>,
        features: Vec<Vec<f64>>,
        diagnosis: Vec<Diagnosis>,
    ) -> Result<Self, DatasetError> {
        if diagnosis.is_empty() {
            return Err(DatasetError::Empty);
        }
        if feature_names.len() != features.len() {
            return Err(DatasetError::NameCount {
                names: feature_names.len(),
                columns: features.len(),
            });
        }
        let mut seen = BTreeSet::new();
        for (name, column) in feature_names.iter().zip(&features) {
            if name == LABEL_COLUMN {
                return Err(DatasetError::ReservedName);
            }
            if !seen.insert(name.as_str()) {
                return Err(DatasetError::DuplicateColumn(name.clone()));
            }
            if column.len() != diagnosis.len() {
                return Err(DatasetError::ColumnLength {
                    name: name.clone(),
                    len: column.len(),
                    rows: diagnosis.len(),
                });
            }
        }
        Ok(Dataset {
            feature_names,
            features,
            diagnosis,
        })
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.diagnosis.len()
    }

    /// Feature column names (excludes the label).
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// All column names: features first, then [`LABEL_COLUMN`].
    pub fn column_names(&self) -> Vec<String> {
        let mut names = self.feature_names.clone();
        names.push(LABEL_COLUMN.to_string());
        names
    }

    pub fn n_columns(&self) -> usize {
        self.feature_names.len() + 1
    }

    /// Values of one feature column.
    pub fn feature(&self, name: &str) -> Option<&[f64]> {
        self.feature_names
            .iter()
            .position(|n| n == name)
            .map(|i| self.features[i].as_slice())
    }

    /// Values of any column, the label column encoded as 0.0 / 1.0.
    pub fn column(&self, name: &str) -> Option<Vec<f64>> {
        if name == LABEL_COLUMN {
            return Some(self.label_codes());
        }
        self.feature(name).map(<[f64]>::to_vec)
    }

    pub fn diagnosis(&self) -> &[Diagnosis] {
        &self.diagnosis
    }

    pub fn label_codes(&self) -> Vec<f64> {
        self.diagnosis.iter().map(|d| d.code() as f64).collect()
    }

    /// One row in [`Dataset::column_names`] order.
    pub fn row(&self, index: usize) -> Option<Vec<f64>> {
        let label = self.diagnosis.get(index)?;
        let mut values: Vec<f64> = self.features.iter().map(|col| col[index]).collect();
        values.push(label.code() as f64);
        Some(values)
    }

    /// Values of `name` restricted to rows carrying `label`.
    pub fn feature_by_diagnosis(&self, name: &str, label: Diagnosis) -> Option<Vec<f64>> {
        let values = self.feature(name)?;
        Some(
            values
                .iter()
                .zip(&self.diagnosis)
                .filter(|(_, d)| **d == label)
                .map(|(v, _)| *v)
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny() -> Dataset {
        Dataset::new(
            vec!["a".into(), "b".into()],
            vec![vec![1.0, 2.0, 3.0], vec![10.0, 20.0, 30.0]],
            vec![Diagnosis::Malignant, Diagnosis::Benign, Diagnosis::Benign],
        )
        .unwrap()
    }

    #[test]
    fn test_diagnosis_codes_round_trip() {
        for d in Diagnosis::ALL {
            assert_eq!(Diagnosis::from_code(d.code()), Some(d));
        }
        assert_eq!(Diagnosis::from_code(2), None);
        assert_eq!(Diagnosis::Malignant.label(), "Malignant");
        assert_eq!(Diagnosis::Benign.label(), "Benign");
    }

    #[test]
    fn test_columns_and_rows() {
        let ds = tiny();
        assert_eq!(ds.n_rows(), 3);
        assert_eq!(ds.n_columns(), 3);
        assert_eq!(ds.column_names(), vec!["a", "b", LABEL_COLUMN]);
        assert_eq!(ds.row(1), Some(vec![2.0, 20.0, 1.0]));
        assert_eq!(ds.row(3), None);
        assert_eq!(ds.column(LABEL_COLUMN), Some(vec![0.0, 1.0, 1.0]));
        assert_eq!(ds.feature("missing"), None);
    }

    #[test]
    fn test_feature_by_diagnosis() {
        let ds = tiny();
        assert_eq!(
            ds.feature_by_diagnosis("b", Diagnosis::Benign),
            Some(vec![20.0, 30.0])
        );
    }

    #[test]
    fn test_shape_validation() {
        let err = Dataset::new(vec!["a".into()], vec![vec![1.0]], vec![]).unwrap_err();
        assert_eq!(err, DatasetError::Empty);

        let err = Dataset::new(
            vec!["a".into()],
            vec![vec![1.0, 2.0]],
            vec![Diagnosis::Benign],
        )
        .unwrap_err();
        assert!(matches!(err, DatasetError::ColumnLength { len: 2, rows: 1, .. }));

        let err = Dataset::new(
            vec!["a".into(), "a".into()],
            vec![vec![1.0], vec![2.0]],
            vec![Diagnosis::Benign],
        )
        .unwrap_err();
        assert_eq!(err, DatasetError::DuplicateColumn("a".into()));

        let err = Dataset::new(
            vec![LABEL_COLUMN.into()],
            vec![vec![1.0]],
            vec![Diagnosis::Benign],
        )
        .unwrap_err();
        assert_eq!(err, DatasetError::ReservedName);
    }

    #[test]
    fn test_label_error_names_row_and_code() {
        let err = DatasetError::UnknownLabel { row: 7, code: 3 };
        assert_eq!(err.to_string(), "row 7: unknown diagnosis code 3");
    }
}
