//! The bundled diagnostic table.
//!
//! Breast Cancer Wisconsin (Diagnostic): 569 rows, 212 malignant and 357
//! benign, as shipped with `smartcore`'s datasets. Features arrive row-major
//! as `f32`; targets use 0 = malignant, 1 = benign.

use smartcore::dataset::breast_cancer;

use super::model::{Dataset, DatasetError, Diagnosis, FEATURE_NAMES};

pub const N_ROWS: usize = 569;
pub const N_MALIGNANT: usize = 212;
pub const N_BENIGN: usize = N_ROWS - N_MALIGNANT;

/// Widen through the shortest decimal form, so `17.99f32` becomes `17.99`
/// rather than `17.989999771118164`.
fn widen(value: f32) -> f64 {
    value.to_string().parse().unwrap_or(f64::from(value))
}

/// Load the bundled dataset.
pub fn load_breast_cancer() -> Result<Dataset, DatasetError> {
    let source = breast_cancer::load_dataset();
    if source.feature_names.iter().map(String::as_str).ne(FEATURE_NAMES) {
        return Err(DatasetError::FeatureNames);
    }
    let n_features = FEATURE_NAMES.len();

    let diagnosis = source
        .target
        .iter()
        .enumerate()
        .map(|(row, &code)| {
            Diagnosis::from_code(i64::from(code))
                .ok_or(DatasetError::UnknownLabel { row, code: i64::from(code) })
        })
        .collect::<Result<Vec<_>, _>>()?;

    // Row-major to column-major; a short buffer yields short columns, which
    // `Dataset::new` rejects.
    let columns: Vec<Vec<f64>> = (0..n_features)
        .map(|c| {
            (0..source.num_samples)
                .filter_map(|r| source.data.get(r * n_features + c))
                .map(|&v| widen(v))
                .collect()
        })
        .collect();

    let dataset = Dataset::new(source.feature_names, columns, diagnosis)?;
    log::debug!(
        "Bundled dataset: {} rows x {} columns",
        dataset.n_rows(),
        dataset.n_columns()
    );
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::LABEL_COLUMN;

    #[test]
    fn test_bundled_shape() {
        let ds = load_breast_cancer().unwrap();
        assert_eq!(ds.n_rows(), N_ROWS);
        assert_eq!(ds.n_columns(), 31);
        assert_eq!(ds.feature_names(), FEATURE_NAMES.as_slice());
        assert_eq!(ds.column_names().last().map(String::as_str), Some(LABEL_COLUMN));
    }

    #[test]
    fn test_bundled_labels() {
        let ds = load_breast_cancer().unwrap();
        let codes = ds.label_codes();
        assert!(codes.iter().all(|&c| c == 0.0 || c == 1.0));
        let malignant = ds
            .diagnosis()
            .iter()
            .filter(|d| **d == Diagnosis::Malignant)
            .count();
        assert_eq!(malignant, N_MALIGNANT);
        assert_eq!(ds.n_rows() - malignant, N_BENIGN);
    }

    #[test]
    fn test_bundled_first_row_matches_source() {
        let ds = load_breast_cancer().unwrap();
        let row = ds.row(0).unwrap();
        assert_eq!(row[..4], [17.99, 10.38, 122.8, 1001.0]);
        assert_eq!(row[30], 0.0);
        assert_eq!(ds.diagnosis()[0], Diagnosis::Malignant);
    }

    #[test]
    fn test_bundled_values_positive_and_separated() {
        let ds = load_breast_cancer().unwrap();
        for name in ds.feature_names() {
            let values = ds.feature(name).unwrap();
            assert!(values.iter().all(|v| v.is_finite() && *v >= 0.0), "{name}");
        }
        let mean = |v: Vec<f64>| v.iter().sum::<f64>() / v.len() as f64;
        let m = mean(ds.feature_by_diagnosis("mean radius", Diagnosis::Malignant).unwrap());
        let b = mean(ds.feature_by_diagnosis("mean radius", Diagnosis::Benign).unwrap());
        assert!(m > b + 3.0, "malignant {m} vs benign {b}");
    }

    #[test]
    fn test_widen_keeps_decimal_value() {
        assert_eq!(widen(17.99), 17.99);
        assert_eq!(widen(0.1184), 0.1184);
        assert_eq!(widen(1001.0), 1001.0);
    }
}
