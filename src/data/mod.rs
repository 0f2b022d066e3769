/// Data layer: the table and its bundled source.
///
/// Architecture:
/// ```text
///   smartcore breast_cancer (row-major f32, u32 targets)
///                   │
///                   ▼
///             ┌──────────┐
///             │ bundled  │  transpose, widen, map target codes
///             └──────────┘
///                   │
///                   ▼
///             ┌───────────┐
///             │  Dataset  │  30 features + Diagnosis, immutable
///             └───────────┘
/// ```

pub mod bundled;
pub mod model;
