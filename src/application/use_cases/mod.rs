pub mod classifier;
pub mod combinatorial;
pub mod enumerator;
pub mod field_detector;
pub mod narrative;
pub mod scenario_cases;
