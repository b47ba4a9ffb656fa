pub mod category;
pub mod combination;
pub mod error;
pub mod field_model;
pub mod generation;
pub mod platform;
pub mod scenario_case;
