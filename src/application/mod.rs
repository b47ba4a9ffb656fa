pub mod use_cases;

pub use use_cases::combinatorial::CombinationUseCase;
pub use use_cases::scenario_cases::ScenarioUseCase;
