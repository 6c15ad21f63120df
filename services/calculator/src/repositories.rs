//! Repositories for database operations

pub mod calculation;

pub use calculation::CalculationRepository;
