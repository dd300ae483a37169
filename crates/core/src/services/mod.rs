pub mod aggregation_service;
pub mod generator_service;
pub mod range_service;
pub mod summary_service;
