// Infrastructure layer - external dependencies and adapters
pub mod cdf_writer;
pub mod config;
pub mod vires_repository;
