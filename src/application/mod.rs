// Application layer - use cases and the seams to external collaborators
pub mod explorer_service;
pub mod fac_repository;
pub mod series_encoder;
