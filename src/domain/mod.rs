// Domain layer - core models of the FAC explorer
pub mod selection;
pub mod series;
pub mod view;
