pub mod dto;
pub mod geom;
pub mod lodging;
pub mod places;
