// Domain layer: option model and the host port. No dependencies beyond std/serde.

pub mod model;
pub mod ports;
