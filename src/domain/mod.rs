// Domain layer: models and ports (interfaces). No dependencies on the
// adapter layers.

pub mod model;
pub mod ports;
