// Domain layer: survey models and the advice port. No HTTP or config types here.

pub mod model;
pub mod ports;
