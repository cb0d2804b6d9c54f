// Domain layer: core models, ports (interfaces) and the static roster.

pub mod model;
pub mod ports;
pub mod roster;
