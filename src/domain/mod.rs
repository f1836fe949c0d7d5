// Domain layer: the shared value types and the Script port the engine drives.

pub mod model;
pub mod ports;
