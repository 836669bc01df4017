// Domain layer: configuration records and adapter ports. Only serde beyond std.

pub mod model;
pub mod ports;
