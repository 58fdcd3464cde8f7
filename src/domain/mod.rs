// Domain layer: the bit string model and the random source port.

pub mod model;
pub mod ports;
