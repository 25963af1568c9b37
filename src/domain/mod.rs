// Domain layer: plain models and the strategy ports. No I/O beyond `std::io::Write` sinks.

pub mod model;
pub mod ports;
