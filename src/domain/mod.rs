// Domain layer: wire models and ports (interfaces). Concrete implementations live in adapters.

pub mod model;
pub mod ports;
