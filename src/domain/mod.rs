// Domain layer: tick model and the ports (Clock, Document) the updater talks through.

pub mod model;
pub mod ports;
