mod activation;
mod fully_meshed_net;
mod representation;

pub use activation::ActivationFunction;
pub use fully_meshed_net::{FullyMeshedNet, FullyMeshedNetBuilder};
pub use representation::Representation;
