use serde::{Deserialize, Serialize};

/// The nonlinearity applied at every hidden and output node of a network.
///
/// New functions may be added in later versions, so code outside this crate has to handle
/// values it does not know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ActivationFunction {
    Sigmoid,
    Tanh,
    #[default]
    Relu,
    /// A function written by a newer producer that this build cannot name.
    #[serde(other)]
    Other,
}
