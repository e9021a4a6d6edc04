use representation::FullyMeshedNet;

use crate::{
    activation::activation_symbol,
    template::{Placeholders, Value},
};

/// Name of the template `FullyMeshedNetEncoder`'s placeholders are meant for.
pub const FULLY_MESHED_NET_TEMPLATE: &str = "FullyMeshedNet";

/// Extracts the fields of a `FullyMeshedNet` into template placeholders.
///
/// Sequences are copied as they are: their lengths are not checked against the topology.
pub struct FullyMeshedNetEncoder;

impl FullyMeshedNetEncoder {
    /// Encodes `net` into placeholders.
    ///
    /// # Arguments
    /// * `net` - The network to encode.
    ///
    /// # Returns
    /// The placeholders of the `FullyMeshedNet` template.
    pub fn encode(net: &FullyMeshedNet) -> Placeholders {
        let mut placeholders = Placeholders::new();

        placeholders.insert("iterationCount", Value::Int(net.iteration_count()));
        placeholders.insert("inputCount", Value::Int(net.input_count()));
        placeholders.insert("outputCount", Value::Int(net.output_count()));
        placeholders.insert("hiddenNodeCount", Value::Int(net.hidden_node_count()));
        placeholders.insert("biases", Value::Floats(net.biases().to_vec()));
        placeholders.insert("weights", Value::Floats(net.weights().to_vec()));
        placeholders.insert("randomBiases", Value::Bool(net.random_biases()));

        let symbol = activation_symbol(net.activation_function());
        placeholders.insert("activationFunction", Value::Symbol(symbol.to_string()));

        placeholders
    }
}
