use serde::{Deserialize, Serialize};

use crate::ActivationFunction;

/// A fully connected recurrent network: every node feeds every non-input node, and the
/// network state is updated `iteration_count` times per evaluation.
///
/// The lengths of `weights` and `biases` are an invariant of whoever produced the network,
/// this type stores them as given.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FullyMeshedNet {
    iteration_count: usize,
    input_count: usize,
    output_count: usize,
    hidden_node_count: usize,
    weights: Vec<f32>,
    biases: Vec<f32>,
    random_biases: bool,
    activation_function: ActivationFunction,
}

impl FullyMeshedNet {
    /// Starts building a new `FullyMeshedNet`.
    ///
    /// # Returns
    /// A builder with every count set to zero, no weights nor biases and the default
    /// activation function.
    pub fn builder() -> FullyMeshedNetBuilder {
        FullyMeshedNetBuilder::default()
    }

    /// Returns how many state updates are made per evaluation.
    pub fn iteration_count(&self) -> usize {
        self.iteration_count
    }

    pub fn input_count(&self) -> usize {
        self.input_count
    }

    pub fn output_count(&self) -> usize {
        self.output_count
    }

    pub fn hidden_node_count(&self) -> usize {
        self.hidden_node_count
    }

    /// Returns the connection weights in the producer's order.
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// Returns the biases of the non-input nodes in the producer's order.
    pub fn biases(&self) -> &[f32] {
        &self.biases
    }

    /// Returns whether biases are randomly perturbed on every update.
    pub fn random_biases(&self) -> bool {
        self.random_biases
    }

    pub fn activation_function(&self) -> ActivationFunction {
        self.activation_function
    }
}

/// Builds `FullyMeshedNet`s field by field.
#[derive(Debug, Default)]
pub struct FullyMeshedNetBuilder {
    net: FullyMeshedNet,
}

impl FullyMeshedNetBuilder {
    pub fn iteration_count(mut self, iteration_count: usize) -> Self {
        self.net.iteration_count = iteration_count;
        self
    }

    /// Sets the topology of the network.
    ///
    /// # Arguments
    /// * `input_count` - The amount of input nodes.
    /// * `output_count` - The amount of output nodes.
    /// * `hidden_node_count` - The amount of hidden nodes.
    pub fn topology(
        mut self,
        input_count: usize,
        output_count: usize,
        hidden_node_count: usize,
    ) -> Self {
        self.net.input_count = input_count;
        self.net.output_count = output_count;
        self.net.hidden_node_count = hidden_node_count;
        self
    }

    pub fn weights<I>(mut self, weights: I) -> Self
    where
        I: IntoIterator<Item = f32>,
    {
        self.net.weights = weights.into_iter().collect();
        self
    }

    pub fn biases<I>(mut self, biases: I) -> Self
    where
        I: IntoIterator<Item = f32>,
    {
        self.net.biases = biases.into_iter().collect();
        self
    }

    pub fn random_biases(mut self, random_biases: bool) -> Self {
        self.net.random_biases = random_biases;
        self
    }

    pub fn activation_function(mut self, activation_function: ActivationFunction) -> Self {
        self.net.activation_function = activation_function;
        self
    }

    pub fn build(self) -> FullyMeshedNet {
        self.net
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_sequences_verbatim() {
        // Lengths deliberately disagree with the topology.
        let net = FullyMeshedNet::builder()
            .iteration_count(4)
            .topology(2, 1, 3)
            .weights([0.3, -1.5, 2.0])
            .biases([0.0, 7.25])
            .random_biases(true)
            .activation_function(ActivationFunction::Sigmoid)
            .build();

        assert_eq!(net.iteration_count(), 4);
        assert_eq!(net.input_count(), 2);
        assert_eq!(net.output_count(), 1);
        assert_eq!(net.hidden_node_count(), 3);
        assert_eq!(net.weights(), &[0.3, -1.5, 2.0]);
        assert_eq!(net.biases(), &[0.0, 7.25]);
        assert!(net.random_biases());
        assert_eq!(net.activation_function(), ActivationFunction::Sigmoid);
    }

    #[test]
    fn default_builder_is_empty_relu_net() {
        let net = FullyMeshedNet::builder().build();

        assert_eq!(net.iteration_count(), 0);
        assert!(net.weights().is_empty());
        assert!(net.biases().is_empty());
        assert!(!net.random_biases());
        assert_eq!(net.activation_function(), ActivationFunction::Relu);
    }
}
