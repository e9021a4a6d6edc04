use serde::{Deserialize, Serialize};

use crate::FullyMeshedNet;

/// An evolvable artifact, as handed over by the component that produces it.
///
/// The set of variants is closed: consumers match on it exhaustively, so a new kind of
/// representation has to be handled everywhere before the workspace builds again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Representation {
    FullyMeshedNet(FullyMeshedNet),
    /// A representation kind this build does not model.
    #[serde(other)]
    Unknown,
}

impl From<FullyMeshedNet> for Representation {
    fn from(value: FullyMeshedNet) -> Self {
        Self::FullyMeshedNet(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ActivationFunction;

    #[test]
    fn deserializes_tagged_fully_meshed_net() {
        let json = r#"{
            "type": "fully_meshed_net",
            "iteration_count": 10,
            "input_count": 2,
            "output_count": 1,
            "hidden_node_count": 3,
            "weights": [0.5, -0.25],
            "biases": [0.1],
            "random_biases": true,
            "activation_function": "tanh"
        }"#;

        let repr: Representation = serde_json::from_str(json).unwrap();
        let Representation::FullyMeshedNet(net) = repr else {
            panic!("expected a fully meshed net, got {repr:?}");
        };

        assert_eq!(net.iteration_count(), 10);
        assert_eq!(net.input_count(), 2);
        assert_eq!(net.output_count(), 1);
        assert_eq!(net.hidden_node_count(), 3);
        assert_eq!(net.weights(), &[0.5, -0.25]);
        assert_eq!(net.biases(), &[0.1]);
        assert!(net.random_biases());
        assert_eq!(net.activation_function(), ActivationFunction::Tanh);
    }

    #[test]
    fn unrecognized_tag_becomes_unknown() {
        let json = r#"{ "type": "elman_net", "layers": 4 }"#;
        let repr: Representation = serde_json::from_str(json).unwrap();
        assert_eq!(repr, Representation::Unknown);
    }

    #[test]
    fn unrecognized_activation_becomes_other() {
        let json = r#"{
            "type": "fully_meshed_net",
            "iteration_count": 1,
            "input_count": 1,
            "output_count": 1,
            "hidden_node_count": 0,
            "weights": [],
            "biases": [],
            "random_biases": false,
            "activation_function": "softsign"
        }"#;

        let repr: Representation = serde_json::from_str(json).unwrap();
        let Representation::FullyMeshedNet(net) = repr else {
            panic!("expected a fully meshed net, got {repr:?}");
        };

        assert_eq!(net.activation_function(), ActivationFunction::Other);
    }
}
