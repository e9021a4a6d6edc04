use representation::ActivationFunction;

pub const SIGMOID_SYMBOL: &str = "ActivationFunction::kSigmoid";
pub const TANH_SYMBOL: &str = "ActivationFunction::kTanh";
pub const RELU_SYMBOL: &str = "ActivationFunction::kRelu";

/// The symbol used for activation functions the C++ runtime has no enumerator for.
///
/// The runtime evaluates unknown functions as ReLU, so these map to the same symbol.
pub const DEFAULT_SYMBOL: &str = RELU_SYMBOL;

/// Maps an activation function to its enumerator in the C++ runtime.
///
/// # Arguments
/// * `activation_function` - The function to map.
///
/// # Returns
/// The qualified C++ enumerator, `DEFAULT_SYMBOL` for functions without one.
pub fn activation_symbol(activation_function: ActivationFunction) -> &'static str {
    match activation_function {
        ActivationFunction::Sigmoid => SIGMOID_SYMBOL,
        ActivationFunction::Tanh => TANH_SYMBOL,
        ActivationFunction::Relu => RELU_SYMBOL,
        unsupported => {
            log::debug!("no C++ enumerator for {unsupported:?}, falling back to ReLU");
            DEFAULT_SYMBOL
        }
    }
}
