use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// The three exchanges the client has with the forecasting service.
/// Each kind owns exactly one in-flight request slot.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumIter,
)]
pub enum OperationKind {
    #[strum(to_string = "Health Check")]
    Health,
    #[strum(to_string = "Fit Model")]
    Fit,
    #[strum(to_string = "Predict")]
    Predict,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn labels_match_user_facing_operation_names() {
        let labels: Vec<String> = OperationKind::iter().map(|k| k.to_string()).collect();
        assert_eq!(labels, vec!["Health Check", "Fit Model", "Predict"]);
    }
}
