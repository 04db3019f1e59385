use thiserror::Error;

/// Errors that can occur while training or scoring the model
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrainError {
    #[error("Invalid training configuration: {0}")]
    InvalidConfig(String),

    #[error("Cannot train on an empty matrix: {users} users, {items} items")]
    EmptyMatrix { users: usize, items: usize },

    #[error(
        "Shape mismatch: interactions have {interaction_items} items \
         but item features have {feature_items} rows"
    )]
    ShapeMismatch {
        interaction_items: usize,
        feature_items: usize,
    },

    #[error("Interaction matrix has no observed interactions")]
    NoInteractions,

    #[error("Training diverged: non-finite parameters after epoch {epoch}")]
    Diverged { epoch: usize },

    #[error("{kind} index {index} out of range (model knows {len})")]
    IndexOutOfRange {
        kind: &'static str,
        index: usize,
        len: usize,
    },
}
