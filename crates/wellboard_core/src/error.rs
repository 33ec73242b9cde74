use thiserror::Error;

use crate::model::{MAX_AGE, MAX_GOALS, MIN_AGE};

/// Profile input rejected at the command boundary. No state changes when
/// one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("age {0} is outside the supported range {min}-{max}", min = MIN_AGE, max = MAX_AGE)]
    AgeOutOfRange(u32),

    #[error("at least one wellness goal is required")]
    NoGoals,

    #[error("{0} goals selected, at most {max} are allowed", max = MAX_GOALS)]
    TooManyGoals(usize),

    #[error("goal '{0}' was selected more than once")]
    DuplicateGoal(String),

    #[error("unknown goal '{0}'")]
    UnknownGoal(String),

    #[error("unknown gender '{0}'")]
    UnknownGender(String),
}
