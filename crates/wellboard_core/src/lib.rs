pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod workflow;

pub use catalog::{find_goal, wellness_goals};
pub use config::WellboardConfig;
pub use error::ValidationError;
pub use model::{Difficulty, Gender, Goal, GoalCategory, Profile, Tip};
pub use store::{NullStore, SessionStore, StateSnapshot, StorageKey};
pub use workflow::{AppState, Command, GenerationTicket, Workflow, WorkflowStep};
