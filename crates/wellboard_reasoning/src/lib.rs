pub mod fallback;
pub mod llm;
pub mod normalizer;
pub mod orchestrator;
pub mod prompts;
pub mod providers;
pub mod session;

pub use llm::TextGenerator;
pub use normalizer::{normalize_tip_detail, normalize_tips_list, MAX_TIPS};
pub use orchestrator::{GenerationError, TipGenerator};
pub use providers::create_client;
pub use session::{SessionError, WellnessSession};
