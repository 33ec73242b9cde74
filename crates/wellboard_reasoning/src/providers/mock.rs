//! Mock provider: deterministic canned JSON, no network or API key needed.

use crate::llm::TextGenerator;
use anyhow::Result;
use std::time::Duration;

const CANNED_TIPS: &str = r#"```json
[
  {
    "title": "Ten-Minute Walk After Meals",
    "shortDescription": "A short walk after eating steadies blood sugar and aids digestion.",
    "category": "fitness",
    "icon": "🚶",
    "difficulty": "easy",
    "estimatedTime": "10 minutes",
    "benefits": ["Steadier energy", "Better digestion", "More daily movement"],
    "tags": ["walking", "habit"]
  },
  {
    "title": "Protein at Breakfast",
    "shortDescription": "Starting the day with protein keeps you full and cuts snacking.",
    "category": "nutrition",
    "icon": "🍳",
    "difficulty": "easy",
    "estimatedTime": "5 minutes",
    "benefits": ["Longer satiety", "Muscle support"],
    "tags": ["breakfast", "protein"]
  },
  {
    "title": "Screens Off at 10pm",
    "shortDescription": "A fixed cut-off for devices helps your body wind down for sleep.",
    "category": "sleep",
    "icon": "🌙",
    "difficulty": "medium",
    "estimatedTime": "1 hour before bed",
    "benefits": ["Faster sleep onset", "Deeper sleep"],
    "tags": ["sleep", "screens"]
  },
  {
    "title": "Box Breathing Break",
    "shortDescription": "Four slow counts in, hold, out, hold. Repeat when stress spikes.",
    "category": "stress-management",
    "icon": "🫁",
    "difficulty": "easy",
    "estimatedTime": "3 minutes",
    "benefits": ["Lower heart rate", "Calmer focus"],
    "tags": ["breathing", "stress"]
  },
  {
    "title": "Weekly Strength Circuit",
    "shortDescription": "Two short full-body circuits a week build strength and metabolism.",
    "category": "fitness",
    "icon": "🏋️",
    "difficulty": "hard",
    "estimatedTime": "25 minutes",
    "benefits": ["Stronger muscles", "Higher resting metabolism"],
    "tags": ["strength", "circuit"]
  }
]
```"#;

const CANNED_DETAIL: &str = r#"{
  "fullDescription": "This habit works because it is small enough to repeat every day. Repetition turns it into routine, and routine is what produces lasting change.",
  "steps": [
    "Step 1: Pick a fixed time of day",
    "Step 2: Prepare anything you need the evening before",
    "Step 3: Start with the easiest version",
    "Step 4: Track each day you complete it",
    "Step 5: Increase the challenge after two weeks"
  ]
}"#;

#[derive(Debug, Clone, Default)]
pub struct MockProvider {
    latency: Duration,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait::async_trait]
impl TextGenerator for MockProvider {
    async fn generate_text(&self, prompt: &str) -> Result<String> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        // Detail prompts ask for a fullDescription object.
        if prompt.contains("\"fullDescription\"") {
            Ok(CANNED_DETAIL.to_string())
        } else {
            Ok(CANNED_TIPS.to_string())
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
