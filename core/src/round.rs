use std::time::Duration;

pub const DEFAULT_PROMPT_COUNT: u32 = 6;
pub const DEFAULT_ROUND_SECS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    Idle,
    PromptActive,
    Finalizing,
    Complete,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FinalShot {
    pub prompt: String,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RoundAdvance {
    Next { prompt: String },
    Complete,
}

#[derive(Debug, Clone)]
pub struct RoundState {
    prompts: Vec<String>,
    round_secs: u64,
    index: usize,
    phase: RoundPhase,
}

impl RoundState {
    pub fn new() -> Self {
        Self {
            prompts: Vec::new(),
            round_secs: DEFAULT_ROUND_SECS,
            index: 0,
            phase: RoundPhase::Idle,
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn prompt_index(&self) -> usize {
        self.index
    }

    pub fn prompt_count(&self) -> usize {
        self.prompts.len()
    }

    pub fn current_prompt(&self) -> Option<&str> {
        match self.phase {
            RoundPhase::PromptActive | RoundPhase::Finalizing => {
                self.prompts.get(self.index).map(String::as_str)
            }
            _ => None,
        }
    }

    pub fn round_duration(&self) -> Duration {
        Duration::from_secs(self.round_secs)
    }

    pub fn begin(&mut self, prompts: Vec<String>, round_secs: u64) {
        self.prompts = prompts;
        self.round_secs = round_secs;
        self.index = 0;
        self.phase = if self.prompts.is_empty() {
            RoundPhase::Complete
        } else {
            RoundPhase::PromptActive
        };
    }

    pub fn expire(&mut self) -> Option<FinalShot> {
        if self.phase != RoundPhase::PromptActive {
            return None;
        }
        let prompt = self.prompts.get(self.index)?.clone();
        self.phase = RoundPhase::Finalizing;
        Some(FinalShot {
            prompt,
            index: self.index,
        })
    }

    pub fn advance(&mut self) -> Option<RoundAdvance> {
        if self.phase != RoundPhase::Finalizing {
            return None;
        }
        self.index += 1;
        match self.prompts.get(self.index) {
            Some(prompt) => {
                self.phase = RoundPhase::PromptActive;
                Some(RoundAdvance::Next {
                    prompt: prompt.clone(),
                })
            }
            None => {
                self.phase = RoundPhase::Complete;
                Some(RoundAdvance::Complete)
            }
        }
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new()
    }
}
