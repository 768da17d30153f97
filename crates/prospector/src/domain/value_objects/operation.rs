//! Operation - The orchestration entry points

use serde::{Deserialize, Serialize};

/// One of the four account intelligence operations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    AnalyzeAccount,
    GenerateOutreachMessage,
    ProcessMeetingTranscript,
    CreateAccountPlan,
}

impl Operation {
    /// Human readable label used in error messages
    pub fn label(&self) -> &'static str {
        match self {
            Operation::AnalyzeAccount => "analyze account",
            Operation::GenerateOutreachMessage => "generate outreach message",
            Operation::ProcessMeetingTranscript => "process meeting transcript",
            Operation::CreateAccountPlan => "create account plan",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
