//! Token budgets per operation

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Operation;

/// Maximum completion tokens each operation may spend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBudgets {
    pub analyze_account: u32,
    pub outreach_message: u32,
    pub meeting_transcript: u32,
    pub account_plan: u32,
}

impl Default for TokenBudgets {
    fn default() -> Self {
        Self {
            analyze_account: 2000,
            outreach_message: 1500,
            meeting_transcript: 1500,
            account_plan: 2500,
        }
    }
}

impl TokenBudgets {
    pub fn for_operation(&self, operation: Operation) -> u32 {
        match operation {
            Operation::AnalyzeAccount => self.analyze_account,
            Operation::GenerateOutreachMessage => self.outreach_message,
            Operation::ProcessMeetingTranscript => self.meeting_transcript,
            Operation::CreateAccountPlan => self.account_plan,
        }
    }
}
