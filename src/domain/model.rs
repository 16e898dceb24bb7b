use crate::utils::error::AdviceErrorKind;
use std::fmt;

pub const FALLBACK_NOTE: &str = "(Note: AI advice unavailable, showing local guidance.)";

/// Three survey ratings, nominally 1..=5. The range is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SurveyInput {
    pub confidence: i64,
    pub worry: i64,
    pub human_skills: i64,
}

impl SurveyInput {
    pub fn new(confidence: i64, worry: i64, human_skills: i64) -> Self {
        Self {
            confidence,
            worry,
            human_skills,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Profile {
    AwareButAnxious,
    LowConfidence,
    ConfidentAndAdaptive,
    HumanCenteredLearner,
    CuriousLearner,
}

impl Profile {
    pub const ALL: [Profile; 5] = [
        Profile::AwareButAnxious,
        Profile::LowConfidence,
        Profile::ConfidentAndAdaptive,
        Profile::HumanCenteredLearner,
        Profile::CuriousLearner,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Profile::AwareButAnxious => "Aware but Anxious",
            Profile::LowConfidence => "Low Confidence",
            Profile::ConfidentAndAdaptive => "Confident and Adaptive",
            Profile::HumanCenteredLearner => "Human-Centered Learner",
            Profile::CuriousLearner => "Curious Learner",
        }
    }

    /// Canned advice shown when the advice API cannot be reached.
    pub fn local_advice(&self) -> &'static str {
        match self {
            Profile::AwareButAnxious => {
                "You understand AI well, but you’re concerned about job impact. Focus on adapting and building human-AI collaboration skills."
            }
            Profile::LowConfidence => {
                "Start small. Try simple, hands-on AI tasks — your confidence will grow quickly through experience."
            }
            Profile::ConfidentAndAdaptive => {
                "You’re ready to lead. Share what you know and help others understand AI’s potential."
            }
            Profile::HumanCenteredLearner => {
                "You value creativity and empathy — keep combining those with AI skills for the best of both worlds."
            }
            Profile::CuriousLearner => {
                "Stay curious. Keep exploring AI and how it fits with your strengths."
            }
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdviceOutcome {
    Fetched(String),
    Fallback {
        text: String,
        reason: AdviceErrorKind,
    },
}

impl AdviceOutcome {
    pub fn fallback(profile: Profile, reason: AdviceErrorKind) -> Self {
        AdviceOutcome::Fallback {
            text: format!("{}\n\n{}", profile.local_advice(), FALLBACK_NOTE),
            reason,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            AdviceOutcome::Fetched(text) => text,
            AdviceOutcome::Fallback { text, .. } => text,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, AdviceOutcome::Fallback { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyResult {
    pub input: SurveyInput,
    pub profile: Profile,
    pub advice: AdviceOutcome,
}

impl SurveyResult {
    pub fn view(&self) -> ResultsView {
        ResultsView {
            profile: self.profile.label().to_string(),
            advice: self.advice.text().to_string(),
            conf: self.input.confidence,
            worry: self.input.worry,
            human: self.input.human_skills,
        }
    }
}

/// What the results page renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    pub profile: String,
    pub advice: String,
    pub conf: i64,
    pub worry: i64,
    pub human: i64,
}
