use crate::domain::model::{Profile, SurveyInput};

/// Maps three ratings to a profile and its local advice.
///
/// Rules are checked in order and the first match wins:
///
/// 1. `confidence >= 4 && worry >= 4` => [`Profile::AwareButAnxious`]
/// 2. `confidence <= 2` => [`Profile::LowConfidence`]
/// 3. `confidence >= 4 && worry <= 2` => [`Profile::ConfidentAndAdaptive`]
/// 4. `human_skills >= 4` => [`Profile::HumanCenteredLearner`]
/// 5. otherwise [`Profile::CuriousLearner`]
pub fn classify(confidence: i64, worry: i64, human_skills: i64) -> (Profile, &'static str) {
    let profile = if confidence >= 4 && worry >= 4 {
        Profile::AwareButAnxious
    } else if confidence <= 2 {
        Profile::LowConfidence
    } else if confidence >= 4 && worry <= 2 {
        Profile::ConfidentAndAdaptive
    } else if human_skills >= 4 {
        Profile::HumanCenteredLearner
    } else {
        Profile::CuriousLearner
    };

    (profile, profile.local_advice())
}

impl SurveyInput {
    pub fn classify(&self) -> (Profile, &'static str) {
        classify(self.confidence, self.worry, self.human_skills)
    }
}
