use zxcvbn::zxcvbn;

pub const MAX_SCORE: u8 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    /// 0 (weakest) to 4 (strongest).
    pub score: u8,
    /// Human-readable crack time for offline fast hashing at 1e10 guesses/s.
    pub crack_time: String,
    pub warning: Option<String>,
    pub suggestions: Vec<String>,
}

pub trait Scorer {
    fn score(&self, password: &str) -> StrengthReport;
}

/// Scores passwords with zxcvbn. Personal details registered as user inputs
/// are treated as known dictionary words, so passwords built from them score
/// lower.
#[derive(Debug, Clone, Default)]
pub struct ZxcvbnScorer {
    user_inputs: Vec<String>,
}

impl ZxcvbnScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user_inputs<I>(inputs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            user_inputs: inputs.into_iter().map(Into::into).collect(),
        }
    }
}

impl Scorer for ZxcvbnScorer {
    fn score(&self, password: &str) -> StrengthReport {
        let user_inputs: Vec<&str> = self.user_inputs.iter().map(String::as_str).collect();
        let entropy = zxcvbn(password, &user_inputs);

        let (warning, suggestions) = match entropy.feedback() {
            Some(feedback) => (
                feedback.warning().map(|w| w.to_string()),
                feedback
                    .suggestions()
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            ),
            None => (None, Vec::new()),
        };

        StrengthReport {
            score: entropy.score() as u8,
            crack_time: entropy
                .crack_times()
                .offline_fast_hashing_1e10_per_second()
                .to_string(),
            warning,
            suggestions,
        }
    }
}
