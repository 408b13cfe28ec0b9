//! Per-record sentiment scoring

/// Weighted sentiment lexicon for social-media Chinese.
///
/// Weights are polarity strengths; matching is by substring occurrence since
/// Chinese text carries no word boundaries.
const POSITIVE: &[(&str, f64)] = &[
    ("喜欢", 1.5),
    ("开心", 2.0),
    ("高兴", 1.5),
    ("幸福", 2.0),
    ("满意", 1.5),
    ("优秀", 1.5),
    ("成功", 1.5),
    ("厉害", 1.5),
    ("美好", 1.5),
    ("给力", 1.5),
    ("不错", 1.0),
    ("支持", 1.0),
    ("感谢", 1.0),
    ("谢谢", 1.0),
    ("加油", 1.0),
    ("点赞", 1.5),
    ("棒", 1.5),
    ("赞", 1.0),
    ("爱", 1.0),
    ("希望", 0.5),
];

const NEGATIVE: &[(&str, f64)] = &[
    ("垃圾", -2.0),
    ("恶心", -2.0),
    ("愤怒", -2.0),
    ("痛苦", -2.0),
    ("崩溃", -2.0),
    ("气死", -2.0),
    ("讨厌", -1.5),
    ("生气", -1.5),
    ("难过", -1.5),
    ("失望", -1.5),
    ("害怕", -1.5),
    ("悲伤", -1.5),
    ("糟糕", -1.5),
    ("骗", -1.5),
    ("烂", -1.5),
    ("担心", -1.0),
    ("哭", -1.0),
    ("假", -1.0),
    ("差评", -1.5),
    ("无聊", -0.5),
];

/// Why a record yielded no score.
#[derive(Debug, PartialEq, Eq)]
pub enum ScoreError {
    /// Nothing left after cleaning.
    EmptyText,
}

impl std::fmt::Display for ScoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "empty text"),
        }
    }
}

impl std::error::Error for ScoreError {}

/// Sentiment-probability model.
///
/// Implementations must be stateless and side-effect-free: records are scored
/// from parallel workers in arbitrary order.
pub trait SentimentModel: Send + Sync {
    /// Score cleaned text. Returns a probability in [0, 1]; errors are
    /// per-record and never abort the batch.
    fn score(&self, text: &str) -> Result<f64, ScoreError>;
}

/// Lexicon-weighted model squashing the signed hit total into [0, 1].
///
/// No lexicon hits means a neutral 0.5.
#[derive(Debug, Default)]
pub struct LexiconModel;

impl SentimentModel for LexiconModel {
    fn score(&self, text: &str) -> Result<f64, ScoreError> {
        if text.trim().is_empty() {
            return Err(ScoreError::EmptyText);
        }

        let mut raw = 0.0;
        for (word, weight) in POSITIVE.iter().chain(NEGATIVE) {
            let hits = text.matches(word).count();
            if hits > 0 {
                raw += weight * hits as f64;
            }
        }

        // Logistic squash: raw 0 -> 0.5, strong negative -> 0, strong positive -> 1
        Ok(1.0 / (1.0 + (-raw).exp()))
    }
}
