use serde::Deserialize;
use thiserror::Error;

const LANDING_JSON: &str = include_str!("../content/landing.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to decode landing content: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("landing content has no FAQ entries")]
    NoFaqEntries,
}

/// A single FAQ question. `id` is the entry's position in the list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub id: usize,
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureIcon {
    Camera,
    Brain,
    Leaf,
}

impl FeatureIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            FeatureIcon::Camera => "📷",
            FeatureIcon::Brain => "🧠",
            FeatureIcon::Leaf => "🍃",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Feature {
    pub icon: FeatureIcon,
    pub title: String,
    pub description: String,
    pub color: String,
}

#[derive(Deserialize)]
struct RawFaqEntry {
    question: String,
    answer: String,
}

#[derive(Deserialize)]
struct RawLandingContent {
    #[serde(default)]
    features: Vec<Feature>,
    faq: Vec<RawFaqEntry>,
}

/// Static copy for the landing page, fixed once decoded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LandingContent {
    pub features: Vec<Feature>,
    pub faq: Vec<FaqEntry>,
}

impl LandingContent {
    /// Content bundled into the binary at compile time.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(LANDING_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let raw: RawLandingContent = serde_json::from_str(raw)?;
        if raw.faq.is_empty() {
            return Err(ContentError::NoFaqEntries);
        }

        let faq = raw
            .faq
            .into_iter()
            .enumerate()
            .map(|(id, entry)| FaqEntry {
                id,
                question: entry.question,
                answer: entry.answer,
            })
            .collect();

        Ok(Self {
            features: raw.features,
            faq,
        })
    }
}
