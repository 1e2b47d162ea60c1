use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of storefront categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Game,
    Social,
    Tool,
    Video,
    Music,
    Education,
    Shopping,
    Other,
}

impl Category {
    /// Every category, in storefront display order.
    pub const ALL: [Category; 8] = [
        Category::Game,
        Category::Social,
        Category::Tool,
        Category::Video,
        Category::Music,
        Category::Education,
        Category::Shopping,
        Category::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Game => "game",
            Category::Social => "social",
            Category::Tool => "tool",
            Category::Video => "video",
            Category::Music => "music",
            Category::Education => "education",
            Category::Shopping => "shopping",
            Category::Other => "other",
        }
    }

    /// Label shown in the storefront navigation.
    pub fn label(self) -> &'static str {
        match self {
            Category::Game => "Trò chơi",
            Category::Social => "Mạng xã hội",
            Category::Tool => "Công cụ",
            Category::Video => "Video",
            Category::Music => "Âm nhạc",
            Category::Education => "Giáo dục",
            Category::Shopping => "Mua sắm",
            Category::Other => "Khác",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A category name that is not one of [`Category::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category {0:?} (expected one of: game, social, tool, video, music, education, shopping, other)")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
