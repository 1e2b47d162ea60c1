//! Classification tables.
//!
//! Data only: precedence is encoded by slice order, and evaluation lives in
//! the parent module. All entries are lower-case.

use super::Category;

/// How a pattern is tested against a lower-cased `app_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Contains(&'static str),
    Prefix(&'static str),
}

impl Pattern {
    pub fn matches(self, app_id: &str) -> bool {
        match self {
            Pattern::Contains(needle) => app_id.contains(needle),
            Pattern::Prefix(prefix) => app_id.starts_with(prefix),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PatternGroup {
    pub category: Category,
    pub patterns: &'static [Pattern],
}

/// Exact ids whose patterns would misfire.
pub const ID_OVERRIDES: &[(&str, Category)] = &[
    // Instagram's video editor, not the social app.
    ("com.instagram.basel", Category::Tool),
    ("com.openai.chatgpt", Category::Tool),
    ("com.google.android.apps.translate", Category::Tool),
    ("com.google.android.apps.youtube.music", Category::Music),
    ("com.spotify.music", Category::Music),
    ("com.lemon.lvoverseas", Category::Video),
    ("com.facebook.orca", Category::Social),
    ("com.whatsapp.w4b", Category::Social),
    ("com.kiloo.subwaysurf", Category::Game),
    ("com.mojang.minecraftpe", Category::Game),
    ("com.supercell.clashofclans", Category::Game),
    ("com.shopee.vn", Category::Shopping),
];

use self::Pattern::{Contains, Prefix};

/// `app_id` pattern groups, most specific first. Tool precedes social and
/// game comes last because its tokens are the broadest.
pub const ID_PATTERN_GROUPS: &[PatternGroup] = &[
    PatternGroup {
        category: Category::Video,
        patterns: &[
            Contains("tiktok"),
            Contains("musically"),
            Contains("ugc.trill"),
            Contains("youtube"),
            Contains("netflix"),
            Contains("video"),
            Contains("player"),
            Contains("iqiyi"),
            Contains("vieon"),
            Contains("fptplay"),
            Contains("tv360"),
            Contains("twitch"),
            Contains("capcut"),
        ],
    },
    PatternGroup {
        category: Category::Music,
        patterns: &[
            Contains("music"),
            Contains("spotify"),
            Contains("zing.mp3"),
            Contains("nhaccuatui"),
            Contains("soundcloud"),
            Contains("shazam"),
            Contains("audio"),
            Contains("radio"),
            Contains("podcast"),
        ],
    },
    PatternGroup {
        category: Category::Shopping,
        patterns: &[
            Contains("shopee"),
            Contains("lazada"),
            Contains("tiki.vn"),
            Contains("sendo"),
            Contains("amazon"),
            Contains("ebay"),
            Contains("aliexpress"),
            Contains("temu"),
            Contains("shein"),
            Contains("shop"),
        ],
    },
    PatternGroup {
        category: Category::Education,
        patterns: &[
            Contains("duolingo"),
            Contains("edu"),
            Contains("learn"),
            Contains("school"),
            Contains("study"),
            Contains("dictionary"),
            Contains("classroom"),
            Contains("quizlet"),
            Contains("photomath"),
        ],
    },
    PatternGroup {
        category: Category::Tool,
        patterns: &[
            Contains("canva"),
            Contains("editor"),
            Contains("camera"),
            Contains("vpn"),
            Contains("cleaner"),
            Contains("launcher"),
            Contains("keyboard"),
            Contains("scanner"),
            Contains("calculator"),
            Contains("filemanager"),
            Contains("browser"),
            Contains("utility"),
            Contains("tools"),
            Contains("photo"),
            Contains("picsart"),
            Contains("lightroom"),
        ],
    },
    PatternGroup {
        category: Category::Social,
        patterns: &[
            Prefix("com.facebook."),
            Prefix("com.instagram."),
            Prefix("com.zing.zalo"),
            Prefix("org.telegram."),
            Prefix("com.whatsapp"),
            Prefix("com.twitter."),
            Prefix("com.snapchat."),
            Prefix("com.discord"),
            Prefix("jp.naver.line"),
            Prefix("com.viber."),
            Prefix("com.linkedin."),
            Prefix("com.pinterest"),
            Prefix("com.reddit."),
            Prefix("com.skype."),
            Contains("messenger"),
            Contains("chat"),
            Contains("social"),
            Contains("dating"),
        ],
    },
    PatternGroup {
        category: Category::Game,
        patterns: &[
            Contains("game"),
            Contains("puzzle"),
            Contains("casino"),
            Contains("racing"),
            Contains("rpg"),
            Contains("arcade"),
            Contains("chess"),
            Contains("battle"),
            Contains("pubg"),
            Contains("garena"),
            Contains("supercell"),
            Contains("mihoyo"),
            Contains("roblox"),
            Contains("moonton"),
            Contains("legends"),
        ],
    },
];

/// Title keywords, tried when no `app_id` rule matched. Education has no
/// title keywords: its words are too common in other titles.
pub const TITLE_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Game,
        &[
            "game", "racing", "puzzle", "chess", "battle", "trò chơi", "đua xe", "bắn súng",
        ],
    ),
    (
        Category::Social,
        &[
            "chat", "messenger", "social", "dating", "mạng xã hội", "nhắn tin", "kết bạn",
        ],
    ),
    (
        Category::Tool,
        &[
            "vpn",
            "editor",
            "scanner",
            "cleaner",
            "calculator",
            "keyboard",
            "launcher",
            "tool",
            "công cụ",
            "chỉnh sửa",
            "dọn dẹp",
        ],
    ),
    (
        Category::Video,
        &["video", "movie", "phim", "tivi", "live stream"],
    ),
    (
        Category::Music,
        &["music", "mp3", "radio", "podcast", "nhạc"],
    ),
    (Category::Shopping, &["shop", "mua sắm", "deal", "sale"]),
];
