use serde::{Deserialize, Serialize};
use std::fmt;

/// How a platform's streak is obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Retrieval {
    /// Upstream returns a timestamp -> count calendar
    Calendar,
    /// Upstream returns the final streak number
    FinalCount,
    /// No public data source; always 0
    Manual,
}

impl Retrieval {
    /// Dispatch for a raw platform id. Unknown ids are manual, never an error.
    pub fn for_id(platform_id: &str) -> Self {
        Platform::from_id(platform_id)
            .map(|platform| platform.retrieval())
            .unwrap_or(Retrieval::Manual)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    GitHub,
    LeetCode,
    LeetCodePotd,
    LeetCodeSubmissions,
    GeeksForGeeks,
    Unstop,
    CodeChef,
    Codeforces,
    HackerRank,
    Microsoft,
    Puzzles,
    Weather,
}

impl Platform {
    pub const ALL: [Platform; 12] = [
        Platform::GitHub,
        Platform::LeetCode,
        Platform::LeetCodePotd,
        Platform::LeetCodeSubmissions,
        Platform::GeeksForGeeks,
        Platform::Unstop,
        Platform::CodeChef,
        Platform::Codeforces,
        Platform::HackerRank,
        Platform::Microsoft,
        Platform::Puzzles,
        Platform::Weather,
    ];

    /// Resolve a platform id as it appears in request URLs
    pub fn from_id(id: &str) -> Option<Self> {
        match id.trim().to_ascii_lowercase().as_str() {
            "github" => Some(Platform::GitHub),
            "leetcode" => Some(Platform::LeetCode),
            "leetcode-potd" => Some(Platform::LeetCodePotd),
            "leetcode-submissions" => Some(Platform::LeetCodeSubmissions),
            "gfg" | "geeksforgeeks" => Some(Platform::GeeksForGeeks),
            "unstop" => Some(Platform::Unstop),
            "codechef" => Some(Platform::CodeChef),
            "codeforces" => Some(Platform::Codeforces),
            "hackerrank" => Some(Platform::HackerRank),
            "microsoft" => Some(Platform::Microsoft),
            "puzzles" => Some(Platform::Puzzles),
            "weather" => Some(Platform::Weather),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Platform::GitHub => "github",
            Platform::LeetCode => "leetcode",
            Platform::LeetCodePotd => "leetcode-potd",
            Platform::LeetCodeSubmissions => "leetcode-submissions",
            Platform::GeeksForGeeks => "gfg",
            Platform::Unstop => "unstop",
            Platform::CodeChef => "codechef",
            Platform::Codeforces => "codeforces",
            Platform::HackerRank => "hackerrank",
            Platform::Microsoft => "microsoft",
            Platform::Puzzles => "puzzles",
            Platform::Weather => "weather",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::GitHub => "GitHub",
            Platform::LeetCode | Platform::LeetCodeSubmissions => "LeetCode",
            Platform::LeetCodePotd => "LeetCode POTD",
            Platform::GeeksForGeeks => "GFG",
            Platform::Unstop => "Unstop",
            Platform::CodeChef => "CodeChef",
            Platform::Codeforces => "Codeforces",
            Platform::HackerRank => "HackerRank",
            Platform::Microsoft => "Microsoft",
            Platform::Puzzles => "Puzzles",
            Platform::Weather => "Weather",
        }
    }

    pub fn retrieval(&self) -> Retrieval {
        match self {
            Platform::GitHub | Platform::GeeksForGeeks => Retrieval::FinalCount,
            Platform::LeetCode | Platform::LeetCodePotd | Platform::LeetCodeSubmissions => {
                Retrieval::Calendar
            }
            Platform::Unstop
            | Platform::CodeChef
            | Platform::Codeforces
            | Platform::HackerRank
            | Platform::Microsoft
            | Platform::Puzzles
            | Platform::Weather => Retrieval::Manual,
        }
    }

    pub fn profile_url(&self, username: &str) -> String {
        match self {
            Platform::GitHub => format!("https://github.com/{}", username),
            Platform::LeetCode | Platform::LeetCodePotd | Platform::LeetCodeSubmissions => {
                format!("https://leetcode.com/{}", username)
            }
            Platform::GeeksForGeeks => {
                format!("https://auth.geeksforgeeks.org/user/{}", username)
            }
            Platform::Unstop => format!("https://unstop.com/u/{}", username),
            Platform::CodeChef => format!("https://www.codechef.com/users/{}", username),
            Platform::Codeforces => format!("https://codeforces.com/profile/{}", username),
            Platform::HackerRank => format!("https://www.hackerrank.com/{}", username),
            Platform::Microsoft => "https://rewards.microsoft.com/".to_string(),
            Platform::Puzzles => format!("https://www.chess.com/member/{}", username),
            Platform::Weather => "#".to_string(),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Profile link for a raw platform id; `#` when the id is unknown
pub fn profile_url(platform_id: &str, username: &str) -> String {
    Platform::from_id(platform_id)
        .map(|platform| platform.profile_url(username))
        .unwrap_or_else(|| "#".to_string())
}

/// Tile label for a raw platform id; unknown ids are shown upper-cased
pub fn display_name(platform_id: &str) -> String {
    Platform::from_id(platform_id)
        .map(|platform| platform.display_name().to_string())
        .unwrap_or_else(|| platform_id.to_uppercase())
}
