/// CEFR proficiency level, ordered from beginner to advanced
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    A1, // Breakthrough
    A2, // Waystage
    B1, // Threshold
    B2, // Vantage
    C1, // Effective operational proficiency
    C2, // Mastery
}

impl Level {
    /// Every level in dataset order
    pub const ALL: [Level; 6] = [
        Level::A1,
        Level::A2,
        Level::B1,
        Level::B2,
        Level::C1,
        Level::C2,
    ];

    /// Parse a dataset key. Only the lowercase form is accepted.
    pub fn from_key(s: &str) -> Option<Self> {
        match s {
            "a1" => Some(Level::A1),
            "a2" => Some(Level::A2),
            "b1" => Some(Level::B1),
            "b2" => Some(Level::B2),
            "c1" => Some(Level::C1),
            "c2" => Some(Level::C2),
            _ => None,
        }
    }

    /// Key used in the dataset document
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::A1 => "a1",
            Level::A2 => "a2",
            Level::B1 => "b1",
            Level::B2 => "b2",
            Level::C1 => "c1",
            Level::C2 => "c2",
        }
    }

    /// Directory name used in the asset trees
    pub fn dir_name(&self) -> &'static str {
        match self {
            Level::A1 => "A1",
            Level::A2 => "A2",
            Level::B1 => "B1",
            Level::B2 => "B2",
            Level::C1 => "C1",
            Level::C2 => "C2",
        }
    }
}

/// Asset directory name for an arbitrary dataset level key.
///
/// Unknown keys still map somewhere so asset checks can report against them.
pub fn level_dir(key: &str) -> String {
    match Level::from_key(key) {
        Some(level) => level.dir_name().to_string(),
        None => key.to_uppercase(),
    }
}
