// src/generators/vocabulary.rs

/// Noun-like words; every word after the first is drawn from here.
pub const WORDS: &[&str] = &[
    "apple", "banana", "cherry", "dragon", "elephant", "falcon", "guitar", "horizon",
    "island", "jungle", "knight", "lemon", "mountain", "ocean", "planet", "queen",
    "rainbow", "sunset", "thunder", "universe", "victory", "wizard", "xenon", "yellow",
    "zebra", "anchor", "bridge", "castle", "diamond", "eagle", "forest", "galaxy",
    "hammer", "iceberg", "journey", "kingdom", "lighthouse", "magnet", "ninja", "orbit",
    "phoenix", "quartz", "rocket", "silver", "tiger", "umbrella", "volcano", "warrior",
    "crystal", "breeze", "storm", "flower", "river", "star", "moon", "fire", "water",
    "earth", "wind", "light", "shadow", "dream", "spirit", "power", "magic", "truth",
    "peace", "love", "hope", "joy", "freedom", "wisdom", "courage", "strength", "honor",
];

/// Adjectives; only ever used for the first word.
pub const ADJECTIVES: &[&str] = &[
    "bright", "swift", "strong", "gentle", "brave", "wise", "cool", "warm", "dark",
    "light", "fast", "slow", "big", "small", "loud", "quiet", "smooth", "rough",
    "sharp", "soft", "hard", "easy", "tough", "sweet", "sour", "hot", "cold",
    "fresh", "old", "new", "clean", "dirty", "rich", "poor", "happy", "sad",
    "angry", "calm", "wild", "tame", "free", "bound", "open", "closed", "clear",
    "cloudy", "sunny", "rainy", "snowy", "windy", "still", "moving", "stable",
];

/// Candidates for the "random" separator mode.
pub const SEPARATORS: &[char] = &['-', '_', '.', '!', '@', '#', '$', '%', '^', '&', '*'];
