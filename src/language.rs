/// Languages the game can be played in, and the normalization each one needs
/// before letters are compared. Comparison is case-insensitive and ignores
/// diacritics (a fada'd "á" matches a plain "a"), so both the secret and
/// every guess pass through `normalize` first.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ga")]
    Irish,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "es")]
    Spanish,
}

pub const DEFAULT_LANGUAGE: Language = Language::English;

impl Language {
    /// `from_code` maps a two-letter code to a Language. Unknown codes return
    /// None; whether that falls back or fails is the caller's policy.
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en" => Some(Language::English),
            "ga" => Some(Language::Irish),
            "fr" => Some(Language::French),
            "es" => Some(Language::Spanish),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Irish => "ga",
            Language::French => "fr",
            Language::Spanish => "es",
        }
    }

    /// `fold_char` strips the diacritics this language uses. Spanish keeps
    /// 'ñ' because it is a letter in its own right, not an accented 'n'.
    fn fold_char(&self, c: char) -> char {
        match self {
            Language::English => c,
            Language::Irish => match c {
                'á' => 'a',
                'é' => 'e',
                'í' => 'i',
                'ó' => 'o',
                'ú' => 'u',
                _ => c,
            },
            Language::French => match c {
                'à' | 'â' | 'ä' => 'a',
                'é' | 'è' | 'ê' | 'ë' => 'e',
                'î' | 'ï' => 'i',
                'ô' | 'ö' => 'o',
                'ù' | 'û' | 'ü' => 'u',
                'ÿ' => 'y',
                'ç' => 'c',
                _ => c,
            },
            Language::Spanish => match c {
                'á' => 'a',
                'é' => 'e',
                'í' => 'i',
                'ó' => 'o',
                'ú' | 'ü' => 'u',
                _ => c,
            },
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// `normalize` lowercases a word and folds its diacritics per language. Every
/// word entering the game (secrets and guesses alike) goes through here.
pub fn normalize(word: &str, language: Language) -> String {
    word.chars()
        .flat_map(|c| c.to_lowercase())
        .map(|c| language.fold_char(c))
        .collect()
}
