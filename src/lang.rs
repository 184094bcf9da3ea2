//! Language tags accepted by the text-cleanup front end.

/// ISO 639-3 language codes the cleanup pipeline distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LangCode {
    /// Romanian (ron)
    Ron,
    /// Aromanian (rup)
    Rup,
    /// English (eng)
    Eng,
}

impl LangCode {
    pub fn code(self) -> &'static str {
        match self {
            LangCode::Ron => "ron",
            LangCode::Rup => "rup",
            LangCode::Eng => "eng",
        }
    }

    /// Parse a display name as users write it: English, Romanian, or
    /// Aromanian (Cunia) spellings are all accepted, surrounding whitespace
    /// ignored. Unknown names are `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "Romanian" | "Română" | "Romãnã" => Some(LangCode::Ron),
            "Aromanian" | "Aromână" | "Armãnã" => Some(LangCode::Rup),
            "English" | "Engleză" | "Inglezã" => Some(LangCode::Eng),
            _ => None,
        }
    }
}
