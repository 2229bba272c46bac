use std::fmt;

/// An upstream service the adapters talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    Mojang,
    Discord,
    Hypixel,
    Turnstile,
}

impl Provider {
    /// Lowercase name, as used in caller-facing messages and metric labels
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mojang => "mojang",
            Self::Discord => "discord",
            Self::Hypixel => "hypixel",
            Self::Turnstile => "turnstile",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
