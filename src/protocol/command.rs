#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Ping,
    SaveCatalog,
    SaveEntry,
    GetAll,
    GetEnabled,
    GetEnabledTranslated,
    GetRequiresTranslating,
    DisableDomain,
    PluralCount,
    Unknown,
}

impl From<&str> for Command {
    fn from(s: &str) -> Self {
        match s {
            "ping" => Command::Ping,
            "catalog.save" => Command::SaveCatalog,
            "entry.save" => Command::SaveEntry,
            "catalog.all" => Command::GetAll,
            "catalog.enabled" => Command::GetEnabled,
            "catalog.enabled_translated" => Command::GetEnabledTranslated,
            "catalog.requires_translating" => Command::GetRequiresTranslating,
            "domain.disable_all" => Command::DisableDomain,
            "plural.count" => Command::PluralCount,
            _ => Command::Unknown,
        }
    }
}
