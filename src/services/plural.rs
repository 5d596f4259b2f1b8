use std::sync::OnceLock;

use regex::Regex;

use crate::error::InvalidLocaleError;

/// Maps a locale to the number of grammatical plural categories it uses.
pub trait PluralRuleProvider {
    fn categories_for(&self, locale: &str) -> Result<usize, InvalidLocaleError>;
}

/// Built-in gettext `nplurals` table keyed by language subtag.
#[derive(Debug, Default, Clone, Copy)]
pub struct GettextPluralRules;

fn locale_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // lang[_-]region... with an optional @modifier, e.g. "sr_RS@latin"
    RE.get_or_init(|| {
        Regex::new(r"^(?P<lang>[A-Za-z]{2,3})(?:[_-][A-Za-z0-9]{2,8})*(?:@[A-Za-z0-9]+)?$")
            .expect("locale pattern is valid")
    })
}

/// Lower-cased language subtag of a locale code, if the code is well formed.
pub fn language_of(locale: &str) -> Option<String> {
    locale_re()
        .captures(locale.trim())
        .and_then(|caps| caps.name("lang"))
        .map(|m| m.as_str().to_ascii_lowercase())
}

fn nplurals(language: &str) -> Option<usize> {
    let n = match language {
        "ay" | "bo" | "cgg" | "dz" | "fa" | "id" | "ja" | "jbo" | "ka" | "kk" | "km" | "ko"
        | "ky" | "lo" | "ms" | "my" | "sah" | "su" | "th" | "tt" | "ug" | "vi" | "wo" | "zh" => 1,

        "af" | "an" | "ast" | "az" | "bg" | "bn" | "br" | "ca" | "da" | "de" | "el" | "en"
        | "eo" | "es" | "et" | "eu" | "fi" | "fil" | "fo" | "fr" | "fur" | "fy" | "gl" | "gu"
        | "ha" | "he" | "hi" | "hu" | "hy" | "ia" | "is" | "it" | "kn" | "ku" | "lb" | "ln"
        | "mai" | "mk" | "ml" | "mn" | "mr" | "nah" | "nap" | "nb" | "ne" | "nl" | "nn"
        | "no" | "nso" | "oc" | "or" | "pa" | "pap" | "pms" | "ps" | "pt" | "rm" | "sco"
        | "si" | "so" | "son" | "sq" | "sv" | "sw" | "ta" | "te" | "tg" | "ti" | "tk" | "tr"
        | "ur" | "uz" | "wa" | "yo" => 2,

        "be" | "bs" | "cs" | "csb" | "hr" | "lt" | "lv" | "mnk" | "pl" | "ro" | "ru" | "sk"
        | "sr" | "uk" => 3,

        "cy" | "gd" | "kw" | "mt" | "sl" => 4,

        "ga" => 5,

        "ar" => 6,

        _ => return None,
    };
    Some(n)
}

impl PluralRuleProvider for GettextPluralRules {
    fn categories_for(&self, locale: &str) -> Result<usize, InvalidLocaleError> {
        language_of(locale)
            .and_then(|lang| nplurals(&lang))
            .ok_or_else(|| InvalidLocaleError::new(locale))
    }
}
