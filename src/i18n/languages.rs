/// Two-letter codes and display names of the bundled languages.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("zh", "中文"),
    ("ru", "Русский"),
    ("ja", "日本語"),
    ("de", "Deutsch"),
    ("pt", "Português"),
    ("fr", "Français"),
];

/// Language used when no other table can be resolved.
pub const DEFAULT_LANGUAGE: &str = "en";

pub fn supported_languages() -> &'static [(&'static str, &'static str)] {
    SUPPORTED_LANGUAGES
}

pub fn is_supported(code: &str) -> bool {
    SUPPORTED_LANGUAGES.iter().any(|(c, _)| *c == code)
}

/// Map the system locale onto a supported code, defaulting to English.
pub fn detect_language() -> String {
    let locale = sys_locale::get_locale().unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

    // "zh-CN" / "pt_BR" style locales match on their language prefix
    let prefix = locale
        .split(['-', '_'])
        .next()
        .unwrap_or(DEFAULT_LANGUAGE)
        .to_ascii_lowercase();

    if is_supported(&prefix) {
        prefix
    } else {
        DEFAULT_LANGUAGE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_codes() {
        assert!(is_supported("en"));
        assert!(is_supported("zh"));
        assert!(is_supported("fr"));
        assert!(!is_supported("xx"));
        assert!(!is_supported(""));
    }

    #[test]
    fn test_default_language_is_supported() {
        assert!(is_supported(DEFAULT_LANGUAGE));
    }

    #[test]
    fn test_detect_language_returns_supported_code() {
        let code = detect_language();
        assert!(is_supported(&code));
    }
}
