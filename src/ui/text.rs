use tracing::warn;

use crate::i18n::{format_message, lookup, Locale, MessageKey};

/// Text for `key`, falling back to English and finally to an empty string.
pub fn t(locale: Locale, key: MessageKey) -> &'static str {
    match lookup(locale, key) {
        Ok(text) => text,
        Err(err) => {
            warn!("{err}");
            lookup(Locale::En, key).unwrap_or_default()
        }
    }
}

/// Like [`t`] but fills a single `{count}` placeholder.
pub fn t_count(locale: Locale, key: MessageKey, count: usize) -> String {
    let count = count.to_string();
    match format_message(locale, key, &[("count", count.as_str())]) {
        Ok(text) => text,
        Err(err) => {
            warn!("{err}");
            format_message(Locale::En, key, &[("count", count.as_str())]).unwrap_or_default()
        }
    }
}
