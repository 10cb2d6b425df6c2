//! Per-locale message tables.
//!
//! English is exhaustive. The other locales return `None` for keys they do
//! not translate, and the translator falls back to English.

mod de;
mod en;
mod es;
mod fr_ca;
mod ja;

use crate::keys::MessageKey;
use crate::locale::Locale;
use crate::message::{Message, arg};

/// Message for `key` in `locale` only, without fallback.
pub(crate) fn lookup(locale: Locale, key: MessageKey) -> Option<Message> {
    match locale {
        Locale::En => Some(en::message(key)),
        Locale::De => de::message(key),
        Locale::FrCa => fr_ca::message(key),
        Locale::Es => es::message(key),
        Locale::Ja => ja::message(key),
    }
}

/// English message for `key`. Always present.
pub(crate) fn english(key: MessageKey) -> Message {
    en::message(key)
}
