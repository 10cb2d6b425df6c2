//! # lumen-i18n
//!
//! Typed message lookup for LumenDose.
//!
//! Every displayable string is addressed by a [`MessageKey`] from a closed
//! set. Each locale's catalog maps a key to a [`Message`], which is either a
//! literal or a template rendered from positional arguments. Lookups fall
//! back from the active locale to English, then to the raw key name.
//!
//! ```
//! use lumen_i18n::{Locale, Localizer, MessageKey, Translator};
//!
//! let t = Translator::new(Locale::De);
//! assert_eq!(t.text(MessageKey::ImpactHigh, &[]), "Hoch");
//! ```

mod catalog;
mod keys;
mod locale;
mod message;
mod translator;

pub use keys::MessageKey;
pub use locale::{Locale, UnknownLocale};
pub use message::Message;
pub use translator::{Localizer, Translator};
