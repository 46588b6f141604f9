//! Fluent translations for the crunch board.
//!
//! The board ships in American English (`en-US`, also the fallback) and
//! Spanish (`es-ES`). Each locale is one `i18n/<tag>/tapeout-ui.ftl` file,
//! embedded at build time so web and desktop carry the same strings.
//!
//! Labels fixed in markup use [`t!`](crate::t), which checks the message ID
//! against the fallback file at compile time. Day titles, briefs and result
//! notes live in the `DAYS` table as plain IDs and are resolved with
//! [`lookup`]; `tests::i18n_completeness` keeps both kinds present in every
//! locale.
//!
//! Call [`init`] before the first render. The navbar picker switches locale
//! through [`set_language`].
use std::sync::Once;

use dioxus::logger::tracing::{info, warn};
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// `fl!` bound to [`LOADER`].
///
/// ```ignore
/// t!("nav-next-day")
/// t!("step-counter", current = 2, total = 5)
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Also the FTL file stem in every locale folder.
const DOMAIN: &str = "tapeout-ui";

pub const FALLBACK_LANGUAGE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Bundles for the active locale, with `en-US` behind it for missing IDs.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .expect("en-US is a valid language tag");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Picks the user's preferred locale, falling back to `en-US`. Runs once.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Localizations, &requested) {
            Ok(selected) => info!(?selected, "localization loaded"),
            Err(err) => warn!(%err, "locale selection failed, using en-US"),
        }
    });
}

/// Switches the board to `tag`. A malformed tag leaves the locale as it is.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        warn!(tag, "ignoring malformed language tag");
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Locale tags with an embedded FTL file, sorted.
pub fn available_languages() -> Vec<String> {
    let tags: std::collections::BTreeSet<String> = Localizations::iter()
        .filter_map(|path| path.split_once('/').map(|(tag, _)| tag.to_string()))
        .collect();
    tags.into_iter().collect()
}

/// Resolve a message ID that is only known at runtime.
pub fn lookup(id: &str) -> String {
    LOADER.get(id)
}

pub fn has(id: &str) -> bool {
    LOADER.has(id)
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
