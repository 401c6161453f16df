// SPDX-License-Identifier: MPL-2.0
use crate::app::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Locale used when nothing else matches.
pub const DEFAULT_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish_non_exhaustive()
    }
}

fn default_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE.parse().unwrap_or_default()
}

/// Parses one `.ftl` source into a bundle, keeping the valid entries of a
/// partially broken file.
fn build_bundle(locale: &LanguageIdentifier, source: String) -> FluentBundle<FluentResource> {
    let resource = match FluentResource::try_new(source) {
        Ok(resource) => resource,
        Err((resource, errors)) => {
            eprintln!(
                "[WARN] {} syntax error(s) in translations for {}",
                errors.len(),
                locale
            );
            resource
        }
    };

    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        eprintln!(
            "[WARN] {} duplicate message(s) in translations for {}",
            errors.len(),
            locale
        );
    }
    bundle
}

fn load_embedded() -> Vec<(LanguageIdentifier, String)> {
    Asset::iter()
        .filter_map(|file| {
            let filename = file.as_ref();
            let locale = filename.strip_suffix(".ftl")?.parse().ok()?;
            let content = Asset::get(filename)?;
            Some((
                locale,
                String::from_utf8_lossy(content.data.as_ref()).to_string(),
            ))
        })
        .collect()
}

fn load_directory(dir: &Path) -> Vec<(LanguageIdentifier, String)> {
    let Ok(entries) = fs::read_dir(dir) else {
        eprintln!("[WARN] Cannot read translation directory {}", dir.display());
        return Vec::new();
    };

    entries
        .filter_map(std::result::Result::ok)
        .filter_map(|entry| {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("ftl") {
                return None;
            }
            let locale = path.file_stem()?.to_str()?.parse().ok()?;
            let content = fs::read_to_string(&path).ok()?;
            Some((locale, content))
        })
        .collect()
}

impl I18n {
    /// Builds the translation bundles and picks the active locale.
    ///
    /// Files found in `i18n_dir` replace embedded translations of the same
    /// locale and may add new locales.
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<String>, config: &Config) -> Self {
        let mut sources: HashMap<LanguageIdentifier, String> =
            load_embedded().into_iter().collect();
        if let Some(dir) = i18n_dir {
            sources.extend(load_directory(Path::new(&dir)));
        }

        let mut available_locales: Vec<LanguageIdentifier> = sources.keys().cloned().collect();
        available_locales.sort_by_key(ToString::to_string);

        let bundles = sources
            .into_iter()
            .map(|(locale, source)| {
                let bundle = build_bundle(&locale, source);
                (locale, bundle)
            })
            .collect();

        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or_else(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Translates `key` with named arguments (`{ $name }` placeables).
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, args, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn parse_available(
    lang_str: &str,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let lang = lang_str.parse::<LanguageIdentifier>().ok()?;
    if available.contains(&lang) {
        return Some(lang);
    }
    // "fr-FR" falls back to "fr" when only the language is translated
    available
        .iter()
        .find(|candidate| {
            candidate.language == lang.language
                && candidate.region.is_none()
                && candidate.script.is_none()
        })
        .cloned()
}

pub(crate) fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. Check CLI args
    if let Some(lang) = cli_lang.as_deref().and_then(|l| parse_available(l, available)) {
        return Some(lang);
    }

    // 2. Check config file
    if let Some(lang) = config
        .general
        .language
        .as_deref()
        .and_then(|l| parse_available(l, available))
    {
        return Some(lang);
    }

    // 3. Check OS locale
    sys_locale::get_locale().and_then(|l| parse_available(&l, available))
}
