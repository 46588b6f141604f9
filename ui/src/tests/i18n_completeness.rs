//! Translation coverage: every message the crate asks for exists in every
//! locale, and every locale mirrors the fallback message set and variables.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::crunch::DAYS;
use crate::i18n::FALLBACK_LANGUAGE;

const FTL_FILENAME: &str = "tapeout-ui.ftl";

type Messages = BTreeMap<String, String>;

fn crate_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Locale tag to its messages, for every folder under `i18n/`.
fn load_locales() -> BTreeMap<String, Messages> {
    let root = crate_root().join("i18n");
    let entries = fs::read_dir(&root).expect("i18n directory readable");

    entries
        .flatten()
        .filter(|entry| entry.path().is_dir())
        .map(|entry| {
            let tag = entry.file_name().to_string_lossy().into_owned();
            let ftl = fs::read_to_string(entry.path().join(FTL_FILENAME))
                .unwrap_or_else(|err| panic!("{tag}: cannot read {FTL_FILENAME}: {err}"));
            let messages = parse_messages(&tag, &ftl);
            (tag, messages)
        })
        .collect()
}

/// Single-line `id = pattern` messages. Terms, attributes and comments are skipped.
fn parse_messages(tag: &str, ftl: &str) -> Messages {
    let mut messages = Messages::new();
    for line in ftl.lines().map(str::trim) {
        if line.is_empty() || line.starts_with(['#', '-', '.']) {
            continue;
        }
        let Some((id, pattern)) = line.split_once('=') else {
            continue;
        };
        let id = id.trim();
        if !is_message_id(id) {
            continue;
        }
        let previous = messages.insert(id.to_string(), pattern.trim().to_string());
        assert!(previous.is_none(), "{tag}: `{id}` defined twice");
    }
    messages
}

fn is_message_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| matches!(c, 'a'..='z' | '0'..='9' | '-'))
}

/// Literal IDs passed to `t!` anywhere under `src/`.
fn macro_ids(dir: &Path, out: &mut BTreeSet<String>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|entry| entry.path()) {
        if path.is_dir() {
            macro_ids(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            let source = fs::read_to_string(&path).unwrap_or_default();
            for (at, _) in source.match_indices("t!(\"") {
                let rest = &source[at + 4..];
                if let Some(id) = rest.split('"').next().filter(|id| is_message_id(id)) {
                    out.insert(id.to_string());
                }
            }
        }
    }
}

/// Names of `{ $var }` placeables in a pattern.
fn variables(pattern: &str) -> BTreeSet<&str> {
    pattern
        .split('$')
        .skip(1)
        .filter_map(|rest| {
            let end = rest
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '-'))
                .unwrap_or(rest.len());
            (end > 0).then(|| &rest[..end])
        })
        .collect()
}

#[test]
fn every_requested_message_exists_in_every_locale() {
    let mut requested = BTreeSet::new();
    macro_ids(&crate_root().join("src"), &mut requested);
    assert!(requested.contains("nav-next-day"), "source scan found no t! calls");
    // Day descriptors hold their IDs as data, outside any `t!` call.
    requested.extend(
        DAYS.iter()
            .flat_map(|descriptor| descriptor.message_keys())
            .map(str::to_string),
    );

    let locales = load_locales();
    assert!(locales.contains_key(FALLBACK_LANGUAGE));

    let mut report = Vec::new();
    for (tag, messages) in &locales {
        let missing: Vec<_> = requested
            .iter()
            .filter(|id| !messages.contains_key(*id))
            .map(String::as_str)
            .collect();
        if !missing.is_empty() {
            report.push(format!("{tag}: {}", missing.join(", ")));
        }
    }
    assert!(report.is_empty(), "missing messages:\n{}", report.join("\n"));
}

#[test]
fn locales_mirror_the_fallback() {
    let locales = load_locales();
    let fallback = &locales[FALLBACK_LANGUAGE];
    assert!(locales.len() > 1, "expected at least one translation");

    for (tag, messages) in locales.iter().filter(|(tag, _)| *tag != FALLBACK_LANGUAGE) {
        let ours: BTreeSet<_> = messages.keys().collect();
        let theirs: BTreeSet<_> = fallback.keys().collect();
        assert_eq!(ours, theirs, "{tag} message set differs from {FALLBACK_LANGUAGE}");

        for (id, pattern) in messages {
            assert_eq!(
                variables(pattern),
                variables(&fallback[id]),
                "{tag}: `{id}` uses different variables"
            );
        }
    }
}

#[test]
fn step_counter_takes_position_and_total() {
    let locales = load_locales();
    let vars = variables(&locales[FALLBACK_LANGUAGE]["step-counter"]);
    assert_eq!(vars, BTreeSet::from(["current", "total"]));
}
