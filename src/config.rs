// src/config.rs

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// The page we scrape. One table of per-country statistics lives here.
pub static SOURCE_URL: &str = "https://www.worldometers.info/coronavirus/";

/// Printed under the timestamp line on every run.
pub static RESET_NOTE: &str = "Counters are reset at 23:59UTC";

/// Raw header label → canonical short name.
///
/// Labels are matched on their compact form (see [`compact_key`]), so the
/// entries below are written the way the page displays them.
pub static COLUMN_SPECS: &[(&str, &str)] = &[
    ("#", "#"),
    ("Country,Other", "Country"),
    ("TotalCases", "Cases"),
    ("NewCases", "NCases"),
    ("TotalDeaths", "Deaths"),
    ("NewDeaths", "NDeaths"),
    ("TotalRecovered", "Recovered"),
    ("NewRecovered", "NRecovered"),
    ("ActiveCases", "Active"),
    ("Serious,Critical", "Critical"),
    ("Tot Cases/1M pop", "CPM"),
    ("Deaths/1M pop", "DPM"),
    ("TotalTests", "Tests"),
    ("Tests/1M pop", "TPM"),
    ("Population", "Population"),
    ("Continent", "Continent"),
    ("1 Caseevery X ppl", "PPC"),
    ("1 Deathevery X ppl", "PPD"),
    ("1 Testevery X ppl", "PPT"),
    ("New Cases/1M pop", "NCPM"),
    ("New Deaths/1M pop", "NDPM"),
    ("Active Cases/1M pop", "ACPM"),
];

/// Canonical columns expected to hold counts or rates. Empty and `N/A`
/// cells in these become zero before coercion.
pub static NUMERIC_CANDIDATES: &[&str] = &[
    "#",
    "Cases",
    "NCases",
    "Deaths",
    "NDeaths",
    "Recovered",
    "NRecovered",
    "Active",
    "Critical",
    "CPM",
    "DPM",
    "Tests",
    "TPM",
    "Population",
    "PPC",
    "PPD",
    "PPT",
    "NCPM",
    "NDPM",
    "ACPM",
];

/// Identifier columns and the label an empty cell is replaced with.
pub static PLACEHOLDERS: &[(&str, &str)] = &[
    ("Country", "Non-Country"),
    ("Continent", "Non-Continent"),
];

pub const DEFAULT_SORT_COLUMN: &str = "Cases";

/// Passing this as the sort column turns sorting off.
pub const NO_SORT: &str = "none";

pub const MAX_RETRIES: u32 = 3;
pub const BACKOFF_MS: u64 = 500;

/// Compact lookup form of a header label: whitespace, `+` and commas
/// dropped, ASCII lowercased.
pub fn compact_key(label: &str) -> String {
    label
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '+' && *c != ',')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

static COLUMN_INDEX: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    COLUMN_SPECS
        .iter()
        .map(|(raw, canonical)| (compact_key(raw), *canonical))
        .collect()
});

/// Canonical name for a raw header label, if the lookup table knows it.
pub fn canonical_name(label: &str) -> Option<&'static str> {
    COLUMN_INDEX.get(&compact_key(label)).copied()
}

/// Every canonical name, in table order.
pub fn canonical_names() -> impl Iterator<Item = &'static str> {
    COLUMN_SPECS.iter().map(|(_, canonical)| *canonical)
}

pub fn is_numeric_candidate(column: &str) -> bool {
    NUMERIC_CANDIDATES.contains(&column)
}

pub fn placeholder_for(column: &str) -> Option<&'static str> {
    PLACEHOLDERS
        .iter()
        .find(|(name, _)| *name == column)
        .map(|(_, label)| *label)
}
