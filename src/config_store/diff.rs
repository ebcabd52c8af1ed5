use std::{collections::BTreeSet, time::Instant};

use crate::config::Preferences;

use super::{ChangeSource, PreferenceChange};

/// Compares two preference sets and returns one change per differing key.
///
/// Keys are reported in alphabetical order so subscribers see a stable
/// sequence for a single write or reload.
pub fn diff_preferences(
    old: &Preferences,
    new: &Preferences,
    source: ChangeSource,
) -> Vec<PreferenceChange> {
    let old_table = old.to_table();
    let new_table = new.to_table();
    let timestamp = Instant::now();

    let keys: BTreeSet<&String> = old_table.keys().chain(new_table.keys()).collect();

    keys.into_iter()
        .filter_map(|key| {
            let old_value = old_table.get(key);
            let new_value = new_table.get(key)?;

            if old_value == Some(new_value) {
                return None;
            }

            Some(PreferenceChange {
                key: key.clone(),
                old_value: old_value.cloned(),
                new_value: new_value.clone(),
                source,
                timestamp,
            })
        })
        .collect()
}
