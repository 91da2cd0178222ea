use std::collections::BTreeSet;

pub type EquipmentSet = BTreeSet<String>;

/// Normalizes a capability tag to its canonical token. Blank tags yield `None`.
pub fn normalize_tag(tag: &str) -> Option<String> {
    let trimmed = tag.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_lowercase()) }
}

pub fn equipment_set<I, S>(tags: I) -> EquipmentSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter().filter_map(|tag| normalize_tag(tag.as_ref())).collect()
}
