use std::collections::BTreeSet;

/// Union of user-supplied tags and classifier labels.
///
/// Tags compare by exact string; duplicates collapse.
pub fn merge_tags<'a, U, S>(user: U, smart: S) -> BTreeSet<String>
where
    U: IntoIterator<Item = &'a str>,
    S: IntoIterator<Item = &'a str>,
{
    user.into_iter()
        .chain(smart)
        .map(str::to_owned)
        .collect()
}
