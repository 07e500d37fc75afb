use std::collections::HashSet;

use wfutil_model::{Artifact, Named, Parameter};

/// Merge lists of named items; the first occurrence of a name wins.
///
/// Lists are given in priority order. The relative order of the kept items is preserved.
pub fn merge_by_name<T>(lists: &[&[T]]) -> Vec<T>
where
    T: Named + Clone,
{
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = Vec::new();
    for list in lists {
        for item in list.iter() {
            if seen.insert(item.name()) {
                out.push(item.clone());
            }
        }
    }
    out
}

pub fn merge_parameters(lists: &[&[Parameter]]) -> Vec<Parameter> {
    merge_by_name(lists)
}

pub fn merge_artifacts(lists: &[&[Artifact]]) -> Vec<Artifact> {
    merge_by_name(lists)
}
