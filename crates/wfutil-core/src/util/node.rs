/// Recover the loop index from a node name such as `wf[0].steps(3:item)`.
///
/// The index sits between the first `(` and the first `:`.
/// Returns `None` when either is missing or the text between them is not an index.
pub fn recover_index_from_node_name(name: &str) -> Option<usize> {
    let start = name.find('(')?;
    let end = name.find(':')?;
    name.get(start + 1..end)?.parse().ok()
}
