//! Priority ordering: pin known ids to the front in a caller-given order.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Reorder `items` so that those whose key appears in `priority` come first,
/// in `priority` order; the rest follow in their original relative order.
///
/// Priority keys that match nothing are ignored. If several items share a
/// priority key they stay together at that key's position, in original order.
pub fn order_by_priority<T, K, Q, F>(items: Vec<T>, priority: &[K], key: F) -> Vec<T>
where
    K: Borrow<Q>,
    Q: Eq + Hash + ?Sized,
    F: Fn(&T) -> &Q,
{
    let rank: HashMap<&Q, usize> = priority
        .iter()
        .enumerate()
        .rev()
        .map(|(pos, k)| (k.borrow(), pos))
        .collect();

    let mut ranked: Vec<(usize, T)> = Vec::new();
    let mut rest: Vec<T> = Vec::new();

    for item in items {
        match rank.get(key(&item)) {
            Some(&pos) => ranked.push((pos, item)),
            None => rest.push(item),
        }
    }

    // Stable, so ties keep original order
    ranked.sort_by_key(|(pos, _)| *pos);

    ranked
        .into_iter()
        .map(|(_, item)| item)
        .chain(rest)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(items: &[&'static str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_priority_first_then_rest() {
        let ordered = order_by_priority(ids(&["A", "B", "C", "D"]), &ids(&["C", "A"]), |s| s);
        assert_eq!(ordered, ids(&["C", "A", "B", "D"]));
    }

    #[test]
    fn test_unknown_priority_ids_ignored() {
        let ordered = order_by_priority(ids(&["A", "B", "C"]), &ids(&["Z", "B"]), |s| s);
        assert_eq!(ordered, ids(&["B", "A", "C"]));
    }

    #[test]
    fn test_empty_priority_keeps_order() {
        let ordered = order_by_priority(ids(&["B", "A"]), &ids(&[]), |s| s);
        assert_eq!(ordered, ids(&["B", "A"]));
    }

    #[test]
    fn test_repeated_priority_key_uses_first_position() {
        let ordered = order_by_priority(ids(&["A", "B", "C"]), &ids(&["C", "A", "C"]), |s| s);
        assert_eq!(ordered, ids(&["C", "A", "B"]));
    }

    #[test]
    fn test_str_priority_over_owned_keys() {
        let ordered = order_by_priority(ids(&["A", "B", "C"]), &["C"], |s| s.as_str());
        assert_eq!(ordered, ids(&["C", "A", "B"]));
    }

    #[test]
    fn test_works_on_references() {
        let items = vec![(1, "x"), (2, "y"), (3, "z")];
        let refs: Vec<&(i32, &str)> = items.iter().collect();
        let ordered = order_by_priority(refs, &["z"], |item| &item.1);
        assert_eq!(ordered, vec![&(3, "z"), &(1, "x"), &(2, "y")]);
    }
}
