//! Stable merge sort over optionally-keyed sequences
//!
//! General-purpose ordering primitive used to arrange accepted trips by
//! numeric key before loading. Works on any `(Option<K>, V)` pairs where the
//! key type is totally ordered: absent keys sort before every present key,
//! and elements with equal keys (or two absent keys) keep their relative
//! input order.
//!
//! The implementation is a bottom-up iterative merge sort — runs of doubling
//! width are merged pairwise until one run spans the input — so arbitrarily
//! large batches never risk recursion depth.

/// Stable merge sort of `(key, payload)` pairs into non-decreasing key order
///
/// Absent keys are treated as lower than any present key. A sequence of
/// length <= 1 is already sorted and is returned as a copy.
pub fn merge_sort<K, V>(input: &[(Option<K>, V)]) -> Vec<(Option<K>, V)>
where
    K: Ord + Clone,
    V: Clone,
{
    if input.len() <= 1 {
        return input.to_vec();
    }

    let n = input.len();
    let mut current = input.to_vec();
    let mut scratch = input.to_vec();

    let mut width = 1;
    while width < n {
        let mut start = 0;
        while start < n {
            let mid = usize::min(start + width, n);
            let end = usize::min(start + 2 * width, n);
            merge_runs(
                &current[start..mid],
                &current[mid..end],
                &mut scratch[start..end],
            );
            start = end;
        }
        std::mem::swap(&mut current, &mut scratch);
        width *= 2;
    }

    current
}

/// Merge two sorted runs into `out`, consuming the smaller head each step
///
/// Takes from the left run on ties, which is what makes the sort stable.
/// `Option<K>` ordering places `None` below every `Some`, giving absent keys
/// their sorts-first position without a separate sentinel branch.
fn merge_runs<K, V>(left: &[(Option<K>, V)], right: &[(Option<K>, V)], out: &mut [(Option<K>, V)])
where
    K: Ord + Clone,
    V: Clone,
{
    debug_assert_eq!(left.len() + right.len(), out.len());

    let mut i = 0;
    let mut j = 0;
    let mut k = 0;

    while i < left.len() && j < right.len() {
        if left[i].0 <= right[j].0 {
            out[k] = left[i].clone();
            i += 1;
        } else {
            out[k] = right[j].clone();
            j += 1;
        }
        k += 1;
    }

    while i < left.len() {
        out[k] = left[i].clone();
        i += 1;
        k += 1;
    }

    while j < right.len() {
        out[k] = right[j].clone();
        j += 1;
        k += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn keys<V: Clone>(items: &[(Option<i64>, V)]) -> Vec<Option<i64>> {
        items.iter().map(|(k, _)| *k).collect()
    }

    #[test]
    fn test_empty_and_single_element() {
        let empty: Vec<(Option<i64>, &str)> = vec![];
        assert_eq!(merge_sort(&empty), empty);

        let single = vec![(Some(42i64), "only")];
        assert_eq!(merge_sort(&single), single);
    }

    #[test]
    fn test_sorts_into_non_decreasing_key_order() {
        let input = vec![
            (Some(5i64), "e"),
            (Some(1), "a"),
            (Some(4), "d"),
            (Some(2), "b"),
            (Some(3), "c"),
        ];

        let sorted = merge_sort(&input);

        assert_eq!(
            keys(&sorted),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5)]
        );
    }

    #[test]
    fn test_absent_keys_precede_all_present_keys() {
        let input = vec![
            (Some(2i64), "b"),
            (None, "first-missing"),
            (Some(1), "a"),
            (None, "second-missing"),
        ];

        let sorted = merge_sort(&input);

        assert_eq!(keys(&sorted), vec![None, None, Some(1), Some(2)]);
        // Two absent keys preserve their relative input order
        assert_eq!(sorted[0].1, "first-missing");
        assert_eq!(sorted[1].1, "second-missing");
    }

    #[test]
    fn test_stability_for_equal_present_keys() {
        let input = vec![
            (Some(7i64), "first"),
            (Some(3), "x"),
            (Some(7), "second"),
            (Some(7), "third"),
            (Some(3), "y"),
        ];

        let sorted = merge_sort(&input);

        let sevens: Vec<&str> = sorted
            .iter()
            .filter(|(k, _)| *k == Some(7))
            .map(|(_, v)| *v)
            .collect();
        assert_eq!(sevens, vec!["first", "second", "third"]);

        let threes: Vec<&str> = sorted
            .iter()
            .filter(|(k, _)| *k == Some(3))
            .map(|(_, v)| *v)
            .collect();
        assert_eq!(threes, vec!["x", "y"]);
    }

    #[test]
    fn test_output_is_a_permutation_of_input() {
        // Deliberately heavy on duplicates and absent keys
        let input: Vec<(Option<i64>, usize)> = vec![
            (Some(3), 0),
            (None, 1),
            (Some(1), 2),
            (Some(3), 3),
            (None, 4),
            (Some(-2), 5),
            (Some(1), 6),
        ];

        let sorted = merge_sort(&input);
        assert_eq!(sorted.len(), input.len());

        let mut input_counts: HashMap<(Option<i64>, usize), usize> = HashMap::new();
        for item in &input {
            *input_counts.entry(*item).or_default() += 1;
        }
        for item in &sorted {
            let count = input_counts.get_mut(item).expect("element not in input");
            *count -= 1;
        }
        assert!(input_counts.values().all(|&c| c == 0));
    }

    #[test]
    fn test_sorting_sorted_input_is_idempotent() {
        let input = vec![
            (None, "m"),
            (Some(1i64), "a"),
            (Some(1), "b"),
            (Some(2), "c"),
            (Some(9), "d"),
        ];

        let once = merge_sort(&input);
        let twice = merge_sort(&once);

        assert_eq!(once, input);
        assert_eq!(twice, once);
    }

    #[test]
    fn test_larger_shuffled_batch() {
        // Deterministic pseudo-shuffle across several merge widths
        let mut input: Vec<(Option<i64>, usize)> = Vec::new();
        let mut state: i64 = 12345;
        for i in 0..257 {
            state = (state.wrapping_mul(1103515245).wrapping_add(12345)) % 100_000;
            let key = if state % 17 == 0 { None } else { Some(state) };
            input.push((key, i));
        }

        let sorted = merge_sort(&input);

        for window in sorted.windows(2) {
            assert!(window[0].0 <= window[1].0);
        }
    }
}
