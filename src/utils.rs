/// Swaps the values at `from` and `to`. Does nothing if `from` is equal to `to` or if either index
/// is outside the slice bounds.
pub fn swap_items<T>(from: usize, to: usize, items: &mut [T]) {
    if from == to || from >= items.len() || to >= items.len() {
        return;
    }

    items.swap(from, to);
}

#[cfg(test)]
mod tests {
    use super::swap_items;

    #[test]
    fn swaps_two_entries() {
        let mut items = vec!["a", "b", "c", "d"];
        swap_items(0, 2, &mut items);
        assert_eq!(items, ["c", "b", "a", "d"]);

        swap_items(3, 1, &mut items);
        assert_eq!(items, ["c", "d", "a", "b"]);
    }

    #[test]
    fn ignores_same_or_out_of_bounds() {
        let mut items = vec![1, 2, 3];
        swap_items(1, 1, &mut items);
        swap_items(0, 3, &mut items);
        swap_items(7, 0, &mut items);
        assert_eq!(items, [1, 2, 3]);
    }
}
