// src/domain/browse.rs

use crate::domain::property::Property;

/// Position of the selected listing inside the filtered list, with its
/// wrapping neighbours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbors<'a> {
    pub index: usize,
    pub current: &'a Property,
    pub prev: &'a Property,
    pub next: &'a Property,
}

/// `None` when `selected_id` is not in `list` (e.g. filtered out).
pub fn cycle<'a>(list: &'a [Property], selected_id: &str) -> Option<Neighbors<'a>> {
    let index = list.iter().position(|p| p.id == selected_id)?;
    let len = list.len();

    Some(Neighbors {
        index,
        current: &list[index],
        prev: &list[(index + len - 1) % len],
        next: &list[(index + 1) % len],
    })
}

/// "1 property" / "3 properties"
pub fn count_label(n: usize) -> String {
    if n == 1 {
        "1 property".to_string()
    } else {
        format!("{n} properties")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::seed::sample_properties;

    #[test]
    fn neighbours_wrap_at_both_ends() {
        let list = sample_properties();

        let first = cycle(&list, "1").unwrap();
        assert_eq!(first.index, 0);
        assert_eq!(first.prev.id, "6");
        assert_eq!(first.next.id, "2");

        let last = cycle(&list, "6").unwrap();
        assert_eq!(last.prev.id, "5");
        assert_eq!(last.next.id, "1");
    }

    #[test]
    fn single_item_points_at_itself() {
        let list: Vec<_> = sample_properties().into_iter().take(1).collect();
        let n = cycle(&list, "1").unwrap();
        assert_eq!(n.prev.id, "1");
        assert_eq!(n.next.id, "1");
    }

    #[test]
    fn missing_selection_is_none() {
        let list = sample_properties();
        assert!(cycle(&list, "nope").is_none());
        assert!(cycle(&[], "1").is_none());
    }

    #[test]
    fn count_label_pluralises() {
        assert_eq!(count_label(0), "0 properties");
        assert_eq!(count_label(1), "1 property");
        assert_eq!(count_label(6), "6 properties");
    }
}
