use itertools::Itertools;

use crate::model::{AttributeGroupEntry, AttributeGroupMeta, AttributeIndex};

/// Build the group code -> {name, items} lookup from attribute metadata.
///
/// Values are taken in code order. Repeated group codes, and repeated value
/// codes inside a group, keep the last occurrence.
pub fn build_index(groups: &[AttributeGroupMeta]) -> AttributeIndex {
    let mut index = AttributeIndex::new();

    for group in groups {
        let items = group
            .values
            .iter()
            .sorted_by(|a, b| a.code.cmp(&b.code))
            .map(|value| (value.code.clone(), value.name.clone()))
            .collect();

        if index
            .insert(
                group.code.clone(),
                AttributeGroupEntry {
                    name: group.name.clone(),
                    items,
                },
            )
            .is_some()
        {
            log::debug!("attribute group '{}' defined twice, keeping the last", group.code);
        }
    }

    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AttributeValueMeta;

    fn group(code: &str, name: &str, values: &[(&str, &str)]) -> AttributeGroupMeta {
        AttributeGroupMeta {
            code: code.to_string(),
            name: name.to_string(),
            values: values
                .iter()
                .map(|(code, name)| AttributeValueMeta {
                    code: code.to_string(),
                    name: name.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_build_index_groups_values_by_code() {
        let index = build_index(&[
            group("color", "Color", &[("black", "Black"), ("white", "White")]),
            group("cat", "Category", &[("cat_1_1", "Electric bikes"), ("cat_1", "Bikes")]),
        ]);

        assert_eq!(index.len(), 2);
        let cat = index.group("cat").unwrap();
        assert_eq!(cat.name, "Category");
        assert_eq!(cat.items["cat_1"], "Bikes");
        assert_eq!(cat.items["cat_1_1"], "Electric bikes");
        assert_eq!(index.group("color").unwrap().items.len(), 2);
        assert!(index.group("size").is_none());
    }

    #[test]
    fn test_duplicate_group_last_wins() {
        let index = build_index(&[
            group("color", "Colour", &[("black", "Black")]),
            group("color", "Color", &[("red", "Red")]),
        ]);

        let color = index.group("color").unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(color.name, "Color");
        assert!(color.items.contains_key("red"));
        assert!(!color.items.contains_key("black"));
    }

    #[test]
    fn test_duplicate_value_code_last_wins() {
        let index = build_index(&[group(
            "color",
            "Color",
            &[("red", "Red"), ("red", "Crimson")],
        )]);
        assert_eq!(index.group("color").unwrap().items["red"], "Crimson");
    }

    #[test]
    fn test_empty_metadata() {
        assert!(build_index(&[]).is_empty());
        let index = build_index(&[group("cat", "Category", &[])]);
        assert!(index.group("cat").unwrap().items.is_empty());
    }
}
