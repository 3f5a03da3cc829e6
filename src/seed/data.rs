use indexmap::IndexMap;
use serde_json::Map;

use crate::model::{AttributeGroupMeta, AttributeValueMeta, ProductId, RawProduct};

/// Helper function to create a product with no extra upstream fields
fn create_product(id: u64, name: &str, attributes: &[(&str, &str)]) -> RawProduct {
    RawProduct {
        id: ProductId::Number(id),
        name: name.to_string(),
        attributes: attributes
            .iter()
            .map(|(group, codes)| (group.to_string(), codes.to_string()))
            .collect::<IndexMap<_, _>>(),
        extra: Map::new(),
    }
}

/// Helper function to create an attribute group from (code, name) pairs
fn create_group(code: &str, name: &str, values: &[(&str, &str)]) -> AttributeGroupMeta {
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

/// Sample product catalog: eight bikes and cars plus one product without
/// any attributes.
pub fn products() -> Vec<RawProduct> {
    vec![
        create_product(6267654, "Auto Omega", &[("cat", "cat_2"), ("color", "black,white")]),
        create_product(8094994, "Bike Alef", &[("color", "black,white"), ("cat", "cat_1")]),
        create_product(2846132, "Bike Bet", &[("color", "blue"), ("cat", "cat_1_1,cat_1_2")]),
        create_product(2169396, "Auto Alpha", &[("color", "green,blue"), ("cat", "cat_2_2")]),
        create_product(2749899, "Auto Delta", &[("color", "red"), ("cat", "cat_2_2")]),
        create_product(3311138, "Auto Gamma", &[("cat", "cat_2_3,cat_2_2"), ("color", "black,white")]),
        create_product(4364807, "Bike Gimel", &[("color", "red,white,green"), ("cat", "cat_1_1,cat_1_2")]),
        create_product(5385176, "Bike Dalet", &[("color", "black"), ("cat", "cat_1_2")]),
        create_product(12345, "Random product", &[]),
    ]
}

/// Attribute metadata matching [`products`]. Values are deliberately not in
/// code order.
pub fn attribute_meta() -> Vec<AttributeGroupMeta> {
    vec![
        create_group(
            "color",
            "Color",
            &[
                ("brown", "Brown"),
                ("black", "Black"),
                ("white", "White"),
                ("blue", "Blue"),
                ("green", "Green"),
                ("red", "Red"),
            ],
        ),
        create_group(
            "cat",
            "Category",
            &[
                ("cat_1_1", "Electric bikes"),
                ("cat_1", "Bikes"),
                ("cat_1_2", "BMX"),
                ("cat_2", "Cars"),
                ("cat_2_1", "Electric cars"),
                ("cat_2_2", "Hybrids"),
                ("cat_2_3", "Sportscars"),
            ],
        ),
    ]
}
