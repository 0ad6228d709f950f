use contracts::domain::c001_category::aggregate::Category;

/// Placeholder value for the "no category chosen" option. The empty string
/// keeps the placeholder from ever being mistaken for a real id.
pub const PLACEHOLDER_VALUE: &str = "";
pub const PLACEHOLDER_LABEL: &str = "Choose Category";

/// Builds `(value, label)` pairs for the parent category select: the
/// placeholder first, then one entry per category in the order given.
pub fn select_options(categories: &[Category]) -> Vec<(String, String)> {
    let mut options = Vec::with_capacity(categories.len() + 1);
    options.push((PLACEHOLDER_VALUE.to_string(), PLACEHOLDER_LABEL.to_string()));
    for category in categories {
        options.push((category.to_string_id(), category.name.clone()));
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str) -> Category {
        Category::new_for_insert(name.to_string())
    }

    #[test]
    fn empty_list_still_offers_placeholder() {
        let options = select_options(&[]);
        assert_eq!(
            options,
            vec![("".to_string(), "Choose Category".to_string())]
        );
    }

    #[test]
    fn one_option_per_category_plus_placeholder() {
        let categories = vec![category("Clothing"), category("Footwear")];
        let options = select_options(&categories);

        assert_eq!(options.len(), 3);
        assert_eq!(options[0].0, "");
        assert_eq!(options[1].1, "Clothing");
        assert_eq!(options[2].1, "Footwear");
        assert_eq!(options[1].0, categories[0].to_string_id());
    }

    #[test]
    fn rebuilding_does_not_accumulate_placeholders() {
        let categories = vec![category("Electronics")];
        let first = select_options(&categories);
        let second = select_options(&categories);
        assert_eq!(first, second);
        assert_eq!(second.iter().filter(|(v, _)| v.is_empty()).count(), 1);
    }
}
