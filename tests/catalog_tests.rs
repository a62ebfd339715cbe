use std::num::NonZeroU32;

use culinary::analyzer::TextAnalyzer;
use culinary::catalog::{CatalogError, InMemoryCatalog, RecipeCatalogService};
use culinary::data_models::{Facet, Recipe, SearchFilters, SearchRequest};

mod test_helpers {
    use super::*;

    pub fn sample_catalog() -> InMemoryCatalog {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/recipes.json");
        InMemoryCatalog::from_json_file(path).expect("sample catalog loads")
    }

    pub fn request(text: &str, limit: u32, filters: SearchFilters) -> SearchRequest {
        SearchRequest::new(text, NonZeroU32::new(limit).unwrap(), filters)
    }

    pub fn ids(catalog: &InMemoryCatalog, request: &SearchRequest) -> Vec<u64> {
        catalog.search(request).into_iter().map(|p| p.id).collect()
    }

    pub fn recipe(id: u64, title: &str) -> Recipe {
        Recipe {
            id,
            title: title.to_string(),
            image: format!("https://images.example.com/{id}.jpg"),
            summary: String::new(),
            ready_in_minutes: None,
            servings: None,
            vegetarian: false,
            vegan: false,
            gluten_free: false,
            dairy_free: false,
            ingredients: Vec::new(),
            instructions: Vec::new(),
        }
    }
}

use test_helpers::*;

#[test]
fn test_sample_catalog_loads() {
    let catalog = sample_catalog();
    assert_eq!(catalog.len(), 8);
    assert!(!catalog.is_empty());
}

#[test]
fn test_empty_text_lists_catalog_in_order() {
    let catalog = sample_catalog();
    let all = ids(&catalog, &request("", 100, SearchFilters::default()));
    assert_eq!(all, vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn test_limit_truncates() {
    let catalog = sample_catalog();
    assert_eq!(
        ids(&catalog, &request("", 3, SearchFilters::default())),
        vec![1, 2, 3]
    );
    assert_eq!(
        ids(&catalog, &request("garlic", 1, SearchFilters::default())),
        vec![3]
    );
}

#[test]
fn test_text_match_is_stemmed_and_case_insensitive() {
    let catalog = sample_catalog();
    let filters = SearchFilters::default();
    assert_eq!(ids(&catalog, &request("pancakes", 10, filters)), vec![1, 2]);
    assert_eq!(ids(&catalog, &request("Pancake", 10, filters)), vec![1, 2]);
    assert_eq!(ids(&catalog, &request("PANCAKES!", 10, filters)), vec![1, 2]);
}

#[test]
fn test_all_terms_must_match() {
    let catalog = sample_catalog();
    let filters = SearchFilters::default();
    assert_eq!(ids(&catalog, &request("garlic", 10, filters)), vec![3, 5, 8]);
    assert_eq!(ids(&catalog, &request("garlic lemon", 10, filters)), vec![5, 8]);
    assert_eq!(ids(&catalog, &request("tomato soup", 10, filters)), vec![3]);
    assert!(ids(&catalog, &request("garlic unicorn", 10, filters)).is_empty());
}

#[test]
fn test_stop_words_are_ignored() {
    let catalog = sample_catalog();
    assert_eq!(
        ids(&catalog, &request("the soup", 10, SearchFilters::default())),
        vec![3, 4]
    );
}

#[test]
fn test_facets_narrow_results() {
    let catalog = sample_catalog();
    let vegan = SearchFilters::default().with(Facet::Vegan);
    assert_eq!(ids(&catalog, &request("", 10, vegan)), vec![2, 4, 7]);
    assert_eq!(ids(&catalog, &request("pancakes", 10, vegan)), vec![2]);
    assert_eq!(ids(&catalog, &request("soup", 10, vegan)), vec![4]);

    let everything: SearchFilters = Facet::ALL.into_iter().collect();
    assert_eq!(ids(&catalog, &request("", 10, everything)), vec![4, 7]);
}

#[test]
fn test_limit_applies_after_facets() {
    let catalog = sample_catalog();
    let gluten_free = SearchFilters::default().with(Facet::GlutenFree);
    assert_eq!(ids(&catalog, &request("", 2, gluten_free)), vec![3, 4]);
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let result = InMemoryCatalog::new(
        vec![recipe(1, "Toast"), recipe(2, "Jam"), recipe(1, "More Toast")],
        TextAnalyzer::english(),
    );
    assert!(matches!(result, Err(CatalogError::DuplicateId(1))));
}

#[test]
fn test_malformed_json_is_a_parse_error() {
    let result = InMemoryCatalog::from_json_str(r#"[{"id": "one"}]"#);
    assert!(matches!(result, Err(CatalogError::Parse(_))));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let result = InMemoryCatalog::from_json_file("does/not/exist.json");
    assert!(matches!(result, Err(CatalogError::Io { .. })));
}

#[test]
fn test_minimal_json_fields_default() {
    let catalog =
        InMemoryCatalog::from_json_str(r#"[{"id": 9, "title": "Plain Rice", "image": "rice.jpg"}]"#)
            .unwrap();
    let rice = catalog.get(9).unwrap();
    assert!(rice.ingredients.is_empty());
    assert!(!rice.vegan);
    assert_eq!(rice.ready_in_minutes, None);
}

#[tokio::test]
async fn test_service_load_previews() {
    let catalog = sample_catalog();
    let previews = catalog
        .load_previews(&request("curry", 10, SearchFilters::default()))
        .await
        .unwrap();
    assert_eq!(previews.len(), 1);
    assert_eq!(previews[0].id, 7);
    assert_eq!(previews[0].title, "Chickpea Coconut Curry");
    assert_eq!(
        previews[0].image,
        "https://images.example.com/recipes/7-chickpea-curry.jpg"
    );
}

#[tokio::test]
async fn test_service_recipe_detail() {
    let catalog = sample_catalog();
    let chicken = catalog.recipe(5).await.unwrap().unwrap();
    assert_eq!(chicken.title, "Lemon Garlic Roast Chicken");
    assert_eq!(chicken.servings, Some(4));
    assert_eq!(chicken.instructions.len(), 3);
    assert!(catalog.recipe(404).await.unwrap().is_none());
}
