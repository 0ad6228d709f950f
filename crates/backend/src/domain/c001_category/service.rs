use super::repository;
use contracts::domain::c001_category::aggregate::Category;
use uuid::Uuid;

/// List categories for the form dropdown and the list page
pub async fn list_all() -> anyhow::Result<Vec<Category>> {
    repository::list_all().await
}

/// Create a new category
///
/// Categories are normally maintained by the catalog owner; this exists
/// for seeding and administration.
pub async fn create(name: String) -> anyhow::Result<Uuid> {
    let aggregate = Category::new_for_insert(name);
    repository::insert(&aggregate).await
}

/// Insert demo categories
pub async fn insert_test_data() -> anyhow::Result<()> {
    let existing = repository::list_all().await?;
    let names = ["Accessories", "Clothing", "Electronics", "Footwear"];

    for name in names {
        if existing.iter().any(|c| c.name == name) {
            continue;
        }
        create(name.to_string()).await?;
    }

    Ok(())
}
