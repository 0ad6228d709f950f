//! End-to-end exercise of the subcategory creation flow against a real
//! sqlite file. One test function: the database connection is a
//! process-wide singleton, so the steps run as a single sequence.

use backend::domain::c001_category;
use backend::domain::c002_subcategory;
use backend::domain::error::DomainError;
use backend::shared::data::db;
use contracts::domain::c002_subcategory::aggregate::SubcategoryDraft;

fn temp_db_path() -> String {
    let dir = std::env::temp_dir().join(format!("subcategory-flow-{}", uuid::Uuid::new_v4()));
    dir.join("app.db").to_string_lossy().into_owned()
}

#[tokio::test]
async fn create_flow_enforces_code_uniqueness() {
    let db_path = temp_db_path();
    db::initialize_database(Some(&db_path)).await.unwrap();

    // Seed parent categories
    c001_category::service::insert_test_data().await.unwrap();
    let categories = c001_category::service::list_all().await.unwrap();
    assert!(!categories.is_empty());
    // Alphabetical, case-insensitive
    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort_by_key(|n| n.to_lowercase());
    assert_eq!(names, sorted);

    // Seeding again must not duplicate
    c001_category::service::insert_test_data().await.unwrap();
    assert_eq!(
        c001_category::service::list_all().await.unwrap().len(),
        categories.len()
    );

    let parent = categories[0].to_string_id();
    let issued_at = chrono::Utc::now();

    // Valid draft with untrimmed fields
    let draft = SubcategoryDraft {
        parent_category_id: parent.clone(),
        name: " Shoes ".into(),
        code: "SH01".into(),
        description: String::new(),
    };
    let id = c002_subcategory::service::create(draft, "user-42")
        .await
        .unwrap();

    let all = c002_subcategory::service::list(None).await.unwrap();
    assert_eq!(all.len(), 1);
    let created = &all[0];
    assert_eq!(created.id.value(), id);
    assert_eq!(created.parent_category_id, parent);
    assert_eq!(created.name, "Shoes");
    assert_eq!(created.code, "SH01");
    assert_eq!(created.description, None);
    assert_eq!(created.created_by, "user-42");
    assert!(created.created_at >= issued_at);

    // Duplicate code is rejected and writes nothing
    let duplicate = SubcategoryDraft {
        parent_category_id: parent.clone(),
        name: "Sandals".into(),
        code: "SH01".into(),
        description: "open shoes".into(),
    };
    let err = c002_subcategory::service::create(duplicate, "user-42")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::DuplicateCode));
    assert_eq!(err.to_string(), "Subcategory code already exists");
    assert_eq!(c002_subcategory::service::list(None).await.unwrap().len(), 1);

    // Exact-match code filter
    let hits = c002_subcategory::service::list(Some("SH01")).await.unwrap();
    assert_eq!(hits.len(), 1);
    let misses = c002_subcategory::service::list(Some("sh01")).await.unwrap();
    assert!(misses.is_empty());

    // Client-side checks are re-run server-side: category first, then
    // name, then code
    let empty = SubcategoryDraft::default();
    let err = c002_subcategory::service::create(empty, "user-42")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(ref m) if m == "Please select a parent category"));

    let no_code = SubcategoryDraft {
        parent_category_id: parent,
        name: "Boots".into(),
        code: "   ".into(),
        description: String::new(),
    };
    let err = c002_subcategory::service::create(no_code, "user-42")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(ref m) if m == "Please enter subcategory code"));
}
