use std::collections::HashMap;

use leptos::prelude::*;

use contracts::domain::c001_category::aggregate::Category;
use contracts::domain::c002_subcategory::aggregate::Subcategory;

use crate::domain::c001_category::model::{fetch_categories, insert_test_data};
use crate::domain::c002_subcategory::ui::details::model::fetch_subcategories;

#[derive(Clone, Debug)]
pub struct SubcategoryRow {
    pub id: String,
    pub code: String,
    pub name: String,
    pub parent_category_id: String,
    pub description: String,
    pub created_by: String,
    pub created_at: String,
}

impl From<Subcategory> for SubcategoryRow {
    fn from(s: Subcategory) -> Self {
        Self {
            id: s.to_string_id(),
            code: s.code,
            name: s.name,
            parent_category_id: s.parent_category_id,
            description: s.description.unwrap_or_else(|| "-".to_string()),
            created_by: s.created_by,
            created_at: format_timestamp(s.created_at),
        }
    }
}

fn format_timestamp(dt: chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Read-only subcategory list; the form redirects here after a create.
#[component]
pub fn SubcategoryList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<SubcategoryRow>>(Vec::new());
    let (category_names, set_category_names) = signal::<HashMap<String, String>>(HashMap::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_subcategories().await {
                Ok(v) => {
                    let rows: Vec<SubcategoryRow> = v.into_iter().map(Into::into).collect();
                    set_items.set(rows);
                    set_error.set(None);
                }
                Err(e) => {
                    set_error.set(Some(e));
                    return;
                }
            }
            match fetch_categories().await {
                Ok(categories) => {
                    set_category_names.set(
                        categories
                            .into_iter()
                            .map(|c: Category| (c.to_string_id(), c.name))
                            .collect(),
                    );
                }
                // Rows still render; the parent column falls back to the id.
                Err(e) => log::error!("failed to load categories: {}", e),
            }
        });
    };

    fetch();

    let parent_name = move |id: &str| {
        category_names
            .get()
            .get(id)
            .cloned()
            .unwrap_or_else(|| id.to_string())
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Subcategories"}</h2>
                <div class="header__actions">
                    <a class="button button--primary" href="/">
                        {"Add Subcategory"}
                    </a>
                    <button class="button button--primary" on:click=move |_| {
                        wasm_bindgen_futures::spawn_local(async move {
                            match insert_test_data().await {
                                Ok(_) => fetch(),
                                Err(e) => set_error.set(Some(format!("Failed to seed categories: {}", e))),
                            }
                        });
                    }>
                        {"Seed Categories"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {"Refresh"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Code"}</th>
                            <th class="table__header-cell">{"Name"}</th>
                            <th class="table__header-cell">{"Parent Category"}</th>
                            <th class="table__header-cell">{"Description"}</th>
                            <th class="table__header-cell">{"Created By"}</th>
                            <th class="table__header-cell">{"Created"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|row| {
                            let parent = parent_name(&row.parent_category_id);
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.code}</td>
                                    <td class="table__cell">{row.name}</td>
                                    <td class="table__cell">{parent}</td>
                                    <td class="table__cell">{row.description}</td>
                                    <td class="table__cell">{row.created_by}</td>
                                    <td class="table__cell">{row.created_at}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
