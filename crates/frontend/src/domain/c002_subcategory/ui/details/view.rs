use leptos::prelude::*;

use super::view_model::SubcategoryFormViewModel;
use crate::shared::alert::use_alerts;

/// Add-subcategory page.
#[component]
pub fn SubcategoryForm() -> impl IntoView {
    let alerts = use_alerts();
    let vm = SubcategoryFormViewModel::new();

    vm.load_categories(alerts);

    view! {
        <div class="details-container subcategory-details">
            <div class="details-header">
                <h3>"Add Subcategory"</h3>
            </div>

            <form
                class="details-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    vm.submit(alerts);
                }
            >
                <div class="form-group">
                    <label for="parent-category">{"Parent Category"}</label>
                    <select
                        id="parent-category"
                        prop:value=move || vm.draft.get().parent_category_id
                        on:change=move |ev| vm.set_category(event_target_value(&ev))
                    >
                        <For
                            each=move || vm.category_options.get()
                            key=|(value, _)| value.clone()
                            children=move |(value, label)| {
                                let this = value.clone();
                                let selected = move || {
                                    vm.draft.get().parent_category_id == this
                                };
                                view! {
                                    <option value=value selected=selected>
                                        {label}
                                    </option>
                                }
                            }
                        />
                    </select>
                </div>

                <div class="form-group">
                    <label for="subcategory-name">{"Subcategory Name"}</label>
                    <input
                        type="text"
                        id="subcategory-name"
                        prop:value=move || vm.draft.get().name
                        on:input=move |ev| vm.set_name(event_target_value(&ev))
                        placeholder="Enter subcategory name"
                    />
                </div>

                <div class="form-group">
                    <label for="subcategory-code">{"Subcategory Code"}</label>
                    <input
                        type="text"
                        id="subcategory-code"
                        prop:value=move || vm.draft.get().code
                        on:input=move |ev| vm.set_code(event_target_value(&ev))
                        placeholder="Enter a unique code"
                    />
                </div>

                <div class="form-group">
                    <label for="subcategory-description">{"Description"}</label>
                    <textarea
                        id="subcategory-description"
                        prop:value=move || vm.draft.get().description
                        on:input=move |ev| vm.set_description(event_target_value(&ev))
                        placeholder="Optional description"
                        rows="3"
                    />
                </div>

                <div class="details-actions">
                    <button type="submit" class="btn btn-primary">
                        "Add Subcategory"
                    </button>
                </div>
            </form>
        </div>
    }
}
