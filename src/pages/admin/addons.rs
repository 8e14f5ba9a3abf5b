//! Add-on editor: create, edit, delete, and toggle availability.

use leptos::prelude::*;

use crate::components::status::{ErrorBanner, LoadingNotice, SuccessBanner};
use crate::net::api::CatalogScope;
use crate::net::types::{AddOn, AddOnCategory};
use crate::state::context::AppContext;
use crate::util::admin_forms::AddOnForm;
use crate::util::booking_form::format_price;
use crate::util::dialog::{self, MSG_CONFIRM_DELETE_ADDON};

const MSG_LOAD_FAILED: &str = "Failed to load add-ons. Please try again.";
const MSG_SAVE_FAILED: &str = "Failed to save add-on. Please try again.";
const MSG_DELETE_FAILED: &str = "Failed to delete add-on. Please try again.";

#[component]
pub fn ManageAddonsPage() -> impl IntoView {
    let ctx = AppContext::use_app();

    let addons = RwSignal::new(Vec::<AddOn>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let form = RwSignal::new(AddOnForm::default());
    // `Some(None)` creates, `Some(Some(id))` edits, `None` hides the form.
    let editing = RwSignal::new(None::<Option<String>>);
    let saving = RwSignal::new(false);

    let reload = move || {
        let client = ctx.client();
        leptos::task::spawn_local(async move {
            match client.list_addons(None, CatalogScope::All).await {
                Ok(items) => addons.set(items),
                Err(e) => {
                    log::warn!("admin add-on list failed: {e}");
                    error.set(MSG_LOAD_FAILED.to_owned());
                }
            }
            loading.set(false);
        });
    };
    reload();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let input = match form.with_untracked(AddOnForm::to_input) {
            Ok(input) => input,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        let Some(target) = editing.get_untracked() else {
            return;
        };
        error.set(String::new());
        saving.set(true);
        let client = ctx.client();
        leptos::task::spawn_local(async move {
            let result = match &target {
                Some(id) => client.update_addon(id, &input).await,
                None => client.create_addon(&input).await,
            };
            match result {
                Ok(saved) => {
                    log::info!("add-on {} saved", saved.id);
                    let message = if target.is_some() { "Add-on updated." } else { "Add-on created." };
                    success.set(message.to_owned());
                    editing.set(None);
                    reload();
                }
                Err(e) => {
                    log::warn!("add-on save failed: {e}");
                    error.set(e.user_message(MSG_SAVE_FAILED));
                }
            }
            saving.set(false);
        });
    };

    let on_edit = Callback::new(move |addon: AddOn| {
        form.set(AddOnForm::from_addon(&addon));
        editing.set(Some(Some(addon.id)));
        error.set(String::new());
    });

    let on_delete = Callback::new(move |id: String| {
        if !dialog::confirm(MSG_CONFIRM_DELETE_ADDON) {
            return;
        }
        let client = ctx.client();
        leptos::task::spawn_local(async move {
            match client.delete_addon(&id).await {
                Ok(()) => {
                    success.set("Add-on deleted.".to_owned());
                    reload();
                }
                Err(e) => {
                    log::warn!("add-on {id} delete failed: {e}");
                    error.set(MSG_DELETE_FAILED.to_owned());
                }
            }
        });
    });

    view! {
        <div class="admin-page">
            <header class="page-header">
                <h1>"Manage Add-ons"</h1>
                <button
                    class="btn btn--primary"
                    on:click=move |_| {
                        form.set(AddOnForm::default());
                        editing.set(Some(None));
                        error.set(String::new());
                    }
                >
                    "+ New Add-on"
                </button>
            </header>
            <SuccessBanner message=success/>
            <ErrorBanner message=error/>
            <Show when=move || editing.with(Option::is_some)>
                <form class="admin-form" on:submit=on_submit>
                    <label for="name">"Name"</label>
                    <input
                        id="name"
                        type="text"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                    <label for="description">"Description"</label>
                    <textarea
                        id="description"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    ></textarea>
                    <label for="category">"Category"</label>
                    <select
                        id="category"
                        prop:value=move || form.with(|f| f.category.as_str())
                        on:change=move |ev| {
                            if let Some(category) = AddOnCategory::parse(&event_target_value(&ev)) {
                                form.update(|f| f.category = category);
                            }
                        }
                    >
                        {AddOnCategory::ALL
                            .into_iter()
                            .map(|c| view! { <option value=c.as_str()>{c.as_str()}</option> })
                            .collect_view()}
                    </select>
                    <label for="price">"Price (ETB)"</label>
                    <input
                        id="price"
                        type="text"
                        prop:value=move || form.with(|f| f.price.clone())
                        on:input=move |ev| form.update(|f| f.price = event_target_value(&ev))
                    />
                    <label class="admin-form__check">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.is_active)
                            on:change=move |ev| form.update(|f| f.is_active = event_target_checked(&ev))
                        />
                        "Available for booking"
                    </label>
                    <div class="admin-form__actions">
                        <button class="btn" type="button" on:click=move |_| editing.set(None)>"Cancel"</button>
                        <button class="btn btn--primary" type="submit" disabled=move || saving.get()>"Save"</button>
                    </div>
                </form>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingNotice text="Loading add-ons..."/> }>
                <div class="addon-grid">
                    {move || {
                        addons
                            .get()
                            .into_iter()
                            .map(|addon| view! { <AddOnTile addon=addon on_edit=on_edit on_delete=on_delete/> })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn AddOnTile(addon: AddOn, on_edit: Callback<AddOn>, on_delete: Callback<String>) -> impl IntoView {
    let id = addon.id.clone();
    let editable = addon.clone();
    view! {
        <article class=if addon.is_active { "addon-card" } else { "addon-card addon-card--inactive" }>
            <span class="addon-card__category">{addon.category.as_str()}</span>
            <h3>{addon.name}</h3>
            {addon.description.map(|d| view! { <p>{d}</p> })}
            <p class="addon-card__price">{format_price(addon.price)}</p>
            <div class="addon-card__actions">
                <button class="btn" on:click=move |_| on_edit.run(editable.clone())>"Edit"</button>
                <button class="btn btn--danger" on:click=move |_| on_delete.run(id.clone())>"Delete"</button>
            </div>
        </article>
    }
}
