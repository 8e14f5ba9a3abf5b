//! Package catalogue editor: create, edit, delete.

use leptos::prelude::*;

use crate::components::status::{ErrorBanner, LoadingNotice, SuccessBanner};
use crate::net::api::CatalogScope;
use crate::net::types::{Package, PackageCategory};
use crate::state::context::AppContext;
use crate::util::admin_forms::PackageForm;
use crate::util::booking_form::format_price;
use crate::util::dialog::{self, MSG_CONFIRM_DELETE_PACKAGE};

const MSG_LOAD_FAILED: &str = "Failed to load packages. Please try again.";
const MSG_SAVE_FAILED: &str = "Failed to save package. Please try again.";
const MSG_DELETE_FAILED: &str = "Failed to delete package. Please try again.";

#[component]
pub fn ManagePackagesPage() -> impl IntoView {
    let ctx = AppContext::use_app();

    let packages = RwSignal::new(Vec::<Package>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let form = RwSignal::new(PackageForm::default());
    // `Some(None)` creates, `Some(Some(id))` edits, `None` hides the form.
    let editing = RwSignal::new(None::<Option<String>>);
    let saving = RwSignal::new(false);

    let reload = move || {
        let client = ctx.client();
        leptos::task::spawn_local(async move {
            match client.list_packages(None, CatalogScope::All).await {
                Ok(items) => packages.set(items),
                Err(e) => {
                    log::warn!("admin package list failed: {e}");
                    error.set(MSG_LOAD_FAILED.to_owned());
                }
            }
            loading.set(false);
        });
    };
    reload();

    let open_create = move |_| {
        form.set(PackageForm::default());
        editing.set(Some(None));
        error.set(String::new());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let input = match form.with_untracked(PackageForm::to_input) {
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
                Some(id) => client.update_package(id, &input).await,
                None => client.create_package(&input).await,
            };
            match result {
                Ok(saved) => {
                    log::info!("package {} saved", saved.id);
                    let message = if target.is_some() { "Package updated." } else { "Package created." };
                    success.set(message.to_owned());
                    editing.set(None);
                    reload();
                }
                Err(e) => {
                    log::warn!("package save failed: {e}");
                    error.set(e.user_message(MSG_SAVE_FAILED));
                }
            }
            saving.set(false);
        });
    };

    let on_edit = Callback::new(move |package: Package| {
        form.set(PackageForm::from_package(&package));
        editing.set(Some(Some(package.id)));
        error.set(String::new());
    });

    let on_delete = Callback::new(move |id: String| {
        if !dialog::confirm(MSG_CONFIRM_DELETE_PACKAGE) {
            return;
        }
        let client = ctx.client();
        leptos::task::spawn_local(async move {
            match client.delete_package(&id).await {
                Ok(()) => {
                    success.set("Package deleted.".to_owned());
                    reload();
                }
                Err(e) => {
                    log::warn!("package {id} delete failed: {e}");
                    error.set(MSG_DELETE_FAILED.to_owned());
                }
            }
        });
    });

    let text_field = move |id: &'static str,
                           label: &'static str,
                           get: fn(&PackageForm) -> String,
                           set: fn(&mut PackageForm, String)| {
        view! {
            <label for=id>{label}</label>
            <input
                id=id
                type="text"
                prop:value=move || form.with(get)
                on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
            />
        }
    };

    view! {
        <div class="admin-page">
            <header class="page-header">
                <h1>"Manage Packages"</h1>
                <button class="btn btn--primary" on:click=open_create>"+ New Package"</button>
            </header>
            <SuccessBanner message=success/>
            <ErrorBanner message=error/>
            <Show when=move || editing.with(Option::is_some)>
                <form class="admin-form" on:submit=on_submit>
                    <h2>{move || if editing.with(|e| matches!(e, Some(Some(_)))) { "Edit Package" } else { "New Package" }}</h2>
                    {text_field("title", "Title", |f| f.title.clone(), |f, v| f.title = v)}
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
                            if let Some(category) = PackageCategory::parse(&event_target_value(&ev)) {
                                form.update(|f| f.category = category);
                            }
                        }
                    >
                        {PackageCategory::ALL
                            .into_iter()
                            .map(|c| view! { <option value=c.as_str()>{c.label()}</option> })
                            .collect_view()}
                    </select>
                    {text_field("price", "Price (ETB)", |f| f.price.clone(), |f, v| f.price = v)}
                    {text_field("duration", "Duration (hours)", |f| f.duration.clone(), |f, v| f.duration = v)}
                    {text_field("features", "Features (comma separated)", |f| f.features.clone(), |f, v| f.features = v)}
                    <div class="admin-form__actions">
                        <button class="btn" type="button" on:click=move |_| editing.set(None)>"Cancel"</button>
                        <button class="btn btn--primary" type="submit" disabled=move || saving.get()>"Save"</button>
                    </div>
                </form>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingNotice text="Loading packages..."/> }>
                <div class="package-grid">
                    {move || {
                        packages
                            .get()
                            .into_iter()
                            .map(|pkg| view! { <PackageTile package=pkg on_edit=on_edit on_delete=on_delete/> })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn PackageTile(package: Package, on_edit: Callback<Package>, on_delete: Callback<String>) -> impl IntoView {
    let id = package.id.clone();
    let editable = package.clone();
    view! {
        <article class="package-card">
            <span class="package-card__category">{package.category.label()}</span>
            <h3>{package.title}</h3>
            <p class="package-card__price">{format_price(package.price)}</p>
            <p>{if package.is_active { "Active" } else { "Inactive" }}</p>
            <div class="package-card__actions">
                <button class="btn" on:click=move |_| on_edit.run(editable.clone())>"Edit"</button>
                <button class="btn btn--danger" on:click=move |_| on_delete.run(id.clone())>"Delete"</button>
            </div>
        </article>
    }
}
