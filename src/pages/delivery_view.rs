//! Delivered files for one of the client's own completed bookings.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::status::{ErrorBanner, LoadingNotice};
use crate::net::api::DeliveryGateway;
use crate::net::types::{Booking, Delivery};
use crate::state::context::AppContext;
use crate::util::delivery_files::{MSG_NOT_DELIVERED, MSG_NOT_OWNER, delivery_files, owns_booking};
use crate::util::routes::paths;

const MSG_LOAD_FAILED: &str = "Failed to load delivery information. Please try again.";

#[component]
pub fn DeliveryViewPage() -> impl IntoView {
    let ctx = AppContext::use_app();
    let params = use_params_map();
    let booking_id = move || params.with(|p| p.get("booking_id").unwrap_or_default());

    let booking = RwSignal::new(None::<Booking>);
    let delivery = RwSignal::new(None::<Delivery>);
    let notice = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let loading = RwSignal::new(true);

    Effect::new(move || {
        let id = booking_id();
        let Some(user) = ctx.session.with(|s| s.user().cloned()) else {
            return;
        };
        let client = ctx.client();
        loading.set(true);
        notice.set(String::new());
        leptos::task::spawn_local(async move {
            match client.get_booking(&id).await {
                Ok(found) if !owns_booking(&user, &found) => {
                    log::warn!("user {} tried to open delivery for booking {id}", user.id);
                    error.set(MSG_NOT_OWNER.to_owned());
                }
                Ok(found) => {
                    booking.set(Some(found));
                    match client.get_delivery(&id).await {
                        Ok(files) => {
                            delivery.set(Some(files));
                            error.set(String::new());
                        }
                        Err(e) if e.is_not_found() => {
                            delivery.set(None);
                            notice.set(MSG_NOT_DELIVERED.to_owned());
                        }
                        Err(e) => {
                            log::warn!("delivery for booking {id} failed to load: {e}");
                            error.set(MSG_LOAD_FAILED.to_owned());
                        }
                    }
                }
                Err(e) => {
                    log::warn!("booking {id} failed to load: {e}");
                    error.set(MSG_LOAD_FAILED.to_owned());
                }
            }
            loading.set(false);
        });
    });

    view! {
        <div class="delivery-page">
            <nav class="breadcrumb">
                <A href=paths::MY_BOOKINGS>"My Bookings"</A>
                " / "
                <span>"Delivery"</span>
            </nav>
            <h1>"Your Delivered Files"</h1>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingNotice text="Loading delivery information..."/> }>
                <ErrorBanner message=error/>
                {move || {
                    booking
                        .get()
                        .map(|b| {
                            view! {
                                <section class="delivery-page__booking">
                                    <h2>{b.package.map(|p| p.title).unwrap_or_default()}</h2>
                                    <p>"Event Date: " {b.event_date}</p>
                                    <p>"Location: " {b.location}</p>
                                </section>
                            }
                        })
                }}
                <Show when=move || !notice.get().is_empty()>
                    <p class="text-muted">{move || notice.get()}</p>
                </Show>
                {move || delivery.get().map(|d| view! { <DeliveryFiles delivery=d/> })}
            </Show>
        </div>
    }
}

#[component]
fn DeliveryFiles(delivery: Delivery) -> impl IntoView {
    let files = delivery_files(&delivery);
    view! {
        <section class="delivery-files">
            <h3>"Delivery Information"</h3>
            {delivery.delivered_at.map(|at| view! { <p>"Delivered on " {at}</p> })}
            {delivery.notes.map(|notes| view! { <div class="delivery-files__notes"><h4>"Photographer's Notes:"</h4><p>{notes}</p></div> })}
            <h4>"Your Files"</h4>
            {if files.is_empty() {
                view! { <p class="text-muted">"No files attached yet."</p> }.into_any()
            } else {
                view! {
                    <ul class="file-list">
                        {files
                            .into_iter()
                            .map(|file| {
                                view! {
                                    <li class="file-list__item">
                                        <span>{file.label}</span>
                                        <a href=file.url target="_blank" rel="noopener noreferrer" class="btn btn--small">
                                            {file.kind.action()}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                .into_any()
            }}
        </section>
    }
}
