// src/main.rs — Krishna Auto Repairs (Rust + Yew + WASM)
// One page: hero, services, about, contact, footer, plus two modals
// (service history lookup, booking). All page state goes through `state::UiState`.

mod booking;
mod components;
mod date;
mod history;
mod site;
mod state;

use gloo::console::error;
use yew::prelude::*;

use booking::{BookingDesk, BookingField, ConsoleDesk};
use components::{about, contact, footer, services, BookingModal, Hero, LookupModal};
use date::ServiceDate;
use history::{FixtureHistory, ServiceHistory};
use state::{Action, UiState};

/// Blocking browser alert, so the user has seen it before the modal closes.
fn notify(msg: &str) {
    let shown = web_sys::window().and_then(|w| w.alert_with_message(msg).ok());
    if shown.is_none() {
        error!(format!("Could not show notice: {msg}"));
    }
}

fn on_click(state: &UseReducerHandle<UiState>, make: fn() -> Action) -> Callback<MouseEvent> {
    let state = state.clone();
    Callback::from(move |_: MouseEvent| state.dispatch(make()))
}

#[function_component(App)]
fn app() -> Html {
    let state = use_reducer(|| UiState::new(ServiceDate::today()));

    let open_lookup = on_click(&state, || Action::OpenLookup);
    let open_booking = on_click(&state, || Action::OpenBooking { today: ServiceDate::today() });

    // --- lookup ---

    let edit_lookup = {
        let state = state.clone();
        Callback::from(move |v: String| state.dispatch(Action::EditLookup(v)))
    };

    let submit_lookup = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            let result = FixtureHistory.lookup(&state.lookup.bike_identifier);
            if let Err(e) = &result {
                error!(format!("Lookup failed: {e}"));
            }
            state.dispatch(Action::LookupResolved(result));
        })
    };

    let close_lookup = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(Action::CloseLookup))
    };

    // --- booking ---

    let edit_booking = {
        let state = state.clone();
        Callback::from(move |f: BookingField| state.dispatch(Action::EditBooking(f)))
    };

    let submit_booking = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            match ConsoleDesk.submit(&state.booking, state.booking_earliest) {
                Ok(ack) => {
                    notify(&ack);
                    state.dispatch(Action::BookingAccepted { today: ServiceDate::today() });
                }
                Err(e) => {
                    error!(format!("Booking rejected: {e}"));
                    state.dispatch(Action::BookingRejected(e));
                }
            }
        })
    };

    let close_booking = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(Action::CloseBooking))
    };

    html! {
        <div class="page">
            <Hero on_lookup={open_lookup} on_book={open_booking} />

            if state.lookup_open {
                <LookupModal
                    bike_identifier={state.lookup.bike_identifier.clone()}
                    records={state.records.clone()}
                    error={state.lookup_error.clone()}
                    on_edit={edit_lookup}
                    on_submit={submit_lookup}
                    on_cancel={close_lookup}
                />
            }

            if state.booking_open {
                <BookingModal
                    request={state.booking.clone()}
                    earliest={state.booking_earliest}
                    error={state.booking_error.clone()}
                    on_edit={edit_booking}
                    on_submit={submit_booking}
                    on_cancel={close_booking}
                />
            }

            { services() }
            { about() }
            { contact() }
            { footer() }
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
