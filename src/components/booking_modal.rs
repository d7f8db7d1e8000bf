use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::field::{bind_value, field};
use crate::booking::{BookingError, BookingField, BookingRequest};
use crate::date::ServiceDate;

#[derive(Properties, PartialEq)]
pub struct BookingModalProps {
    pub request: BookingRequest,
    /// Lower bound for the date picker.
    pub earliest: ServiceDate,
    pub error: Option<BookingError>,
    pub on_edit: Callback<BookingField>,
    pub on_submit: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(BookingModal)]
pub fn booking_modal(props: &BookingModalProps) -> Html {
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };
    let oncancel = props.on_cancel.reform(|_: MouseEvent| ());

    // Refused dates (cleared, half-typed, or before `earliest`) leave state
    // untouched, so the vnode value doesn't change; write it back by hand.
    let date_ref = use_node_ref();
    let on_date = {
        let on_edit = props.on_edit.clone();
        let date_ref = date_ref.clone();
        let earliest = props.earliest;
        let current = props.request.service_date;
        bind_value::<Event>(Callback::from(move |v: String| {
            match ServiceDate::parse_not_before(&v, earliest) {
                Some(d) => on_edit.emit(BookingField::ServiceDate(d)),
                None => {
                    if let Some(input) = date_ref.cast::<HtmlInputElement>() {
                        input.set_value(&current.to_string());
                    }
                }
            }
        }))
    };

    let r = &props.request;

    html! {
        <div class="overlay">
            <div class="modal">
                <h2>{ "Book a Service" }</h2>
                <form {onsubmit}>
                    <div class="stack">
                        <div class="field">
                            <label>{ "Service Date" }</label>
                            <input
                                type="date"
                                ref={date_ref}
                                min={props.earliest.to_string()}
                                value={r.service_date.to_string()}
                                required=true
                                onchange={on_date}
                            />
                        </div>
                        { field("Bike Number", "text", &r.bike_identifier, true, props.on_edit.reform(BookingField::BikeIdentifier)) }
                        { field("Name", "text", &r.contact_name, true, props.on_edit.reform(BookingField::ContactName)) }
                        { field("Phone Number", "tel", &r.phone_number, true, props.on_edit.reform(BookingField::PhoneNumber)) }
                        { field("Email (Optional)", "email", &r.email, false, props.on_edit.reform(BookingField::Email)) }
                    </div>

                    if let Some(e) = &props.error {
                        <div class="err">{ e.to_string() }</div>
                    }

                    <div class="modal-actions">
                        <button type="button" class="btn btn-ghost" onclick={oncancel}>{ "Cancel" }</button>
                        <button type="submit" class="btn btn-primary">{ "Book Service" }</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
