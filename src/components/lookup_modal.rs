use yew::prelude::*;

use super::field::field;
use crate::history::{LookupError, ServiceRecord};

#[derive(Properties, PartialEq)]
pub struct LookupModalProps {
    pub bike_identifier: String,
    pub records: Vec<ServiceRecord>,
    pub error: Option<LookupError>,
    pub on_edit: Callback<String>,
    pub on_submit: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(LookupModal)]
pub fn lookup_modal(props: &LookupModalProps) -> Html {
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };
    let oncancel = props.on_cancel.reform(|_: MouseEvent| ());

    html! {
        <div class="overlay">
            <div class="modal">
                <h2>{ "Service History Lookup" }</h2>
                <form {onsubmit}>
                    { field("Bike Number", "text", &props.bike_identifier, true, props.on_edit.clone()) }
                    <div class="modal-actions">
                        <button type="button" class="btn btn-ghost" onclick={oncancel}>{ "Cancel" }</button>
                        <button type="submit" class="btn btn-primary">{ "Look Up" }</button>
                    </div>
                </form>

                if let Some(e) = &props.error {
                    <div class="err">{ e.to_string() }</div>
                }

                if !props.records.is_empty() {
                    <div class="history">
                        <h3>{ "Service History" }</h3>
                        { for props.records.iter().map(record_row) }
                    </div>
                }
            </div>
        </div>
    }
}

fn record_row(r: &ServiceRecord) -> Html {
    html! {
        <div class="record">
            <p class="record-title">{ r.service_type.clone() }</p>
            <p class="muted small">{ format!("Date: {}", r.date) }</p>
            <p class="muted small">{ format!("Cost: {}", r.cost) }</p>
        </div>
    }
}
