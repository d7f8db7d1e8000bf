use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Labelled single-line input. `oninput` receives the raw input value.
pub fn field(
    label: &str,
    input_type: &'static str,
    value: &str,
    required: bool,
    oninput: Callback<String>,
) -> Html {
    html! {
        <div class="field">
            <label>{ label }</label>
            <input
                type={input_type}
                value={value.to_string()}
                {required}
                oninput={bind_value(oninput)}
            />
        </div>
    }
}

/// Adapts an input/change event into the target input's current value.
pub fn bind_value<E: AsRef<Event> + 'static>(sink: Callback<String>) -> Callback<E> {
    Callback::from(move |e: E| {
        let input = e
            .as_ref()
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok());
        if let Some(i) = input {
            sink.emit(i.value());
        }
    })
}
