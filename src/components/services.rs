use yew::prelude::*;

use crate::site::{Offering, SERVICES};

pub fn services() -> Html {
    html! {
        <section id="services" class="band band-muted">
            <div class="wrap">
                <h2 class="section-title">{ "Our Services" }</h2>
                <div class="grid grid-3">
                    { for SERVICES.iter().map(service_card) }
                </div>
            </div>
        </section>
    }
}

fn service_card(s: &Offering) -> Html {
    html! {
        <div class="card">
            <i class={format!("{} card-icon", s.icon)}></i>
            <h3>{ s.title }</h3>
            <p class="muted">{ s.blurb }</p>
            <p class="price">{ s.price }</p>
        </div>
    }
}
