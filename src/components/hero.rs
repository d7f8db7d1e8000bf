use yew::prelude::*;

use crate::site::{HERO_IMAGE, NAV_LINKS, SHOP_NAME};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_lookup: Callback<MouseEvent>,
    pub on_book: Callback<MouseEvent>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    html! {
        <header class="hero">
            <div class="hero-bg">
                <img src={HERO_IMAGE} alt="Bicycle in workshop" />
                <div class="hero-shade"></div>
            </div>

            <nav class="wrap nav">
                <div class="brand">
                    <i class="fa-solid fa-bicycle"></i>
                    <span>{ SHOP_NAME }</span>
                </div>
                <div class="nav-links">
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <a href={*href}>{ *label }</a>
                    }) }
                </div>
            </nav>

            <div class="wrap hero-content">
                <h1>{ "Expert Bike Service" }<br />{ "& Repairs" }</h1>
                <p class="sub">
                    { "Professional bicycle maintenance and repair services to keep your ride smooth and safe." }
                </p>
                <div class="row">
                    <button class="btn btn-light" onclick={props.on_lookup.clone()}>
                        <i class="fa-solid fa-magnifying-glass"></i>
                        { "My Bike Service History" }
                    </button>
                    <button class="btn btn-primary" onclick={props.on_book.clone()}>
                        <i class="fa-solid fa-calendar"></i>
                        { "Book Service" }
                    </button>
                </div>
            </div>
        </header>
    }
}
