use yew::prelude::*;

use crate::site::{ABOUT_BLURB, ABOUT_IMAGE, HIGHLIGHTS};

pub fn about() -> Html {
    html! {
        <section id="about" class="band">
            <div class="wrap grid grid-2 center">
                <div>
                    <img class="photo" src={ABOUT_IMAGE} alt="Mechanic working on bike" />
                </div>
                <div>
                    <h2>{ "Expert Care for Your Bike" }</h2>
                    <p class="muted">{ ABOUT_BLURB }</p>
                    <ul class="highlights">
                        { for HIGHLIGHTS.iter().map(|(icon, label)| html! {
                            <li>
                                <span class="dot"><i class={*icon}></i></span>
                                { *label }
                            </li>
                        }) }
                    </ul>
                </div>
            </div>
        </section>
    }
}
