use yew::prelude::*;

use crate::site::{ADDRESS, PHONE, SOCIALS};

// The message form has no handler yet; there is nowhere to send it.
pub fn contact() -> Html {
    html! {
        <section id="contact" class="band band-muted">
            <div class="wrap grid grid-2">
                <div>
                    <h2>{ "Contact Us" }</h2>
                    <p class="muted">{ "Book your service appointment or get in touch with any questions." }</p>
                    <div class="contact-lines">
                        <div><i class="fa-solid fa-phone"></i><span>{ PHONE }</span></div>
                        <div><i class="fa-solid fa-location-dot"></i><span>{ ADDRESS }</span></div>
                        <div class="socials">
                            { for SOCIALS.iter().map(|(icon, label)| html! {
                                <a href="#" aria-label={*label}><i class={*icon}></i></a>
                            }) }
                        </div>
                    </div>
                </div>
                <form class="stack">
                    <div class="field">
                        <label>{ "Name" }</label>
                        <input type="text" />
                    </div>
                    <div class="field">
                        <label>{ "Email" }</label>
                        <input type="email" />
                    </div>
                    <div class="field">
                        <label>{ "Message" }</label>
                        <textarea rows="5" />
                    </div>
                    <button type="submit" class="btn btn-primary btn-block">{ "Send Message" }</button>
                </form>
            </div>
        </section>
    }
}
