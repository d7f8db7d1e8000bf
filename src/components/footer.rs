use yew::prelude::*;

use crate::site::{COPYRIGHT_YEAR, SHOP_NAME};

pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="wrap footer-row">
                <div class="brand">
                    <i class="fa-solid fa-bicycle"></i>
                    <span>{ SHOP_NAME }</span>
                </div>
                <p>{ format!("© {COPYRIGHT_YEAR} {SHOP_NAME}. All rights reserved.") }</p>
            </div>
        </footer>
    }
}
