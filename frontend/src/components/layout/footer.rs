use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::link::Link;
use crate::route::Route;

pub struct Footer;

fn sections() -> [(&'static str, [(&'static str, Route); 2]); 2] {
    [
        ("Explore", [("All Plants", Route::Plants), ("My Garden", Route::Dashboard)]),
        ("Company", [("About Us", Route::About), ("Contact", Route::Contact)]),
    ]
}

impl Component for Footer {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let year = Local::now().year();
        html! {
            <footer class="site-footer">
                <div class="container footer-grid">
                    <div class="footer-brand">
                        <div class="brand">
                            <span class="brand-icon">{"🌿"}</span>
                            <span class="brand-name">{"ZenFlora"}</span>
                        </div>
                        <p>
                            {"Cultivating calm through the ancient wisdom of plants. Find your moment of zen \
                              in the simple, mindful act of nurturing life."}
                        </p>
                    </div>
                    { for sections().into_iter().map(|(title, links)| html! {
                        <div class="footer-section">
                            <h4>{ title }</h4>
                            <ul>
                                { for links.into_iter().map(|(label, route)| html! {
                                    <li><Link to={route}>{ label }</Link></li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>
                <div class="container footer-bottom">
                    <p>{ format!("© {} ZenFlora. All rights reserved.", year) }</p>
                    <p>{"Made with 💚 for plant lovers"}</p>
                </div>
                <p class="footer-quote">
                    {"\"Every moment spent with plants is a moment of peace discovered.\""}
                </p>
            </footer>
        }
    }
}
