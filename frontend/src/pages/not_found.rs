use yew::prelude::*;

use crate::components::link::Link;
use crate::route::Route;

pub struct NotFoundPage;

impl Component for NotFoundPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <section class="container section not-found">
                <img
                    class="round"
                    src="https://images.unsplash.com/photo-1485955900006-10f4d324d411?w=400&h=400&auto=format&fit=crop"
                    alt="Peaceful potted plant"
                />
                <h1>{"404"}</h1>
                <h2>{"Page Not Found"}</h2>
                <p>
                    {"Like a plant that has wandered from its pot, this page seems to have \
                      found its way to an unexpected place. Let's help you get back to where \
                      you need to be."}
                </p>
                <div class="actions">
                    <Link to={Route::Home} classes={classes!("btn", "btn-primary")}>{"Return Home"}</Link>
                    <span>{"or"}</span>
                    <Link to={Route::Plants} classes={classes!("btn", "btn-outline")}>{"Explore Plants"}</Link>
                </div>
                <p class="quote">
                    {"\"Sometimes the most beautiful discoveries happen when we lose our way. \
                      Take a deep breath and embrace this unexpected pause in your journey.\""}
                </p>
            </section>
        }
    }
}
