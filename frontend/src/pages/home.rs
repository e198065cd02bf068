use yew::prelude::*;

use crate::components::link::Link;
use crate::components::plant_card::PlantCard;
use crate::context::app_context;
use crate::route::Route;

const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1416879595882-3373a0480b5b?w=1920&h=1080&auto=format&fit=crop";

const FEATURED_COUNT: usize = 2;

const PILLARS: [(&str, &str, &str); 3] = [
    (
        "🌿",
        "Curated Selection",
        "Carefully chosen plants known for their calming properties and beginner-friendly care.",
    ),
    (
        "💚",
        "Mindful Moments",
        "Each plant comes with thoughtful prompts to help you find presence and peace.",
    ),
    (
        "💧",
        "Simple Care",
        "Clear, gentle guidance to help your plants thrive without overwhelming complexity.",
    ),
];

pub struct HomePage;

impl Component for HomePage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let app = app_context(ctx);
        let featured = app.catalog.plants().iter().take(FEATURED_COUNT);

        html! {
            <>
                <section class="hero" style={format!("background-image: url('{}')", HERO_IMAGE)}>
                    <div class="hero-content">
                        <h1>{"ZenFlora"}</h1>
                        <p class="hero-subtitle">{"Cultivate Calm Through Nature"}</p>
                        <p>{"Discover the serene world of houseplants and find mindfulness in the simple act of nurturing life."}</p>
                        <Link to={Route::Plants} classes={classes!("btn", "btn-light")}>{"Explore Plants →"}</Link>
                    </div>
                </section>

                <section class="container section">
                    <h2>{"Where Plants Meet Mindfulness"}</h2>
                    <p class="lead">
                        {"In our fast-paced world, plants offer us a gentle reminder to slow down, breathe deeply, \
                          and connect with the natural rhythms of life."}
                    </p>
                    <div class="pillars">
                        { for PILLARS.iter().map(|(icon, title, text)| html! {
                            <div class="pillar">
                                <div class="pillar-icon">{ *icon }</div>
                                <h3>{ *title }</h3>
                                <p>{ *text }</p>
                            </div>
                        }) }
                    </div>
                </section>

                <section class="container section">
                    <h2>{"Featured Plant Companions"}</h2>
                    <p class="lead">
                        {"Start your journey with these gentle, forgiving plants that bring both beauty and tranquility."}
                    </p>
                    <div class="plant-grid two">
                        { for featured.map(|plant| html! {
                            <PlantCard key={plant.id.clone()} plant={plant.clone()} excerpt={150} />
                        }) }
                    </div>
                    <div class="center">
                        <Link to={Route::Plants} classes={classes!("btn", "btn-primary")}>{"Discover All Plants"}</Link>
                    </div>
                </section>
            </>
        }
    }
}
