use common::model::plant::PlantRecord;
use yew::prelude::*;

use crate::components::link::Link;
use crate::route::Route;

#[derive(Properties, PartialEq)]
pub struct PlantCardProps {
    pub plant: PlantRecord,
    /// Characters of the description shown before the ellipsis.
    #[prop_or(120)]
    pub excerpt: usize,
    /// Directory cards show category badges, the scientific name and care hints.
    #[prop_or_default]
    pub detailed: bool,
}

/// Catalog plant teaser linking to its detail page.
pub struct PlantCard;

impl Component for PlantCard {
    type Message = ();
    type Properties = PlantCardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let plant = &props.plant;
        let info = &plant.info;

        html! {
            <article class="plant-card">
                <div class="plant-card-image">
                    <img src={info.image.clone()} alt={info.name.clone()} loading="lazy" />
                    if props.detailed {
                        <div class="badges">
                            { for info.category.iter().take(2).map(|cat| html! {
                                <span class="badge">{ cat }</span>
                            }) }
                        </div>
                    }
                </div>
                <div class="plant-card-body">
                    <div class="plant-card-title">
                        <h3>{ &info.name }</h3>
                        <span class="tagline">{ &info.tagline }</span>
                    </div>
                    if props.detailed {
                        <p class="scientific">{ &info.scientific_name }</p>
                    }
                    <p class="excerpt">{ plant.excerpt(props.excerpt) }</p>
                    if props.detailed {
                        <div class="care-hints">
                            <span>{ format!("💧 {}", info.care.water_summary()) }</span>
                            <span>{ format!("☀️ {}", info.care.sunlight_summary()) }</span>
                        </div>
                    }
                    <Link to={Route::PlantDetail(plant.id.clone())} classes={classes!("btn", "btn-primary")}>
                        {"Learn More"}
                    </Link>
                </div>
            </article>
        }
    }
}
