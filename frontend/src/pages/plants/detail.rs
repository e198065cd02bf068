use common::session::IdentityUser;
use log::warn;
use yew::prelude::*;

use crate::components::link::Link;
use crate::components::plant_card::PlantCard;
use crate::components::toast::{show_toast, show_toast_kind, ToastKind};
use crate::context::{app_context, AppContext};
use crate::identity::Subscription;
use crate::pages::not_found::NotFoundPage;
use crate::route::Route;

const RELATED_LIMIT: usize = 3;

#[derive(Properties, PartialEq)]
pub struct PlantDetailProps {
    pub plant_id: String,
}

pub enum Msg {
    Identity(Option<IdentityUser>),
    ToggleFavorite,
}

pub struct PlantDetailPage {
    app: AppContext,
    user: Option<IdentityUser>,
    _identity: Subscription,
}

impl Component for PlantDetailPage {
    type Message = Msg;
    type Properties = PlantDetailProps;

    fn create(ctx: &Context<Self>) -> Self {
        let app = app_context(ctx);
        let subscription = app.identity.subscribe(ctx.link().callback(Msg::Identity));
        Self {
            user: app.identity.current_user(),
            app,
            _identity: subscription,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Identity(user) => {
                if let Some(user) = &user {
                    let mut collections = self.app.collections.borrow_mut();
                    if collections.current_user() != Some(user.uid.as_str()) {
                        collections.load_for_user(&user.uid);
                    }
                }
                self.user = user;
                true
            }
            Msg::ToggleFavorite => {
                if self.user.is_none() {
                    self.app.navigate(Route::Auth);
                    return false;
                }
                let plant_id = &ctx.props().plant_id;
                let result = self.app.collections.borrow_mut().toggle_favorite(plant_id);
                match result {
                    Ok(true) => show_toast_kind("Added to your favorites", ToastKind::Success),
                    Ok(false) => show_toast("Removed from your favorites"),
                    Err(e) => {
                        warn!("Favorite toggle for {} failed: {}", plant_id, e);
                        show_toast_kind("Could not update your favorites", ToastKind::Error);
                    }
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let catalog = &self.app.catalog;
        let Some(plant) = catalog.get(&ctx.props().plant_id) else {
            return html! { <NotFoundPage /> };
        };
        let info = &plant.info;
        let related = catalog.related(plant, RELATED_LIMIT);
        let is_favorite = self.user.is_some() && self.app.collections.borrow().is_favorite(&plant.id);
        let hero = if info.hero_image.is_empty() {
            info.image.clone()
        } else {
            info.hero_image.clone()
        };

        let care = [
            ("☀️", "Sunlight", &info.care.sunlight),
            ("💧", "Water", &info.care.water),
            ("⛰️", "Soil", &info.care.soil),
            ("🌬️", "Humidity", &info.care.humidity),
        ];

        html! {
            <>
                <div class="container back-link">
                    <Link to={Route::Plants}>{"← Back to Plants"}</Link>
                </div>

                <section class="container section split detail-hero">
                    <img class="rounded" src={hero} alt={info.name.clone()} />
                    <div>
                        <div class="badges">
                            { for info.category.iter().map(|cat| html! { <span class="badge">{ cat }</span> }) }
                        </div>
                        <h1>{ &info.name }</h1>
                        <p class="scientific">{ &info.scientific_name }</p>
                        <p>{ &info.description }</p>
                        if self.user.is_some() {
                            <button
                                class={classes!("btn", if is_favorite { "btn-favorite-on" } else { "btn-outline" })}
                                onclick={ctx.link().callback(|_| Msg::ToggleFavorite)}
                            >
                                { if is_favorite { "♥ In Your Favorites" } else { "♡ Add to Favorites" } }
                            </button>
                        }
                        if !info.benefits.is_empty() {
                            <div class="benefits">
                                <h3>{"Why You'll Love This Plant"}</h3>
                                <ul>
                                    { for info.benefits.iter().map(|benefit| html! { <li>{ benefit }</li> }) }
                                </ul>
                            </div>
                        }
                    </div>
                </section>

                <section class="container section">
                    <h2>{"Care Guide"}</h2>
                    <p class="lead">{ format!("Simple, gentle guidance to help your {} thrive in your space.", info.name) }</p>
                    <div class="care-grid">
                        { for care.iter().map(|(icon, label, value)| html! {
                            <div class="care-item">
                                <div class="care-icon">{ *icon }</div>
                                <h3>{ *label }</h3>
                                <p>{ value.as_str() }</p>
                            </div>
                        }) }
                    </div>
                    if !info.pro_tip.is_empty() {
                        <div class="pro-tip">
                            <h3>{"Pro Tip"}</h3>
                            <p>{ &info.pro_tip }</p>
                        </div>
                    }
                </section>

                if !info.mindfulness_prompt.is_empty() {
                    <section class="mindfulness">
                        <h2>{"Mindfulness Moment"}</h2>
                        <blockquote>{ format!("\"{}\"", info.mindfulness_prompt) }</blockquote>
                        <p>{ format!("Take a moment to sit with your {} and reflect", info.name) }</p>
                    </section>
                }

                if !related.is_empty() {
                    <section class="container section">
                        <h2>{"Similar Plants You Might Love"}</h2>
                        <p class="lead">{"Explore more plants with similar care needs and calming qualities."}</p>
                        <div class="plant-grid">
                            { for related.iter().map(|p| html! {
                                <PlantCard key={p.id.clone()} plant={(*p).clone()} excerpt={100} />
                            }) }
                        </div>
                    </section>
                }
            </>
        }
    }
}
