use common::collection::CollectionCounts;
use common::model::owned::OwnedPlantRecord;
use common::model::plant::PlantRecord;
use common::model::profile::{ExperienceLevel, UserProfile};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::{AddField, Msg, ProfileField, Tab};
use super::state::{AddPlantForm, DashboardPage};
use crate::components::link::Link;
use crate::components::modal::Modal;
use crate::route::Route;

const AVATAR_PLACEHOLDER: &str = "🌿";

pub fn view(page: &DashboardPage, ctx: &Context<DashboardPage>) -> Html {
    let link = ctx.link();
    let (Some(profile), Some(_)) = (page.profile.as_ref(), page.gate.user()) else {
        return html! {
            <section class="container section center loading">
                <div class="spinner"></div>
                <p>{"Loading your zen garden..."}</p>
            </section>
        };
    };

    let collections = page.app.collections.borrow();
    let owned = collections.owned();
    let favorites = collections.favorite_plants();
    let counts = collections.counts();

    html! {
        <section class="container section dashboard">
            <div class="dashboard-grid">
                <aside>
                    { build_profile_card(page, profile, counts, link) }
                </aside>
                <div class="dashboard-main">
                    <div class="dashboard-toolbar">
                        <div class="tabs">
                            { tab_button(link, Tab::Planted, page.active_tab, format!("My Plants ({})", counts.owned)) }
                            { tab_button(link, Tab::Favorites, page.active_tab, format!("Favorites ({})", counts.favorites)) }
                        </div>
                        <button class="btn btn-primary" onclick={link.callback(|_| Msg::OpenAddModal)}>
                            {"+ Add Plant"}
                        </button>
                    </div>
                    {
                        match page.active_tab {
                            Tab::Planted => build_owned_grid(owned, |id| collections.is_favorite(id), link),
                            Tab::Favorites => build_favorite_grid(&favorites, link),
                        }
                    }
                </div>
            </div>
            if let Some(form) = page.add_form.as_ref() {
                { build_add_modal(page, form, link) }
            }
        </section>
    }
}

fn tab_button(link: &Scope<DashboardPage>, tab: Tab, active: Tab, label: String) -> Html {
    html! {
        <button class={classes!("tab", (tab == active).then_some("active"))}
            onclick={link.callback(move |_| Msg::SetTab(tab))}>
            { label }
        </button>
    }
}

fn build_profile_card(
    page: &DashboardPage,
    profile: &UserProfile,
    counts: CollectionCounts,
    link: &Scope<DashboardPage>,
) -> Html {
    let on_photo = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input.files().and_then(|files| files.get(0)).map(Msg::PhotoSelected)
    });

    html! {
        <div class="card profile-card">
            <div class="avatar">
                if let Some(url) = page.photo_url.as_ref() {
                    <img src={url.clone()} alt="Profile" />
                } else {
                    <span class="avatar-placeholder">{ AVATAR_PLACEHOLDER }</span>
                }
                <label class="avatar-upload" title="Change photo">
                    {"📷"}
                    <input type="file" accept="image/*" hidden={true}
                        ref={page.photo_input_ref.clone()} onchange={on_photo} />
                </label>
            </div>
            if page.photo_url.is_some() {
                <button class="text-btn" onclick={link.callback(|_| Msg::RemovePhoto)}>{"Remove photo"}</button>
            }

            {
                match page.draft.as_ref() {
                    Some(draft) => build_profile_form(draft, page.saving_profile, link),
                    None => html! {
                        <>
                            <h2>{ &profile.display_name }</h2>
                            <p class="bio">{ &profile.bio }</p>
                            <p class="muted">{ format!("Joined {}", profile.join_date_label()) }</p>
                            <p class="badge">{ format!("{} Plant Parent", profile.experience.label()) }</p>
                            <button class="btn btn-outline wide" disabled={page.saving_profile}
                                onclick={link.callback(|_| Msg::EditProfile)}>
                                {"Edit Profile"}
                            </button>
                        </>
                    },
                }
            }

            <div class="quick-stats">
                <div><strong>{ counts.owned }</strong><span>{"Plants"}</span></div>
                <div><strong>{ counts.favorites }</strong><span>{"Favorites"}</span></div>
            </div>
            <button class="btn btn-outline wide" onclick={link.callback(|_| Msg::SignOut)}>{"Sign Out"}</button>
        </div>
    }
}

fn build_profile_form(draft: &UserProfile, saving: bool, link: &Scope<DashboardPage>) -> Html {
    let on_name = link.callback(|e: InputEvent| {
        Msg::SetProfileField(ProfileField::DisplayName, e.target_unchecked_into::<HtmlInputElement>().value())
    });
    let on_bio = link.callback(|e: InputEvent| {
        Msg::SetProfileField(ProfileField::Bio, e.target_unchecked_into::<HtmlTextAreaElement>().value())
    });
    let on_level = link.callback(|e: Event| {
        Msg::SetProfileField(ProfileField::Experience, e.target_unchecked_into::<HtmlSelectElement>().value())
    });

    html! {
        <div class="form">
            <label>
                {"Display Name"}
                <input type="text" value={draft.display_name.clone()} oninput={on_name} />
            </label>
            <label>
                {"Bio"}
                <textarea rows="3" value={draft.bio.clone()} oninput={on_bio} />
            </label>
            <label>
                {"Experience Level"}
                <select onchange={on_level}>
                    { for ExperienceLevel::ALL.iter().map(|level| html! {
                        <option value={level.label()} selected={*level == draft.experience}>{ level.label() }</option>
                    }) }
                </select>
            </label>
            <div class="form-actions">
                <button class="btn btn-primary" disabled={saving} onclick={link.callback(|_| Msg::SaveProfile)}>
                    {"Save"}
                </button>
                <button class="btn btn-outline" onclick={link.callback(|_| Msg::CancelEdit)}>{"Cancel"}</button>
            </div>
        </div>
    }
}

fn build_owned_grid(
    owned: &[OwnedPlantRecord],
    is_favorite: impl Fn(&str) -> bool,
    link: &Scope<DashboardPage>,
) -> Html {
    if owned.is_empty() {
        return html! {
            <div class="empty-state">
                <div class="empty-icon">{"🌱"}</div>
                <h3>{"No plants yet"}</h3>
                <p>{"Start your zen garden by adding your first plant."}</p>
                <button class="btn btn-primary" onclick={link.callback(|_| Msg::OpenAddModal)}>
                    {"Add Your First Plant"}
                </button>
            </div>
        };
    }

    html! {
        <div class="plant-grid">
            { for owned.iter().map(|plant| build_owned_card(plant, is_favorite(&plant.original_id), link)) }
        </div>
    }
}

fn build_owned_card(plant: &OwnedPlantRecord, favorite: bool, link: &Scope<DashboardPage>) -> Html {
    let owned_id = plant.id.clone();
    let original_id = plant.original_id.clone();

    html! {
        <article class="plant-card" key={plant.id.clone()}>
            <div class="plant-card-image">
                <img src={plant.info.image.clone()} alt={plant.nickname.clone()} loading="lazy" />
                <div class="card-actions">
                    <button class="icon-btn" title={if favorite { "Remove from favorites" } else { "Add to favorites" }}
                        onclick={link.callback(move |_| Msg::ToggleFavorite(original_id.clone()))}>
                        { if favorite { "♥" } else { "♡" } }
                    </button>
                    <button class="icon-btn" title="Remove plant"
                        onclick={link.callback(move |_| Msg::RemovePlant(owned_id.clone()))}>
                        {"🗑"}
                    </button>
                </div>
            </div>
            <div class="plant-card-body">
                <h3>{ &plant.nickname }</h3>
                if plant.has_custom_nickname() {
                    <p class="scientific">{ format!("({})", plant.info.name) }</p>
                }
                <p class="muted">{ format!("Planted {}", plant.date_planted.format("%B %-d, %Y")) }</p>
                <Link to={Route::PlantDetail(plant.original_id.clone())} classes="btn btn-outline wide">
                    {"View Details"}
                </Link>
            </div>
        </article>
    }
}

fn build_favorite_grid(favorites: &[&PlantRecord], link: &Scope<DashboardPage>) -> Html {
    if favorites.is_empty() {
        return html! {
            <div class="empty-state">
                <div class="empty-icon">{"♡"}</div>
                <h3>{"No favorites yet"}</h3>
                <p>{"Browse the collection and tap the heart on plants you love."}</p>
                <Link to={Route::Plants} classes="btn btn-primary">{"Explore Plants"}</Link>
            </div>
        };
    }

    html! {
        <div class="plant-grid">
            { for favorites.iter().map(|plant| {
                let plant_id = plant.id.clone();
                html! {
                    <article class="plant-card" key={plant.id.clone()}>
                        <div class="plant-card-image">
                            <img src={plant.info.image.clone()} alt={plant.info.name.clone()} loading="lazy" />
                            <div class="card-actions">
                                <button class="icon-btn" title="Remove from favorites"
                                    onclick={link.callback(move |_| Msg::ToggleFavorite(plant_id.clone()))}>
                                    {"♥"}
                                </button>
                            </div>
                        </div>
                        <div class="plant-card-body">
                            <h3>{ plant.name() }</h3>
                            <p>{ plant.excerpt(80) }</p>
                            <Link to={Route::PlantDetail(plant.id.clone())} classes="btn btn-outline wide">
                                {"View Details"}
                            </Link>
                        </div>
                    </article>
                }
            }) }
            <article class="plant-card discover-card">
                <div class="plant-card-body center">
                    <div class="empty-icon">{"🌿"}</div>
                    <h3>{"Discover More Plants"}</h3>
                    <p>{"Find your next green companion."}</p>
                    <Link to={Route::Plants} classes="btn btn-primary">{"Browse Collection"}</Link>
                </div>
            </article>
        </div>
    }
}

fn build_add_modal(page: &DashboardPage, form: &AddPlantForm, link: &Scope<DashboardPage>) -> Html {
    let on_plant = link.callback(|e: Event| {
        Msg::SetAddField(AddField::Plant, e.target_unchecked_into::<HtmlSelectElement>().value())
    });
    let on_nickname = link.callback(|e: InputEvent| {
        Msg::SetAddField(AddField::Nickname, e.target_unchecked_into::<HtmlInputElement>().value())
    });
    let on_date = link.callback(|e: Event| {
        Msg::SetAddField(AddField::DatePlanted, e.target_unchecked_into::<HtmlInputElement>().value())
    });
    let on_submit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::AddPlant
    });

    html! {
        <Modal title="Add New Plant" on_close={link.callback(|_| Msg::CloseAddModal)}>
            <form class="form" onsubmit={on_submit}>
                <label>
                    {"Choose a Plant"}
                    <select onchange={on_plant}>
                        <option value="" selected={form.plant_id.is_empty()}>{"Select a plant..."}</option>
                        { for page.app.catalog.plants().iter().map(|plant| html! {
                            <option value={plant.id.clone()} selected={form.plant_id == plant.id}>
                                { plant.name() }
                            </option>
                        }) }
                    </select>
                </label>
                <label>
                    {"Nickname (optional)"}
                    <input type="text" placeholder="Give your plant a special name..."
                        value={form.nickname.clone()} oninput={on_nickname} />
                </label>
                <label>
                    {"Date Planted"}
                    <input type="date" value={form.date_planted.clone()} onchange={on_date} />
                </label>
                <div class="form-actions">
                    <button type="button" class="btn btn-outline" onclick={link.callback(|_| Msg::CloseAddModal)}>
                        {"Cancel"}
                    </button>
                    <button type="submit" class="btn btn-primary" disabled={form.plant_id.is_empty()}>
                        {"Add Plant"}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
