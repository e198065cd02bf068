use common::catalog::query::{filter, DirectorySummary};
use common::catalog::ALL_CATEGORIES;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::plant_card::PlantCard;
use crate::context::app_context;

pub enum Msg {
    SetSearch(String),
    SetCategory(String),
    Reset,
}

/// Searchable, category-filtered grid of the whole catalog.
pub struct PlantDirectoryPage {
    search: String,
    category: String,
}

impl Component for PlantDirectoryPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            search: String::new(),
            category: ALL_CATEGORIES.to_string(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetSearch(search) => self.search = search,
            Msg::SetCategory(category) => self.category = category,
            Msg::Reset => {
                self.search.clear();
                self.category = ALL_CATEGORIES.to_string();
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let app = app_context(ctx);
        let link = ctx.link();
        let catalog = &app.catalog;
        let plants = filter(catalog, &self.search, &self.category);
        let summary = DirectorySummary::new(plants.len(), catalog.len(), &self.category);

        let on_search = link.callback(|e: InputEvent| {
            Msg::SetSearch(e.target_unchecked_into::<HtmlInputElement>().value())
        });
        let on_category = link.callback(|e: Event| {
            Msg::SetCategory(e.target_unchecked_into::<HtmlSelectElement>().value())
        });

        html! {
            <>
                <section class="page-intro">
                    <h1>{"Plant Directory"}</h1>
                    <p>
                        {"Explore our curated collection of calming houseplants, each chosen for their beauty, \
                          ease of care, and ability to bring peace to your space."}
                    </p>
                    <div class="filters">
                        <input
                            type="text"
                            class="search"
                            placeholder="Search plants by name, scientific name, or care type..."
                            value={self.search.clone()}
                            oninput={on_search}
                        />
                        <select class="category" onchange={on_category}>
                            { for catalog.categories().into_iter().map(|category| html! {
                                <option value={category.to_string()} selected={category == self.category}>
                                    { category }
                                </option>
                            }) }
                        </select>
                    </div>
                </section>

                <section class="container section">
                    <p class="summary">{ summary.to_string() }</p>
                    if plants.is_empty() {
                        <div class="empty-state">
                            <div class="empty-icon">{"🔍"}</div>
                            <h3>{"No plants found"}</h3>
                            <p>{"Try adjusting your search terms or filters to find the perfect plant."}</p>
                            <button class="btn btn-primary" onclick={link.callback(|_| Msg::Reset)}>
                                {"Reset Filters"}
                            </button>
                        </div>
                    } else {
                        <div class="plant-grid">
                            { for plants.iter().map(|plant| html! {
                                <PlantCard key={plant.id.clone()} plant={(*plant).clone()} detailed={true} />
                            }) }
                        </div>
                    }
                </section>
            </>
        }
    }
}
