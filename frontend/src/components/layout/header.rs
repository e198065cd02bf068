use yew::prelude::*;

use crate::components::link::Link;
use crate::route::Route;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub route: Route,
    pub signed_in: bool,
}

pub enum Msg {
    ToggleMenu,
    CloseMenu,
}

pub struct Header {
    menu_open: bool,
}

impl Header {
    fn nav_items(signed_in: bool) -> [(Route, &'static str); 5] {
        let account = if signed_in {
            (Route::Dashboard, "My Garden")
        } else {
            (Route::Auth, "Login")
        };
        [
            (Route::Home, "Home"),
            (Route::Plants, "Plants"),
            (Route::About, "About"),
            (Route::Contact, "Contact"),
            account,
        ]
    }

    fn is_active(current: &Route, item: &Route) -> bool {
        match (current, item) {
            (Route::PlantDetail(_), Route::Plants) => true,
            _ => current == item,
        }
    }
}

impl Component for Header {
    type Message = Msg;
    type Properties = HeaderProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { menu_open: false }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleMenu => self.menu_open = !self.menu_open,
            Msg::CloseMenu => self.menu_open = false,
        }
        true
    }

    fn changed(&mut self, _ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.menu_open = false;
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let items = Self::nav_items(props.signed_in);
        let link = ctx.link();

        let nav = |extra: &'static str| -> Html {
            items
                .iter()
                .map(|(route, label)| {
                    let active = Self::is_active(&props.route, route);
                    html! {
                        <li onclick={link.callback(|_| Msg::CloseMenu)}>
                            <Link to={route.clone()} classes={classes!("nav-link", extra, active.then_some("active"))}>
                                { *label }
                            </Link>
                        </li>
                    }
                })
                .collect::<Html>()
        };

        html! {
            <header class="site-header">
                <nav class="container nav-bar">
                    <Link to={Route::Home} classes={classes!("brand")}>
                        <span class="brand-icon">{"🌿"}</span>
                        <span class="brand-name">{"ZenFlora"}</span>
                    </Link>
                    <ul class="nav-links">{ nav("") }</ul>
                    <button class="menu-toggle" aria-label="Toggle Menu" onclick={link.callback(|_| Msg::ToggleMenu)}>
                        { if self.menu_open { "✕" } else { "☰" } }
                    </button>
                </nav>
                if self.menu_open {
                    <ul class="container nav-mobile">{ nav("mobile") }</ul>
                }
            </header>
        }
    }
}
