use std::cell::RefCell;
use std::rc::Rc;

use common::catalog::Catalog;
use common::collection::CollectionStore;
use common::session::IdentityUser;
use log::{error, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::platform::spawn_local;
use yew::{html, Component, Context, ContextProvider, Html};

use crate::components::layout::footer::Footer;
use crate::components::layout::header::Header;
use crate::config;
use crate::context::AppContext;
use crate::identity::{IdentityClient, Subscription};
use crate::pages::about::AboutPage;
use crate::pages::auth::AuthPage;
use crate::pages::contact::ContactPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::plants::detail::PlantDetailPage;
use crate::pages::plants::directory::PlantDirectoryPage;
use crate::route::{self, Route};
use crate::storage::LocalStorageMedium;

pub enum Msg {
    Navigate(Route),
    HistoryChanged,
    Identity(Option<IdentityUser>),
}

pub struct App {
    context: AppContext,
    route: Route,
    user: Option<IdentityUser>,
    _identity: Subscription,
    _popstate: Option<Closure<dyn FnMut()>>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let catalog = Rc::new(Catalog::builtin().unwrap_or_else(|e| {
            error!("Built-in catalog failed to load: {}", e);
            Catalog::default()
        }));
        info!("Catalog ready with {} plants", catalog.len());

        let storage = Rc::new(LocalStorageMedium::new());
        let identity = IdentityClient::new(config::firebase_api_key(), storage.clone());
        let collections = Rc::new(RefCell::new(CollectionStore::new(storage, catalog.clone())));

        let context = AppContext {
            catalog,
            identity: identity.clone(),
            collections,
            navigator: ctx.link().callback(Msg::Navigate),
        };

        let subscription = identity.subscribe(ctx.link().callback(Msg::Identity));
        spawn_local(identity.restore());

        Self {
            context,
            route: Route::current(),
            user: None,
            _identity: subscription,
            _popstate: listen_popstate(ctx),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(route) => {
                if route == self.route {
                    return false;
                }
                route::push_history(&route);
                self.route = route;
                true
            }
            Msg::HistoryChanged => {
                let route = Route::current();
                if route == self.route {
                    return false;
                }
                self.route = route;
                true
            }
            Msg::Identity(user) => {
                let mut collections = self.context.collections.borrow_mut();
                match &user {
                    Some(user) if collections.current_user() != Some(user.uid.as_str()) => {
                        collections.load_for_user(&user.uid);
                    }
                    Some(_) => {}
                    None => collections.clear(),
                }
                drop(collections);
                self.user = user;
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <ContextProvider<AppContext> context={self.context.clone()}>
                <div class="app-shell">
                    <Header route={self.route.clone()} signed_in={self.user.is_some()} />
                    <main class="page">
                        { self.page() }
                    </main>
                    <Footer />
                </div>
            </ContextProvider<AppContext>>
        }
    }
}

impl App {
    fn page(&self) -> Html {
        match &self.route {
            Route::Home => html! { <HomePage /> },
            Route::Plants => html! { <PlantDirectoryPage /> },
            Route::PlantDetail(id) => html! { <PlantDetailPage key={id.clone()} plant_id={id.clone()} /> },
            Route::About => html! { <AboutPage /> },
            Route::Contact => html! { <ContactPage /> },
            Route::Auth => html! { <AuthPage /> },
            Route::Dashboard => html! { <DashboardPage /> },
            Route::NotFound => html! { <NotFoundPage /> },
        }
    }
}

/// Re-reads the route when the user moves through history with back/forward.
fn listen_popstate(ctx: &Context<App>) -> Option<Closure<dyn FnMut()>> {
    let window = web_sys::window()?;
    let link = ctx.link().clone();
    let listener = Closure::<dyn FnMut()>::new(move || link.send_message(Msg::HistoryChanged));
    window
        .add_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref())
        .ok()?;
    Some(listener)
}
