//! Application-wide handles, built once by [`App`](crate::app::App) and
//! provided to every page through a `ContextProvider`.

use std::cell::RefCell;
use std::rc::Rc;

use common::catalog::Catalog;
use common::collection::CollectionStore;
use yew::{Callback, Component, Context};

use crate::identity::IdentityClient;
use crate::route::Route;
use crate::storage::LocalStorageMedium;

pub type Collections = CollectionStore<Rc<LocalStorageMedium>>;

#[derive(Clone)]
pub struct AppContext {
    pub catalog: Rc<Catalog>,
    pub identity: Rc<IdentityClient>,
    /// Owned plants and favorites of the signed-in user, shared by every view.
    pub collections: Rc<RefCell<Collections>>,
    pub navigator: Callback<Route>,
}

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.catalog, &other.catalog)
            && Rc::ptr_eq(&self.identity, &other.identity)
            && Rc::ptr_eq(&self.collections, &other.collections)
            && self.navigator == other.navigator
    }
}

impl AppContext {
    pub fn navigate(&self, route: Route) {
        self.navigator.emit(route);
    }
}

/// The context of the running app. Every page is rendered inside the
/// provider, so a missing context is a wiring bug.
pub fn app_context<C: Component>(ctx: &Context<C>) -> AppContext {
    let (context, _) = ctx
        .link()
        .context::<AppContext>(Callback::noop())
        .expect("AppContext is provided by App");
    context
}
