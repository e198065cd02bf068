//! Personal dashboard ("my garden"), available to signed-in users only.
//!
//! Responsibilities
//! - Gate the view on the identity session: a loader while the session is
//!   resolving, a redirect to `/auth` for anonymous visitors.
//! - Initialize the shared collection store for the user once per session.
//! - Show the profile card (photo, name, bio, experience, quick stats) and the
//!   "My Plants" / "Favorites" tabs, with add, remove and favorite actions.
//!
//! The identity subscription is held in the component state, so unmounting the
//! dashboard also unsubscribes it.

mod helpers;
mod messages;
mod state;
mod update;
mod view;

use yew::prelude::*;

use crate::context::app_context;
pub use messages::Msg;
pub use state::DashboardPage;

impl Component for DashboardPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let app = app_context(ctx);
        let subscription = app.identity.subscribe(ctx.link().callback(Msg::Identity));
        DashboardPage::new(app, subscription)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
