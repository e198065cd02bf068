use yew::prelude::*;

use crate::context::app_context;
use crate::route::Route;

#[derive(Properties, PartialEq)]
pub struct LinkProps {
    pub to: Route,
    #[prop_or_default]
    pub classes: Classes,
    #[prop_or_default]
    pub children: Html,
}

/// In-app anchor: keeps a real `href` but navigates through the history API.
/// Modified clicks (new tab, new window) are left to the browser.
pub struct Link;

impl Component for Link {
    type Message = ();
    type Properties = LinkProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let app = app_context(ctx);
        let to = props.to.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            if e.ctrl_key() || e.meta_key() || e.shift_key() || e.button() != 0 {
                return;
            }
            e.prevent_default();
            app.navigate(to.clone());
        });

        html! {
            <a href={props.to.path()} class={props.classes.clone()} {onclick}>
                { props.children.clone() }
            </a>
        }
    }
}
