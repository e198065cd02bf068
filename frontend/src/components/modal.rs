use uuid::Uuid;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Centered dialog over a dimmed backdrop. Closes on the close button, a
/// click on the backdrop, or Escape.
pub struct Modal {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

impl Component for Modal {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("modal-{}", Uuid::new_v4()),
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        if let Some(dialog) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&self.id))
            .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok())
        {
            dialog.focus().ok();
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_backdrop = {
            let on_close = props.on_close.clone();
            let id = self.id.clone();
            Callback::from(move |e: MouseEvent| {
                let on_backdrop = e
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                    .is_some_and(|el| el.id() == format!("{}-backdrop", id));
                if on_backdrop {
                    on_close.emit(());
                }
            })
        };
        let on_key = {
            let on_close = props.on_close.clone();
            Callback::from(move |e: KeyboardEvent| {
                if e.key() == "Escape" {
                    on_close.emit(());
                }
            })
        };
        let on_close_click = props.on_close.reform(|_: MouseEvent| ());

        html! {
            <div class="modal-backdrop" id={format!("{}-backdrop", self.id)} onclick={on_backdrop}>
                <div class="modal" id={self.id.clone()} role="dialog" tabindex="-1" onkeydown={on_key}>
                    <div class="modal-header">
                        <h2>{ &props.title }</h2>
                        <button class="icon-btn" title="Close" onclick={on_close_click}>{"✕"}</button>
                    </div>
                    { props.children.clone() }
                </div>
            </div>
        }
    }
}
