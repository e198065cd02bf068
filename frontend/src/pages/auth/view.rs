use common::auth::form::AuthMode;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::{AuthField, AuthPage, Msg, Notice};
use crate::components::link::Link;
use crate::route::Route;

const PANEL_IMAGE: &str =
    "https://images.unsplash.com/photo-1416879595882-3373a0480b5b?w=1200&h=800&auto=format&fit=crop";

const HIGHLIGHTS: [(&str, &str); 4] = [
    ("💚", "Mindful plant care guidance"),
    ("🌿", "Curated collection of zen plants"),
    ("☀️", "Daily moments of peace and reflection"),
    ("💧", "Simple routines for busy lives"),
];

fn subtitle(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::SignIn => "Continue your mindful journey with plants",
        AuthMode::SignUp => "Begin your journey toward mindful plant care",
        AuthMode::ResetPassword => "Enter your email to receive a password reset link",
    }
}

fn panel_copy(mode: AuthMode) -> (&'static str, &'static str) {
    match mode {
        AuthMode::SignIn => (
            "Welcome Back to Your Garden",
            "Your plants have been waiting. Continue nurturing your peaceful sanctuary and discover new moments of mindfulness.",
        ),
        AuthMode::SignUp => (
            "Cultivate Your Inner Garden",
            "Join thousands of plant lovers who have found peace through the simple act of caring for nature. Your journey toward mindful living starts here.",
        ),
        AuthMode::ResetPassword => (
            "Reconnect with Nature",
            "Every plant journey has moments of renewal. Let us help you find your way back to your zen garden.",
        ),
    }
}

fn submit_label(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::SignIn => "Sign In",
        AuthMode::SignUp => "Create Account",
        AuthMode::ResetPassword => "Send Reset Email",
    }
}

pub fn view(page: &AuthPage, ctx: &Context<AuthPage>) -> Html {
    let link = ctx.link();
    let (panel_title, panel_text) = panel_copy(page.mode);

    html! {
        <section class="auth-layout">
            <div class="auth-panel" style={format!("background-image: url('{}')", PANEL_IMAGE)}>
                <div class="auth-panel-content">
                    <h2>{ panel_title }</h2>
                    <p>{ panel_text }</p>
                    if page.mode != AuthMode::ResetPassword {
                        <ul class="highlights">
                            { for HIGHLIGHTS.iter().map(|(icon, text)| html! {
                                <li><span>{ *icon }</span>{ *text }</li>
                            }) }
                        </ul>
                    }
                    <p class="quote">
                        {"\"In every seed lies the potential for transformation. In every moment of care, we find our own growth.\""}
                    </p>
                </div>
            </div>

            <div class="auth-form-panel">
                <h1>{ page.mode.title() }</h1>
                <p class="lead">{ subtitle(page.mode) }</p>
                { notice(page.notice.as_ref()) }
                { build_form(page, link) }
                { build_mode_switch(page, link) }
                <div class="center">
                    <Link to={Route::Home}>{"← Back to ZenFlora"}</Link>
                </div>
            </div>
        </section>
    }
}

fn notice(notice: Option<&Notice>) -> Html {
    match notice {
        Some(Notice::Success(text)) => html! { <div class="alert success">{ text }</div> },
        Some(Notice::Error(text)) => html! { <div class="alert error">{ text }</div> },
        None => html! {},
    }
}

fn field_callback(link: &Scope<AuthPage>, field: AuthField) -> Callback<InputEvent> {
    link.callback(move |e: InputEvent| {
        Msg::SetField(field, e.target_unchecked_into::<HtmlInputElement>().value())
    })
}

fn build_form(page: &AuthPage, link: &Scope<AuthPage>) -> Html {
    let password_type = if page.show_password { "text" } else { "password" };
    let on_submit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form class="form" onsubmit={on_submit} novalidate={true}>
            if page.mode == AuthMode::SignUp {
                <label>
                    {"Full Name"}
                    <input type="text" name="name" placeholder="Enter your full name"
                        value={page.form.name.clone()} oninput={field_callback(link, AuthField::Name)} />
                </label>
            }
            <label>
                {"Email Address"}
                <input type="email" name="email" placeholder="Enter your email"
                    value={page.form.email.clone()} oninput={field_callback(link, AuthField::Email)} />
            </label>
            if page.mode != AuthMode::ResetPassword {
                <label>
                    {"Password"}
                    <div class="password-field">
                        <input type={password_type} name="password" placeholder="Enter your password"
                            value={page.form.password.clone()} oninput={field_callback(link, AuthField::Password)} />
                        <button type="button" class="icon-btn" title="Show password"
                            onclick={link.callback(|_| Msg::TogglePassword)}>
                            { if page.show_password { "🙈" } else { "👁" } }
                        </button>
                    </div>
                </label>
                if page.mode == AuthMode::SignUp {
                    <label>
                        {"Confirm Password"}
                        <input type={password_type} name="confirmPassword" placeholder="Confirm your password"
                            value={page.form.confirm_password.clone()}
                            oninput={field_callback(link, AuthField::ConfirmPassword)} />
                    </label>
                }
            }
            <button type="submit" class="btn btn-primary wide" disabled={page.loading}>
                { if page.loading { "Please wait..." } else { submit_label(page.mode) } }
            </button>
            if page.mode != AuthMode::ResetPassword {
                <button type="button" class="btn btn-outline wide" disabled={page.loading}
                    onclick={link.callback(|_| Msg::Google)}>
                    {"Continue with Google"}
                </button>
            }
        </form>
    }
}

fn build_mode_switch(page: &AuthPage, link: &Scope<AuthPage>) -> Html {
    match page.mode {
        AuthMode::ResetPassword => html! {
            <div class="mode-switch">
                <button type="button" class="text-btn" onclick={link.callback(|_| Msg::SetMode(AuthMode::SignIn))}>
                    {"Back to sign in"}
                </button>
            </div>
        },
        AuthMode::SignIn => html! {
            <div class="mode-switch">
                <button type="button" class="text-btn"
                    onclick={link.callback(|_| Msg::SetMode(AuthMode::ResetPassword))}>
                    {"Forgot your password?"}
                </button>
                <p>
                    {"Don't have an account? "}
                    <button type="button" class="text-btn" onclick={link.callback(|_| Msg::SetMode(AuthMode::SignUp))}>
                        {"Sign up"}
                    </button>
                </p>
            </div>
        },
        AuthMode::SignUp => html! {
            <div class="mode-switch">
                <p>
                    {"Already have an account? "}
                    <button type="button" class="text-btn" onclick={link.callback(|_| Msg::SetMode(AuthMode::SignIn))}>
                        {"Sign in"}
                    </button>
                </p>
            </div>
        },
    }
}
