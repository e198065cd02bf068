//! Sign-in, sign-up and password reset, plus Google sign-in by redirect.
//!
//! Form input is checked with [`AuthForm::validate`] before any request is
//! made. Once the identity client reports a signed-in user the page shows a
//! short confirmation and moves on to the dashboard.

mod view;

use common::auth::form::{AuthForm, AuthMode};
use common::auth::AuthError;
use common::session::IdentityUser;
use log::{info, warn};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::context::{app_context, AppContext};
use crate::identity::Subscription;
use crate::route::Route;

const REDIRECT_DELAY_MS: u32 = 1000;

#[derive(Clone, Copy)]
pub enum AuthField {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

#[derive(Clone, PartialEq)]
pub enum Notice {
    Success(String),
    Error(String),
}

pub enum Msg {
    SetField(AuthField, String),
    SetMode(AuthMode),
    TogglePassword,
    Submit,
    Google,
    Finished(Result<&'static str, AuthError>),
    GoogleFailed(AuthError),
    Identity(Option<IdentityUser>),
    Redirect,
}

pub struct AuthPage {
    app: AppContext,
    mode: AuthMode,
    form: AuthForm,
    show_password: bool,
    loading: bool,
    notice: Option<Notice>,
    redirecting: bool,
    _identity: Subscription,
}

impl Component for AuthPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let app = app_context(ctx);
        let subscription = app.identity.subscribe(ctx.link().callback(Msg::Identity));
        Self {
            app,
            mode: AuthMode::SignIn,
            form: AuthForm::default(),
            show_password: false,
            loading: false,
            notice: None,
            redirecting: false,
            _identity: subscription,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetField(field, value) => {
                let slot = match field {
                    AuthField::Name => &mut self.form.name,
                    AuthField::Email => &mut self.form.email,
                    AuthField::Password => &mut self.form.password,
                    AuthField::ConfirmPassword => &mut self.form.confirm_password,
                };
                *slot = value;
                self.notice = None;
                true
            }
            Msg::SetMode(mode) => {
                // Switching between sign-in and sign-up starts from a blank form.
                if mode != AuthMode::ResetPassword {
                    self.form = AuthForm::default();
                }
                self.mode = mode;
                self.notice = None;
                true
            }
            Msg::TogglePassword => {
                self.show_password = !self.show_password;
                true
            }
            Msg::Submit => {
                if self.loading {
                    return false;
                }
                if let Err(e) = self.form.validate(self.mode) {
                    self.notice = Some(Notice::Error(e.to_string()));
                    return true;
                }
                self.loading = true;
                self.submit(ctx);
                true
            }
            Msg::Google => {
                if self.loading {
                    return false;
                }
                self.loading = true;
                let identity = self.app.identity.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    // On success the browser leaves the page.
                    if let Err(e) = identity.start_google_sign_in().await {
                        link.send_message(Msg::GoogleFailed(e));
                    }
                });
                true
            }
            Msg::Finished(result) => {
                self.loading = false;
                match result {
                    Ok(text) => {
                        self.notice = Some(Notice::Success(text.to_string()));
                        if self.mode == AuthMode::ResetPassword {
                            self.mode = AuthMode::SignIn;
                        }
                    }
                    Err(e) => {
                        warn!("Authentication failed: {:?}", e);
                        self.notice = Some(Notice::Error(e.to_string()));
                    }
                }
                true
            }
            Msg::GoogleFailed(e) => {
                self.loading = false;
                let text = match e {
                    AuthError::PopupDismissed => e.to_string(),
                    _ => "Google sign-in failed. Please try again.".to_string(),
                };
                self.notice = Some(Notice::Error(text));
                true
            }
            Msg::Identity(user) => {
                let Some(user) = user else {
                    return false;
                };
                if self.redirecting {
                    return false;
                }
                info!("Signed in as {}, continuing to the dashboard", user.uid);
                self.redirecting = true;
                if self.notice.is_none() {
                    self.notice = Some(Notice::Success("Signed in successfully!".to_string()));
                }
                let link = ctx.link().clone();
                spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    link.send_message(Msg::Redirect);
                });
                true
            }
            Msg::Redirect => {
                self.app.navigate(Route::Dashboard);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}

impl AuthPage {
    fn submit(&self, ctx: &Context<Self>) {
        let identity = self.app.identity.clone();
        let form = self.form.clone();
        let mode = self.mode;
        let link = ctx.link().clone();

        spawn_local(async move {
            let result = match mode {
                AuthMode::ResetPassword => identity
                    .send_password_reset(&form.email)
                    .await
                    .map(|_| "Password reset email sent! Check your inbox."),
                AuthMode::SignIn => identity
                    .sign_in(&form.email, &form.password)
                    .await
                    .map(|_| "Welcome back!"),
                AuthMode::SignUp => identity
                    .sign_up(&form.name, &form.email, &form.password)
                    .await
                    .map(|_| "Account created successfully!"),
            };
            link.send_message(Msg::Finished(result));
        });
    }
}
