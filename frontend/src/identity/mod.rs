//! # Identity Provider Client
//!
//! Talks to the hosted identity service over its REST API and keeps the
//! signed-in session in local storage under `authSession`.
//!
//! ## Workflow
//! 1. `App` builds one [`IdentityClient`] and spawns [`IdentityClient::restore`].
//!    A stored session is verified with `accounts:lookup`; an expired id token
//!    is renewed once with the refresh token. A pending Google redirect is
//!    completed first.
//! 2. Views call [`IdentityClient::subscribe`] and keep the returned
//!    [`Subscription`]. Every subscriber hears the current user once the
//!    session is resolved, then again on every sign-in or sign-out. Dropping
//!    the subscription unregisters the callback.
//! 3. Sign-in operations return `Result<IdentityUser, AuthError>`; provider
//!    error codes are mapped through [`AuthError::from_code`].

mod listeners;
mod wire;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use common::auth::AuthError;
use common::session::IdentityUser;
use common::storage::{keys, KeyValueStore};
use gloo_net::http::{Request, Response};
use log::{debug, error, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use yew::platform::spawn_local;
use yew::Callback;

use crate::route::{replace_history, Route};
use crate::storage::LocalStorageMedium;
use listeners::Listeners;
use wire::*;

const IDENTITY_TOOLKIT: &str = "https://identitytoolkit.googleapis.com/v1/accounts";
const SECURE_TOKEN: &str = "https://securetoken.googleapis.com/v1/token";
const GOOGLE_PROVIDER: &str = "google.com";

/// Session id of a Google sign-in started on this browser, kept until the
/// provider redirects back to `/auth`.
const PENDING_IDP_SESSION: &str = "authPendingIdp";

/// Keeps an identity subscriber registered; dropping it unsubscribes.
pub type Subscription = listeners::Subscription<Option<IdentityUser>>;

pub struct IdentityClient {
    api_key: Option<&'static str>,
    storage: Rc<LocalStorageMedium>,
    session: RefCell<Option<StoredSession>>,
    resolved: Cell<bool>,
    listeners: Rc<Listeners<Option<IdentityUser>>>,
}

impl IdentityClient {
    pub fn new(api_key: Option<&'static str>, storage: Rc<LocalStorageMedium>) -> Rc<Self> {
        if api_key.is_none() {
            warn!("ZENFLORA_FIREBASE_API_KEY was not set at build time; sign-in is disabled");
        }
        Rc::new(Self {
            api_key,
            storage,
            session: RefCell::new(None),
            resolved: Cell::new(false),
            listeners: Listeners::new(),
        })
    }

    pub fn current_user(&self) -> Option<IdentityUser> {
        self.session.borrow().as_ref().map(|s| s.user.clone())
    }

    /// Registers `callback` for identity changes. If the session is already
    /// resolved the current user is delivered on the next tick.
    pub fn subscribe(self: &Rc<Self>, callback: Callback<Option<IdentityUser>>) -> Subscription {
        let subscription = self.listeners.subscribe(callback);

        if self.resolved.get() {
            let client = Rc::downgrade(self);
            let id = subscription.id();
            spawn_local(async move {
                if let Some(client) = client.upgrade() {
                    client.listeners.deliver_to(id, client.current_user());
                }
            });
        }

        subscription
    }

    /// Resolves the initial session. Spawned once from the app root.
    pub async fn restore(self: Rc<Self>) {
        if let Some(result) = self.complete_redirect_sign_in().await {
            match result {
                Ok(user) => info!("Signed in with Google as {}", user.uid),
                Err(e) => warn!("Google sign-in could not be completed: {:?}", e),
            }
            if self.resolved.get() {
                return;
            }
        }

        let stored = self
            .storage
            .get(keys::AUTH_SESSION)
            .and_then(|raw| match serde_json::from_str::<StoredSession>(&raw) {
                Ok(session) => Some(session),
                Err(e) => {
                    warn!("Discarding unreadable {}: {}", keys::AUTH_SESSION, e);
                    None
                }
            });

        let Some(stored) = stored else {
            self.set_session(None);
            return;
        };

        match self.verify(&stored).await {
            Ok(session) => self.set_session(Some(session)),
            Err(e) if e.ends_session() => {
                info!("Stored session is no longer valid: {}", e);
                self.set_session(None);
            }
            Err(e) => {
                warn!("Could not verify stored session, keeping it: {:?}", e);
                self.set_session(Some(stored));
            }
        }
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<IdentityUser, AuthError> {
        let tokens: TokenResponse = self
            .call(
                "signInWithPassword",
                &PasswordRequest {
                    email: email.trim(),
                    password,
                    return_secure_token: true,
                },
            )
            .await?;
        self.establish(tokens.id_token, tokens.refresh_token).await
    }

    /// Creates the account, then stores `name` as its display name.
    pub async fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<IdentityUser, AuthError> {
        let tokens: TokenResponse = self
            .call(
                "signUp",
                &PasswordRequest {
                    email: email.trim(),
                    password,
                    return_secure_token: true,
                },
            )
            .await?;

        let mut id_token = tokens.id_token;
        let mut refresh_token = tokens.refresh_token;
        let name = name.trim();
        if !name.is_empty() {
            let updated: UpdateProfileResponse = self
                .call(
                    "update",
                    &UpdateProfileRequest {
                        id_token: &id_token,
                        display_name: name,
                        return_secure_token: true,
                    },
                )
                .await?;
            id_token = updated.id_token.unwrap_or(id_token);
            refresh_token = updated.refresh_token.unwrap_or(refresh_token);
        }
        self.establish(id_token, refresh_token).await
    }

    pub async fn send_password_reset(&self, email: &str) -> Result<(), AuthError> {
        let _: serde_json::Value = self
            .call(
                "sendOobCode",
                &OobCodeRequest {
                    request_type: "PASSWORD_RESET",
                    email: email.trim(),
                },
            )
            .await?;
        Ok(())
    }

    /// Changes the display name of the signed-in account.
    pub async fn update_display_name(&self, display_name: &str) -> Result<IdentityUser, AuthError> {
        let Some(session) = self.session.borrow().clone() else {
            return Err(AuthError::SessionExpired);
        };
        let updated: UpdateProfileResponse = self
            .call(
                "update",
                &UpdateProfileRequest {
                    id_token: &session.id_token,
                    display_name: display_name.trim(),
                    return_secure_token: true,
                },
            )
            .await?;
        self.establish(
            updated.id_token.unwrap_or(session.id_token),
            updated.refresh_token.unwrap_or(session.refresh_token),
        )
        .await
    }

    pub fn sign_out(&self) {
        if let Some(user) = self.current_user() {
            info!("Signing out {}", user.uid);
        }
        self.set_session(None);
    }

    /// Sends the browser to Google. The flow ends in [`IdentityClient::restore`]
    /// when the provider redirects back to `/auth`.
    pub async fn start_google_sign_in(&self) -> Result<(), AuthError> {
        let window = web_sys::window().ok_or_else(|| AuthError::Other("no-window".into()))?;
        let origin = window
            .location()
            .origin()
            .map_err(|_| AuthError::Other("no-origin".into()))?;
        let continue_uri = format!("{}{}", origin, Route::Auth.path());

        let response: CreateAuthUriResponse = self
            .call(
                "createAuthUri",
                &CreateAuthUriRequest {
                    provider_id: GOOGLE_PROVIDER,
                    continue_uri: &continue_uri,
                },
            )
            .await?;

        if let Err(e) = self.storage.set(PENDING_IDP_SESSION, &response.session_id) {
            warn!("Could not remember pending Google sign-in: {}", e);
        }
        window
            .location()
            .set_href(&response.auth_uri)
            .map_err(|_| AuthError::Other("redirect-failed".into()))
    }

    async fn complete_redirect_sign_in(&self) -> Option<Result<IdentityUser, AuthError>> {
        let session_id = self.storage.get(PENDING_IDP_SESSION)?;
        let location = web_sys::window()?.location();
        let search = location.search().ok().unwrap_or_default();
        let request_uri = location.href().ok()?;
        if let Err(e) = self.storage.remove(PENDING_IDP_SESSION) {
            warn!("Could not clear pending Google sign-in: {}", e);
        }

        if search.contains("error=") {
            replace_history(&Route::Auth);
            return Some(Err(AuthError::PopupDismissed));
        }
        if search.is_empty() {
            return None;
        }

        let result = self.sign_in_with_idp(&request_uri, &session_id).await;
        replace_history(&Route::Auth);
        Some(result)
    }

    async fn sign_in_with_idp(
        &self,
        request_uri: &str,
        session_id: &str,
    ) -> Result<IdentityUser, AuthError> {
        let tokens: TokenResponse = self
            .call(
                "signInWithIdp",
                &SignInWithIdpRequest {
                    request_uri,
                    session_id,
                    return_secure_token: true,
                    return_idp_credential: true,
                },
            )
            .await?;
        self.establish(tokens.id_token, tokens.refresh_token).await
    }

    /// Looks the account up with the stored token, renewing it once if it expired.
    async fn verify(&self, stored: &StoredSession) -> Result<StoredSession, AuthError> {
        match self.lookup(&stored.id_token).await {
            Ok(user) => Ok(StoredSession {
                user,
                ..stored.clone()
            }),
            Err(AuthError::SessionExpired) => {
                debug!("Id token expired, refreshing");
                let refreshed = self.refresh(&stored.refresh_token).await?;
                let user = self.lookup(&refreshed.id_token).await?;
                Ok(StoredSession {
                    id_token: refreshed.id_token,
                    refresh_token: refreshed.refresh_token,
                    user,
                })
            }
            Err(e) => Err(e),
        }
    }

    async fn establish(
        &self,
        id_token: String,
        refresh_token: String,
    ) -> Result<IdentityUser, AuthError> {
        let user = self.lookup(&id_token).await?;
        self.set_session(Some(StoredSession {
            id_token,
            refresh_token,
            user: user.clone(),
        }));
        Ok(user)
    }

    async fn lookup(&self, id_token: &str) -> Result<IdentityUser, AuthError> {
        let mut response: LookupResponse = self.call("lookup", &LookupRequest { id_token }).await?;
        if response.users.is_empty() {
            return Err(AuthError::UnknownAccount);
        }
        Ok(response.users.swap_remove(0).into_user())
    }

    async fn refresh(&self, refresh_token: &str) -> Result<RefreshResponse, AuthError> {
        let url = format!("{}?key={}", SECURE_TOKEN, self.api_key()?);
        let body = format!(
            "grant_type=refresh_token&refresh_token={}",
            String::from(js_sys::encode_uri_component(refresh_token))
        );
        let response = Request::post(&url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        read_response(response).await
    }

    async fn call<Req: Serialize, Resp: DeserializeOwned>(
        &self,
        method: &str,
        body: &Req,
    ) -> Result<Resp, AuthError> {
        let url = format!("{}:{}?key={}", IDENTITY_TOOLKIT, method, self.api_key()?);
        let response = Request::post(&url)
            .json(body)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        read_response(response).await
    }

    fn api_key(&self) -> Result<&'static str, AuthError> {
        self.api_key.ok_or_else(|| {
            error!("Identity request attempted without an API key");
            AuthError::Other("missing-api-key".into())
        })
    }

    fn set_session(&self, session: Option<StoredSession>) {
        let persisted = match &session {
            Some(s) => serde_json::to_string(s)
                .map_err(|e| e.to_string())
                .and_then(|raw| {
                    self.storage
                        .set(keys::AUTH_SESSION, &raw)
                        .map_err(|e| e.to_string())
                }),
            None => self
                .storage
                .remove(keys::AUTH_SESSION)
                .map_err(|e| e.to_string()),
        };
        if let Err(e) = persisted {
            warn!("Could not persist {}: {}", keys::AUTH_SESSION, e);
        }

        let user = session.as_ref().map(|s| s.user.clone());
        *self.session.borrow_mut() = session;
        self.resolved.set(true);
        self.notify(user);
    }

    fn notify(&self, user: Option<IdentityUser>) {
        self.listeners.notify(user);
    }
}

async fn read_response<T: DeserializeOwned>(response: Response) -> Result<T, AuthError> {
    if response.ok() {
        return response.json::<T>().await.map_err(network_error);
    }
    match response.json::<ErrorEnvelope>().await {
        Ok(envelope) => Err(AuthError::from_code(&envelope.error.message)),
        Err(e) => Err(network_error(e)),
    }
}

fn network_error(e: gloo_net::Error) -> AuthError {
    warn!("Identity request failed: {}", e);
    AuthError::Other(e.to_string())
}
