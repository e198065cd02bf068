use base64::{engine::general_purpose, Engine as _};
use common::collection::CollectionError;
use common::model::profile::{PhotoError, PhotoUpload, UserProfile};
use common::session::{GateAction, IdentityUser};
use common::storage::StorageError;
use gloo_file::futures::read_as_bytes;
use log::{info, warn};
use yew::html::Scope;

use super::messages::Msg;
use super::state::DashboardPage;
use crate::components::toast::{show_toast_kind, ToastKind};
use crate::route::Route;

/// Carries out what the session gate decided for one identity notification.
pub fn apply_gate_action(component: &mut DashboardPage, action: GateAction) {
    match action {
        GateAction::None => {}
        GateAction::Redirect(path) => {
            info!("Dashboard requires sign-in, redirecting to {}", path);
            component.app.navigate(Route::from_path(path));
        }
        GateAction::Initialize(user) => initialize(component, &user),
        GateAction::Refresh(user) => {
            if let Some(profile) = component.profile.as_mut() {
                let fresh = UserProfile::from_identity(&user);
                profile.display_name = fresh.display_name;
                profile.joined_at = fresh.joined_at;
            }
        }
    }
}

fn initialize(component: &mut DashboardPage, user: &IdentityUser) {
    let photo = {
        let mut collections = component.app.collections.borrow_mut();
        if collections.current_user() != Some(user.uid.as_str()) {
            collections.load_for_user(&user.uid);
        }
        collections.load_profile_photo(&user.uid)
    };
    component.profile = Some(UserProfile::from_identity(user));
    component.draft = None;
    component.photo_url = photo.or_else(|| user.photo_url.clone());
}

/// Validates a picked file and reads it as a data URL in the background.
pub fn read_photo(file: web_sys::File, link: Scope<DashboardPage>) {
    let mime_type = file.type_();
    if let Err(e) = PhotoUpload::validate(&mime_type, file.size() as u64) {
        if let PhotoError::TooLarge { size } = e {
            warn!("Rejected profile photo of {} bytes", size);
        }
        show_toast_kind(&e.to_string(), ToastKind::Error);
        return;
    }

    wasm_bindgen_futures::spawn_local(async move {
        let file = gloo_file::File::from(file);
        match read_as_bytes(&file).await {
            Ok(bytes) => {
                let base64 = general_purpose::STANDARD.encode(&bytes);
                link.send_message(Msg::PhotoLoaded { mime_type, base64 });
            }
            Err(e) => {
                warn!("Could not read profile photo: {}", e);
                show_toast_kind("Could not read that image", ToastKind::Error);
            }
        }
    });
}

pub fn storage_message(e: &StorageError) -> &'static str {
    match e {
        StorageError::QuotaExceeded { .. } => "Your browser storage is full. Try a smaller image or remove some plants.",
        StorageError::Unavailable => "Browser storage is unavailable, so changes cannot be saved.",
        StorageError::Rejected(_) => "Your changes could not be saved.",
    }
}

/// Reports a failed collection change; the collection itself is unchanged.
pub fn report_collection_error(action: &str, e: &CollectionError) {
    warn!("{} failed: {}", action, e);
    let message = match e {
        CollectionError::Storage(storage) => storage_message(storage),
        CollectionError::UnknownPlant(_) => "That plant is not in our catalog.",
        CollectionError::NoActiveUser => "Please sign in again.",
        CollectionError::Encode(_) => "Your changes could not be saved.",
    };
    show_toast_kind(message, ToastKind::Error);
}
