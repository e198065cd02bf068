use common::model::profile::{ExperienceLevel, PhotoUpload};
use log::{info, warn};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::helpers::{apply_gate_action, read_photo, report_collection_error, storage_message};
use super::messages::{AddField, Msg, ProfileField};
use super::state::{AddPlantForm, DashboardPage};
use crate::components::toast::{show_toast_kind, ToastKind};

pub fn update(page: &mut DashboardPage, ctx: &Context<DashboardPage>, msg: Msg) -> bool {
    match msg {
        Msg::Identity(user) => {
            let action = page.gate.on_identity(user);
            apply_gate_action(page, action);
            true
        }
        Msg::SetTab(tab) => {
            if page.active_tab == tab {
                return false;
            }
            page.active_tab = tab;
            true
        }
        Msg::OpenAddModal => {
            page.add_form = Some(AddPlantForm::today());
            true
        }
        Msg::CloseAddModal => {
            page.add_form = None;
            true
        }
        Msg::SetAddField(field, value) => {
            let Some(form) = page.add_form.as_mut() else {
                return false;
            };
            match field {
                AddField::Plant => form.plant_id = value,
                AddField::Nickname => form.nickname = value,
                AddField::DatePlanted => form.date_planted = value,
            }
            true
        }
        Msg::AddPlant => {
            let Some(form) = page.add_form.as_ref() else {
                return false;
            };
            if form.plant_id.is_empty() {
                show_toast_kind("Please choose a plant first", ToastKind::Error);
                return false;
            }

            let result = page.app.collections.borrow_mut().add_owned(
                &form.plant_id,
                Some(form.nickname.as_str()),
                form.parsed_date(),
            );
            match result {
                Ok(record) => {
                    info!("Added {} to the garden", record.id);
                    show_toast_kind(&format!("{} joined your garden 🌱", record.nickname), ToastKind::Success);
                    page.add_form = None;
                }
                Err(e) => report_collection_error("Adding plant", &e),
            }
            true
        }
        Msg::RemovePlant(owned_id) => {
            let result = page.app.collections.borrow_mut().remove_owned(&owned_id);
            match result {
                Ok(true) => true,
                Ok(false) => false,
                Err(e) => {
                    report_collection_error("Removing plant", &e);
                    false
                }
            }
        }
        Msg::ToggleFavorite(plant_id) => {
            let result = page.app.collections.borrow_mut().toggle_favorite(&plant_id);
            match result {
                Ok(_) => true,
                Err(e) => {
                    report_collection_error("Updating favorites", &e);
                    false
                }
            }
        }
        Msg::PhotoSelected(file) => {
            read_photo(file, ctx.link().clone());
            false
        }
        Msg::PhotoLoaded { mime_type, base64 } => {
            let Some(uid) = page.user_id().map(str::to_string) else {
                return false;
            };
            let data_url = PhotoUpload::data_url(&mime_type, &base64);
            let saved = page.app.collections.borrow().save_profile_photo(&uid, &data_url);
            match saved {
                Ok(()) => {
                    page.photo_url = Some(data_url);
                    show_toast_kind("Profile photo updated", ToastKind::Success);
                }
                // The previous photo stays in place.
                Err(e) => {
                    warn!("Saving profile photo failed: {}", e);
                    show_toast_kind(storage_message(&e), ToastKind::Error);
                }
            }
            true
        }
        Msg::RemovePhoto => {
            let Some(uid) = page.user_id().map(str::to_string) else {
                return false;
            };
            if let Err(e) = page.app.collections.borrow().remove_profile_photo(&uid) {
                warn!("Removing profile photo failed: {}", e);
                show_toast_kind(storage_message(&e), ToastKind::Error);
                return false;
            }
            page.photo_url = None;
            if let Some(input) = page.photo_input_ref.cast::<web_sys::HtmlInputElement>() {
                input.set_value("");
            }
            true
        }
        Msg::EditProfile => {
            page.draft = page.profile.clone();
            true
        }
        Msg::SetProfileField(field, value) => {
            let Some(draft) = page.draft.as_mut() else {
                return false;
            };
            match field {
                ProfileField::DisplayName => draft.display_name = value,
                ProfileField::Bio => draft.bio = value,
                ProfileField::Experience => {
                    if let Some(level) = ExperienceLevel::from_label(&value) {
                        draft.experience = level;
                    }
                }
            }
            true
        }
        Msg::SaveProfile => {
            let (Some(draft), Some(profile)) = (page.draft.as_ref(), page.profile.as_ref()) else {
                return false;
            };
            if page.saving_profile {
                return false;
            }
            let display_name = draft.display_name.trim().to_string();
            if display_name.is_empty() {
                show_toast_kind("Please enter a display name", ToastKind::Error);
                return false;
            }

            let name_changed = display_name != profile.display_name;
            let mut updated = draft.clone();
            updated.display_name = display_name.clone();
            page.profile = Some(updated);
            page.draft = None;

            if name_changed {
                page.saving_profile = true;
                let identity = page.app.identity.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = identity.update_display_name(&display_name).await;
                    link.send_message(Msg::ProfileSaved(result));
                });
            } else {
                show_toast_kind("Profile updated", ToastKind::Success);
            }
            true
        }
        Msg::CancelEdit => {
            page.draft = None;
            true
        }
        Msg::ProfileSaved(result) => {
            page.saving_profile = false;
            match result {
                Ok(user) => {
                    info!("Display name updated for {}", user.uid);
                    show_toast_kind("Profile updated", ToastKind::Success);
                }
                Err(e) => {
                    warn!("Updating display name failed: {:?}", e);
                    show_toast_kind(&format!("Could not update your profile: {}", e), ToastKind::Error);
                }
            }
            true
        }
        Msg::SignOut => {
            info!("Signing out");
            page.app.identity.sign_out();
            false
        }
    }
}
