use common::auth::AuthError;
use common::session::IdentityUser;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Planted,
    Favorites,
}

#[derive(Clone, Copy)]
pub enum AddField {
    Plant,
    Nickname,
    DatePlanted,
}

#[derive(Clone, Copy)]
pub enum ProfileField {
    DisplayName,
    Bio,
    Experience,
}

pub enum Msg {
    Identity(Option<IdentityUser>),
    SetTab(Tab),
    OpenAddModal,
    CloseAddModal,
    SetAddField(AddField, String),
    AddPlant,
    RemovePlant(String),
    ToggleFavorite(String),
    PhotoSelected(web_sys::File),
    PhotoLoaded { mime_type: String, base64: String },
    RemovePhoto,
    EditProfile,
    SetProfileField(ProfileField, String),
    SaveProfile,
    CancelEdit,
    ProfileSaved(Result<IdentityUser, AuthError>),
    SignOut,
}
