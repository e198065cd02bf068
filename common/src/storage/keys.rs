//! User-scoped key layout of the persistence medium.

pub const AUTH_SESSION: &str = "authSession";

pub fn user_plants(user_id: &str) -> String {
    format!("userPlants_{}", user_id)
}

pub fn favorite_plants(user_id: &str) -> String {
    format!("favoritePlants_{}", user_id)
}

pub fn profile_photo(user_id: &str) -> String {
    format!("profilePhoto_{}", user_id)
}
