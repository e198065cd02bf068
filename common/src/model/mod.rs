pub mod favorite;
pub mod owned;
pub mod plant;
pub mod profile;
