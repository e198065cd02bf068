pub mod layout;
pub mod link;
pub mod modal;
pub mod plant_card;
pub mod toast;
