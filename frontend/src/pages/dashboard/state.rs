//! Runtime state of the dashboard.
//!
//! Collections themselves live in the shared store of the app context; this
//! struct only holds what the dashboard shows around them: the session gate,
//! the profile card and the add-plant dialog.

use chrono::{Local, NaiveDate};
use common::model::profile::UserProfile;
use common::session::SessionGate;
use yew::NodeRef;

use super::messages::Tab;
use crate::context::AppContext;
use crate::identity::Subscription;

/// Input of the "Add New Plant" dialog.
#[derive(Clone, Default)]
pub struct AddPlantForm {
    pub plant_id: String,
    pub nickname: String,
    /// `YYYY-MM-DD`, as produced by `<input type="date">`.
    pub date_planted: String,
}

impl AddPlantForm {
    pub fn today() -> Self {
        Self {
            date_planted: Local::now().date_naive().format("%Y-%m-%d").to_string(),
            ..Self::default()
        }
    }

    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date_planted.trim(), "%Y-%m-%d").ok()
    }
}

pub struct DashboardPage {
    pub app: AppContext,
    pub gate: SessionGate,
    pub profile: Option<UserProfile>,
    /// Copy being edited; `Some` while the profile form is open.
    pub draft: Option<UserProfile>,
    pub saving_profile: bool,
    pub photo_url: Option<String>,
    pub active_tab: Tab,
    pub add_form: Option<AddPlantForm>,
    pub photo_input_ref: NodeRef,
    pub _identity: Subscription,
}

impl DashboardPage {
    pub fn new(app: AppContext, subscription: Subscription) -> Self {
        Self {
            app,
            gate: SessionGate::new(),
            profile: None,
            draft: None,
            saving_profile: false,
            photo_url: None,
            active_tab: Tab::Planted,
            add_form: None,
            photo_input_ref: NodeRef::default(),
            _identity: subscription,
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        self.gate.user().map(|u| u.uid.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_form_parses_html_dates() {
        let form = AddPlantForm {
            date_planted: "2024-03-15".into(),
            ..AddPlantForm::default()
        };
        assert_eq!(form.parsed_date(), NaiveDate::from_ymd_opt(2024, 3, 15));

        let blank = AddPlantForm::default();
        assert_eq!(blank.parsed_date(), None);
    }
}
