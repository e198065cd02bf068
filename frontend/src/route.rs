//! Path-based routing.
//!
//! The backend answers every unknown path with `index.html`, so the route is
//! parsed from `window.location` on load and kept in sync with the history
//! API afterwards.

use log::warn;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Plants,
    PlantDetail(String),
    About,
    Contact,
    Auth,
    Dashboard,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["plants"] => Route::Plants,
            ["plants", id] => Route::PlantDetail((*id).to_string()),
            ["about"] => Route::About,
            ["contact"] => Route::Contact,
            ["auth"] => Route::Auth,
            ["dashboard"] => Route::Dashboard,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Plants => "/plants".to_string(),
            Route::PlantDetail(id) => format!("/plants/{}", id),
            Route::About => "/about".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::Auth => "/auth".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// The route of the page the browser is currently showing.
    pub fn current() -> Self {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .map(|path| Route::from_path(&path))
            .unwrap_or(Route::Home)
    }
}

/// Pushes `route` onto the session history without reloading the page.
pub fn push_history(route: &Route) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(&route.path())) {
        warn!("history.pushState failed: {:?}", e);
    }
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Drops the query string from the address bar (after a sign-in redirect).
pub fn replace_history(route: &Route) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(&route.path())) {
            warn!("history.replaceState failed: {:?}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_paths() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/plants"), Route::Plants);
        assert_eq!(Route::from_path("/plants/"), Route::Plants);
        assert_eq!(
            Route::from_path("/plants/snake-plant"),
            Route::PlantDetail("snake-plant".into())
        );
        assert_eq!(Route::from_path("/dashboard"), Route::Dashboard);
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::from_path("/care-guide"), Route::NotFound);
        assert_eq!(Route::from_path("/plants/a/b"), Route::NotFound);
    }

    #[test]
    fn paths_parse_back_to_the_same_route() {
        for route in [
            Route::Home,
            Route::Plants,
            Route::PlantDetail("pothos".into()),
            Route::About,
            Route::Contact,
            Route::Auth,
            Route::Dashboard,
        ] {
            assert_eq!(Route::from_path(&route.path()), route);
        }
    }
}
