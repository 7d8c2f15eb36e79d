use crate::{location::Location, pages::AppRoute};
use wasm_bindgen::JsValue;
use yew_nested_router::prelude::*;

/// The location of the active route, including the query and fragment of the browser's address.
pub fn current_location(route: AppRoute) -> Location {
    let location = gloo_utils::window().location();
    let search = location.search().unwrap_or_default();
    let hash = location.hash().unwrap_or_default();
    Location::new(route)
        .with_query_string(&search)
        .with_hash(&hash)
}

/// Navigate to a location on behalf of the user, adding a history entry.
pub fn navigate(router: &RouterContext<AppRoute>, to: &Location) {
    let full_path = to.full_path();
    log::debug!("Navigating to {full_path}");
    router.push(to.target.clone());

    if full_path == to.target.path() {
        return;
    }

    let result = gloo_utils::window()
        .history()
        .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(&full_path)));
    if let Err(err) = result {
        log::warn!("Failed to set query of {full_path}: {err:?}");
    }
}

/// Replace the current history entry, then let the router pick it up through `popstate`.
pub fn replace_location(url: &str) {
    if let Err(err) = try_replace_location(url) {
        log::warn!("Failed to replace location with {url}: {err:?}");
    }
}

fn try_replace_location(url: &str) -> Result<(), JsValue> {
    let window = gloo_utils::window();
    window
        .history()?
        .replace_state_with_url(&JsValue::NULL, "", Some(url))?;
    let event = web_sys::PopStateEvent::new("popstate")?;
    window.dispatch_event(&event)?;
    Ok(())
}
