//! Navigation commands issued by the login flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! The admin area lives outside this app, so the browser navigator performs a
//! full-page load.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Full-page navigation through `window.location`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, path: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().set_href(path) {
                    log::warn!("navigation to {path} failed: {e:?}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
        }
    }
}
