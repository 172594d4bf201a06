use crate::utils::*;
use serde::{Deserialize, Serialize};

/// Colour scheme forced on the page; `None` follows the system preference.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub const ATTR_NAME: &'static str = "data-theme";

    pub const fn scheme(self) -> &'static str {
        use Theme::*;
        match self {
            Light => "light",
            Dark => "dark",
        }
    }

    fn update_html(theme: Option<Self>) {
        use gloo::utils::document;
        let Some(html) = document().document_element() else {
            log::error!("no html element to theme");
            return;
        };
        if let Some(theme) = theme {
            let scheme = theme.scheme();
            log::debug!("theme-scheme: {}", scheme);
            if let Err(err) = html.set_attribute(Self::ATTR_NAME, scheme) {
                log::error!("failed to set theme: {:?}", err);
            }
        } else {
            log::debug!("no theme preference");
            if let Err(err) = html.remove_attribute(Self::ATTR_NAME) {
                log::error!("failed to clear theme: {:?}", err);
            }
        }
    }

    pub(crate) fn init() {
        Self::update_html(LocalOrDefault::local_or_default());
    }

    pub(crate) fn current() -> Option<Self> {
        LocalOrDefault::local_or_default()
    }

    pub(crate) fn apply(theme: Option<Self>) {
        theme.local_save();
        Self::update_html(theme);
    }
}

impl StorageKey for Theme {
    const KEY: &'static str = "noughts:theme";
}
