use gloo::storage::{LocalStorage, Storage};
use serde::{Serialize, de::DeserializeOwned};
use yew::prelude::*;

/// Types that are kept in `localStorage` under a fixed key.
pub(crate) trait StorageKey {
    const KEY: &'static str;
}

pub(crate) trait LocalOrDefault {
    fn local_or_default() -> Self;
}

impl<T: StorageKey + DeserializeOwned> LocalOrDefault for Option<T> {
    fn local_or_default() -> Self {
        LocalStorage::get(T::KEY).ok()
    }
}

pub(crate) trait LocalSave {
    fn local_save(&self);
}

impl<T: StorageKey + Serialize> LocalSave for Option<T> {
    fn local_save(&self) {
        match self {
            Some(value) => {
                if let Err(err) = LocalStorage::set(T::KEY, value) {
                    log::error!("could not save {}: {:?}", T::KEY, err);
                }
            }
            None => LocalStorage::delete(T::KEY),
        }
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ModalProps {
    #[prop_or_default]
    pub children: Html,
}

/// Helper component to attach the contents into the document.body instead of in the place where it's used.
#[function_component]
pub(crate) fn Modal(props: &ModalProps) -> Html {
    let modal_host = gloo::utils::body();
    create_portal(props.children.clone(), modal_host.into())
}
