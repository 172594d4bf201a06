use crate::theme::Theme;
use crate::utils::Modal;
use yew::prelude::*;

const THEME_CHOICES: [(&str, Option<Theme>); 3] = [
    ("Auto", None),
    ("Light", Some(Theme::Light)),
    ("Dark", Some(Theme::Dark)),
];

#[derive(Properties, PartialEq)]
pub(crate) struct SettingsProps {
    #[prop_or_default]
    pub open: bool,
    pub theme: Option<Theme>,
    pub on_theme: Callback<Option<Theme>>,
    pub on_close: Callback<()>,
}

#[function_component]
pub(crate) fn SettingsView(props: &SettingsProps) -> Html {
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <Modal>
            <dialog id="settings" open={props.open}>
                <article>
                    <h2>{"Settings"}</h2>
                    <ul>
                        {
                            for THEME_CHOICES.into_iter().map(|(label, theme)| {
                                let on_theme = props.on_theme.clone();
                                let onclick = Callback::from(move |e: MouseEvent| {
                                    e.prevent_default();
                                    on_theme.emit(theme);
                                });
                                let class = (props.theme == theme).then_some("selected");
                                html! {
                                    <li><a href="#" {class} {onclick}>{label}</a></li>
                                }
                            })
                        }
                    </ul>
                    <footer>
                        <button onclick={on_close}>{"Close"}</button>
                    </footer>
                </article>
            </dialog>
        </Modal>
    }
}
