use crate::utils::*;
use serde::{Deserialize, Serialize};
use twenty_core::{BoardVariant, NumberLocale};
use yew::prelude::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct Settings {
    #[serde(default)]
    pub variant: BoardVariant,
    #[serde(default)]
    pub locale: NumberLocale,
}

impl StorageKey for Settings {
    const KEY: &'static str = "twenty:settings";
}

#[derive(Properties, PartialEq)]
pub(crate) struct SettingsProps {
    #[prop_or_default]
    pub open: bool,
    pub settings: Settings,
    pub on_change: Callback<Settings>,
    pub on_close: Callback<MouseEvent>,
}

#[function_component]
pub(crate) fn SettingsView(props: &SettingsProps) -> Html {
    let settings = props.settings;

    let variants = BoardVariant::ALL.into_iter().map(|variant| {
        let on_change = props.on_change.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_change.emit(Settings { variant, ..settings });
        });
        let class = (variant == settings.variant).then_some("selected");
        html! {
            <li><a href="#" {class} {onclick}>{variant.name()}</a></li>
        }
    });

    let locales = NumberLocale::ALL.into_iter().map(|locale| {
        let on_change = props.on_change.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_change.emit(Settings { locale, ..settings });
        });
        let class = (locale == settings.locale).then_some("selected");
        html! {
            <li><a href="#" {class} {onclick}>{locale.name()}</a></li>
        }
    });

    html! {
        <dialog id="settings" open={props.open}>
            <article>
                <h2>{"تنظیمات"}</h2>
                <ul>{ for variants }</ul>
                <ul>{ for locales }</ul>
                <footer>
                    <button onclick={props.on_close.clone()}>{"بستن"}</button>
                </footer>
            </article>
        </dialog>
    }
}
