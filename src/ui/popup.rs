/// Popup UI for Tab Sorter extension
use patternfly_yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::OrganizerConfig;
use crate::organizer::{Action, TabOrganizer};
use crate::tabs_api::ChromeTabs;

#[derive(Properties, PartialEq, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub config: OrganizerConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    // Each click spawns its own action; nothing stops two from overlapping
    let on_action = |action: Action| {
        let config = props.config.clone();
        Callback::from(move |_: MouseEvent| {
            let organizer = TabOrganizer::with_config(ChromeTabs, config.clone());
            spawn_local(async move {
                organizer.run(action).await;
            });
        })
    };

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"Tab Sorter"}</h1>

            <div class="flex-column-gap">
                <Button
                    id={Action::SortAll.button_id()}
                    onclick={on_action(Action::SortAll)}
                    variant={ButtonVariant::Secondary}
                    block={true}
                >
                    {"Sort All Tabs"}
                </Button>
                <Button
                    id={Action::SortWindow.button_id()}
                    onclick={on_action(Action::SortWindow)}
                    variant={ButtonVariant::Secondary}
                    block={true}
                >
                    {"Sort This Window"}
                </Button>
                <Button
                    id={Action::ExtractDomain.button_id()}
                    onclick={on_action(Action::ExtractDomain)}
                    variant={ButtonVariant::Secondary}
                    block={true}
                >
                    {"Extract This Domain"}
                </Button>
            </div>

            <p class="footer-popup">
                {"Tab Sorter v0.1.0"}
            </p>
        </div>
    }
}
