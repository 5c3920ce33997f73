use yew::prelude::*;
use yew::virtual_dom::AttrValue;

use crate::icons;
use crate::models::TrackingEvent;

#[derive(Properties, PartialEq)]
pub struct TimelineProps {
    pub events: Vec<TrackingEvent>,
}

/// Linha do tempo pública, mais recente primeiro (a ordem já vem do registro)
#[function_component(Timeline)]
pub fn timeline(props: &TimelineProps) -> Html {
    html! {
        <div id="public-events-list" class="space-y-4">
            { for props.events.iter().map(|event| {
                let icon = Html::from_html_unchecked(AttrValue::from(
                    icons::svg(event.icon, "w-5 h-5 text-white"),
                ));
                html! {
                    <div class="flex items-start gap-4 bg-dark-800 p-4 rounded-xl border border-white/5">
                        <div class="flex items-center justify-center w-10 h-10 rounded-full bg-brand-500 shrink-0">
                            { icon }
                        </div>
                        <div class="flex-1">
                            <div class="flex justify-between items-center mb-1">
                                <span class="font-bold text-white">{ event.location.clone() }</span>
                                <span class="text-xs text-gray-500 font-mono">
                                    { format!("{} - {}", event.date, event.time) }
                                </span>
                            </div>
                            <p class="text-gray-300 text-sm">{ event.status.clone() }</p>
                        </div>
                    </div>
                }
            })}
        </div>
    }
}
