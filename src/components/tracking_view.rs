use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::Timeline;
use crate::models::TrackingRecord;

#[derive(Clone, Copy, PartialEq)]
enum SearchState {
    Idle,
    Found,
    NotFound,
}

#[derive(Properties, PartialEq)]
pub struct TrackingViewProps {
    pub record: TrackingRecord,
}

/// Página pública: busca por código e, quando o código confere, resumo da
/// encomenda + linha do tempo.
#[function_component(TrackingView)]
pub fn tracking_view(props: &TrackingViewProps) -> Html {
    let search = use_state(|| SearchState::Idle);
    let input_ref = use_node_ref();

    let on_track = {
        let search = search.clone();
        let input_ref = input_ref.clone();
        let code = props.record.code.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(input) = input_ref.cast::<HtmlInputElement>() else {
                return;
            };
            // Comparação com trim e caixa alta, igual ao site exportado
            let typed = input.value().trim().to_uppercase();
            let actual = code.trim().to_uppercase();
            search.set(if typed == actual {
                SearchState::Found
            } else {
                SearchState::NotFound
            });
        })
    };

    let record = &props.record;

    html! {
        <>
            <section class="mb-10">
                <h1 class="text-3xl font-bold text-white mb-2">{"Rastreie sua encomenda"}</h1>
                <p class="text-gray-400 mb-6">{"Digite o código de rastreio para acompanhar a entrega."}</p>
                <div class="flex gap-3">
                    <input
                        id="track-input"
                        type="text"
                        placeholder="Ex: BR123456789SP"
                        ref={input_ref}
                        class="flex-1 bg-dark-800 border border-white/10 rounded-xl px-4 py-3 text-white font-mono focus:ring-2 focus:ring-brand-500 outline-none"
                    />
                    <button
                        id="track-btn"
                        onclick={on_track}
                        class="bg-brand-600 hover:bg-brand-500 text-white font-bold px-8 py-3 rounded-xl transition-colors"
                    >
                        {"Rastrear"}
                    </button>
                </div>
            </section>
            {
                match *search {
                    SearchState::Idle => html! {
                        <section id="view-idle" class="text-center text-gray-500 py-16">
                            <p>{"Aguardando código de rastreio…"}</p>
                        </section>
                    },
                    SearchState::NotFound => html! {
                        <section id="view-error" class="text-center py-16">
                            <p class="text-red-400 font-bold">{"Código não encontrado."}</p>
                            <p class="text-gray-500 text-sm mt-2">{"Confira o código e tente novamente."}</p>
                        </section>
                    },
                    SearchState::Found => html! {
                        <section id="view-success">
                            <div class="bg-dark-800 border border-white/10 rounded-2xl p-6 mb-8 grid md:grid-cols-2 gap-4">
                                <div>
                                    <p class="text-xs text-gray-500 uppercase">{"Código"}</p>
                                    <p id="display-code" class="text-white font-mono font-bold">{ record.code.clone() }</p>
                                </div>
                                <div>
                                    <p class="text-xs text-gray-500 uppercase">{"Destinatário"}</p>
                                    <p id="display-recipient" class="text-white">{ record.recipient.clone() }</p>
                                </div>
                                <div>
                                    <p class="text-xs text-gray-500 uppercase">{"Endereço"}</p>
                                    <p id="display-address" class="text-white">{ record.address.clone() }</p>
                                </div>
                                <div>
                                    <p class="text-xs text-gray-500 uppercase">{"CEP"}</p>
                                    <p id="display-postal" class="text-white font-mono">{ record.postal_code.clone() }</p>
                                </div>
                                <div>
                                    <p class="text-xs text-gray-500 uppercase">{"Previsão de Entrega"}</p>
                                    <p id="display-estimated" class="text-brand-400 font-bold">{ record.estimated_delivery.clone() }</p>
                                </div>
                                <div>
                                    <p class="text-xs text-gray-500 uppercase">{"Destino"}</p>
                                    <p id="display-destination" class="text-white">{ record.destination.clone() }</p>
                                </div>
                            </div>
                            <Timeline events={record.events.clone()} />
                        </section>
                    },
                }
            }
        </>
    }
}
