use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{FileReader, HtmlInputElement, HtmlSelectElement, ProgressEvent};
use yew::prelude::*;
use yew::virtual_dom::AttrValue;

use crate::config::{self, CONFIG};
use crate::export::{backup, static_site};
use crate::gate::AccessGate;
use crate::models::{EventIcon, TrackingRecord};
use crate::reducer::{Edit, EventDraft, QUICK_FILL_PRESETS, TODAY_LABEL};
use crate::utils;

#[derive(Properties, PartialEq)]
pub struct AdminPanelProps {
    pub record: TrackingRecord,
    pub open: bool,
    pub on_edit: Callback<Edit>,
    pub on_close: Callback<()>,
}

/// Painel administrativo: gate de senha, edição dos campos do registro,
/// compositor de eventos e exportações (site estático + backup JSON).
#[function_component(AdminPanel)]
pub fn admin_panel(props: &AdminPanelProps) -> Html {
    let gate = use_state(AccessGate::default);
    let password_ref = use_node_ref();
    let draft = use_state(EventDraft::default);

    if !props.open {
        return html! {};
    }

    if !gate.is_unlocked() {
        let on_login = {
            let gate = gate.clone();
            let password_ref = password_ref.clone();
            Callback::from(move |e: SubmitEvent| {
                e.prevent_default();
                let Some(input) = password_ref.cast::<HtmlInputElement>() else {
                    return;
                };
                let next = gate.submit(&input.value(), config::credential_matches);
                if next.is_unlocked() {
                    input.set_value("");
                }
                gate.set(next);
            })
        };

        return html! {
            <div id="admin-panel-root" class="fixed inset-y-0 right-0 w-full md:w-[480px] bg-dark-800 border-l border-white/10 shadow-2xl z-[100] flex flex-col">
                <div class="p-6 border-b border-white/10 flex justify-between items-center">
                    <h2 class="text-xl font-bold text-white">{"Acesso Restrito"}</h2>
                    <button
                        class="text-gray-400 hover:text-white"
                        onclick={props.on_close.reform(|_: MouseEvent| ())}
                    >
                        {"Fechar"}
                    </button>
                </div>
                <div class="flex-1 flex flex-col items-center justify-center p-8">
                    <div class="bg-dark-900 p-8 rounded-2xl border border-white/5 w-full max-w-sm shadow-xl">
                        <h3 class="text-center text-white font-bold text-lg mb-2">{"Área Administrativa"}</h3>
                        <p class="text-center text-gray-400 text-sm mb-6">
                            {"Digite a senha de administrador para gerenciar o rastreamento."}
                        </p>
                        <form onsubmit={on_login} class="space-y-4">
                            <input
                                type="password"
                                placeholder="Senha de acesso"
                                ref={password_ref}
                                class="w-full bg-dark-800 border border-white/10 rounded-xl px-4 py-3 text-white focus:ring-2 focus:ring-brand-500 outline-none"
                            />
                            if gate.has_error() {
                                <div class="text-red-400 text-sm bg-red-400/10 p-3 rounded-lg">
                                    {"Senha incorreta"}
                                </div>
                            }
                            <button
                                type="submit"
                                class="w-full bg-brand-600 hover:bg-brand-500 text-white font-bold py-3 rounded-xl"
                            >
                                {"Entrar"}
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        };
    }

    let record = props.record.clone();

    // Um campo de texto -> uma edição; sem validação
    let edit_field = {
        let on_edit = props.on_edit.clone();
        move |make: fn(String) -> Edit| {
            let on_edit = on_edit.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                on_edit.emit(make(input.value()));
            })
        }
    };

    let on_draft_status = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(EventDraft {
                status: input.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_draft_location = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(EventDraft {
                location: input.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_draft_icon = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            draft.set(EventDraft {
                icon: EventIcon::parse(&select.value()),
                ..(*draft).clone()
            });
        })
    };

    let on_add_event = {
        let draft = draft.clone();
        let on_edit = props.on_edit.clone();
        Callback::from(move |_: MouseEvent| {
            // validação silenciosa: rascunho incompleto não faz nada
            if let Some(event) = draft.build(TODAY_LABEL, &utils::now_hhmm()) {
                on_edit.emit(Edit::AddEvent(event));
                draft.set(EventDraft::default());
            }
        })
    };

    let on_clear_all = {
        let on_edit = props.on_edit.clone();
        Callback::from(move |_: MouseEvent| {
            if confirm("Tem certeza que deseja apagar todo o histórico de rastreio?") {
                on_edit.emit(Edit::ClearEvents);
            }
        })
    };

    let on_download_static = {
        let record = record.clone();
        Callback::from(move |_: MouseEvent| {
            let html = static_site::render_page(&record);
            if let Err(err) = utils::trigger_download(
                &CONFIG.static_export_filename,
                "text/html",
                &html,
            ) {
                log::error!("❌ Falha ao exportar site estático: {:?}", err);
            }
        })
    };

    let on_download_backup = {
        let record = record.clone();
        Callback::from(move |_: MouseEvent| {
            let json = backup::to_json(&record);
            let filename = backup::backup_filename(&record);
            if let Err(err) = utils::trigger_download(&filename, "application/json", &json) {
                log::error!("❌ Falha ao exportar backup: {:?}", err);
            }
        })
    };

    let on_import_backup = {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            // limpa o input para permitir reimportar o mesmo arquivo
            input.set_value("");
            if let Err(err) = read_backup_file(&file, on_edit.clone()) {
                log::error!("❌ Erro lendo arquivo de backup: {:?}", err);
            }
        })
    };

    html! {
        <div id="admin-panel-root" class="fixed inset-y-0 right-0 w-full md:w-[480px] bg-dark-800 border-l border-white/10 shadow-2xl z-[100] overflow-y-auto flex flex-col">
            <div class="p-6 flex-1">
                <div class="flex items-center justify-between mb-8 border-b border-white/10 pb-6">
                    <h2 class="text-xl font-bold text-white">{"Painel Admin"}</h2>
                    <button
                        class="text-gray-400 hover:text-white"
                        onclick={props.on_close.reform(|_: MouseEvent| ())}
                    >
                        {"✕"}
                    </button>
                </div>

                // Exportações
                <div class="bg-gradient-to-r from-brand-900/50 to-dark-900 border border-brand-500/20 rounded-xl p-5 mb-8">
                    <h3 class="text-white font-bold text-sm uppercase mb-3">{"Exportar para Hospedagem"}</h3>
                    <button
                        onclick={on_download_static}
                        class="w-full bg-green-600 hover:bg-green-500 text-white font-bold py-4 rounded-xl mb-3"
                    >
                        {"Salvar Atualização do Site (HTML)"}
                    </button>
                    <div class="grid grid-cols-2 gap-3 border-t border-white/10 pt-4">
                        <button
                            onclick={on_download_backup}
                            class="bg-dark-800 text-gray-300 border border-white/10 font-bold py-2.5 rounded-lg text-xs hover:bg-dark-700"
                        >
                            {"Backup Config (.json)"}
                        </button>
                        <label class="bg-dark-800 text-gray-300 border border-white/10 font-bold py-2.5 rounded-lg text-xs hover:bg-dark-700 text-center cursor-pointer">
                            {"Importar Backup"}
                            <input type="file" class="hidden" accept=".json" onchange={on_import_backup} />
                        </label>
                    </div>
                </div>

                // Dados da encomenda
                <div class="space-y-4 mb-8">
                    <h3 class="text-sm font-bold text-gray-400 uppercase tracking-wider">{"Dados do Destinatário"}</h3>
                    { field_input("Nome do Destinatário", &record.recipient, "display-recipient", edit_field(Edit::SetRecipient)) }
                    { field_input("Endereço Completo", &record.address, "display-address", edit_field(Edit::SetAddress)) }
                    <div class="grid grid-cols-2 gap-4">
                        { field_input("CEP", &record.postal_code, "display-postal", edit_field(Edit::SetPostalCode)) }
                        { field_input("Código de Rastreio", &record.code, "display-code", edit_field(Edit::SetCode)) }
                    </div>
                    { field_input("Previsão de Entrega", &record.estimated_delivery, "display-estimated", edit_field(Edit::SetEstimatedDelivery)) }
                    { field_input("Destino", &record.destination, "display-destination", edit_field(Edit::SetDestination)) }
                </div>

                // Compositor de eventos
                <div class="space-y-4">
                    <div class="flex items-center justify-between">
                        <h3 class="text-sm font-bold text-gray-400 uppercase tracking-wider">{"Atualizações de Rastreio"}</h3>
                        <button
                            onclick={on_clear_all}
                            class="text-xs text-red-400 hover:text-red-300"
                        >
                            {"Limpar"}
                        </button>
                    </div>

                    <div class="bg-dark-900/50 p-4 rounded-xl border border-white/5 border-dashed">
                        <p class="text-xs text-gray-500 mb-2 font-bold uppercase">{"Adicionar Rota Rápida:"}</p>
                        <div class="grid grid-cols-3 gap-2 mb-3">
                            { for QUICK_FILL_PRESETS.iter().map(|(label, status, icon)| {
                                let icon = *icon;
                                let status_attr = status.to_string();
                                let on_quick_fill = {
                                    let draft = draft.clone();
                                    let destination = record.destination.clone();
                                    let status = status.to_string();
                                    Callback::from(move |_: MouseEvent| {
                                        draft.set(draft.quick_fill(&status, icon, &destination));
                                    })
                                };
                                html! {
                                    <button
                                        class="btn-quick-fill bg-brand-500/10 text-brand-300 hover:bg-brand-500/20 border border-brand-500/20 rounded p-2 text-xs font-medium"
                                        data-status={status_attr}
                                        data-icon={icon.as_str()}
                                        onclick={on_quick_fill}
                                    >
                                        { *label }
                                    </button>
                                }
                            })}
                        </div>
                        <input
                            id="input-event-status"
                            type="text"
                            placeholder="Status (ex: Saiu para entrega)"
                            value={draft.status.clone()}
                            oninput={on_draft_status}
                            class="w-full bg-dark-800 border border-white/10 rounded-lg p-2 text-sm text-white mb-2 outline-none"
                        />
                        <div class="flex gap-2 mb-3">
                            <input
                                id="input-event-location"
                                type="text"
                                placeholder="Local (ex: CD São Paulo)"
                                value={draft.location.clone()}
                                oninput={on_draft_location}
                                class="flex-1 bg-dark-800 border border-white/10 rounded-lg p-2 text-sm text-white outline-none"
                            />
                            <select
                                id="select-event-icon"
                                onchange={on_draft_icon}
                                class="bg-dark-800 border border-white/10 rounded-lg p-2 text-sm text-white outline-none"
                            >
                                <option value="truck" selected={draft.icon == EventIcon::Truck}>{"Caminhão"}</option>
                                <option value="package" selected={draft.icon == EventIcon::Package}>{"Pacote"}</option>
                                <option value="check" selected={draft.icon == EventIcon::Check}>{"Check"}</option>
                                <option value="alert" selected={draft.icon == EventIcon::Alert}>{"Alerta"}</option>
                            </select>
                        </div>
                        <button
                            id="btn-add-event"
                            onclick={on_add_event}
                            class="w-full bg-brand-600 hover:bg-brand-500 text-white text-sm font-bold py-2 rounded-lg"
                        >
                            {"+ Adicionar na Linha do Tempo"}
                        </button>
                    </div>

                    // Lista de eventos com exclusão por índice, sem confirmação
                    <div id="admin-events-list" class="space-y-3">
                        { for record.events.iter().enumerate().map(|(index, event)| {
                            let on_edit = props.on_edit.clone();
                            let icon = Html::from_html_unchecked(AttrValue::from(
                                crate::icons::svg(event.icon, "w-3 h-3"),
                            ));
                            html! {
                                <div class="group flex items-start justify-between bg-dark-900 p-3 rounded-lg border border-white/5">
                                    <div class="flex gap-3">
                                        <div class={classes!("mt-1", "p-1.5", "rounded-full", crate::icons::badge_classes(event.icon))}>
                                            { icon }
                                        </div>
                                        <div>
                                            <p class="text-white text-sm font-medium">{ event.status.clone() }</p>
                                            <p class="text-gray-500 text-xs">
                                                { format!("{} • {} - {}", event.location, event.date, event.time) }
                                            </p>
                                        </div>
                                    </div>
                                    <button
                                        class="text-gray-600 hover:text-red-400 p-1 opacity-0 group-hover:opacity-100 transition-all"
                                        onclick={Callback::from(move |_: MouseEvent| {
                                            on_edit.emit(Edit::DeleteEvent(index));
                                        })}
                                    >
                                        {"🗑"}
                                    </button>
                                </div>
                            }
                        })}
                    </div>
                </div>
            </div>
        </div>
    }
}

fn field_input(label: &str, value: &str, bind: &str, oninput: Callback<InputEvent>) -> Html {
    html! {
        <div>
            <label class="block text-xs text-gray-500 mb-1">{ label.to_string() }</label>
            <input
                type="text"
                value={value.to_string()}
                data-bind={bind.to_string()}
                oninput={oninput}
                class="w-full bg-dark-900 border border-white/10 rounded-lg p-3 text-white focus:ring-1 focus:ring-brand-500 outline-none"
            />
        </div>
    }
}

/// Leitura assíncrona do arquivo de backup; o resultado chega via callback
/// do FileReader. Sem cancelamento nem timeout: se o usuário editar antes
/// do onload, o último write vence (substituição integral do registro).
fn read_backup_file(file: &web_sys::File, on_edit: Callback<Edit>) -> Result<(), JsValue> {
    let reader = FileReader::new()?;
    let reader_handle = reader.clone();

    let onload = Closure::wrap(Box::new(move |_: ProgressEvent| {
        let Ok(result) = reader_handle.result() else {
            return;
        };
        let Some(text) = result.as_string() else {
            return;
        };
        match backup::parse(&text) {
            Ok(record) => {
                log::info!("📦 Backup restaurado: {}", record.code);
                on_edit.emit(Edit::Replace(record));
                alert("Backup restaurado com sucesso!");
            }
            Err(err) => {
                log::warn!("⚠️ Backup rejeitado: {:?}", err);
                alert(err.user_message());
            }
        }
    }) as Box<dyn FnMut(ProgressEvent)>);

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();
    reader.read_as_text(file)
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}
