use yew::prelude::*;

use super::{AdminPanel, TrackingView};
use crate::config::CONFIG;
use crate::models::demo;
use crate::reducer::{self, Edit};

#[function_component(App)]
pub fn app() -> Html {
    // Registro único da sessão; toda edição passa pelo redutor e troca o
    // registro inteiro (clone-and-replace, último write vence).
    let record = use_state(demo::seed_record);
    let admin_open = use_state(|| false);

    let on_edit = {
        let record = record.clone();
        Callback::from(move |edit: Edit| {
            record.set(reducer::apply(&record, edit));
        })
    };

    let open_admin = {
        let admin_open = admin_open.clone();
        Callback::from(move |_: MouseEvent| admin_open.set(true))
    };

    let close_admin = {
        let admin_open = admin_open.clone();
        Callback::from(move |_| admin_open.set(false))
    };

    html! {
        <>
            <header class="border-b border-white/10 bg-dark-800">
                <div class="max-w-5xl mx-auto px-6 py-4 flex items-center justify-between">
                    <span class="text-xl font-bold text-white">{ CONFIG.brand_name.clone() }</span>
                    <button
                        class="admin-toggle-btn text-gray-500 hover:text-white transition-colors"
                        title="Área Restrita"
                        onclick={open_admin}
                    >
                        {"⚙"}
                    </button>
                </div>
            </header>
            <main class="max-w-5xl mx-auto px-6 py-10">
                <TrackingView record={(*record).clone()} />
            </main>
            <AdminPanel
                record={(*record).clone()}
                open={*admin_open}
                on_edit={on_edit}
                on_close={close_admin}
            />
        </>
    }
}
