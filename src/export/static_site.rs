//! Renderizador do site estático: gera um `index.html` independente a
//! partir do mesmo modelo de dados da página ao vivo (dois renderizadores,
//! um modelo). Nada de clonar DOM nem remover scripts de framework.

use crate::config::CONFIG;
use crate::icons;
use crate::models::{EventIcon, TrackingEvent, TrackingRecord};
use crate::reducer::QUICK_FILL_PRESETS;

/// Documento HTML completo, pronto para download como `index.html`.
pub fn render_page(record: &TrackingRecord) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"pt-BR\">\n{}\n{}\n</html>",
        render_head(),
        render_body(record)
    )
}

pub fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

// A senha entra em um literal JS de aspas simples
fn escape_js(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('<', "\\x3C")
}

fn render_head() -> String {
    format!(
        r#"<head>
<meta charset="utf-8"/>
<meta name="viewport" content="width=device-width, initial-scale=1"/>
<title>{brand} - Rastreamento de Encomendas</title>
<script src="https://cdn.tailwindcss.com"></script>
<script>{theme}</script>
</head>"#,
        brand = escape_html(&CONFIG.brand_name),
        theme = THEME_CONFIG_JS,
    )
}

fn render_body(record: &TrackingRecord) -> String {
    format!(
        r#"<body class="bg-dark-900 text-gray-200 font-sans min-h-screen">
<header class="border-b border-white/10 bg-dark-800">
  <div class="max-w-5xl mx-auto px-6 py-4 flex items-center justify-between">
    <span class="text-xl font-bold text-white">{brand}</span>
    <button class="admin-toggle-btn text-gray-500 hover:text-white transition-colors" title="Área Restrita">⚙</button>
  </div>
</header>
<main class="max-w-5xl mx-auto px-6 py-10">
{search}
{idle}
{success}
{error}
</main>
{admin}
<script>{runtime}</script>
</body>"#,
        brand = escape_html(&CONFIG.brand_name),
        search = render_search(),
        idle = render_view_idle(),
        success = render_view_success(record),
        error = render_view_error(),
        admin = render_admin_panel(record),
        runtime = runtime_script(),
    )
}

fn render_search() -> String {
    r#"<section class="mb-10">
  <h1 class="text-3xl font-bold text-white mb-2">Rastreie sua encomenda</h1>
  <p class="text-gray-400 mb-6">Digite o código de rastreio para acompanhar a entrega.</p>
  <div class="flex gap-3">
    <input id="track-input" type="text" placeholder="Ex: BR123456789SP"
      class="flex-1 bg-dark-800 border border-white/10 rounded-xl px-4 py-3 text-white font-mono focus:ring-2 focus:ring-brand-500 outline-none"/>
    <button id="track-btn" class="bg-brand-600 hover:bg-brand-500 text-white font-bold px-8 py-3 rounded-xl transition-colors">Rastrear</button>
  </div>
</section>"#
        .to_string()
}

fn render_view_idle() -> String {
    r#"<section id="view-idle" class="text-center text-gray-500 py-16">
  <p>Aguardando código de rastreio…</p>
</section>"#
        .to_string()
}

fn render_view_error() -> String {
    r#"<section id="view-error" class="hidden text-center py-16">
  <p class="text-red-400 font-bold">Código não encontrado.</p>
  <p class="text-gray-500 text-sm mt-2">Confira o código e tente novamente.</p>
</section>"#
        .to_string()
}

fn render_view_success(record: &TrackingRecord) -> String {
    format!(
        r#"<section id="view-success" class="hidden">
  <div class="bg-dark-800 border border-white/10 rounded-2xl p-6 mb-8 grid md:grid-cols-2 gap-4">
    <div>
      <p class="text-xs text-gray-500 uppercase">Código</p>
      <p id="display-code" class="text-white font-mono font-bold">{code}</p>
    </div>
    <div>
      <p class="text-xs text-gray-500 uppercase">Destinatário</p>
      <p id="display-recipient" class="text-white">{recipient}</p>
    </div>
    <div>
      <p class="text-xs text-gray-500 uppercase">Endereço</p>
      <p id="display-address" class="text-white">{address}</p>
    </div>
    <div>
      <p class="text-xs text-gray-500 uppercase">CEP</p>
      <p id="display-postal" class="text-white font-mono">{postal}</p>
    </div>
    <div>
      <p class="text-xs text-gray-500 uppercase">Previsão de Entrega</p>
      <p id="display-estimated" class="text-brand-400 font-bold">{estimated}</p>
    </div>
    <div>
      <p class="text-xs text-gray-500 uppercase">Destino</p>
      <p id="display-destination" class="text-white">{destination}</p>
    </div>
  </div>
  <div id="public-events-list" class="space-y-4">
{events}
  </div>
</section>"#,
        code = escape_html(&record.code),
        recipient = escape_html(&record.recipient),
        address = escape_html(&record.address),
        postal = escape_html(&record.postal_code),
        estimated = escape_html(&record.estimated_delivery),
        destination = escape_html(&record.destination),
        events = record
            .events
            .iter()
            .enumerate()
            .map(|(index, event)| render_public_event(event, &event_key(index)))
            .collect::<Vec<_>>()
            .join("\n"),
    )
}

/// Chave estável compartilhada entre a lista pública e a do admin, para
/// que a exclusão no site exportado remova a entrada correspondente nas
/// duas listas (não "a primeira da lista pública").
fn event_key(index: usize) -> String {
    format!("evt-{}", index)
}

fn render_public_event(event: &TrackingEvent, key: &str) -> String {
    format!(
        r#"<div data-event-key="{key}" class="flex items-start gap-4 bg-dark-800 p-4 rounded-xl border border-white/5">
  <div class="flex items-center justify-center w-10 h-10 rounded-full bg-brand-500 shrink-0">{icon}</div>
  <div class="flex-1">
    <div class="flex justify-between items-center mb-1">
      <span class="font-bold text-white">{location}</span>
      <span class="text-xs text-gray-500 font-mono">{date} - {time}</span>
    </div>
    <p class="text-gray-300 text-sm">{status}</p>
  </div>
</div>"#,
        key = key,
        icon = icons::svg(event.icon, "w-5 h-5 text-white"),
        location = escape_html(&event.location),
        date = escape_html(&event.date),
        time = escape_html(&event.time),
        status = escape_html(&event.status),
    )
}

fn render_admin_event(event: &TrackingEvent, key: &str) -> String {
    format!(
        r#"<div data-event-key="{key}" class="group flex items-start justify-between bg-dark-900 p-3 rounded-lg border border-white/5">
  <div class="flex gap-3">
    <div class="mt-1 p-1.5 rounded-full {badge}">{icon}</div>
    <div>
      <p class="text-white text-sm font-medium">{status}</p>
      <p class="text-gray-500 text-xs">{location} • {date} - {time}</p>
    </div>
  </div>
  <button class="btn-delete-static text-gray-600 hover:text-red-400 p-1">{trash}</button>
</div>"#,
        key = key,
        badge = icons::badge_classes(event.icon),
        icon = icons::svg(event.icon, "w-3 h-3"),
        status = escape_html(&event.status),
        location = escape_html(&event.location),
        date = escape_html(&event.date),
        time = escape_html(&event.time),
        trash = icons::trash_svg("w-4 h-4"),
    )
}

fn render_admin_panel(record: &TrackingRecord) -> String {
    let field_input = |label: &str, value: &str, bind: &str, mono: bool| {
        format!(
            r#"<div>
  <label class="block text-xs text-gray-500 mb-1">{label}</label>
  <input type="text" value="{value}" data-bind="{bind}"
    class="w-full bg-dark-900 border border-white/10 rounded-lg p-3 text-white{mono} focus:ring-1 focus:ring-brand-500 outline-none"/>
</div>"#,
            label = label,
            value = escape_html(value),
            bind = bind,
            mono = if mono { " font-mono" } else { "" },
        )
    };

    let quick_fill_buttons = QUICK_FILL_PRESETS
        .iter()
        .map(|(label, status, icon)| {
            format!(
                r#"<button class="btn-quick-fill bg-brand-500/10 text-brand-300 hover:bg-brand-500/20 border border-brand-500/20 rounded p-2 text-xs font-medium" data-status="{status}" data-icon="{icon}">{label}</button>"#,
                status = escape_html(status),
                icon = icon.as_str(),
                label = escape_html(label),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<div id="admin-panel-root-static" style="display:none" class="fixed inset-y-0 right-0 w-full md:w-[480px] bg-dark-800 border-l border-white/10 shadow-2xl z-[100] overflow-y-auto flex-col">
<div class="p-6">
  <div class="flex items-center justify-between mb-8 border-b border-white/10 pb-6">
    <h2 class="text-xl font-bold text-white">Painel Admin</h2>
    <button id="static-close-btn" class="text-gray-400 hover:text-white">✕</button>
  </div>
  <button id="static-save-btn" class="w-full bg-green-600 hover:bg-green-500 text-white font-bold py-4 rounded-xl mb-8">Salvar Atualização do Site (HTML)</button>
  <div class="space-y-4 mb-8">
    <h3 class="text-sm font-bold text-gray-400 uppercase tracking-wider">Dados do Destinatário</h3>
{f_recipient}
{f_address}
{f_postal}
{f_code}
{f_estimated}
{f_destination}
  </div>
  <div class="space-y-4">
    <h3 class="text-sm font-bold text-gray-400 uppercase tracking-wider">Atualizações de Rastreio</h3>
    <div class="bg-dark-900/50 p-4 rounded-xl border border-white/5 border-dashed">
      <p class="text-xs text-gray-500 mb-2 font-bold uppercase">Adicionar Rota Rápida:</p>
      <div class="grid grid-cols-3 gap-2 mb-3">
{quick_fill}
      </div>
      <input id="input-event-status" type="text" placeholder="Status (ex: Saiu para entrega)"
        class="w-full bg-dark-800 border border-white/10 rounded-lg p-2 text-sm text-white mb-2 outline-none"/>
      <div class="flex gap-2 mb-3">
        <input id="input-event-location" type="text" placeholder="Local (ex: CD São Paulo)"
          class="flex-1 bg-dark-800 border border-white/10 rounded-lg p-2 text-sm text-white outline-none"/>
        <select id="select-event-icon" class="bg-dark-800 border border-white/10 rounded-lg p-2 text-sm text-white outline-none">
          <option value="truck">Caminhão</option>
          <option value="package">Pacote</option>
          <option value="check">Check</option>
          <option value="alert">Alerta</option>
        </select>
      </div>
      <button id="btn-add-event" class="w-full bg-brand-600 hover:bg-brand-500 text-white text-sm font-bold py-2 rounded-lg">+ Adicionar na Linha do Tempo</button>
    </div>
    <div id="admin-events-list" class="space-y-3">
{admin_events}
    </div>
  </div>
</div>
</div>"#,
        f_recipient = field_input("Nome do Destinatário", &record.recipient, "display-recipient", false),
        f_address = field_input("Endereço Completo", &record.address, "display-address", false),
        f_postal = field_input("CEP", &record.postal_code, "display-postal", true),
        f_code = field_input("Código de Rastreio", &record.code, "display-code", true),
        f_estimated = field_input("Previsão de Entrega", &record.estimated_delivery, "display-estimated", false),
        f_destination = field_input("Destino", &record.destination, "display-destination", false),
        quick_fill = quick_fill_buttons,
        admin_events = record
            .events
            .iter()
            .enumerate()
            .map(|(index, event)| render_admin_event(event, &event_key(index)))
            .collect::<Vec<_>>()
            .join("\n"),
    )
}

fn runtime_script() -> String {
    RUNTIME_JS
        .replace("__ADMIN_PASSWORD__", &escape_js(&CONFIG.admin_password))
        .replace("__SVG_TRUCK__", icons::template(EventIcon::Truck))
        .replace("__SVG_PACKAGE__", icons::template(EventIcon::Package))
        .replace("__SVG_CHECK__", icons::template(EventIcon::Check))
        .replace("__SVG_ALERT__", icons::template(EventIcon::Alert))
        .replace("__SVG_TRASH__", &icons::trash_svg("w-4 h-4"))
}

// Mesmo tema injetado no index.html do app ao vivo
const THEME_CONFIG_JS: &str = r#"
tailwind.config = {
  theme: {
    extend: {
      colors: {
        brand: {
          300: '#93c5fd', 400: '#60a5fa', 500: '#3b82f6',
          600: '#2563eb', 700: '#1d4ed8', 900: '#1e3a8a'
        },
        dark: { 900: '#0f172a', 800: '#1e293b', 700: '#334155' }
      },
      fontFamily: { sans: ['Inter', 'sans-serif'] }
    }
  }
}
"#;

// Runtime do site exportado. Reimplementa em script puro o subconjunto:
// gate por prompt, busca por código, adicionar/excluir eventos nas duas
// listas, rota rápida, binding [data-bind] e reexportação do HTML.
const RUNTIME_JS: &str = r#"
document.addEventListener('DOMContentLoaded', () => {
  const panel = document.getElementById('admin-panel-root-static');

  const ICONS = {
    truck: `__SVG_TRUCK__`,
    package: `__SVG_PACKAGE__`,
    check: `__SVG_CHECK__`,
    alert: `__SVG_ALERT__`
  };
  function getIconSvg(type, classes) {
    const tpl = ICONS[type] || ICONS.truck;
    return tpl.split('__CLASSES__').join(classes);
  }

  // --- Gate do admin (prompt) ---
  document.querySelectorAll('.admin-toggle-btn').forEach(btn => {
    btn.addEventListener('click', (e) => {
      e.preventDefault();
      e.stopPropagation();
      const pwd = prompt('Senha de Administrador:');
      if (pwd === '__ADMIN_PASSWORD__') {
        if (panel) panel.style.display = 'flex';
      } else if (pwd !== null) {
        alert('Senha incorreta');
      }
    });
  });

  const closeBtn = document.getElementById('static-close-btn');
  if (closeBtn) {
    closeBtn.addEventListener('click', () => {
      if (panel) panel.style.display = 'none';
    });
  }

  // --- Busca por código ---
  const trackBtn = document.getElementById('track-btn');
  if (trackBtn) {
    trackBtn.addEventListener('click', () => {
      const inputEl = document.getElementById('track-input');
      const displayCodeEl = document.getElementById('display-code');
      const views = ['view-idle', 'view-success', 'view-error']
        .map(id => document.getElementById(id));
      if (!inputEl || !displayCodeEl) return;

      const inputCode = inputEl.value.trim().toUpperCase();
      // textContent: innerText de um elemento ainda oculto vem vazio
      const actualCode = displayCodeEl.textContent.trim().toUpperCase();

      views.forEach(v => { if (v) v.classList.add('hidden'); });
      const target = inputCode === actualCode ? views[1] : views[2];
      if (target) target.classList.remove('hidden');
    });
  }

  // --- Exclusão: remove a entrada com a MESMA chave nas duas listas ---
  function wireDelete(btn) {
    btn.addEventListener('click', function () {
      const entry = this.closest('[data-event-key]');
      if (!entry) return;
      const key = entry.getAttribute('data-event-key');
      document.querySelectorAll('[data-event-key="' + key + '"]')
        .forEach(el => el.remove());
    });
  }
  document.querySelectorAll('#admin-events-list .btn-delete-static').forEach(wireDelete);

  // --- Adicionar evento nas duas listas ---
  const btnAddEvent = document.getElementById('btn-add-event');
  if (btnAddEvent) {
    btnAddEvent.addEventListener('click', () => {
      const statusEl = document.getElementById('input-event-status');
      const locationEl = document.getElementById('input-event-location');
      const iconEl = document.getElementById('select-event-icon');
      if (!statusEl || !locationEl || !statusEl.value || !locationEl.value) return;

      const status = statusEl.value;
      const location = locationEl.value;
      const icon = iconEl ? iconEl.value : 'truck';
      const now = new Date();
      const time = String(now.getHours()).padStart(2, '0') + ':' +
                   String(now.getMinutes()).padStart(2, '0');
      const date = 'Hoje';
      const key = 'evt-' + Date.now();

      const publicHtml = `
        <div data-event-key="${key}" class="flex items-start gap-4 bg-dark-800 p-4 rounded-xl border border-white/5">
          <div class="flex items-center justify-center w-10 h-10 rounded-full bg-brand-500 shrink-0">${getIconSvg(icon, 'w-5 h-5 text-white')}</div>
          <div class="flex-1">
            <div class="flex justify-between items-center mb-1">
              <span class="font-bold text-white">${location}</span>
              <span class="text-xs text-gray-500 font-mono">${date} - ${time}</span>
            </div>
            <p class="text-gray-300 text-sm">${status}</p>
          </div>
        </div>`;
      const publicList = document.getElementById('public-events-list');
      if (publicList) publicList.insertAdjacentHTML('afterbegin', publicHtml);

      const adminHtml = `
        <div data-event-key="${key}" class="group flex items-start justify-between bg-dark-900 p-3 rounded-lg border border-white/5">
          <div class="flex gap-3">
            <div class="mt-1 p-1.5 rounded-full bg-brand-500/20 text-brand-500">${getIconSvg(icon, 'w-3 h-3')}</div>
            <div>
              <p class="text-white text-sm font-medium">${status}</p>
              <p class="text-gray-500 text-xs">${location} • ${date} - ${time}</p>
            </div>
          </div>
          <button class="btn-delete-static text-gray-600 hover:text-red-400 p-1">__SVG_TRASH__</button>
        </div>`;
      const adminList = document.getElementById('admin-events-list');
      if (adminList) {
        adminList.insertAdjacentHTML('afterbegin', adminHtml);
        const newBtn = adminList.querySelector('[data-event-key="' + key + '"] .btn-delete-static');
        if (newBtn) wireDelete(newBtn);
      }

      statusEl.value = '';
      // mantém o local preenchido por conveniência
    });
  }

  // --- Rota rápida ---
  document.querySelectorAll('.btn-quick-fill').forEach(btn => {
    btn.addEventListener('click', function () {
      const statusEl = document.getElementById('input-event-status');
      const locationEl = document.getElementById('input-event-location');
      const iconEl = document.getElementById('select-event-icon');
      if (statusEl) statusEl.value = this.getAttribute('data-status') || '';
      if (iconEl) iconEl.value = this.getAttribute('data-icon') || 'truck';
      if (locationEl && !locationEl.value) {
        const dest = document.getElementById('display-destination');
        locationEl.value = dest ? dest.textContent.trim() : '';
      }
    });
  });

  // --- Binding ao vivo dos campos de texto ---
  document.querySelectorAll('[data-bind]').forEach(input => {
    input.addEventListener('input', (e) => {
      const targetEl = document.getElementById(e.target.getAttribute('data-bind'));
      if (targetEl) targetEl.innerText = e.target.value;
    });
  });

  // --- Reexportar o HTML atualizado ---
  const saveBtn = document.getElementById('static-save-btn');
  if (saveBtn) {
    saveBtn.addEventListener('click', (e) => {
      e.preventDefault();
      if (panel) panel.style.display = 'none';

      const html = '<!DOCTYPE html>\n' + document.documentElement.outerHTML;
      const blob = new Blob([html], { type: 'text/html' });
      const url = URL.createObjectURL(blob);
      const a = document.createElement('a');
      a.href = url;
      a.download = 'index.html';
      document.body.appendChild(a);
      a.click();
      document.body.removeChild(a);
      URL.revokeObjectURL(url);

      if (panel) panel.style.display = 'flex';
    });
  }
});
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::demo;

    #[test]
    fn page_starts_with_doctype() {
        let html = render_page(&demo::seed_record());
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"pt-BR\">"));
        assert!(html.ends_with("</html>"));
    }

    #[test]
    fn record_fields_are_templated_and_escaped() {
        let mut record = demo::seed_record();
        record.recipient = "<b>João</b> & Cia".to_string();
        let html = render_page(&record);
        assert!(html.contains("&lt;b&gt;João&lt;/b&gt; &amp; Cia"));
        assert!(!html.contains("<b>João</b>"));
        assert!(html.contains(&format!(
            "id=\"display-code\" class=\"text-white font-mono font-bold\">{}",
            record.code
        )));
    }

    #[test]
    fn admin_panel_is_hidden_and_renamed() {
        let html = render_page(&demo::seed_record());
        assert!(html.contains("id=\"admin-panel-root-static\" style=\"display:none\""));
    }

    #[test]
    fn runtime_script_carries_the_credential() {
        let html = render_page(&demo::seed_record());
        assert!(html.contains(&format!("pwd === '{}'", CONFIG.admin_password)));
    }

    #[test]
    fn every_event_has_a_shared_key_in_both_lists() {
        let record = demo::seed_record();
        let html = render_page(&record);
        for index in 0..record.events.len() {
            let needle = format!("data-event-key=\"evt-{}\"", index);
            assert_eq!(html.matches(&needle).count(), 2, "chave {} fora das duas listas", index);
        }
    }

    #[test]
    fn no_placeholder_survives_rendering() {
        let html = render_page(&demo::seed_record());
        assert!(!html.contains("__ADMIN_PASSWORD__"));
        assert!(!html.contains("__SVG_"));
    }

    #[test]
    fn stylesheet_loader_and_theme_are_in_the_head() {
        let html = render_page(&demo::seed_record());
        assert!(html.contains("https://cdn.tailwindcss.com"));
        assert!(html.contains("tailwind.config"));
    }

    #[test]
    fn empty_timeline_renders_empty_lists() {
        let mut record = demo::seed_record();
        record.events.clear();
        let html = render_page(&record);
        assert!(html.contains("id=\"public-events-list\""));
        assert!(html.contains("id=\"admin-events-list\""));
        assert!(!html.contains("data-event-key=\"evt-0\""));
    }
}
