use crate::models::EventIcon;

// SVGs do lucide, compartilhados pelos dois renderizadores (Yew e site
// estático) e injetados no script do export para o template de novos eventos.
// `__CLASSES__` é substituído na hora de renderizar.

const TRUCK: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="lucide lucide-truck __CLASSES__"><path d="M14 18V6a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2v11a1 1 0 0 0 1 1h2"/><path d="M15 18H9"/><path d="M19 18h2a1 1 0 0 0 1-1v-3.65a1 1 0 0 0-.22-.624l-3.48-4.35A1 1 0 0 0 17.52 8H14"/><circle cx="17" cy="18" r="2"/><circle cx="7" cy="18" r="2"/></svg>"#;

const PACKAGE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="lucide lucide-package __CLASSES__"><path d="m7.5 4.27 9 5.15"/><path d="M21 8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16Z"/><path d="m3.3 7 8.7 5 8.7-5"/><path d="M12 22v-9"/></svg>"#;

const CHECK: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="lucide lucide-check-circle2 __CLASSES__"><circle cx="12" cy="12" r="10"/><path d="m9 12 2 2 4-4"/></svg>"#;

const ALERT: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="lucide lucide-alert-circle __CLASSES__"><circle cx="12" cy="12" r="10"/><line x1="12" x2="12" y1="8" y2="12"/><line x1="12" x2="12.01" y1="16" y2="16"/></svg>"#;

const TRASH: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="lucide lucide-trash2 __CLASSES__"><path d="M3 6h18"/><path d="M19 6v14c0 1-1 2-2 2H7c-1 0-2-1-2-2V6"/><path d="M8 6V4c0-1 1-2 2-2h4c1 0 2 1 2 2v2"/><line x1="10" x2="10" y1="11" y2="17"/><line x1="14" x2="14" y1="11" y2="17"/></svg>"#;

pub fn template(icon: EventIcon) -> &'static str {
    match icon {
        EventIcon::Truck => TRUCK,
        EventIcon::Package => PACKAGE,
        EventIcon::Check => CHECK,
        EventIcon::Alert => ALERT,
    }
}

pub fn svg(icon: EventIcon, classes: &str) -> String {
    template(icon).replace("__CLASSES__", classes)
}

pub fn trash_svg(classes: &str) -> String {
    TRASH.replace("__CLASSES__", classes)
}

/// Classe de cor do círculo do ícone na lista do admin
pub fn badge_classes(icon: EventIcon) -> &'static str {
    match icon {
        EventIcon::Check => "bg-green-500/20 text-green-500",
        EventIcon::Alert => "bg-red-500/20 text-red-500",
        _ => "bg-brand-500/20 text-brand-500",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_substitutes_classes() {
        let markup = svg(EventIcon::Truck, "text-white w-4 h-4");
        assert!(markup.contains("lucide-truck text-white w-4 h-4"));
        assert!(!markup.contains("__CLASSES__"));
    }

    #[test]
    fn every_icon_has_a_template() {
        for icon in [EventIcon::Truck, EventIcon::Package, EventIcon::Check, EventIcon::Alert] {
            assert!(template(icon).starts_with("<svg"));
        }
    }
}
