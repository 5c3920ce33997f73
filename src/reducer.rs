use crate::models::{EventIcon, TrackingEvent, TrackingRecord};

/// Marcador de data usado em eventos recém-criados
pub const TODAY_LABEL: &str = "Hoje";

/// Presets de rota rápida: (rótulo do botão, status, ícone)
pub const QUICK_FILL_PRESETS: [(&str, &str, EventIcon); 3] = [
    ("Em Trânsito", "Objeto em trânsito", EventIcon::Truck),
    ("Saiu p/ Entrega", "Saiu para entrega", EventIcon::Truck),
    ("Entregue", "Objeto entregue", EventIcon::Check),
];

/// Uma edição do registro. Toda mutação passa por aqui; a camada de UI
/// apenas despacha valores `Edit`.
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    SetCode(String),
    SetRecipient(String),
    SetAddress(String),
    SetPostalCode(String),
    SetEstimatedDelivery(String),
    SetDestination(String),
    AddEvent(TrackingEvent),
    DeleteEvent(usize),
    ClearEvents,
    Replace(TrackingRecord),
}

/// Redutor puro: clona o registro e aplica exatamente uma edição.
/// Nunca muta o registro recebido.
pub fn apply(record: &TrackingRecord, edit: Edit) -> TrackingRecord {
    let mut next = record.clone();
    match edit {
        Edit::SetCode(value) => next.code = value,
        Edit::SetRecipient(value) => next.recipient = value,
        Edit::SetAddress(value) => next.address = value,
        Edit::SetPostalCode(value) => next.postal_code = value,
        Edit::SetEstimatedDelivery(value) => next.estimated_delivery = value,
        Edit::SetDestination(value) => next.destination = value,
        // Mais recente primeiro: inserção sempre no índice 0
        Edit::AddEvent(event) => next.events.insert(0, event),
        Edit::DeleteEvent(index) => {
            if index < next.events.len() {
                next.events.remove(index);
            }
        }
        Edit::ClearEvents => next.events.clear(),
        Edit::Replace(record) => next = record,
    }
    next
}

/// Rascunho de um novo evento no compositor do painel admin
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventDraft {
    pub status: String,
    pub location: String,
    pub icon: EventIcon,
}

impl EventDraft {
    /// Preenche status/ícone com o preset; sugere o destino do registro
    /// como local quando o campo ainda está vazio.
    pub fn quick_fill(&self, status: &str, icon: EventIcon, destination: &str) -> Self {
        Self {
            status: status.to_string(),
            icon,
            location: if self.location.is_empty() {
                destination.to_string()
            } else {
                self.location.clone()
            },
        }
    }

    /// Constrói o evento carimbado com data/hora. Retorna `None` quando
    /// status ou local estão vazios (validação silenciosa).
    pub fn build(&self, date: &str, time: &str) -> Option<TrackingEvent> {
        if self.status.is_empty() || self.location.is_empty() {
            return None;
        }
        Some(TrackingEvent::new(
            date,
            time,
            &self.location,
            &self.status,
            self.icon,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::demo;

    #[test]
    fn field_edit_replaces_exactly_one_field() {
        let before = demo::seed_record();
        let after = apply(&before, Edit::SetRecipient("Maria Souza".to_string()));

        assert_eq!(after.recipient, "Maria Souza");
        assert_eq!(after.code, before.code);
        assert_eq!(after.address, before.address);
        assert_eq!(after.postal_code, before.postal_code);
        assert_eq!(after.estimated_delivery, before.estimated_delivery);
        assert_eq!(after.destination, before.destination);
        assert_eq!(after.events, before.events);
    }

    #[test]
    fn apply_never_mutates_the_input() {
        let before = demo::seed_record();
        let snapshot = before.clone();
        let _ = apply(&before, Edit::ClearEvents);
        assert_eq!(before, snapshot);
    }

    #[test]
    fn empty_field_values_are_accepted() {
        let before = demo::seed_record();
        let after = apply(&before, Edit::SetPostalCode(String::new()));
        assert!(after.postal_code.is_empty());
    }

    #[test]
    fn add_event_prepends() {
        let before = demo::seed_record();
        let event = TrackingEvent::new("Hoje", "10:30", "CD SP", "Saiu para entrega", EventIcon::Truck);
        let after = apply(&before, Edit::AddEvent(event.clone()));

        assert_eq!(after.events.len(), before.events.len() + 1);
        assert_eq!(after.events[0], event);
        assert_eq!(&after.events[1..], &before.events[..]);
    }

    #[test]
    fn delete_event_preserves_relative_order() {
        let before = demo::seed_record();
        let after = apply(&before, Edit::DeleteEvent(1));

        assert_eq!(after.events.len(), before.events.len() - 1);
        assert_eq!(after.events[0], before.events[0]);
        assert_eq!(after.events[1], before.events[2]);
    }

    #[test]
    fn delete_out_of_range_is_a_noop() {
        let before = demo::seed_record();
        let after = apply(&before, Edit::DeleteEvent(99));
        assert_eq!(after, before);
    }

    #[test]
    fn clear_events_empties_the_list() {
        let before = demo::seed_record();
        let after = apply(&before, Edit::ClearEvents);
        assert!(after.events.is_empty());
        assert_eq!(after.code, before.code);
    }

    #[test]
    fn replace_swaps_the_whole_record() {
        let before = demo::seed_record();
        let other = TrackingRecord {
            code: "XY987".to_string(),
            ..Default::default()
        };
        let after = apply(&before, Edit::Replace(other.clone()));
        assert_eq!(after, other);
    }

    #[test]
    fn draft_with_empty_status_builds_nothing() {
        let draft = EventDraft {
            status: String::new(),
            location: "CD SP".to_string(),
            icon: EventIcon::Truck,
        };
        assert!(draft.build("Hoje", "10:00").is_none());
    }

    #[test]
    fn draft_with_empty_location_builds_nothing() {
        let draft = EventDraft {
            status: "Saiu para entrega".to_string(),
            location: String::new(),
            icon: EventIcon::Truck,
        };
        assert!(draft.build("Hoje", "10:00").is_none());
    }

    #[test]
    fn quick_fill_suggests_destination_when_location_empty() {
        let draft = EventDraft::default();
        let filled = draft.quick_fill("Objeto entregue", EventIcon::Check, "São Paulo - SP");
        assert_eq!(filled.status, "Objeto entregue");
        assert_eq!(filled.icon, EventIcon::Check);
        assert_eq!(filled.location, "São Paulo - SP");
    }

    #[test]
    fn quick_fill_keeps_existing_location() {
        let draft = EventDraft {
            status: String::new(),
            location: "CD Campinas".to_string(),
            icon: EventIcon::Truck,
        };
        let filled = draft.quick_fill("Saiu para entrega", EventIcon::Truck, "São Paulo - SP");
        assert_eq!(filled.location, "CD Campinas");
    }

    // Cenário: registro vazio -> Add("Saiu para entrega", "CD SP", truck)
    #[test]
    fn add_event_scenario() {
        let record = TrackingRecord {
            code: "ABC123".to_string(),
            ..Default::default()
        };
        let draft = EventDraft {
            status: "Saiu para entrega".to_string(),
            location: "CD SP".to_string(),
            icon: EventIcon::Truck,
        };
        let event = draft.build(TODAY_LABEL, "14:27").unwrap();
        let after = apply(&record, Edit::AddEvent(event));

        assert_eq!(after.events.len(), 1);
        let added = &after.events[0];
        assert_eq!(added.status, "Saiu para entrega");
        assert_eq!(added.location, "CD SP");
        assert_eq!(added.icon, EventIcon::Truck);
        assert_eq!(added.date, "Hoje");
        assert_eq!(added.time, "14:27");
    }
}
