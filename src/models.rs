use serde::{Deserialize, Serialize};

/// Ícone de um evento da linha do tempo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventIcon {
    #[default]
    Truck,
    Package,
    Check,
    Alert,
}

impl EventIcon {
    pub fn parse(value: &str) -> Self {
        match value {
            "package" => EventIcon::Package,
            "check" => EventIcon::Check,
            "alert" => EventIcon::Alert,
            _ => EventIcon::Truck,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventIcon::Truck => "truck",
            EventIcon::Package => "package",
            EventIcon::Check => "check",
            EventIcon::Alert => "alert",
        }
    }
}

/// Uma entrada da linha do tempo de rastreio. Sem campo de identidade:
/// a posição na lista é a identidade (exclusão e exibição por índice).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrackingEvent {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub icon: EventIcon,
}

/// Dados da encomenda + linha do tempo. `events` em ordem de exibição,
/// mais recente primeiro (garantido pela posição de inserção, não por
/// comparação de timestamp).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingRecord {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub recipient: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub estimated_delivery: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub events: Vec<TrackingEvent>,
}

impl TrackingEvent {
    pub fn new(date: &str, time: &str, location: &str, status: &str, icon: EventIcon) -> Self {
        Self {
            date: date.to_string(),
            time: time.to_string(),
            location: location.to_string(),
            status: status.to_string(),
            icon,
        }
    }
}

/// Dados iniciais da sessão
pub mod demo {
    use super::{EventIcon, TrackingEvent, TrackingRecord};

    pub fn seed_record() -> TrackingRecord {
        TrackingRecord {
            code: "BR539842715SP".to_string(),
            recipient: "João Pereira da Silva".to_string(),
            address: "Rua das Acácias, 128 - Jardim Paulista".to_string(),
            postal_code: "01310-100".to_string(),
            estimated_delivery: "Quinta-feira, 04 de Setembro".to_string(),
            destination: "São Paulo - SP".to_string(),
            events: vec![
                TrackingEvent::new(
                    "Ontem",
                    "18:42",
                    "CD Cajamar - SP",
                    "Objeto em trânsito para a unidade de destino",
                    EventIcon::Truck,
                ),
                TrackingEvent::new(
                    "Ontem",
                    "09:15",
                    "Unidade de Tratamento - Campinas SP",
                    "Objeto recebido na unidade de tratamento",
                    EventIcon::Package,
                ),
                TrackingEvent::new(
                    "26/08",
                    "14:03",
                    "Agência VeloxLog - Ribeirão Preto SP",
                    "Objeto postado",
                    EventIcon::Package,
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&EventIcon::Truck).unwrap(), "\"truck\"");
        assert_eq!(serde_json::to_string(&EventIcon::Alert).unwrap(), "\"alert\"");
    }

    #[test]
    fn icon_parse_falls_back_to_truck() {
        assert_eq!(EventIcon::parse("check"), EventIcon::Check);
        assert_eq!(EventIcon::parse("caminhão"), EventIcon::Truck);
        assert_eq!(EventIcon::parse(""), EventIcon::Truck);
    }

    #[test]
    fn record_uses_camel_case_wire_names() {
        let record = demo::seed_record();
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"postalCode\""));
        assert!(json.contains("\"estimatedDelivery\""));
        assert!(!json.contains("postal_code"));
    }

    #[test]
    fn record_tolerates_missing_metadata_fields() {
        let record: TrackingRecord =
            serde_json::from_str(r#"{"code":"ABC123","events":[]}"#).unwrap();
        assert_eq!(record.code, "ABC123");
        assert!(record.recipient.is_empty());
        assert!(record.events.is_empty());
    }

    #[test]
    fn seed_record_is_newest_first() {
        let record = demo::seed_record();
        assert_eq!(record.events.len(), 3);
        assert_eq!(record.events.last().unwrap().status, "Objeto postado");
    }
}
