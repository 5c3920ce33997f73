use crate::config::CONFIG;
use crate::models::TrackingRecord;

/// Falhas de importação de backup. Ambas viram um alert bloqueante;
/// o registro em memória fica intacto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupError {
    /// JSON que não parseia
    Malformed,
    /// JSON válido sem `code`/`events` utilizáveis
    Invalid,
}

impl BackupError {
    pub fn user_message(&self) -> &'static str {
        match self {
            BackupError::Malformed => "Erro ao ler arquivo.",
            BackupError::Invalid => "Arquivo de backup inválido.",
        }
    }
}

/// JSON indentado (2 espaços) do registro completo
pub fn to_json(record: &TrackingRecord) -> String {
    serde_json::to_string_pretty(record).unwrap_or_default()
}

/// Nome do arquivo de backup: `{prefixo}-{código}.json`
pub fn backup_filename(record: &TrackingRecord) -> String {
    format!("{}-{}.json", CONFIG.backup_file_prefix, record.code)
}

/// Valida só a presença de `code` (string não vazia) e `events` (array);
/// o resto do formato não é checado e campos faltantes viram defaults.
pub fn parse(text: &str) -> Result<TrackingRecord, BackupError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|_| BackupError::Malformed)?;

    let has_code = value
        .get("code")
        .and_then(|v| v.as_str())
        .map(|code| !code.is_empty())
        .unwrap_or(false);
    let has_events = value.get("events").map(|v| v.is_array()).unwrap_or(false);

    if !has_code || !has_events {
        return Err(BackupError::Invalid);
    }

    serde_json::from_value(value).map_err(|_| BackupError::Invalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::demo;

    #[test]
    fn export_import_round_trips() {
        let record = demo::seed_record();
        let json = to_json(&record);
        let restored = parse(&json).unwrap();
        assert_eq!(restored, record);
    }

    #[test]
    fn export_is_indented() {
        let json = to_json(&demo::seed_record());
        assert!(json.contains("\n  \"code\""));
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert_eq!(parse("{ not json").unwrap_err(), BackupError::Malformed);
        assert_eq!(parse("").unwrap_err(), BackupError::Malformed);
    }

    #[test]
    fn missing_code_is_rejected() {
        assert_eq!(
            parse(r#"{"events":[]}"#).unwrap_err(),
            BackupError::Invalid
        );
        assert_eq!(
            parse(r#"{"code":"","events":[]}"#).unwrap_err(),
            BackupError::Invalid
        );
    }

    #[test]
    fn missing_events_is_rejected() {
        assert_eq!(
            parse(r#"{"code":"ABC123"}"#).unwrap_err(),
            BackupError::Invalid
        );
    }

    #[test]
    fn minimal_shape_is_accepted_with_defaults() {
        let record = parse(r#"{"code":"ABC123","events":[]}"#).unwrap();
        assert_eq!(record.code, "ABC123");
        assert!(record.events.is_empty());
        assert!(record.recipient.is_empty());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let record = parse(r#"{"code":"ABC123","events":[],"extra":42}"#).unwrap();
        assert_eq!(record.code, "ABC123");
    }

    #[test]
    fn filename_carries_the_code() {
        let record = demo::seed_record();
        let name = backup_filename(&record);
        assert!(name.ends_with(&format!("{}.json", record.code)));
    }
}
