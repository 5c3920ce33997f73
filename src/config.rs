use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub brand_name: String,
    pub admin_password: String,
    pub backup_file_prefix: String,
    pub static_export_filename: String,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            brand_name: "VeloxLog".to_string(),
            admin_password: "zulufox145".to_string(),
            backup_file_prefix: "veloxlog-config".to_string(),
            static_export_filename: "index.html".to_string(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Carrega a configuração a partir de variáveis de ambiente em tempo de compilação
    pub fn from_env() -> Self {
        Self {
            brand_name: option_env!("BRAND_NAME").unwrap_or("VeloxLog").to_string(),
            admin_password: option_env!("ADMIN_PASSWORD")
                .unwrap_or("zulufox145")
                .to_string(),
            backup_file_prefix: option_env!("BACKUP_FILE_PREFIX")
                .unwrap_or("veloxlog-config")
                .to_string(),
            static_export_filename: "index.html".to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true")
                .parse()
                .unwrap_or(true),
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuração global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

/// Comparação única de credencial, usada pelo gate ao vivo e pelo script do
/// site estático exportado. A senha existe em um só lugar.
pub fn credential_matches(input: &str) -> bool {
    input == CONFIG.admin_password
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_has_non_empty_password() {
        let config = AppConfig::from_env();
        assert!(!config.admin_password.is_empty());
        assert_eq!(config.static_export_filename, "index.html");
    }

    #[test]
    fn credential_comparison_is_exact() {
        let password = CONFIG.admin_password.clone();
        assert!(credential_matches(&password));
        assert!(!credential_matches(""));
        assert!(!credential_matches(&format!("{} ", password)));
    }
}
