use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ExplorerConfig {
    pub vires: ViresSettings,
    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ViresSettings {
    pub host: String,
    pub token: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub listen: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            listen: "0.0.0.0:8080".to_string(),
        }
    }
}

pub fn load_explorer_config() -> anyhow::Result<ExplorerConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/explorer"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_settings_default_when_section_missing() {
        let raw = r#"
            [vires]
            host = "https://vires.services/api"
            token = "secret"
        "#;
        let settings = config::Config::builder()
            .add_source(config::File::from_str(raw, config::FileFormat::Toml))
            .build()
            .unwrap();
        let parsed: ExplorerConfig = settings.try_deserialize().unwrap();

        assert_eq!(parsed.vires.host, "https://vires.services/api");
        assert_eq!(parsed.server.listen, "0.0.0.0:8080");
    }

    #[test]
    fn test_explicit_listen_address() {
        let raw = r#"
            [vires]
            host = "http://localhost:9000"
            token = "t"

            [server]
            listen = "127.0.0.1:3000"
        "#;
        let settings = config::Config::builder()
            .add_source(config::File::from_str(raw, config::FileFormat::Toml))
            .build()
            .unwrap();
        let parsed: ExplorerConfig = settings.try_deserialize().unwrap();

        assert_eq!(parsed.server.listen, "127.0.0.1:3000");
    }
}
