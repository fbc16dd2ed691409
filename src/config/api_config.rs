#[derive(serde::Deserialize, Clone)]
pub struct NetworkStatusConfig {
    pub url: Box<str>,
    #[serde(default = "default_api_key_header")]
    pub api_key_header: Box<str>,
    pub api_key: Box<str>,
}

fn default_api_key_header() -> Box<str> {
    "x-api-key".into()
}

impl std::fmt::Debug for NetworkStatusConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NetworkStatusConfig")
            .field("url", &self.url)
            .field("api_key_header", &self.api_key_header)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct ChainRegistryConfig {
    pub url: Box<str>,
}
