#[derive(serde::Deserialize, Debug, Clone)]
pub struct OutputConfig {
    pub path: Box<str>,
}

impl OutputConfig {
    pub const DEFAULT_PATH: &'static str = "docs/snippets/supported-chains.mdx";
}
