//! Descriptor store module
//!
//! The fixed set of static documents that let an agent framework discover
//! this service: the OpenAPI schema, the AI-plugin manifest, and a logo.
//! Documents are synthesized and loaded once at startup; request handlers
//! only ever read.

mod logo;
mod openapi;
mod templates;

pub use openapi::{generated_schema, yaml_to_json};

use std::collections::HashMap;
use std::path::Path;

use hyper::body::Bytes;
use tokio::fs;

use crate::config::Config;
use crate::logger;

/// Identity of a descriptor document; doubles as its on-disk file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescriptorName {
    OpenApiYaml,
    PluginManifest,
    Logo,
}

impl DescriptorName {
    pub const ALL: [Self; 3] = [Self::OpenApiYaml, Self::PluginManifest, Self::Logo];

    /// File name inside the descriptor directory
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::OpenApiYaml => "openapi.yaml",
            Self::PluginManifest => "ai-plugin.json",
            Self::Logo => "logo.png",
        }
    }

    /// Media type the document is served with
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::OpenApiYaml => "text/yaml",
            Self::PluginManifest => "application/json",
            Self::Logo => "image/png",
        }
    }
}

/// A named, immutable document served verbatim
#[derive(Debug, Clone)]
pub struct DescriptorDocument {
    pub content: Bytes,
    pub content_type: &'static str,
}

impl DescriptorDocument {
    pub fn new(content: Bytes, content_type: &'static str) -> Self {
        Self {
            content,
            content_type,
        }
    }
}

/// Read-only set of descriptor documents, keyed by name
#[derive(Debug, Default)]
pub struct DescriptorStore {
    entries: HashMap<DescriptorName, DescriptorDocument>,
}

impl DescriptorStore {
    /// Store with no documents; every descriptor route answers 404
    pub fn empty() -> Self {
        Self::default()
    }

    /// Insert a document. Startup and test construction only; the store is
    /// never mutated once request handling begins.
    pub fn insert(&mut self, name: DescriptorName, doc: DescriptorDocument) {
        self.entries.insert(name, doc);
    }

    pub fn get(&self, name: DescriptorName) -> Option<&DescriptorDocument> {
        self.entries.get(&name)
    }

    /// Load every known descriptor file that exists under `dir`.
    ///
    /// Missing files are expected on a fresh start before synthesis has
    /// ever run; the corresponding routes answer 404 until the files exist.
    pub async fn load(dir: &Path) -> Self {
        let mut store = Self::empty();
        for name in DescriptorName::ALL {
            let path = dir.join(name.file_name());
            match fs::read(&path).await {
                Ok(content) => {
                    store.insert(
                        name,
                        DescriptorDocument::new(Bytes::from(content), name.content_type()),
                    );
                }
                Err(_) => {
                    logger::log_warning(&format!(
                        "Descriptor {} not found under {}",
                        name.file_name(),
                        dir.display()
                    ));
                }
            }
        }
        store
    }
}

/// Synthesize missing descriptor files, then load the store.
///
/// Runs exactly once, before the listener accepts traffic. Handlers never
/// regenerate documents.
pub async fn ensure_descriptors(config: &Config) -> std::io::Result<DescriptorStore> {
    let dir = Path::new(&config.descriptors.dir);

    if config.descriptors.synthesize {
        synthesize_missing(config, dir).await?;
    }

    Ok(DescriptorStore::load(dir).await)
}

async fn synthesize_missing(config: &Config, dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dir).await?;
    let base_url = config.base_url();

    let spec_path = dir.join(DescriptorName::OpenApiYaml.file_name());
    if !spec_path.exists() {
        fs::write(&spec_path, templates::openapi_yaml(&base_url)).await?;
        logger::log_descriptor_written(DescriptorName::OpenApiYaml.file_name());
    }

    let manifest_path = dir.join(DescriptorName::PluginManifest.file_name());
    if !manifest_path.exists() {
        let manifest = templates::plugin_manifest(
            &base_url,
            &config.descriptors.contact_email,
            &config.descriptors.legal_info,
        );
        fs::write(&manifest_path, manifest).await?;
        logger::log_descriptor_written(DescriptorName::PluginManifest.file_name());
    }

    // Logo synthesis is best-effort: a missing capability or a failed
    // write leaves the route at 404.
    let logo_path = dir.join(DescriptorName::Logo.file_name());
    if !logo_path.exists() {
        match logo::render_placeholder() {
            Some(image) => match fs::write(&logo_path, image).await {
                Ok(()) => logger::log_descriptor_written(DescriptorName::Logo.file_name()),
                Err(e) => logger::log_warning(&format!("Failed to write logo.png: {e}")),
            },
            None => {
                logger::log_warning("Logo capability unavailable, skipping logo.png synthesis");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(dir: &Path, synthesize: bool) -> Config {
        let mut config = Config::load_from("nonexistent-test-config").expect("default config");
        config.descriptors.dir = dir.to_string_lossy().into_owned();
        config.descriptors.synthesize = synthesize;
        config
    }

    #[tokio::test]
    async fn test_ensure_writes_missing_descriptors() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let store = ensure_descriptors(&test_config(tmp.path(), true))
            .await
            .expect("synthesis succeeds");

        let spec = store
            .get(DescriptorName::OpenApiYaml)
            .expect("openapi synthesized");
        assert_eq!(spec.content_type, "text/yaml");
        let yaml = std::str::from_utf8(&spec.content).expect("utf-8");
        assert!(yaml.contains("openapi: 3.1.0"));
        assert!(yaml.contains("/datetime/current"));
        assert!(yaml.contains("/date/current"));

        let manifest = store
            .get(DescriptorName::PluginManifest)
            .expect("manifest synthesized");
        assert_eq!(manifest.content_type, "application/json");
        let value: serde_json::Value =
            serde_json::from_slice(&manifest.content).expect("manifest is json");
        assert_eq!(value["schema_version"], "v1");
        assert_eq!(
            value["api"]["url"].as_str().expect("api.url"),
            "http://127.0.0.1:5000/openapi.yaml"
        );
    }

    #[tokio::test]
    async fn test_ensure_is_idempotent() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let config = test_config(tmp.path(), true);
        ensure_descriptors(&config).await.expect("first run");

        // Locally edited documents must survive a second startup untouched.
        fs::write(tmp.path().join("openapi.yaml"), "openapi: 3.1.0\n")
            .await
            .expect("overwrite");
        let store = ensure_descriptors(&config).await.expect("second run");
        assert_eq!(
            &store.get(DescriptorName::OpenApiYaml).expect("kept").content[..],
            b"openapi: 3.1.0\n"
        );
    }

    #[tokio::test]
    async fn test_load_without_synthesis_is_empty() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let store = ensure_descriptors(&test_config(tmp.path(), false))
            .await
            .expect("load succeeds");
        for name in DescriptorName::ALL {
            assert!(store.get(name).is_none(), "{}", name.file_name());
        }
    }

    #[cfg(feature = "logo")]
    #[tokio::test]
    async fn test_logo_synthesized_when_capability_present() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let store = ensure_descriptors(&test_config(tmp.path(), true))
            .await
            .expect("synthesis succeeds");
        let logo = store.get(DescriptorName::Logo).expect("logo synthesized");
        assert_eq!(logo.content_type, "image/png");
        assert_eq!(&logo.content[..8], b"\x89PNG\r\n\x1a\n");
    }
}
