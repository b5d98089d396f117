//! Ordered, immutable template catalog.

use std::{collections::HashSet, fs, path::Path, sync::Arc};

use serde::Deserialize;

use crate::{
    builtin::{DRY_RUN_CONTENT, MINIMAL_CONTENT, SERVER_CONTENT},
    domain::{TemplateIcon, TemplateId, TemplateRecord},
    error::CatalogError,
};

/// Fixed sequence of templates. Order defines navigation order and the
/// default selection (index 0). Clones share the same storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateCatalog {
    records: Arc<[TemplateRecord]>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    templates: Vec<TemplateRecord>,
}

impl TemplateCatalog {
    pub fn new(records: Vec<TemplateRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if record.id.as_str().trim().is_empty() {
                return Err(CatalogError::EmptyId { index });
            }
            if !seen.insert(record.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: record.id.to_string(),
                });
            }
        }

        Ok(Self {
            records: records.into(),
        })
    }

    pub fn empty() -> Self {
        Self {
            records: Arc::from(Vec::new()),
        }
    }

    /// The three templates shipped with the app: minimal, server, dry-run.
    pub fn builtin() -> Self {
        Self {
            records: builtin_records().into(),
        }
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(raw)?;
        Self::new(file.templates)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_toml_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            templates = catalog.len(),
            "loaded template catalog"
        );
        Ok(catalog)
    }

    pub fn get(&self) -> &[TemplateRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn by_index(&self, index: usize) -> Option<&TemplateRecord> {
        self.records.get(index)
    }

    pub fn by_id(&self, id: &str) -> Option<&TemplateRecord> {
        self.records.iter().find(|record| record.id == *id)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|record| record.id == *id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TemplateRecord> {
        self.records.iter()
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn features(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|label| (*label).to_string()).collect()
}

fn builtin_records() -> Vec<TemplateRecord> {
    vec![
        TemplateRecord {
            id: TemplateId::new("minimal"),
            title: "Minimal Init Protocol".into(),
            subtitle: "Perfect for simple projects and development environments where you need basic context without overhead.".into(),
            description: "Start small with essential system awareness and foundational documentation. This template performs safe, non-invasive probes to understand your environment and generates core project files. Ideal for personal projects, prototypes, or when working in constrained environments where minimal footprint is crucial.".into(),
            icon: TemplateIcon::FileText,
            features: features(&["Essential probes only", "Zero secret exposure", "File generation"]),
            content: MINIMAL_CONTENT.into(),
        },
        TemplateRecord {
            id: TemplateId::new("server"),
            title: "Server Init Protocol".into(),
            subtitle: "Built for production environments requiring comprehensive system validation and operational documentation.".into(),
            description: "Deploy with confidence using extensive documentation generation and architectural awareness. This template validates system compatibility, documents service dependencies, and creates a complete operational handbook. Essential for production deployments, team collaboration, and maintaining complex infrastructures.".into(),
            icon: TemplateIcon::Desktop,
            features: features(&["Production-ready", "Full documentation suite", "Operational blueprints"]),
            content: SERVER_CONTENT.into(),
        },
        TemplateRecord {
            id: TemplateId::new("dry-run"),
            title: "Dry-Run Init Protocol".into(),
            subtitle: "Risk-free rehearsal mode for testing and validation without making any system changes.".into(),
            description: "Practice and validate your initialization sequence safely before production deployment. This template creates documentation blueprints and command playbooks without touching your system. Perfect for security-conscious environments, testing scenarios, or when you need to validate approaches before implementation.".into(),
            icon: TemplateIcon::TestTube,
            features: features(&["No mutations", "Documentation blueprints", "Pre-production safe"]),
            content: DRY_RUN_CONTENT.into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn record(id: &str) -> TemplateRecord {
        TemplateRecord {
            id: TemplateId::new(id),
            title: format!("{id} title"),
            subtitle: String::new(),
            description: String::new(),
            icon: TemplateIcon::default(),
            features: Vec::new(),
            content: format!("# {id}\n"),
        }
    }

    #[test]
    fn builtin_catalog_keeps_navigation_order() {
        let catalog = TemplateCatalog::builtin();
        let ids: Vec<&str> = catalog.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["minimal", "server", "dry-run"]);
        assert_eq!(catalog.index_of("dry-run"), Some(2));
        assert!(catalog.by_id("missing").is_none());
    }

    #[test]
    fn builtin_content_is_not_trimmed() {
        let catalog = TemplateCatalog::builtin();
        let minimal = catalog.by_id("minimal").expect("minimal template");
        assert!(minimal
            .content
            .starts_with("# Minimal Init Protocol (Template)\n\n**Intent**"));
        assert!(minimal.content.contains("  - **Output Files**: \n"));
        assert!(minimal
            .content
            .ends_with("  - **Output File**: ./INIT_CONTEXT_SNAPSHOT.md"));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = TemplateCatalog::new(vec![record("a"), record("b"), record("a")])
            .expect_err("duplicate should fail");
        assert!(matches!(err, CatalogError::DuplicateId { ref id } if id == "a"));
    }

    #[test]
    fn rejects_blank_ids() {
        let err = TemplateCatalog::new(vec![record("a"), record("  ")])
            .expect_err("blank id should fail");
        assert!(matches!(err, CatalogError::EmptyId { index: 1 }));
    }

    #[test]
    fn accepts_empty_catalog() {
        let catalog = TemplateCatalog::new(Vec::new()).expect("empty catalog");
        assert!(catalog.is_empty());
        assert_eq!(catalog, TemplateCatalog::empty());
    }

    #[test]
    fn parses_toml_catalog() {
        let raw = r##"
[[templates]]
id = "edge"
title = "Edge Init"
subtitle = "For edge nodes"
description = "Probes constrained hardware."
icon = "desktop"
features = ["Low footprint"]
content = "# Edge\n"

[[templates]]
id = "lab"
title = "Lab Init"
subtitle = ""
description = ""
content = "# Lab"
"##;
        let catalog = TemplateCatalog::from_toml_str(raw).expect("parse catalog");
        assert_eq!(catalog.len(), 2);
        let edge = catalog.by_index(0).expect("edge");
        assert_eq!(edge.icon, TemplateIcon::Desktop);
        assert_eq!(edge.features, vec!["Low footprint".to_string()]);
        assert_eq!(edge.content, "# Edge\n");
        assert_eq!(catalog.by_id("lab").map(|r| r.icon), Some(TemplateIcon::FileText));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = TemplateCatalog::from_toml_str("[[templates]]\nid = 3\n")
            .expect_err("bad catalog");
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn loads_catalog_from_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            "[[templates]]\nid = \"solo\"\ntitle = \"Solo\"\nsubtitle = \"\"\ndescription = \"\"\ncontent = \"x\"\n"
        )
        .expect("write catalog");

        let catalog = TemplateCatalog::load(file.path()).expect("load catalog");
        assert_eq!(catalog.len(), 1);

        let missing = TemplateCatalog::load(Path::new("/definitely/not/here.toml"))
            .expect_err("missing file");
        assert!(matches!(missing, CatalogError::Io { .. }));
    }
}
