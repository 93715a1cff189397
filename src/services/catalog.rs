use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::models::{Project, Role};

/// Read-only project catalog, keyed by catalog name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog(BTreeMap<String, Project>);

impl Catalog {
    /// Read the catalog file. Called per request; nothing is cached.
    pub async fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            tracing::error!("Failed to read catalog {}: {}", path.display(), e);
            AppError::Catalog(format!("{}: {}", path.display(), e))
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> AppResult<Self> {
        serde_json::from_str(raw).map_err(|e| AppError::Catalog(e.to_string()))
    }

    /// The project whose download link is `/download/<file>`.
    pub fn project_for_file(&self, file: &str) -> Option<&Project> {
        let link = format!("/download/{}", file);
        self.0.values().find(|project| project.download_link == link)
    }

    pub fn public_count(&self) -> usize {
        self.0.values().filter(|project| !project.private).count()
    }

    /// Private projects whose required role is within reach of `role`.
    pub fn viewable_private_count(&self, role: Role) -> usize {
        self.0
            .values()
            .filter(|project| project.private && role.satisfies(project.role))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "project1": {
            "title": "Public project",
            "description": "visible",
            "download_link": "/download/public.txt",
            "private": false,
            "role": 0
        },
        "project2": {
            "title": "Private project",
            "description": "hidden",
            "download_link": "/download/private.txt",
            "private": true,
            "role": 1
        }
    }"#;

    #[test]
    fn counts_depend_on_role() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.public_count(), 1);
        assert_eq!(catalog.viewable_private_count(Role::ANONYMOUS), 0);
        assert_eq!(catalog.viewable_private_count(Role(0)), 0);
        assert_eq!(catalog.viewable_private_count(Role(2)), 1);
    }

    #[test]
    fn finds_project_by_file_name() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        let project = catalog.project_for_file("private.txt").unwrap();
        assert_eq!(project.title, "Private project");
        assert!(catalog.project_for_file("missing.txt").is_none());
        assert!(catalog.project_for_file("/download/private.txt").is_none());
    }

    #[test]
    fn malformed_catalog_is_an_error() {
        assert!(matches!(Catalog::from_json("[1, 2]"), Err(AppError::Catalog(_))));
    }
}
