use crate::model::{AppRecord, VersionRecord};
use crate::resolver::{resolve_version, DownloadEndpoints, DownloadTarget};
use crate::version_order::sort_versions_desc;

/// An app's versions, newest first.
#[derive(Debug, Clone, Default)]
pub struct VersionHistory {
    versions: Vec<VersionRecord>,
}

impl VersionHistory {
    pub fn new(mut versions: Vec<VersionRecord>) -> Self {
        sort_versions_desc(&mut versions);
        Self { versions }
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn latest(&self) -> Option<&VersionRecord> {
        self.versions.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VersionRecord> {
        self.versions.iter()
    }

    pub fn find(&self, version_name: &str) -> Option<&VersionRecord> {
        self.versions.iter().find(|v| v.version_name == version_name)
    }

    /// Each version paired with its resolved download.
    pub fn resolved<'a>(
        &'a self,
        app: &'a AppRecord,
        endpoints: &'a DownloadEndpoints,
    ) -> impl Iterator<Item = (&'a VersionRecord, DownloadTarget)> + 'a {
        self.versions
            .iter()
            .map(move |v| (v, resolve_version(app, v, endpoints)))
    }
}
