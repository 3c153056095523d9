use deploy_tracker::prelude::*;

/// Mock SoftwareCatalog for testing
#[derive(Default)]
pub struct MockSoftwareCatalog {
    pub entries: Vec<Software>,
    pub should_fail: bool,
}

impl MockSoftwareCatalog {
    pub fn new(entries: Vec<Software>) -> Self {
        Self {
            entries,
            should_fail: false,
        }
    }

    #[allow(dead_code)]
    pub fn with_failure() -> Self {
        Self {
            entries: vec![],
            should_fail: true,
        }
    }
}

impl SoftwareCatalog for MockSoftwareCatalog {
    fn list_software(&self) -> Result<Vec<Software>> {
        if self.should_fail {
            anyhow::bail!("Mock software catalog failure");
        }
        Ok(self.entries.clone())
    }
}
