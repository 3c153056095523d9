use crate::deployment_tracking::domain::Software;
use crate::shared::Result;

/// SoftwareCatalog port for listing catalog entries
pub trait SoftwareCatalog {
    /// Returns every catalog entry in display order
    fn list_software(&self) -> Result<Vec<Software>>;
}

impl<T: SoftwareCatalog + ?Sized> SoftwareCatalog for Box<T> {
    fn list_software(&self) -> Result<Vec<Software>> {
        (**self).list_software()
    }
}
