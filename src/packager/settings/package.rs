//! Package metadata and configuration.

use super::DEFAULT_PRODUCT_NAME;

/// Package metadata and configuration.
///
/// Contains the product information recorded in the build receipt and used
/// to name the produced executable.
///
/// # Examples
///
/// ```no_run
/// use pdfcsv_packager::packager::PackageSettings;
///
/// let settings = PackageSettings {
///     product_name: "PDFCSVTool".into(),
///     version: "1.0.0".into(),
///     description: "PDF/CSV desktop tool".into(),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct PackageSettings {
    /// Product name displayed to users.
    ///
    /// This becomes the file name of the produced executable.
    pub product_name: String,

    /// Version string recorded in the build receipt.
    pub version: String,

    /// Brief description of the application.
    pub description: String,
}

impl Default for PackageSettings {
    fn default() -> Self {
        Self {
            product_name: DEFAULT_PRODUCT_NAME.to_string(),
            version: "1.0.0".to_string(),
            description: "PDF/CSV desktop tool".to_string(),
        }
    }
}
