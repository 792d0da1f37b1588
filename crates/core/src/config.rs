// Cleanup configuration
// Tool location, argument templates, success marker and allowed classes

use crate::domain::{ClassSelection, DeviceClass, DeviceId, DomainError, QueryKind};
use std::path::PathBuf;

/// Default device-management executable (resolved through PATH)
pub const DEFAULT_TOOL_PATH: &str = "DevCon.exe";

pub const DEFAULT_ACTIVE_QUERY: &str = "resources =";
pub const DEFAULT_ALL_QUERY: &str = "findall =";

/// Placeholder replaced by the device identifier in the removal template
pub const DEVICE_PLACEHOLDER: &str = "{device}";
pub const DEFAULT_REMOVE_TEMPLATE: &str = "remove @\"{device}\"";

/// Substring the tool prints after removing exactly one device
pub const DEFAULT_SUCCESS_MARKER: &str = "1 device(s) were removed.";

/// First entry is the default class
pub const DEFAULT_DEVICE_CLASSES: [&str; 2] = ["ports", "usb"];

/// Immutable configuration shared by the cleanup services
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupConfig {
    pub tool_path: PathBuf,
    pub active_query: String,
    pub all_query: String,
    pub remove_template: String,
    pub success_marker: String,
    pub available_classes: Vec<String>,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            tool_path: PathBuf::from(DEFAULT_TOOL_PATH),
            active_query: DEFAULT_ACTIVE_QUERY.to_string(),
            all_query: DEFAULT_ALL_QUERY.to_string(),
            remove_template: DEFAULT_REMOVE_TEMPLATE.to_string(),
            success_marker: DEFAULT_SUCCESS_MARKER.to_string(),
            available_classes: DEFAULT_DEVICE_CLASSES
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

impl CleanupConfig {
    /// Check the invariants the services rely on
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.available_classes.is_empty() {
            return Err(DomainError::NoDeviceClasses);
        }

        if let Some(class) = self
            .available_classes
            .iter()
            .find(|c| c.trim().is_empty() || c.chars().any(char::is_whitespace))
        {
            return Err(DomainError::ValidationError(format!(
                "invalid device class name: {:?}",
                class
            )));
        }

        if !self.remove_template.contains(DEVICE_PLACEHOLDER) {
            return Err(DomainError::MissingPlaceholder {
                template: self.remove_template.clone(),
                placeholder: DEVICE_PLACEHOLDER,
            });
        }

        if self.success_marker.is_empty() {
            return Err(DomainError::ValidationError(
                "success marker must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Class used for blank or unrecognized input
    pub fn default_class(&self) -> DeviceClass {
        let name = self
            .available_classes
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_DEVICE_CLASSES[0]);
        DeviceClass::new(name.to_lowercase())
    }

    /// Resolve operator input against the allowed classes (case-insensitive)
    pub fn resolve_class(&self, input: &str) -> ClassSelection {
        let requested = input.trim().to_lowercase();

        if requested.is_empty() {
            return ClassSelection::Defaulted(self.default_class());
        }

        if self
            .available_classes
            .iter()
            .any(|c| c.to_lowercase() == requested)
        {
            return ClassSelection::Chosen(DeviceClass::new(requested));
        }

        ClassSelection::Fallback {
            requested: input.trim().to_string(),
            class: self.default_class(),
        }
    }

    /// Argument string for a listing query, e.g. `resources =ports`
    pub fn query_arguments(&self, kind: QueryKind, class: &DeviceClass) -> String {
        let prefix = match kind {
            QueryKind::ActiveDevices => &self.active_query,
            QueryKind::AllRegisteredDevices => &self.all_query,
        };
        format!("{}{}", prefix, class.as_str())
    }

    /// Argument string for removing one device
    ///
    /// The identifier is embedded verbatim; a quote inside it is not escaped.
    pub fn removal_arguments(&self, device: &DeviceId) -> String {
        self.remove_template
            .replace(DEVICE_PLACEHOLDER, device.as_str())
    }
}
