// Device Domain Model

use serde::Serialize;

/// Device instance identifier as emitted by the device-management tool.
///
/// Opaque and exact-match: two identifiers are equal iff their bytes are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DeviceId(String);

impl DeviceId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DeviceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DeviceId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Device class filter (e.g. `ports`, `usb`)
///
/// Only produced by [`crate::config::CleanupConfig::resolve_class`], so a value
/// always names one of the configured classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DeviceClass(String);

impl DeviceClass {
    pub(crate) fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of resolving operator input into a device class
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassSelection {
    /// Input named a configured class
    Chosen(DeviceClass),
    /// Input was blank, default class applies
    Defaulted(DeviceClass),
    /// Input was not recognized, default class applies
    Fallback {
        requested: String,
        class: DeviceClass,
    },
}

impl ClassSelection {
    pub fn class(&self) -> &DeviceClass {
        match self {
            ClassSelection::Chosen(class) | ClassSelection::Defaulted(class) => class,
            ClassSelection::Fallback { class, .. } => class,
        }
    }

    pub fn into_class(self) -> DeviceClass {
        match self {
            ClassSelection::Chosen(class) | ClassSelection::Defaulted(class) => class,
            ClassSelection::Fallback { class, .. } => class,
        }
    }
}

/// Device listing query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    /// Devices currently present in the system
    ActiveDevices,
    /// Every device with a registration, present or stale
    AllRegisteredDevices,
}

impl std::fmt::Display for QueryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryKind::ActiveDevices => write!(f, "ACTIVE_DEVICES"),
            QueryKind::AllRegisteredDevices => write!(f, "ALL_REGISTERED_DEVICES"),
        }
    }
}
