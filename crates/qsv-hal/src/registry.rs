//! Device registry for managing available devices.
//!
//! Devices are added by explicit calls (typically an adapter's `register`
//! function). Nothing registers itself when a crate is loaded.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::device::{Device, DeviceConfig, DeviceFactory};
use crate::error::{HalError, HalResult};

/// Factory function type for registered devices.
type Factory = Box<dyn Fn(DeviceConfig) -> HalResult<Box<dyn Device>> + Send + Sync>;

/// Central registry for devices.
pub struct DeviceRegistry {
    factories: FxHashMap<String, Factory>,
}

impl DeviceRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            factories: FxHashMap::default(),
        }
    }

    /// Register a device type under `name`.
    pub fn register<D>(&mut self, name: impl Into<String>)
    where
        D: DeviceFactory + 'static,
    {
        let name = name.into();
        debug!("Registering device: {}", name);
        self.factories.insert(
            name,
            Box::new(|config| {
                let device = D::from_config(config)?;
                Ok(Box::new(device))
            }),
        );
    }

    /// Register a device with a custom constructor.
    pub fn register_factory(
        &mut self,
        name: impl Into<String>,
        factory: impl Fn(DeviceConfig) -> HalResult<Box<dyn Device>> + Send + Sync + 'static,
    ) {
        let name = name.into();
        debug!("Registering factory device: {}", name);
        self.factories.insert(name, Box::new(factory));
    }

    /// Create a device by name.
    pub fn create(&self, name: &str, config: DeviceConfig) -> HalResult<Box<dyn Device>> {
        match self.factories.get(name) {
            Some(factory) => factory(config),
            None => Err(HalError::DeviceUnavailable(format!(
                "No device registered with name '{}'",
                name
            ))),
        }
    }

    /// List all registered device names, sorted.
    pub fn available_devices(&self) -> Vec<String> {
        let mut names: Vec<_> = self.factories.keys().cloned().collect();
        names.sort();
        names
    }

    /// Check if a device is registered under `name`.
    pub fn has_device(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }
}

impl Default for DeviceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_registry() {
        let registry = DeviceRegistry::new();
        assert!(registry.available_devices().is_empty());
        assert!(!registry.has_device("qsv.simulator"));
    }

    #[test]
    fn test_register_factory() {
        let mut registry = DeviceRegistry::new();
        registry.register_factory("test", |_config| {
            Err(HalError::DeviceUnavailable("test only".into()))
        });

        assert!(registry.has_device("test"));
        assert_eq!(registry.available_devices(), vec!["test"]);
        assert!(registry.create("test", DeviceConfig::new("test", 1)).is_err());
    }

    #[test]
    fn test_create_unknown_device() {
        let registry = DeviceRegistry::new();
        let result = registry.create("nonexistent", DeviceConfig::new("nonexistent", 1));
        assert!(matches!(result, Err(HalError::DeviceUnavailable(_))));
    }

    #[test]
    fn test_available_devices_sorted() {
        let mut registry = DeviceRegistry::new();
        registry.register_factory("zebra", |_| Err(HalError::DeviceUnavailable("test".into())));
        registry.register_factory("alpha", |_| Err(HalError::DeviceUnavailable("test".into())));
        assert_eq!(registry.available_devices(), vec!["alpha", "zebra"]);
    }
}
