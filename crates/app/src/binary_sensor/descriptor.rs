//! Binary sensor descriptor — one named boolean probe over a device
//! snapshot, plus applicability filters.

use petkit_domain::device::Device;
use petkit_domain::entity::{BinarySensorClass, EntityCategory};

/// Pure probe: reads one boolean off a device snapshot.
///
/// `None` means the value is currently unknown (field absent from the
/// snapshot, or the snapshot is of an unexpected category). Probes never
/// mutate their input.
pub type ValueFn = fn(&Device) -> Option<bool>;

/// Immutable description of one binary sensor.
///
/// Descriptors are plain `static` data: built once at compile time and
/// never mutated, shared for the process lifetime.
#[derive(Debug, Clone, Copy)]
pub struct BinarySensorDesc {
    /// Unique key within the category's table; part of the entity's
    /// unique id.
    pub key: &'static str,
    /// Translation label for the host's UI layer.
    pub translation_key: &'static str,
    /// Classification tag, when one applies.
    pub device_class: Option<BinarySensorClass>,
    /// UI grouping tag, when one applies.
    pub entity_category: Option<EntityCategory>,
    /// Model allow-list. When non-empty, it alone decides applicability.
    pub only_for_types: &'static [&'static str],
    /// Model deny-list, consulted only when no allow-list is declared.
    pub ignore_types: &'static [&'static str],
    /// The probe.
    pub value: ValueFn,
}

impl BinarySensorDesc {
    /// A descriptor with no class, category, or model filters.
    #[must_use]
    pub const fn new(
        key: &'static str,
        translation_key: &'static str,
        value: ValueFn,
    ) -> Self {
        Self {
            key,
            translation_key,
            device_class: None,
            entity_category: None,
            only_for_types: &[],
            ignore_types: &[],
            value,
        }
    }

    /// Attach a device class.
    #[must_use]
    pub const fn class(mut self, class: BinarySensorClass) -> Self {
        self.device_class = Some(class);
        self
    }

    /// Mark the sensor as diagnostic.
    #[must_use]
    pub const fn diagnostic(mut self) -> Self {
        self.entity_category = Some(EntityCategory::Diagnostic);
        self
    }

    /// Restrict the sensor to the given model codes.
    #[must_use]
    pub const fn only_for(mut self, types: &'static [&'static str]) -> Self {
        self.only_for_types = types;
        self
    }

    /// Exclude the sensor on the given model codes.
    #[must_use]
    pub const fn ignore(mut self, types: &'static [&'static str]) -> Self {
        self.ignore_types = types;
        self
    }

    /// Whether this sensor applies to the given device's concrete model.
    ///
    /// A declared allow-list decides alone; the deny-list is ignored in
    /// that case.
    #[must_use]
    pub fn is_supported(&self, device: &Device) -> bool {
        let device_type = device.device_type();
        if !self.only_for_types.is_empty() {
            return self
                .only_for_types
                .iter()
                .any(|t| t.eq_ignore_ascii_case(device_type));
        }
        !self
            .ignore_types
            .iter()
            .any(|t| t.eq_ignore_ascii_case(device_type))
    }

    /// Run the probe against a snapshot.
    #[must_use]
    pub fn evaluate(&self, device: &Device) -> Option<bool> {
        (self.value)(device)
    }
}
