//! Asset kind registry
//!
//! Static table describing every [`AssetKind`]: its type name, file prefix,
//! declared fields and a factory for an empty placeholder. The kind set is
//! closed, so nothing is registered at runtime.

use crate::asset::{
    AssetKind, EquipmentModule, EquipmentPhase, Type1, Type2, FIELD_NAME, FIELD_PREFIX,
    FIELD_SUFFIX, FIELD_UNIT,
};
use crate::error::{Result, ShadowError};
use crate::shadow::TaggedAsset;

/// Registry entry for one asset kind
#[derive(Debug)]
pub struct KindDescriptor {
    pub kind: AssetKind,
    /// Type name as reported to templates
    pub name: &'static str,
    /// File-name prefix
    pub prefix: &'static str,
    /// Declared field names, in output order
    pub fields: &'static [&'static str],
    /// Builds an empty instance of the kind
    pub placeholder: fn() -> TaggedAsset,
}

impl KindDescriptor {
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains(&name)
    }
}

// Order must follow `AssetKind::ALL`.
static REGISTRY: [KindDescriptor; 4] = [
    KindDescriptor {
        kind: AssetKind::Type1,
        name: "Type1",
        prefix: "1",
        fields: &[FIELD_PREFIX, FIELD_NAME],
        placeholder: || Type1::new().into(),
    },
    KindDescriptor {
        kind: AssetKind::Type2,
        name: "Type2",
        prefix: "2",
        fields: &[FIELD_PREFIX, FIELD_NAME, FIELD_SUFFIX],
        placeholder: || Type2::new().into(),
    },
    KindDescriptor {
        kind: AssetKind::EquipmentPhase,
        name: "EquipmentPhase",
        prefix: "EP",
        fields: &[FIELD_PREFIX, FIELD_NAME, FIELD_UNIT],
        placeholder: || EquipmentPhase::new().into(),
    },
    KindDescriptor {
        kind: AssetKind::EquipmentModule,
        name: "EquipmentModule",
        prefix: "EM",
        fields: &[FIELD_PREFIX, FIELD_NAME, FIELD_SUFFIX, FIELD_UNIT],
        placeholder: || EquipmentModule::new().into(),
    },
];

/// All registry entries
pub fn descriptors() -> &'static [KindDescriptor] {
    &REGISTRY
}

pub fn descriptor(kind: AssetKind) -> &'static KindDescriptor {
    match kind {
        AssetKind::Type1 => &REGISTRY[0],
        AssetKind::Type2 => &REGISTRY[1],
        AssetKind::EquipmentPhase => &REGISTRY[2],
        AssetKind::EquipmentModule => &REGISTRY[3],
    }
}

/// Look up a kind by its type name (case-sensitive)
pub fn lookup(name: &str) -> Result<&'static KindDescriptor> {
    log::trace!("Registry lookup for kind {}", name);
    REGISTRY
        .iter()
        .find(|d| d.name == name)
        .ok_or_else(|| ShadowError::UnknownKind(name.to_string()))
}
