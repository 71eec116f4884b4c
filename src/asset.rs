//! Asset representations
//!
//! The closed set of asset kinds and the concrete record behind each one.
//! Records are built once (`new` plus `with_*`) and only read afterwards.

use crate::error::{Result, ShadowError};
use crate::registry::{self, KindDescriptor};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::str::FromStr;

/// Field name shared by every kind
pub const FIELD_PREFIX: &str = "Prefix";
/// Display name of the asset
pub const FIELD_NAME: &str = "Name";
/// Optional file-name suffix
pub const FIELD_SUFFIX: &str = "Suffix";
/// Equipment unit the asset belongs to
pub const FIELD_UNIT: &str = "Unit";

/// Kind of asset
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum AssetKind {
    /// Plain asset with a name
    Type1,
    /// Named asset with a file-name suffix
    Type2,
    /// Phase of a piece of equipment
    EquipmentPhase,
    /// Equipment module
    EquipmentModule,
}

impl AssetKind {
    /// Every kind, in registry order
    pub const ALL: [AssetKind; 4] = [
        AssetKind::Type1,
        AssetKind::Type2,
        AssetKind::EquipmentPhase,
        AssetKind::EquipmentModule,
    ];

    /// Static registry entry for this kind
    pub fn descriptor(self) -> &'static KindDescriptor {
        registry::descriptor(self)
    }

    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    pub fn prefix(self) -> &'static str {
        self.descriptor().prefix
    }

    /// Field names declared by this kind
    pub fn fields(self) -> &'static [&'static str] {
        self.descriptor().fields
    }

    pub fn has_field(self, name: &str) -> bool {
        self.descriptor().has_field(name)
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKind::Type1 => write!(f, "Type1"),
            AssetKind::Type2 => write!(f, "Type2"),
            AssetKind::EquipmentPhase => write!(f, "EquipmentPhase"),
            AssetKind::EquipmentModule => write!(f, "EquipmentModule"),
        }
    }
}

impl FromStr for AssetKind {
    type Err = ShadowError;

    fn from_str(s: &str) -> Result<Self> {
        registry::lookup(s).map(|d| d.kind)
    }
}

/// Read access shared by every concrete record
///
/// This is what generic consumers see once an asset is erased. Field lookups
/// go through the static field table, never through reflection.
pub trait AssetModel: fmt::Debug + Send + Sync {
    fn kind(&self) -> AssetKind;

    /// Value of a declared field, `None` when unset or undeclared
    fn field(&self, name: &str) -> Option<&str>;

    fn as_any(&self) -> &dyn Any;

    fn prefix(&self) -> &'static str {
        self.kind().prefix()
    }

    fn name(&self) -> Option<&str> {
        self.field(FIELD_NAME)
    }

    fn has_field(&self, name: &str) -> bool {
        self.kind().has_field(name)
    }

    /// Declared fields paired with their values, in table order
    fn fields(&self) -> Vec<(&'static str, Option<&str>)> {
        self.kind()
            .fields()
            .iter()
            .map(|&f| (f, self.field(f)))
            .collect()
    }
}

/// Type1 asset
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Type1 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl Type1 {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl AssetModel for Type1 {
    fn kind(&self) -> AssetKind {
        AssetKind::Type1
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            FIELD_PREFIX => Some(self.prefix()),
            FIELD_NAME => self.name.as_deref(),
            _ => None,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Type2 asset, carries a suffix
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Type2 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    suffix: Option<String>,
}

impl Type2 {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }
}

impl AssetModel for Type2 {
    fn kind(&self) -> AssetKind {
        AssetKind::Type2
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            FIELD_PREFIX => Some(self.prefix()),
            FIELD_NAME => self.name.as_deref(),
            FIELD_SUFFIX => self.suffix.as_deref(),
            _ => None,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Equipment phase
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EquipmentPhase {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    unit: Option<String>,
}

impl EquipmentPhase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }
}

impl AssetModel for EquipmentPhase {
    fn kind(&self) -> AssetKind {
        AssetKind::EquipmentPhase
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            FIELD_PREFIX => Some(self.prefix()),
            FIELD_NAME => self.name.as_deref(),
            FIELD_UNIT => self.unit.as_deref(),
            _ => None,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Equipment module
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EquipmentModule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    suffix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    unit: Option<String>,
}

impl EquipmentModule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }
}

impl AssetModel for EquipmentModule {
    fn kind(&self) -> AssetKind {
        AssetKind::EquipmentModule
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            FIELD_PREFIX => Some(self.prefix()),
            FIELD_NAME => self.name.as_deref(),
            FIELD_SUFFIX => self.suffix.as_deref(),
            FIELD_UNIT => self.unit.as_deref(),
            _ => None,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_creation() {
        let t2 = Type2::new().with_name("Type2").with_suffix("Ext");
        assert_eq!(t2.name(), Some("Type2"));
        assert_eq!(t2.suffix(), Some("Ext"));
        assert_eq!(t2.prefix(), "2");
        assert_eq!(t2.kind(), AssetKind::Type2);
    }

    #[test]
    fn test_unset_fields_are_none() {
        let phase = EquipmentPhase::new();
        assert_eq!(phase.name(), None);
        assert_eq!(phase.unit(), None);
        assert_eq!(phase.field(FIELD_PREFIX), Some("EP"));
    }

    #[test]
    fn test_undeclared_field_lookup() {
        let t1 = Type1::new().with_name("Type1");
        assert!(!t1.has_field(FIELD_SUFFIX));
        assert_eq!(t1.field(FIELD_SUFFIX), None);
        assert_eq!(t1.field("Missing"), None);
    }

    #[test]
    fn test_fields_follow_table_order() {
        let module = EquipmentModule::new()
            .with_name("Mixer")
            .with_unit("U100");
        assert_eq!(
            module.fields(),
            vec![
                (FIELD_PREFIX, Some("EM")),
                (FIELD_NAME, Some("Mixer")),
                (FIELD_SUFFIX, None),
                (FIELD_UNIT, Some("U100")),
            ]
        );
    }

    #[test]
    fn test_kind_display_and_parse() {
        for kind in AssetKind::ALL {
            let parsed: AssetKind = kind.to_string().parse().unwrap();
            assert_eq!(parsed, kind);
        }
        assert!("Type3".parse::<AssetKind>().is_err());
    }

    #[test]
    fn test_record_serde_uses_field_names() {
        let t2 = Type2::new().with_name("Type2").with_suffix("Ext");
        let json = serde_json::to_value(&t2).unwrap();
        assert_eq!(json["Name"], "Type2");
        assert_eq!(json["Suffix"], "Ext");

        let t1: Type1 = serde_json::from_str("{}").unwrap();
        assert_eq!(t1, Type1::new());
    }
}
