//! Shadow object model
//!
//! [`TaggedAsset`] erases the concrete record type so template and codegen
//! code can take one model type for every kind. The stored variant is the
//! kind, so the original record is always recoverable:
//!
//! - [`TaggedAsset::recover`] hands back the record as `&dyn AssetModel`
//! - [`TaggedAsset::try_cast`] hands back `&K` when the kind matches
//! - [`TaggedAsset::match_any`] / [`TaggedAsset::select_into`] test the kind
//!   against a caller-supplied candidate list
//!
//! A mismatch is an ordinary `Err`/`None`, never a panic.

use crate::asset::{AssetKind, AssetModel, EquipmentModule, EquipmentPhase, Type1, Type2};
use crate::error::{Result, ShadowError};
use crate::selection::ModelSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Erased handle over one concrete asset record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum TaggedAsset {
    Type1(Type1),
    Type2(Type2),
    EquipmentPhase(EquipmentPhase),
    EquipmentModule(EquipmentModule),
}

/// Concrete record that can be wrapped in and recovered from a [`TaggedAsset`]
pub trait AssetRecord: AssetModel + Clone + Into<TaggedAsset> + 'static {
    /// Kind stored for this record type
    const KIND: AssetKind;

    /// Borrow the record if `asset` holds this kind
    fn from_tagged(asset: &TaggedAsset) -> Option<&Self>;

    /// Take the record out if `asset` holds this kind, else give the handle back
    fn from_tagged_owned(asset: TaggedAsset) -> std::result::Result<Self, TaggedAsset>;
}

macro_rules! tagged_record {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for TaggedAsset {
                fn from(record: $variant) -> Self {
                    TaggedAsset::$variant(record)
                }
            }

            impl AssetRecord for $variant {
                const KIND: AssetKind = AssetKind::$variant;

                fn from_tagged(asset: &TaggedAsset) -> Option<&Self> {
                    match asset {
                        TaggedAsset::$variant(record) => Some(record),
                        _ => None,
                    }
                }

                fn from_tagged_owned(
                    asset: TaggedAsset,
                ) -> std::result::Result<Self, TaggedAsset> {
                    match asset {
                        TaggedAsset::$variant(record) => Ok(record),
                        other => Err(other),
                    }
                }
            }
        )*
    };
}

tagged_record!(Type1, Type2, EquipmentPhase, EquipmentModule);

impl TaggedAsset {
    /// Wrap an already-built record
    pub fn new(record: impl Into<TaggedAsset>) -> Self {
        record.into()
    }

    pub fn kind(&self) -> AssetKind {
        match self {
            TaggedAsset::Type1(_) => AssetKind::Type1,
            TaggedAsset::Type2(_) => AssetKind::Type2,
            TaggedAsset::EquipmentPhase(_) => AssetKind::EquipmentPhase,
            TaggedAsset::EquipmentModule(_) => AssetKind::EquipmentModule,
        }
    }

    /// Type name of the wrapped record
    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    pub fn is(&self, kind: AssetKind) -> bool {
        self.kind() == kind
    }

    /// The wrapped record
    pub fn recover(&self) -> &dyn AssetModel {
        match self {
            TaggedAsset::Type1(record) => record,
            TaggedAsset::Type2(record) => record,
            TaggedAsset::EquipmentPhase(record) => record,
            TaggedAsset::EquipmentModule(record) => record,
        }
    }

    /// Owned counterpart of [`recover`](Self::recover)
    pub fn into_inner(self) -> Box<dyn AssetModel> {
        match self {
            TaggedAsset::Type1(record) => Box::new(record),
            TaggedAsset::Type2(record) => Box::new(record),
            TaggedAsset::EquipmentPhase(record) => Box::new(record),
            TaggedAsset::EquipmentModule(record) => Box::new(record),
        }
    }

    /// Whether the wrapped kind declares `name`
    pub fn has_field(&self, name: &str) -> bool {
        self.kind().has_field(name)
    }

    /// Borrow the record as `K`
    ///
    /// Fails with [`ShadowError::KindMismatch`] when the asset holds another
    /// kind.
    pub fn try_cast<K: AssetRecord>(&self) -> Result<&K> {
        K::from_tagged(self).ok_or_else(|| self.mismatch(K::KIND))
    }

    /// Take the record out as `K`
    pub fn try_into_model<K: AssetRecord>(self) -> Result<K> {
        K::from_tagged_owned(self).map_err(|asset| asset.mismatch(K::KIND))
    }

    fn mismatch(&self, expected: AssetKind) -> ShadowError {
        log::debug!("Cannot cast {} asset to {}", self.kind(), expected);
        ShadowError::KindMismatch {
            expected,
            actual: self.kind(),
        }
    }

    /// Find this asset's kind among `candidates`
    ///
    /// Returns `None` when the kind is not a candidate; an empty candidate
    /// list never matches.
    pub fn match_any<I>(&self, candidates: I) -> Option<(AssetKind, &dyn AssetModel)>
    where
        I: IntoIterator<Item = AssetKind>,
    {
        let kind = self.kind();
        let found = candidates.into_iter().any(|c| c == kind);
        log::debug!("Matching {} asset against candidates: {}", kind, found);
        found.then(|| (kind, self.recover()))
    }

    /// One slot per candidate, filled where the candidate equals this kind
    pub fn select_into(&self, candidates: &[AssetKind]) -> Vec<Option<&dyn AssetModel>> {
        let kind = self.kind();
        candidates
            .iter()
            .map(|&c| (c == kind).then(|| self.recover()))
            .collect()
    }

    /// Typed two-way selection, at most one side is populated
    pub fn select2<A: AssetRecord, B: AssetRecord>(&self) -> (Option<&A>, Option<&B>) {
        (A::from_tagged(self), B::from_tagged(self))
    }

    /// Candidate kinds mapped to the recovered record where they match
    pub fn populate(&self, candidates: &[AssetKind]) -> ModelSet<'_> {
        ModelSet::new(self.kind(), candidates, self.recover())
    }
}

impl fmt::Display for TaggedAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({})",
            self.kind(),
            self.recover().name().unwrap_or_default()
        )
    }
}

/// Comma-joined kind names of a shadow collection
pub fn kind_names(assets: &[TaggedAsset]) -> String {
    assets
        .iter()
        .map(TaggedAsset::type_name)
        .collect::<Vec<_>>()
        .join(",")
}

/// Recovered records of a shadow collection, in order
pub fn roots(assets: &[TaggedAsset]) -> Vec<&dyn AssetModel> {
    assets.iter().map(TaggedAsset::recover).collect()
}

/// Assets of a single kind
pub fn of_kind(assets: &[TaggedAsset], kind: AssetKind) -> impl Iterator<Item = &TaggedAsset> {
    assets.iter().filter(move |a| a.is(kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::FIELD_SUFFIX;
    use std::collections::HashSet;

    fn type1() -> Type1 {
        Type1::new().with_name("Type1")
    }

    fn type2() -> Type2 {
        Type2::new().with_name("Type2").with_suffix("Ext")
    }

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(TaggedAsset::new(type1()).kind(), AssetKind::Type1);
        assert_eq!(TaggedAsset::new(type2()).kind(), AssetKind::Type2);
        assert_eq!(
            TaggedAsset::new(EquipmentPhase::new()).kind(),
            AssetKind::EquipmentPhase
        );
        assert_eq!(
            TaggedAsset::new(EquipmentModule::new()).kind(),
            AssetKind::EquipmentModule
        );
    }

    #[test]
    fn test_recover_returns_wrapped_record() {
        let asset = TaggedAsset::new(type2());
        let root = asset.recover();
        assert_eq!(root.kind(), AssetKind::Type2);
        assert_eq!(root.as_any().downcast_ref::<Type2>(), Some(&type2()));
        assert_eq!(root.fields(), type2().fields());
    }

    #[test]
    fn test_into_inner() {
        let root = TaggedAsset::new(type1()).into_inner();
        assert_eq!(root.as_any().downcast_ref::<Type1>(), Some(&type1()));
    }

    #[test]
    fn test_try_cast() {
        let asset = TaggedAsset::new(type1());
        assert_eq!(asset.try_cast::<Type1>().unwrap(), &type1());

        match asset.try_cast::<Type2>() {
            Err(ShadowError::KindMismatch { expected, actual }) => {
                assert_eq!(expected, AssetKind::Type2);
                assert_eq!(actual, AssetKind::Type1);
            }
            other => panic!("expected kind mismatch, got {:?}", other),
        }
        assert!(asset.try_cast::<EquipmentModule>().is_err());
    }

    #[test]
    fn test_try_into_model() {
        let asset = TaggedAsset::new(type2());
        assert!(asset.clone().try_into_model::<Type1>().is_err());
        assert_eq!(asset.try_into_model::<Type2>().unwrap(), type2());
    }

    #[test]
    fn test_has_field() {
        let t1 = TaggedAsset::new(type1());
        let t2 = TaggedAsset::new(type2());
        assert!(!t1.has_field(FIELD_SUFFIX));
        assert!(t2.has_field(FIELD_SUFFIX));
        assert!(t2.has_field("Name"));
        assert!(!t2.has_field("Missing"));
    }

    #[test]
    fn test_match_any() {
        let asset = TaggedAsset::new(type2());

        let (kind, root) = asset.match_any([AssetKind::Type1, AssetKind::Type2]).unwrap();
        assert_eq!(kind, AssetKind::Type2);
        assert_eq!(root.as_any().downcast_ref::<Type2>(), Some(&type2()));

        assert!(asset.match_any([]).is_none());
        assert!(asset.match_any([AssetKind::Type1]).is_none());

        let set: HashSet<AssetKind> = [AssetKind::Type2].into_iter().collect();
        assert!(asset.match_any(set).is_some());
    }

    #[test]
    fn test_select_into() {
        let asset = TaggedAsset::new(type2());
        let slots = asset.select_into(&[AssetKind::Type1, AssetKind::Type2]);
        assert_eq!(slots.len(), 2);
        assert!(slots[0].is_none());
        assert_eq!(
            slots[1].and_then(|m| m.as_any().downcast_ref::<Type2>()),
            Some(&type2())
        );

        assert!(asset.select_into(&[]).is_empty());
        assert!(asset
            .select_into(&[AssetKind::EquipmentPhase, AssetKind::Type1])
            .iter()
            .all(Option::is_none));
    }

    #[test]
    fn test_select2() {
        let asset = TaggedAsset::new(type2());
        let (t1, t2) = asset.select2::<Type1, Type2>();
        assert!(t1.is_none());
        assert_eq!(t2, Some(&type2()));
    }

    #[test]
    fn test_collection_helpers() {
        let shadows = vec![TaggedAsset::new(type1()), TaggedAsset::new(type2())];
        assert_eq!(kind_names(&shadows), "Type1,Type2");
        assert_eq!(of_kind(&shadows, AssetKind::Type2).count(), 1);
        assert_eq!(of_kind(&shadows, AssetKind::EquipmentPhase).count(), 0);

        let recovered = roots(&shadows);
        assert_eq!(recovered[0].name(), Some("Type1"));
        assert_eq!(recovered[1].field(FIELD_SUFFIX), Some("Ext"));
    }

    #[test]
    fn test_tagged_serde() {
        let json = r#"{"kind":"Type2","Name":"Type2","Suffix":"Ext"}"#;
        let asset: TaggedAsset = serde_json::from_str(json).unwrap();
        assert_eq!(asset, TaggedAsset::new(type2()));

        let value = serde_json::to_value(TaggedAsset::new(type1())).unwrap();
        assert_eq!(value["kind"], "Type1");
        assert_eq!(value["Name"], "Type1");
    }

    #[test]
    fn test_display() {
        assert_eq!(TaggedAsset::new(type1()).to_string(), "Type1(Type1)");
        assert_eq!(TaggedAsset::new(EquipmentPhase::new()).to_string(), "EquipmentPhase()");
    }
}
