//! Populated model sets
//!
//! A [`ModelSet`] is what a template gets when it asks a shadow asset to
//! populate a list of candidate kinds: every candidate is a key, and only the
//! asset's own kind carries the recovered record. Looking up a kind that was
//! never a candidate yields `None` as well, so callers never need a
//! contains-then-index dance.

use crate::asset::{AssetKind, AssetModel};
use crate::error::{Result, ShadowError};
use crate::shadow::AssetRecord;
use hashbrown::HashMap;

/// Candidate kinds mapped to the recovered record, at most one populated
#[derive(Debug)]
pub struct ModelSet<'a> {
    kind: AssetKind,
    /// Candidates in caller order, duplicates dropped
    candidates: Vec<AssetKind>,
    models: HashMap<AssetKind, Option<&'a dyn AssetModel>>,
}

impl<'a> ModelSet<'a> {
    pub(crate) fn new(
        kind: AssetKind,
        candidates: &[AssetKind],
        model: &'a dyn AssetModel,
    ) -> Self {
        let mut ordered = Vec::with_capacity(candidates.len());
        let mut models = HashMap::with_capacity(candidates.len());

        for &candidate in candidates {
            if models.contains_key(&candidate) {
                continue;
            }
            ordered.push(candidate);
            models.insert(candidate, (candidate == kind).then_some(model));
        }

        Self {
            kind,
            candidates: ordered,
            models,
        }
    }

    /// Kind of the asset that populated this set
    pub fn source_kind(&self) -> AssetKind {
        self.kind
    }

    /// Recovered record for `kind`, `None` if absent or not populated
    pub fn get(&self, kind: AssetKind) -> Option<&'a dyn AssetModel> {
        self.models.get(&kind).copied().flatten()
    }

    /// Recovered record as its concrete type
    pub fn typed<K: AssetRecord>(&self) -> Option<&'a K> {
        self.get(K::KIND)
            .and_then(|model| model.as_any().downcast_ref::<K>())
    }

    pub fn contains(&self, kind: AssetKind) -> bool {
        self.models.contains_key(&kind)
    }

    pub fn any_populated(&self) -> bool {
        self.models.values().any(Option::is_some)
    }

    /// The populated entry, or [`ShadowError::NoMatchingCandidate`]
    pub fn require_any(&self) -> Result<(AssetKind, &'a dyn AssetModel)> {
        self.get(self.kind)
            .map(|model| (self.kind, model))
            .ok_or_else(|| ShadowError::NoMatchingCandidate {
                kind: self.kind,
                candidates: self.candidates.clone(),
            })
    }

    pub fn candidates(&self) -> &[AssetKind] {
        &self.candidates
    }

    /// Populated records in candidate order
    pub fn values(&self) -> Vec<&'a dyn AssetModel> {
        self.candidates
            .iter()
            .filter_map(|&kind| self.get(kind))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
