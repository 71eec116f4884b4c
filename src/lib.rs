//! # shadow-om
//!
//! Shadow object models: a closed family of asset records erased behind one
//! handle, [`TaggedAsset`](shadow::TaggedAsset), so that templates and code
//! generators can be written once for every kind, while the concrete record
//! stays recoverable on demand.
//!
//! ## Example
//!
//! ```rust
//! use shadow_om::prelude::*;
//!
//! let asset = TaggedAsset::new(Type2::new().with_name("Type2").with_suffix("Ext"));
//! assert_eq!(asset.kind(), AssetKind::Type2);
//! assert!(asset.has_field("Suffix"));
//!
//! let t2: &Type2 = asset.try_cast().unwrap();
//! assert_eq!(t2.suffix(), Some("Ext"));
//! assert!(asset.try_cast::<Type1>().is_err());
//!
//! let banner = InfoBanner::default().render(&asset).unwrap();
//! assert!(banner.contains("2_Type2_Ext_Info.log"));
//! ```

pub mod asset;
pub mod config;
pub mod error;
pub mod registry;
pub mod render;
pub mod selection;
pub mod shadow;

pub mod prelude {
    //! Commonly used types and traits
    pub use crate::asset::{AssetKind, AssetModel, EquipmentModule, EquipmentPhase, Type1, Type2};
    pub use crate::config::{BannerConfig, Config};
    pub use crate::error::{Result, ShadowError};
    pub use crate::registry::KindDescriptor;
    pub use crate::render::{InfoBanner, Template};
    pub use crate::selection::ModelSet;
    pub use crate::shadow::{AssetRecord, TaggedAsset};
}
