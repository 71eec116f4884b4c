//! Template collaborator interface and the generated-file banner
//!
//! Templates take the erased [`TaggedAsset`] as their model, branch on
//! `kind()`/`has_field()` and recover the concrete record only where they
//! need kind-specific data.

use crate::asset::{AssetModel, FIELD_SUFFIX};
use crate::config::BannerConfig;
use crate::error::Result;
use crate::shadow::TaggedAsset;

/// A template that renders one shadow model
pub trait Template: Send + Sync {
    fn render(&self, model: &TaggedAsset) -> Result<String>;

    /// Get template name
    fn name(&self) -> &str {
        "Template"
    }
}

/// Comment banner placed at the top of generated files
#[derive(Debug, Clone, Default)]
pub struct InfoBanner {
    config: BannerConfig,
}

impl InfoBanner {
    pub fn new(config: BannerConfig) -> Self {
        Self { config }
    }

    /// Generated file name, e.g. `2_Type2_Ext_Info.log`
    ///
    /// The suffix segment is only emitted for kinds that declare a suffix
    /// and have one set.
    pub fn file_name(&self, model: &dyn AssetModel) -> String {
        let suffix = if model.has_field(FIELD_SUFFIX) {
            model
                .field(FIELD_SUFFIX)
                .map(|s| format!("{}_", s))
                .unwrap_or_default()
        } else {
            String::new()
        };

        format!(
            "{}_{}_{}{}.{}",
            model.prefix(),
            model.name().unwrap_or_default(),
            suffix,
            self.config.stem,
            self.config.extension
        )
    }
}

impl Template for InfoBanner {
    fn render(&self, model: &TaggedAsset) -> Result<String> {
        let file = self.file_name(model.recover());
        log::debug!("Rendering banner for {}: {}", model, file);

        Ok(format!(
            "<!--\n@file {}\n@brief {}\n{}\n-->\n",
            file, self.config.brief, self.config.warning
        ))
    }

    fn name(&self) -> &str {
        "InfoBanner"
    }
}

/// Render every model with the same template
pub fn render_all<T: Template + ?Sized>(template: &T, models: &[TaggedAsset]) -> Result<Vec<String>> {
    models.iter().map(|m| template.render(m)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::{EquipmentModule, EquipmentPhase, Type1, Type2};

    #[test]
    fn test_file_name_without_suffix_field() {
        let banner = InfoBanner::default();
        let t1 = Type1::new().with_name("Type1");
        assert_eq!(banner.file_name(&t1), "1_Type1_Info.log");
    }

    #[test]
    fn test_file_name_with_suffix() {
        let banner = InfoBanner::default();
        let t2 = Type2::new().with_name("Type2").with_suffix("Ext");
        assert_eq!(banner.file_name(&t2), "2_Type2_Ext_Info.log");
    }

    #[test]
    fn test_file_name_unset_fields() {
        let banner = InfoBanner::default();
        assert_eq!(banner.file_name(&Type2::new().with_name("Type2")), "2_Type2_Info.log");
        assert_eq!(banner.file_name(&EquipmentPhase::new()), "EP__Info.log");
        assert_eq!(
            banner.file_name(&EquipmentModule::new().with_name("Mixer").with_suffix("A")),
            "EM_Mixer_A_Info.log"
        );
    }

    #[test]
    fn test_render_banner() {
        let banner = InfoBanner::default();
        let out = banner
            .render(&TaggedAsset::new(Type1::new().with_name("Type1")))
            .unwrap();
        assert_eq!(
            out,
            "<!--\n@file 1_Type1_Info.log\n@brief This file contains general information.\n\
             Warning! This is a generated file. Manual changes will be omitted.\n-->\n"
        );
    }

    #[test]
    fn test_render_with_config() {
        let banner = InfoBanner::new(BannerConfig {
            brief: "Module overview.".to_string(),
            stem: "Readme".to_string(),
            extension: "md".to_string(),
            ..BannerConfig::default()
        });
        let out = banner
            .render(&TaggedAsset::new(Type2::new().with_name("Pump").with_suffix("B")))
            .unwrap();
        assert!(out.contains("@file 2_Pump_B_Readme.md"));
        assert!(out.contains("@brief Module overview."));
    }

    #[test]
    fn test_render_all_through_trait_object() {
        let template: Box<dyn Template> = Box::new(InfoBanner::default());
        let models = vec![
            TaggedAsset::new(Type1::new().with_name("Type1")),
            TaggedAsset::new(Type2::new().with_name("Type2").with_suffix("Ext")),
        ];
        let out = render_all(template.as_ref(), &models).unwrap();
        assert_eq!(out.len(), 2);
        assert!(out[1].contains("2_Type2_Ext_Info.log"));
        assert_eq!(template.name(), "InfoBanner");
    }
}
