// Terrain Dataset toolbox (engine alias `3d`): construction and maintenance
// of multi-resolution terrain datasets, and conversion out of them.
mod add_feature_class_to_terrain;
mod add_terrain_pyramid_level;
mod append_terrain_points;
mod build_terrain;
mod change_terrain_reference_scale;
mod change_terrain_resolution_bounds;
mod create_terrain;
mod delete_terrain_points;
mod remove_feature_class_from_terrain;
mod remove_terrain_pyramid_level;
mod replace_terrain_points;
mod terrain_to_points;
mod terrain_to_raster;
mod terrain_to_tin;

pub use self::add_feature_class_to_terrain::AddFeatureClassToTerrain;
pub use self::add_terrain_pyramid_level::AddTerrainPyramidLevel;
pub use self::append_terrain_points::AppendTerrainPoints;
pub use self::build_terrain::BuildTerrain;
pub use self::change_terrain_reference_scale::ChangeTerrainReferenceScale;
pub use self::change_terrain_resolution_bounds::ChangeTerrainResolutionBounds;
pub use self::create_terrain::CreateTerrain;
pub use self::delete_terrain_points::DeleteTerrainPoints;
pub use self::remove_feature_class_from_terrain::RemoveFeatureClassFromTerrain;
pub use self::remove_terrain_pyramid_level::RemoveTerrainPyramidLevel;
pub use self::replace_terrain_points::ReplaceTerrainPoints;
pub use self::terrain_to_points::TerrainToPoints;
pub use self::terrain_to_raster::TerrainToRaster;
pub use self::terrain_to_tin::TerrainToTin;

#[cfg(test)]
mod tests {
    use crate::tools::*;

    #[test]
    fn create_terrain_parameter_order_and_defaults() {
        let tool = ToolManager::new("", &false)
            .unwrap()
            .get_tool("CreateTerrain")
            .unwrap();
        let names: Vec<String> = tool.parameters().iter().map(|p| p.name.clone()).collect();
        assert_eq!(
            names,
            vec![
                "Input Feature Dataset",
                "Output Terrain Name",
                "Average Point Spacing",
                "Maximum Overview Size",
                "Pyramid Type",
                "Windowsize Method",
                "Secondary Thinning Method",
                "Secondary Thinning Threshold",
                "Output Terrain"
            ]
        );
        let pyramid_type = &tool.parameters()[4];
        assert_eq!(pyramid_type.default_value.as_deref(), Some("WINDOWSIZE"));
        match &pyramid_type.parameter_type {
            ParameterType::CodedValue(domain) => {
                assert_eq!(domain.codes(), vec!["WINDOWSIZE", "ZTOLERANCE"]);
            }
            other => panic!("unexpected parameter type {:?}", other),
        }
    }

    #[test]
    fn surface_feature_type_domain_tokens() {
        let tool = ToolManager::new("", &false)
            .unwrap()
            .get_tool("AddFeatureClassToTerrain")
            .unwrap();
        let sf_type = tool
            .parameters()
            .iter()
            .find(|p| p.name == "Surface Feature Type")
            .unwrap();
        match &sf_type.parameter_type {
            ParameterType::CodedValue(domain) => {
                for code in [
                    "MASS_POINTS",
                    "ON_SURFACE",
                    "HARDLINE",
                    "SOFTLINE",
                    "HARDCLIP",
                    "SOFTCLIP",
                    "HARDERASE",
                    "SOFTERASE",
                    "HARDREPLACE",
                    "SOFTREPLACE",
                    "ANCHORPOINTS",
                ] {
                    assert!(domain.contains(code), "missing token {}", code);
                }
            }
            other => panic!("unexpected parameter type {:?}", other),
        }
        assert_eq!(sf_type.default_value.as_deref(), Some("MASS_POINTS"));
    }

    #[test]
    fn terrain_edit_tools_end_with_a_derived_terrain() {
        let tm = ToolManager::new("", &false).unwrap();
        for name in [
            "AddFeatureClassToTerrain",
            "AddTerrainPyramidLevel",
            "AppendTerrainPoints",
            "BuildTerrain",
            "ChangeTerrainReferenceScale",
            "ChangeTerrainResolutionBounds",
            "CreateTerrain",
            "DeleteTerrainPoints",
            "RemoveFeatureClassFromTerrain",
            "RemoveTerrainPyramidLevel",
            "ReplaceTerrainPoints",
        ] {
            let tool = tm.get_tool(name).unwrap();
            let last = tool.parameters().last().unwrap();
            assert_eq!(last.direction, ParameterDirection::Derived, "{}", name);
            assert_eq!(last.parameter_type, ParameterType::TerrainDataset, "{}", name);
            assert_eq!(tool.get_alias(), "3d", "{}", name);
            assert_eq!(tool.get_toolbox(), "Terrain Dataset", "{}", name);
        }
    }

    #[test]
    fn terrain_to_raster_environments() {
        let tool = ToolManager::new("", &false)
            .unwrap()
            .get_tool("TerrainToRaster")
            .unwrap();
        let keys: Vec<&str> = tool
            .valid_environments()
            .iter()
            .map(|k| k.as_key())
            .collect();
        assert_eq!(
            keys,
            vec![
                "workspace",
                "scratchWorkspace",
                "extent",
                "cellSize",
                "snapRaster",
                "outputCoordinateSystem",
                "compression",
                "pyramid",
                "nodata",
                "tileSize",
                "parallelProcessingFactor"
            ]
        );
    }
}
