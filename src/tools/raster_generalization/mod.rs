// Raster Generalization toolbox (engine alias `sa`): cleanup of categorical
// rasters, mostly classified imagery, before vectorization or analysis.
mod aggregate;
mod boundary_clean;
mod expand;
mod majority_filter;
mod nibble;
mod region_group;
mod shrink;
mod thin;

pub use self::aggregate::Aggregate;
pub use self::boundary_clean::BoundaryClean;
pub use self::expand::Expand;
pub use self::majority_filter::MajorityFilter;
pub use self::nibble::Nibble;
pub use self::region_group::RegionGroup;
pub use self::shrink::Shrink;
pub use self::thin::Thin;

#[cfg(test)]
mod tests {
    use crate::tools::*;

    #[test]
    fn generalization_tools_use_the_sa_alias() {
        let tm = ToolManager::new("", &false).unwrap();
        for name in [
            "Aggregate",
            "BoundaryClean",
            "Expand",
            "MajorityFilter",
            "Nibble",
            "RegionGroup",
            "Shrink",
            "Thin",
        ] {
            let tool = tm.get_tool(name).unwrap();
            assert_eq!(tool.get_alias(), "sa", "{}", name);
            assert_eq!(tool.get_toolbox(), "Raster Generalization", "{}", name);
            assert_eq!(tool.parameters()[0].name, "Input Raster", "{}", name);
            assert!(
                tool.valid_environments().contains(&EnvironmentKey::CellSize),
                "{}",
                name
            );
        }
    }

    #[test]
    fn expand_and_shrink_mirror_each_other() {
        let tm = ToolManager::new("", &false).unwrap();
        for name in ["Expand", "Shrink"] {
            let tool = tm.get_tool(name).unwrap();
            let cells = tool
                .parameters()
                .iter()
                .find(|p| p.name == "Number of Cells")
                .unwrap();
            assert_eq!(cells.parameter_type, ParameterType::Long, "{}", name);
            assert_eq!(cells.direction, ParameterDirection::Required, "{}", name);
            let zones = tool
                .parameters()
                .iter()
                .find(|p| p.name == "Zone Values")
                .unwrap();
            assert_eq!(zones.parameter_type, ParameterType::StringList, "{}", name);
            assert_eq!(zones.direction, ParameterDirection::Required, "{}", name);
        }
    }

    #[test]
    fn region_group_connectivity_defaults_to_four_within() {
        let tool = ToolManager::new("", &false)
            .unwrap()
            .get_tool("RegionGroup")
            .unwrap();
        let neighbors = tool
            .parameters()
            .iter()
            .find(|p| p.name == "Number of Neighbors")
            .unwrap();
        match &neighbors.parameter_type {
            ParameterType::CodedValue(domain) => {
                assert_eq!(domain.codes(), vec!["FOUR", "EIGHT"]);
            }
            other => panic!("unexpected parameter type {:?}", other),
        }
        assert_eq!(neighbors.default_value.as_deref(), Some("FOUR"));
        let connectivity = tool
            .parameters()
            .iter()
            .find(|p| p.name == "Zone Connectivity")
            .unwrap();
        assert_eq!(connectivity.default_value.as_deref(), Some("WITHIN"));
        let excluded = tool.parameters().last().unwrap();
        assert_eq!(excluded.parameter_type, ParameterType::Double);
        assert_eq!(excluded.direction, ParameterDirection::Optional);
        assert!(excluded.default_value.is_none());
    }

    #[test]
    fn aggregate_statistics_cover_the_block_summaries() {
        let tool = ToolManager::new("", &false)
            .unwrap()
            .get_tool("Aggregate")
            .unwrap();
        let stat = tool
            .parameters()
            .iter()
            .find(|p| p.name == "Aggregation Technique")
            .unwrap();
        match &stat.parameter_type {
            ParameterType::CodedValue(domain) => {
                assert_eq!(
                    domain.codes(),
                    vec!["SUM", "MAXIMUM", "MEAN", "MEDIAN", "MINIMUM"]
                );
                assert!(domain.contains("MEDIAN"));
                assert!(!domain.contains("RANGE"));
            }
            other => panic!("unexpected parameter type {:?}", other),
        }
        assert_eq!(stat.default_value.as_deref(), Some("SUM"));
    }

    #[test]
    fn thin_defaults_suit_scanned_contours() {
        let tool = ToolManager::new("", &false)
            .unwrap()
            .get_tool("Thin")
            .unwrap();
        let corners = tool
            .parameters()
            .iter()
            .find(|p| p.name == "Shape for Corners")
            .unwrap();
        assert_eq!(corners.default_value.as_deref(), Some("ROUND"));
        let background = tool
            .parameters()
            .iter()
            .find(|p| p.name == "Background Value")
            .unwrap();
        assert_eq!(background.default_value.as_deref(), Some("ZERO"));
    }
}
