// Cartography toolbox (engine alias `cartography`): generalization and
// refinement of vector features for display at smaller scales.
mod aggregate_points;
mod aggregate_polygons;
mod collapse_dual_lines_to_centerline;
mod create_cartographic_partitions;
mod delineate_built_up_areas;
mod merge_divided_roads;
mod simplify_building;
mod simplify_line;
mod simplify_polygon;
mod smooth_line;
mod smooth_polygon;
mod thin_road_network;

pub use self::aggregate_points::AggregatePoints;
pub use self::aggregate_polygons::AggregatePolygons;
pub use self::collapse_dual_lines_to_centerline::CollapseDualLinesToCenterline;
pub use self::create_cartographic_partitions::CreateCartographicPartitions;
pub use self::delineate_built_up_areas::DelineateBuiltUpAreas;
pub use self::merge_divided_roads::MergeDividedRoads;
pub use self::simplify_building::SimplifyBuilding;
pub use self::simplify_line::SimplifyLine;
pub use self::simplify_polygon::SimplifyPolygon;
pub use self::smooth_line::SmoothLine;
pub use self::smooth_polygon::SmoothPolygon;
pub use self::thin_road_network::ThinRoadNetwork;

#[cfg(test)]
mod tests {
    use crate::tools::*;

    #[test]
    fn simplify_algorithms_differ_between_line_and_polygon() {
        let tm = ToolManager::new("", &false).unwrap();
        let line = tm.get_tool("SimplifyLine").unwrap();
        let polygon = tm.get_tool("SimplifyPolygon").unwrap();
        let codes_of = |tool: &Box<dyn GeoprocessingTool>| -> Vec<String> {
            let p = tool
                .parameters()
                .iter()
                .find(|p| p.name == "Simplification Algorithm")
                .unwrap();
            match &p.parameter_type {
                ParameterType::CodedValue(domain) => domain.codes(),
                other => panic!("unexpected parameter type {:?}", other),
            }
        };
        assert_eq!(
            codes_of(&line),
            vec!["POINT_REMOVE", "BEND_SIMPLIFY", "WEIGHTED_AREA"]
        );
        assert_eq!(
            codes_of(&polygon),
            vec![
                "POINT_REMOVE",
                "BEND_SIMPLIFY",
                "WEIGHTED_AREA",
                "EFFECTIVE_AREA"
            ]
        );
    }

    #[test]
    fn smooth_tools_share_algorithm_domain_and_defaults() {
        let tm = ToolManager::new("", &false).unwrap();
        for name in ["SmoothLine", "SmoothPolygon"] {
            let tool = tm.get_tool(name).unwrap();
            let alg = tool
                .parameters()
                .iter()
                .find(|p| p.name == "Smoothing Algorithm")
                .unwrap();
            assert_eq!(alg.default_value.as_deref(), Some("PAEK"), "{}", name);
            match &alg.parameter_type {
                ParameterType::CodedValue(domain) => {
                    assert!(domain.contains("PAEK"));
                    assert!(domain.contains("BEZIER_INTERPOLATION"));
                }
                other => panic!("unexpected parameter type {:?}", other),
            }
            let err = tool
                .parameters()
                .iter()
                .find(|p| p.name == "Topological Error Handling")
                .unwrap();
            assert_eq!(err.default_value.as_deref(), Some("NO_CHECK"), "{}", name);
        }
    }

    #[test]
    fn cartography_tools_use_the_cartography_alias() {
        let tm = ToolManager::new("", &false).unwrap();
        for name in [
            "AggregatePoints",
            "AggregatePolygons",
            "CollapseDualLinesToCenterline",
            "CreateCartographicPartitions",
            "DelineateBuiltUpAreas",
            "MergeDividedRoads",
            "SimplifyBuilding",
            "SimplifyLine",
            "SimplifyPolygon",
            "SmoothLine",
            "SmoothPolygon",
            "ThinRoadNetwork",
        ] {
            let tool = tm.get_tool(name).unwrap();
            assert_eq!(tool.get_alias(), "cartography", "{}", name);
            assert_eq!(tool.get_toolbox(), "Cartography", "{}", name);
            assert_eq!(
                tool.get_execute_name(),
                format!("cartography.{}", name)
            );
        }
    }

    #[test]
    fn thin_road_network_derives_updated_features() {
        let tool = ToolManager::new("", &false)
            .unwrap()
            .get_tool("ThinRoadNetwork")
            .unwrap();
        let last = tool.parameters().last().unwrap();
        assert_eq!(last.direction, ParameterDirection::Derived);
        assert!(last.flags.is_empty());
    }

    #[test]
    fn aggregate_polygons_requires_distance_before_optional_filters() {
        let tool = ToolManager::new("", &false)
            .unwrap()
            .get_tool("AggregatePolygons")
            .unwrap();
        let dirs: Vec<ParameterDirection> = tool
            .parameters()
            .iter()
            .map(|p| p.direction.clone())
            .collect();
        assert_eq!(
            dirs,
            vec![
                ParameterDirection::Required,
                ParameterDirection::Required,
                ParameterDirection::Required,
                ParameterDirection::Optional,
                ParameterDirection::Optional,
                ParameterDirection::Optional,
                ParameterDirection::Optional,
                ParameterDirection::Derived,
            ]
        );
    }
}
