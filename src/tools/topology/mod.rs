// Topology toolbox (engine alias `management`): creation and maintenance of
// geodatabase topologies and their integrity rules.
mod add_feature_class_to_topology;
mod add_rule_to_topology;
mod create_topology;
mod export_topology_errors;
mod remove_feature_class_from_topology;
mod remove_rule_from_topology;
mod set_cluster_tolerance;
mod validate_topology;

pub use self::add_feature_class_to_topology::AddFeatureClassToTopology;
pub use self::add_rule_to_topology::AddRuleToTopology;
pub use self::create_topology::CreateTopology;
pub use self::export_topology_errors::ExportTopologyErrors;
pub use self::remove_feature_class_from_topology::RemoveFeatureClassFromTopology;
pub use self::remove_rule_from_topology::RemoveRuleFromTopology;
pub use self::set_cluster_tolerance::SetClusterTolerance;
pub use self::validate_topology::ValidateTopology;

#[cfg(test)]
mod tests {
    use crate::tools::*;

    #[test]
    fn topology_edit_tools_derive_an_updated_topology() {
        let tm = ToolManager::new("", &false).unwrap();
        for name in [
            "AddFeatureClassToTopology",
            "AddRuleToTopology",
            "CreateTopology",
            "RemoveFeatureClassFromTopology",
            "RemoveRuleFromTopology",
            "SetClusterTolerance",
            "ValidateTopology",
        ] {
            let tool = tm.get_tool(name).unwrap();
            let last = tool.parameters().last().unwrap();
            assert_eq!(last.direction, ParameterDirection::Derived, "{}", name);
            assert_eq!(last.parameter_type, ParameterType::Topology, "{}", name);
            assert_eq!(tool.get_alias(), "management", "{}", name);
        }
    }

    #[test]
    fn rule_type_codes_are_full_rule_phrases() {
        let tool = ToolManager::new("", &false)
            .unwrap()
            .get_tool("AddRuleToTopology")
            .unwrap();
        let rule = tool
            .parameters()
            .iter()
            .find(|p| p.name == "Rule Type")
            .unwrap();
        match &rule.parameter_type {
            ParameterType::CodedValue(domain) => {
                assert!(domain.contains("Must Not Overlap (Area)"));
                assert!(domain.contains("Must Not Have Dangles (Line)"));
                assert!(domain.contains("Must Be Properly Inside (Point-Area)"));
                assert!(!domain.contains("MUST_NOT_OVERLAP"));
            }
            other => panic!("unexpected parameter type {:?}", other),
        }
    }

    #[test]
    fn export_topology_errors_derives_three_outputs() {
        let tool = ToolManager::new("", &false)
            .unwrap()
            .get_tool("ExportTopologyErrors")
            .unwrap();
        let derived: Vec<&ToolParameter> = tool
            .parameters()
            .iter()
            .filter(|p| p.direction == ParameterDirection::Derived)
            .collect();
        assert_eq!(derived.len(), 3);
        assert!(derived.iter().all(|p| p.flags.is_empty()));
    }

    #[test]
    fn validate_topology_honors_the_extent_environment() {
        let tool = ToolManager::new("", &false)
            .unwrap()
            .get_tool("ValidateTopology")
            .unwrap();
        assert!(tool
            .valid_environments()
            .contains(&EnvironmentKey::Extent));
        let visible = tool
            .parameters()
            .iter()
            .find(|p| p.name == "Visible Extent")
            .unwrap();
        assert_eq!(visible.default_value.as_deref(), Some("Full_Extent"));
    }
}
