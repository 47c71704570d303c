// Territory Design toolbox (engine alias `td`): construction and solving of
// balanced territory hierarchies over a base layer.
mod add_balance_variables;
mod add_territory_level;
mod create_territory_solution;
mod rebalance_territories;
mod set_territory_distance_parameters;
mod solve_territories;

pub use self::add_balance_variables::AddBalanceVariables;
pub use self::add_territory_level::AddTerritoryLevel;
pub use self::create_territory_solution::CreateTerritorySolution;
pub use self::rebalance_territories::RebalanceTerritories;
pub use self::set_territory_distance_parameters::SetTerritoryDistanceParameters;
pub use self::solve_territories::SolveTerritories;

#[cfg(test)]
mod tests {
    use crate::tools::*;

    #[test]
    fn territory_tools_derive_an_updated_solution() {
        let tm = ToolManager::new("", &false).unwrap();
        for name in [
            "AddBalanceVariables",
            "AddTerritoryLevel",
            "CreateTerritorySolution",
            "RebalanceTerritories",
            "SetTerritoryDistanceParameters",
            "SolveTerritories",
        ] {
            let tool = tm.get_tool(name).unwrap();
            let last = tool.parameters().last().unwrap();
            assert_eq!(last.direction, ParameterDirection::Derived, "{}", name);
            assert_eq!(
                last.parameter_type,
                ParameterType::TerritorySolution,
                "{}",
                name
            );
            assert_eq!(tool.get_alias(), "td", "{}", name);
            assert_eq!(tool.get_toolbox(), "Territory Design", "{}", name);
        }
    }

    #[test]
    fn distance_parameters_default_to_straight_line_meters() {
        let tool = ToolManager::new("", &false)
            .unwrap()
            .get_tool("SetTerritoryDistanceParameters")
            .unwrap();
        let dtype = tool
            .parameters()
            .iter()
            .find(|p| p.name == "Distance Type")
            .unwrap();
        assert_eq!(dtype.default_value.as_deref(), Some("STRAIGHT_LINE"));
        match &dtype.parameter_type {
            ParameterType::CodedValue(domain) => {
                assert_eq!(
                    domain.codes(),
                    vec!["STRAIGHT_LINE", "NETWORK", "NETWORK_TIME"]
                );
            }
            other => panic!("unexpected parameter type {:?}", other),
        }
        let units = tool
            .parameters()
            .iter()
            .find(|p| p.name == "Distance Units")
            .unwrap();
        assert_eq!(units.default_value.as_deref(), Some("METERS"));
    }

    #[test]
    fn solve_methods_cover_classic_and_optimized() {
        let tool = ToolManager::new("", &false)
            .unwrap()
            .get_tool("SolveTerritories")
            .unwrap();
        let method = tool
            .parameters()
            .iter()
            .find(|p| p.name == "Solve Method")
            .unwrap();
        match &method.parameter_type {
            ParameterType::CodedValue(domain) => {
                assert_eq!(domain.codes(), vec!["CLASSIC", "OPTIMIZED"]);
            }
            other => panic!("unexpected parameter type {:?}", other),
        }
        assert_eq!(method.default_value.as_deref(), Some("CLASSIC"));
    }
}
