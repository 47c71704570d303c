use crate::tools::*;

/// Rebalances an already-solved territory level after its underlying data
/// has changed.
pub struct RebalanceTerritories {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl RebalanceTerritories {
    pub fn new() -> RebalanceTerritories {
        // public constructor
        let name = "RebalanceTerritories".to_string();
        let display_name = "Rebalance Territories".to_string();
        let toolbox = "Territory Design".to_string();
        let alias = "td".to_string();
        let description = "Rebalances a solved territory solution level.".to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Territory Solution".to_owned(),
            flags: vec!["-i".to_owned(), "--in_territory_solution".to_owned()],
            description: "The territory solution to rebalance.".to_owned(),
            parameter_type: ParameterType::TerritorySolution,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Level".to_owned(),
            flags: vec!["--level".to_owned()],
            description: "The name of the level to rebalance.".to_owned(),
            parameter_type: ParameterType::String,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Rebalance Method".to_owned(),
            flags: vec!["--rebalance_method".to_owned()],
            description: "How much of the existing assignment may change.".to_owned(),
            parameter_type: ParameterType::CodedValue(CodedValueDomain::new(
                "rebalance_method",
                &[
                    ("FULL", "Reassign features freely"),
                    ("INCREMENTAL", "Minimize changes to existing territories"),
                ],
            )),
            direction: ParameterDirection::Optional,
            default_value: Some("FULL".to_owned()),
        });

        parameters.push(ToolParameter {
            name: "Updated Territory Solution".to_owned(),
            flags: vec![],
            description: "The territory solution updated by the engine.".to_owned(),
            parameter_type: ParameterType::TerritorySolution,
            direction: ParameterDirection::Derived,
            default_value: None,
        });

        let valid_environments = vec![
            EnvironmentKey::Workspace,
            EnvironmentKey::ScratchWorkspace,
            EnvironmentKey::ParallelProcessingFactor,
        ];

        let usage = example_usage(
            &name,
            "-i=gis.gdb/sales_2026 --level=Districts --rebalance_method=INCREMENTAL",
        );

        RebalanceTerritories {
            name: name,
            display_name: display_name,
            description: description,
            toolbox: toolbox,
            alias: alias,
            parameters: parameters,
            valid_environments: valid_environments,
            example_usage: usage,
        }
    }
}

impl GeoprocessingTool for RebalanceTerritories {
    fn get_source_file(&self) -> String {
        String::from(file!())
    }

    fn get_tool_name(&self) -> String {
        self.name.clone()
    }

    fn get_display_name(&self) -> String {
        self.display_name.clone()
    }

    fn get_tool_description(&self) -> String {
        self.description.clone()
    }

    fn get_toolbox(&self) -> String {
        self.toolbox.clone()
    }

    fn get_alias(&self) -> String {
        self.alias.clone()
    }

    fn parameters(&self) -> &[ToolParameter] {
        &self.parameters
    }

    fn valid_environments(&self) -> &[EnvironmentKey] {
        &self.valid_environments
    }

    fn get_example_usage(&self) -> String {
        self.example_usage.clone()
    }
}
