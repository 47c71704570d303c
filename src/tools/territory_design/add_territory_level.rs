use crate::tools::*;

/// Adds a hierarchy level to a territory solution.
pub struct AddTerritoryLevel {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl AddTerritoryLevel {
    pub fn new() -> AddTerritoryLevel {
        // public constructor
        let name = "AddTerritoryLevel".to_string();
        let display_name = "Add Territory Level".to_string();
        let toolbox = "Territory Design".to_string();
        let alias = "td".to_string();
        let description = "Adds a level to a territory solution hierarchy.".to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Territory Solution".to_owned(),
            flags: vec!["-i".to_owned(), "--in_territory_solution".to_owned()],
            description: "The territory solution the level is added to.".to_owned(),
            parameter_type: ParameterType::TerritorySolution,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Level Name".to_owned(),
            flags: vec!["--level_name".to_owned()],
            description: "The name of the new level.".to_owned(),
            parameter_type: ParameterType::String,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Default Territory Name".to_owned(),
            flags: vec!["--default_territory_name".to_owned()],
            description: "The naming prefix for territories created at this level.".to_owned(),
            parameter_type: ParameterType::String,
            direction: ParameterDirection::Optional,
            default_value: Some("Territory".to_owned()),
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
        ];

        let usage = example_usage(
            &name,
            "-i=gis.gdb/sales_2026 --level_name=Districts --default_territory_name=District",
        );

        AddTerritoryLevel {
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

impl GeoprocessingTool for AddTerritoryLevel {
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
