use crate::tools::*;

/// Adds weighted balance variables to a level of a territory solution. The
/// solver tries to equalize the weighted sums across territories.
pub struct AddBalanceVariables {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl AddBalanceVariables {
    pub fn new() -> AddBalanceVariables {
        // public constructor
        let name = "AddBalanceVariables".to_string();
        let display_name = "Add Balance Variables".to_string();
        let toolbox = "Territory Design".to_string();
        let alias = "td".to_string();
        let description = "Adds balance variables to a territory solution level.".to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Territory Solution".to_owned(),
            flags: vec!["-i".to_owned(), "--in_territory_solution".to_owned()],
            description: "The territory solution to modify.".to_owned(),
            parameter_type: ParameterType::TerritorySolution,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Level".to_owned(),
            flags: vec!["--level".to_owned()],
            description: "The name of the level the variables apply to.".to_owned(),
            parameter_type: ParameterType::String,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Variables".to_owned(),
            flags: vec!["--variables".to_owned()],
            description:
                "Field-weight pairs balanced by the solver, e.g. 'customers 2;revenue 1'."
                    .to_owned(),
            parameter_type: ParameterType::StringList,
            direction: ParameterDirection::Required,
            default_value: None,
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
            "-i=gis.gdb/sales_2026 --level=Districts --variables='customers 2;revenue 1'",
        );

        AddBalanceVariables {
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

impl GeoprocessingTool for AddBalanceVariables {
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
