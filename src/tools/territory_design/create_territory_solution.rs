use crate::tools::*;

/// Creates a territory solution over a base layer of alignment features.
/// Levels, balance variables, and distance settings are added afterwards.
pub struct CreateTerritorySolution {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl CreateTerritorySolution {
    pub fn new() -> CreateTerritorySolution {
        // public constructor
        let name = "CreateTerritorySolution".to_string();
        let display_name = "Create Territory Solution".to_string();
        let toolbox = "Territory Design".to_string();
        let alias = "td".to_string();
        let description =
            "Creates a territory solution from a base layer of alignment features.".to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Base Layer".to_owned(),
            flags: vec!["-i".to_owned(), "--in_base_layer".to_owned()],
            description: "The features territories are built from, such as postal areas."
                .to_owned(),
            parameter_type: ParameterType::FeatureLayer(GeometryType::Any),
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Solution Name".to_owned(),
            flags: vec!["--solution_name".to_owned()],
            description: "The name of the territory solution to create.".to_owned(),
            parameter_type: ParameterType::String,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Output Territory Solution".to_owned(),
            flags: vec![],
            description: "The territory solution created by the engine.".to_owned(),
            parameter_type: ParameterType::TerritorySolution,
            direction: ParameterDirection::Derived,
            default_value: None,
        });

        let valid_environments = vec![
            EnvironmentKey::Workspace,
            EnvironmentKey::ScratchWorkspace,
        ];

        let usage = example_usage(&name, "-i=postal_areas --solution_name=sales_2026");

        CreateTerritorySolution {
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

impl GeoprocessingTool for CreateTerritorySolution {
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
