use crate::tools::*;

/// Solves a territory solution level: assigns base features to territories
/// so the configured balance variables even out.
pub struct SolveTerritories {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl SolveTerritories {
    pub fn new() -> SolveTerritories {
        // public constructor
        let name = "SolveTerritories".to_string();
        let display_name = "Solve Territories".to_string();
        let toolbox = "Territory Design".to_string();
        let alias = "td".to_string();
        let description = "Solves a territory solution level.".to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Territory Solution".to_owned(),
            flags: vec!["-i".to_owned(), "--in_territory_solution".to_owned()],
            description: "The territory solution to solve.".to_owned(),
            parameter_type: ParameterType::TerritorySolution,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Level".to_owned(),
            flags: vec!["--level".to_owned()],
            description: "The name of the level to solve.".to_owned(),
            parameter_type: ParameterType::String,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Number of Territories".to_owned(),
            flags: vec!["--number_of_territories".to_owned()],
            description:
                "The number of territories to create. When unset the engine chooses a count."
                    .to_owned(),
            parameter_type: ParameterType::Long,
            direction: ParameterDirection::Optional,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Solve Method".to_owned(),
            flags: vec!["--method".to_owned()],
            description: "The solver used to assign features to territories.".to_owned(),
            parameter_type: ParameterType::CodedValue(CodedValueDomain::new(
                "method",
                &[
                    ("CLASSIC", "The original assignment heuristic"),
                    ("OPTIMIZED", "The optimization-based solver"),
                ],
            )),
            direction: ParameterDirection::Optional,
            default_value: Some("CLASSIC".to_owned()),
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
            "-i=gis.gdb/sales_2026 --level=Districts --number_of_territories=12 --method=OPTIMIZED",
        );

        SolveTerritories {
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

impl GeoprocessingTool for SolveTerritories {
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
