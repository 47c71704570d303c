use crate::tools::*;

/// Sets how distance is measured when territories are built at a level.
pub struct SetTerritoryDistanceParameters {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl SetTerritoryDistanceParameters {
    pub fn new() -> SetTerritoryDistanceParameters {
        // public constructor
        let name = "SetTerritoryDistanceParameters".to_string();
        let display_name = "Set Territory Distance Parameters".to_string();
        let toolbox = "Territory Design".to_string();
        let alias = "td".to_string();
        let description =
            "Sets the distance measure used when solving a territory solution level.".to_string();

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
            description: "The name of the level the settings apply to.".to_owned(),
            parameter_type: ParameterType::String,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Distance Type".to_owned(),
            flags: vec!["--distance_type".to_owned()],
            description: "How distance between features is measured.".to_owned(),
            parameter_type: ParameterType::CodedValue(CodedValueDomain::new(
                "distance_type",
                &[
                    ("STRAIGHT_LINE", "Euclidean distance"),
                    ("NETWORK", "Distance along a street network"),
                    ("NETWORK_TIME", "Travel time along a street network"),
                ],
            )),
            direction: ParameterDirection::Optional,
            default_value: Some("STRAIGHT_LINE".to_owned()),
        });

        parameters.push(ToolParameter {
            name: "Distance Units".to_owned(),
            flags: vec!["--units".to_owned()],
            description: "The units distances are reported in.".to_owned(),
            parameter_type: ParameterType::CodedValue(CodedValueDomain::new(
                "units",
                &[
                    ("METERS", "Meters"),
                    ("KILOMETERS", "Kilometers"),
                    ("MILES", "Miles"),
                    ("NAUTICAL_MILES", "Nautical miles"),
                ],
            )),
            direction: ParameterDirection::Optional,
            default_value: Some("METERS".to_owned()),
        });

        parameters.push(ToolParameter {
            name: "Network Dataset".to_owned(),
            flags: vec!["--network_dataset".to_owned()],
            description: "The street network used for network distance types.".to_owned(),
            parameter_type: ParameterType::String,
            direction: ParameterDirection::Optional,
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
            "-i=gis.gdb/sales_2026 --level=Districts --distance_type=NETWORK --units=KILOMETERS --network_dataset=streets_nd",
        );

        SetTerritoryDistanceParameters {
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

impl GeoprocessingTool for SetTerritoryDistanceParameters {
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
