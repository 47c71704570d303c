use crate::tools::*;

/// Merges matched pairs of divided road lanes into single output lines.
pub struct MergeDividedRoads {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl MergeDividedRoads {
    pub fn new() -> MergeDividedRoads {
        // public constructor
        let name = "MergeDividedRoads".to_string();
        let display_name = "Merge Divided Roads".to_string();
        let toolbox = "Cartography".to_string();
        let alias = "cartography".to_string();
        let description =
            "Merges divided road lanes into single lines based on a merge field and distance."
                .to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Features".to_owned(),
            flags: vec!["-i".to_owned(), "--in_features".to_owned()],
            description: "The road line features containing divided lanes.".to_owned(),
            parameter_type: ParameterType::FeatureLayer(GeometryType::Line),
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Merge Field".to_owned(),
            flags: vec!["--merge_field".to_owned()],
            description:
                "A numeric field where equal nonzero values identify candidate lane pairs."
                    .to_owned(),
            parameter_type: ParameterType::Field(AttributeType::Integer),
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Merge Distance".to_owned(),
            flags: vec!["--merge_distance".to_owned()],
            description: "The maximum separation of lane pairs eligible for merging.".to_owned(),
            parameter_type: ParameterType::LinearUnit,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Output Features".to_owned(),
            flags: vec!["-o".to_owned(), "--out_features".to_owned()],
            description: "The merged road feature class to create.".to_owned(),
            parameter_type: ParameterType::FeatureClass(GeometryType::Line),
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Output Displacement Features".to_owned(),
            flags: vec!["--out_displacement_features".to_owned()],
            description:
                "An optional polygon feature class recording how far features were displaced."
                    .to_owned(),
            parameter_type: ParameterType::FeatureClass(GeometryType::Polygon),
            direction: ParameterDirection::Optional,
            default_value: None,
        });

        let valid_environments = vec![
            EnvironmentKey::Workspace,
            EnvironmentKey::ScratchWorkspace,
            EnvironmentKey::Extent,
            EnvironmentKey::OutputCoordinateSystem,
            EnvironmentKey::CartographicPartitions,
        ];

        let usage = example_usage(
            &name,
            "-i=roads --merge_field=route_id --merge_distance='60 Meters' -o=gis.gdb/roads_merged",
        );

        MergeDividedRoads {
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

impl GeoprocessingTool for MergeDividedRoads {
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
