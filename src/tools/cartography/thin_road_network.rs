use crate::tools::*;

/// Generates a simplified road network for display at smaller scales by
/// marking the visibility of road segments in place.
pub struct ThinRoadNetwork {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl ThinRoadNetwork {
    pub fn new() -> ThinRoadNetwork {
        // public constructor
        let name = "ThinRoadNetwork".to_string();
        let display_name = "Thin Road Network".to_string();
        let toolbox = "Cartography".to_string();
        let alias = "cartography".to_string();
        let description =
            "Marks a subset of roads for display at smaller scales while preserving connectivity."
                .to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Features".to_owned(),
            flags: vec!["-i".to_owned(), "--in_features".to_owned()],
            description: "One or more road line layers to thin together.".to_owned(),
            parameter_type: ParameterType::StringList,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Minimum Length".to_owned(),
            flags: vec!["--minimum_length".to_owned()],
            description: "The shortest road segment that is sensible to display at scale."
                .to_owned(),
            parameter_type: ParameterType::LinearUnit,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Invisibility Field".to_owned(),
            flags: vec!["--invisibility_field".to_owned()],
            description: "The field written with the thinning result on each input layer."
                .to_owned(),
            parameter_type: ParameterType::Field(AttributeType::Integer),
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Hierarchy Field".to_owned(),
            flags: vec!["--hierarchy_field".to_owned()],
            description: "A field holding road significance, 1 being most significant.".to_owned(),
            parameter_type: ParameterType::Field(AttributeType::Integer),
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Updated Features".to_owned(),
            flags: vec![],
            description: "The input road layers with invisibility fields populated.".to_owned(),
            parameter_type: ParameterType::FeatureLayer(GeometryType::Line),
            direction: ParameterDirection::Derived,
            default_value: None,
        });

        let valid_environments = vec![
            EnvironmentKey::Workspace,
            EnvironmentKey::ScratchWorkspace,
            EnvironmentKey::Extent,
            EnvironmentKey::CartographicPartitions,
            EnvironmentKey::ReferenceScale,
        ];

        let usage = example_usage(
            &name,
            "-i=roads --minimum_length='500 Meters' --invisibility_field=invis_25k --hierarchy_field=road_class",
        );

        ThinRoadNetwork {
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

impl GeoprocessingTool for ThinRoadNetwork {
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
