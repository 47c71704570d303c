use crate::tools::*;

/// Creates polygon features around clusters of proximate point features.
pub struct AggregatePoints {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl AggregatePoints {
    pub fn new() -> AggregatePoints {
        // public constructor
        let name = "AggregatePoints".to_string();
        let display_name = "Aggregate Points".to_string();
        let toolbox = "Cartography".to_string();
        let alias = "cartography".to_string();
        let description =
            "Creates polygon features around clusters of proximate point features.".to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Features".to_owned(),
            flags: vec!["-i".to_owned(), "--in_features".to_owned()],
            description: "The point features to aggregate.".to_owned(),
            parameter_type: ParameterType::FeatureLayer(GeometryType::Point),
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Output Feature Class".to_owned(),
            flags: vec!["-o".to_owned(), "--out_feature_class".to_owned()],
            description: "The polygon feature class created around each cluster.".to_owned(),
            parameter_type: ParameterType::FeatureClass(GeometryType::Polygon),
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Aggregation Distance".to_owned(),
            flags: vec!["--aggregation_distance".to_owned()],
            description: "The distance within which points are grouped into one polygon."
                .to_owned(),
            parameter_type: ParameterType::LinearUnit,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        let valid_environments = vec![
            EnvironmentKey::Workspace,
            EnvironmentKey::ScratchWorkspace,
            EnvironmentKey::Extent,
            EnvironmentKey::OutputCoordinateSystem,
            EnvironmentKey::CartographicPartitions,
            EnvironmentKey::XyResolution,
            EnvironmentKey::XyTolerance,
        ];

        let usage = example_usage(
            &name,
            "-i=wells -o=gis.gdb/well_fields --aggregation_distance='500 Meters'",
        );

        AggregatePoints {
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

impl GeoprocessingTool for AggregatePoints {
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
