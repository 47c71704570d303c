use crate::tools::*;

/// Builds a mesh of polygon partitions that subdivide dense input data into
/// chunks small enough for partitioned cartographic processing.
pub struct CreateCartographicPartitions {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl CreateCartographicPartitions {
    pub fn new() -> CreateCartographicPartitions {
        // public constructor
        let name = "CreateCartographicPartitions".to_string();
        let display_name = "Create Cartographic Partitions".to_string();
        let toolbox = "Cartography".to_string();
        let alias = "cartography".to_string();
        let description =
            "Creates a mesh of polygon partitions covering the input features for partitioned processing."
                .to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Features".to_owned(),
            flags: vec!["-i".to_owned(), "--in_features".to_owned()],
            description: "One or more feature layers whose density drives the partition mesh."
                .to_owned(),
            parameter_type: ParameterType::StringList,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Output Features".to_owned(),
            flags: vec!["-o".to_owned(), "--out_features".to_owned()],
            description: "The polygon partition feature class to create.".to_owned(),
            parameter_type: ParameterType::FeatureClass(GeometryType::Polygon),
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Feature Count".to_owned(),
            flags: vec!["--feature_count".to_owned()],
            description: "The ideal number of features or vertices per partition.".to_owned(),
            parameter_type: ParameterType::Long,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Partition Method".to_owned(),
            flags: vec!["--partition_method".to_owned()],
            description: "Whether the count targets features or vertices.".to_owned(),
            parameter_type: ParameterType::CodedValue(CodedValueDomain::new(
                "partition_method",
                &[
                    ("FEATURES", "Target feature count per partition"),
                    ("VERTICES", "Target vertex count per partition"),
                ],
            )),
            direction: ParameterDirection::Optional,
            default_value: Some("FEATURES".to_owned()),
        });

        let valid_environments = vec![
            EnvironmentKey::Workspace,
            EnvironmentKey::ScratchWorkspace,
            EnvironmentKey::Extent,
            EnvironmentKey::OutputCoordinateSystem,
            EnvironmentKey::XyResolution,
            EnvironmentKey::XyTolerance,
        ];

        let usage = example_usage(
            &name,
            "-i='roads;buildings;rivers' -o=gis.gdb/partitions --feature_count=50000",
        );

        CreateCartographicPartitions {
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

impl GeoprocessingTool for CreateCartographicPartitions {
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
