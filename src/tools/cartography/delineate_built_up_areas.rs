use crate::tools::*;

/// Creates polygons representing built-up areas from clusters of building
/// footprints, suitable for replacing the buildings at small scales.
pub struct DelineateBuiltUpAreas {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl DelineateBuiltUpAreas {
    pub fn new() -> DelineateBuiltUpAreas {
        // public constructor
        let name = "DelineateBuiltUpAreas".to_string();
        let display_name = "Delineate Built-Up Areas".to_string();
        let toolbox = "Cartography".to_string();
        let alias = "cartography".to_string();
        let description =
            "Creates polygons of built-up areas from densely clustered building features."
                .to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Buildings".to_owned(),
            flags: vec!["-i".to_owned(), "--in_buildings".to_owned()],
            description: "One or more layers of building points or polygons.".to_owned(),
            parameter_type: ParameterType::StringList,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Identifier Field".to_owned(),
            flags: vec!["--identifier_field".to_owned()],
            description:
                "A field written on the inputs to flag buildings represented by an output polygon."
                    .to_owned(),
            parameter_type: ParameterType::Field(AttributeType::Integer),
            direction: ParameterDirection::Optional,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Edge Features".to_owned(),
            flags: vec!["--edge_features".to_owned()],
            description: "Features such as roads that define the edges of built-up areas."
                .to_owned(),
            parameter_type: ParameterType::Composite(vec![
                ParameterType::FeatureLayer(GeometryType::Line),
                ParameterType::FeatureLayer(GeometryType::Polygon),
            ]),
            direction: ParameterDirection::Optional,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Grouping Distance".to_owned(),
            flags: vec!["--grouping_distance".to_owned()],
            description: "Buildings closer than this distance are considered part of one area."
                .to_owned(),
            parameter_type: ParameterType::LinearUnit,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Minimum Detail Size".to_owned(),
            flags: vec!["--minimum_detail_size".to_owned()],
            description: "The smallest hole or cavity retained in output polygons.".to_owned(),
            parameter_type: ParameterType::LinearUnit,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Output Feature Class".to_owned(),
            flags: vec!["-o".to_owned(), "--out_feature_class".to_owned()],
            description: "The built-up area polygon feature class to create.".to_owned(),
            parameter_type: ParameterType::FeatureClass(GeometryType::Polygon),
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Minimum Building Count".to_owned(),
            flags: vec!["--minimum_building_count".to_owned()],
            description: "The minimum number of buildings a cluster needs to form an area."
                .to_owned(),
            parameter_type: ParameterType::Long,
            direction: ParameterDirection::Optional,
            default_value: Some("4".to_owned()),
        });

        let valid_environments = vec![
            EnvironmentKey::Workspace,
            EnvironmentKey::ScratchWorkspace,
            EnvironmentKey::Extent,
            EnvironmentKey::OutputCoordinateSystem,
            EnvironmentKey::CartographicPartitions,
            EnvironmentKey::ReferenceScale,
        ];

        let usage = example_usage(
            &name,
            "-i=buildings --edge_features=roads --grouping_distance='75 Meters' --minimum_detail_size='50 Meters' -o=gis.gdb/urban_areas",
        );

        DelineateBuiltUpAreas {
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

impl GeoprocessingTool for DelineateBuiltUpAreas {
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
