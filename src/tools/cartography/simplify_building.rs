use crate::tools::*;

/// Simplifies building polygon boundaries while keeping their essential
/// shape and size.
pub struct SimplifyBuilding {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl SimplifyBuilding {
    pub fn new() -> SimplifyBuilding {
        // public constructor
        let name = "SimplifyBuilding".to_string();
        let display_name = "Simplify Building".to_string();
        let toolbox = "Cartography".to_string();
        let alias = "cartography".to_string();
        let description =
            "Simplifies building boundaries while maintaining their essential shape and size."
                .to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Features".to_owned(),
            flags: vec!["-i".to_owned(), "--in_features".to_owned()],
            description: "The building polygons to simplify.".to_owned(),
            parameter_type: ParameterType::FeatureLayer(GeometryType::Polygon),
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Output Feature Class".to_owned(),
            flags: vec!["-o".to_owned(), "--out_feature_class".to_owned()],
            description: "The simplified building feature class to create.".to_owned(),
            parameter_type: ParameterType::FeatureClass(GeometryType::Polygon),
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Simplification Tolerance".to_owned(),
            flags: vec!["--simplification_tolerance".to_owned()],
            description: "The tolerance for building boundary simplification.".to_owned(),
            parameter_type: ParameterType::LinearUnit,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Minimum Area".to_owned(),
            flags: vec!["--minimum_area".to_owned()],
            description: "The minimum area a simplified building must have to be retained."
                .to_owned(),
            parameter_type: ParameterType::ArealUnit,
            direction: ParameterDirection::Optional,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Check for Spatial Conflicts".to_owned(),
            flags: vec!["--conflict_option".to_owned()],
            description: "Whether to detect and flag spatial conflicts among output buildings."
                .to_owned(),
            parameter_type: ParameterType::CodedValue(CodedValueDomain::new(
                "conflict_option",
                &[
                    ("NO_CHECK", "Do not check for conflicts"),
                    ("CHECK_CONFLICTS", "Flag conflicting buildings and leave them unsimplified"),
                ],
            )),
            direction: ParameterDirection::Optional,
            default_value: Some("NO_CHECK".to_owned()),
        });

        parameters.push(ToolParameter {
            name: "Keep Collapsed Points".to_owned(),
            flags: vec!["--collapsed_point_option".to_owned()],
            description:
                "Whether buildings that collapse below the minimum area become points in a derived output."
                    .to_owned(),
            parameter_type: ParameterType::Boolean,
            direction: ParameterDirection::Optional,
            default_value: Some("true".to_owned()),
        });

        parameters.push(ToolParameter {
            name: "Output Points".to_owned(),
            flags: vec![],
            description: "A point feature class holding collapsed buildings.".to_owned(),
            parameter_type: ParameterType::FeatureClass(GeometryType::Point),
            direction: ParameterDirection::Derived,
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
            "-i=buildings -o=gis.gdb/buildings_simplified --simplification_tolerance='10 Meters' --minimum_area='100 SquareMeters'",
        );

        SimplifyBuilding {
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

impl GeoprocessingTool for SimplifyBuilding {
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
