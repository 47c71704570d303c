use crate::tools::*;

/// Simplifies polygon outlines by removing extraneous bends while preserving
/// essential shape.
pub struct SimplifyPolygon {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl SimplifyPolygon {
    pub fn new() -> SimplifyPolygon {
        // public constructor
        let name = "SimplifyPolygon".to_string();
        let display_name = "Simplify Polygon".to_string();
        let toolbox = "Cartography".to_string();
        let alias = "cartography".to_string();
        let description =
            "Simplifies polygon outlines by removing relatively extraneous vertices and bends."
                .to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Features".to_owned(),
            flags: vec!["-i".to_owned(), "--in_features".to_owned()],
            description: "The polygon features to simplify.".to_owned(),
            parameter_type: ParameterType::FeatureLayer(GeometryType::Polygon),
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Output Feature Class".to_owned(),
            flags: vec!["-o".to_owned(), "--out_feature_class".to_owned()],
            description: "The simplified polygon feature class to create.".to_owned(),
            parameter_type: ParameterType::FeatureClass(GeometryType::Polygon),
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Simplification Algorithm".to_owned(),
            flags: vec!["--algorithm".to_owned()],
            description: "The simplification algorithm.".to_owned(),
            parameter_type: ParameterType::CodedValue(CodedValueDomain::new(
                "algorithm",
                &[
                    ("POINT_REMOVE", "Retain critical points (Douglas-Peucker)"),
                    ("BEND_SIMPLIFY", "Retain critical bends (Wang-Mueller)"),
                    ("WEIGHTED_AREA", "Retain weighted effective areas (Zhou-Jones)"),
                    ("EFFECTIVE_AREA", "Retain effective areas (Visvalingam-Whyatt)"),
                ],
            )),
            direction: ParameterDirection::Optional,
            default_value: Some("POINT_REMOVE".to_owned()),
        });

        parameters.push(ToolParameter {
            name: "Simplification Tolerance".to_owned(),
            flags: vec!["--tolerance".to_owned()],
            description: "The degree of simplification; larger values simplify more.".to_owned(),
            parameter_type: ParameterType::LinearUnit,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Minimum Area".to_owned(),
            flags: vec!["--minimum_area".to_owned()],
            description: "The minimum area a simplified polygon must have to be retained."
                .to_owned(),
            parameter_type: ParameterType::ArealUnit,
            direction: ParameterDirection::Optional,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Topological Error Handling".to_owned(),
            flags: vec!["--error_option".to_owned()],
            description: "How topological errors introduced by simplification are handled."
                .to_owned(),
            parameter_type: ParameterType::CodedValue(CodedValueDomain::new(
                "error_option",
                &[
                    ("NO_CHECK", "Do not check for topological errors"),
                    ("FLAG_ERRORS", "Flag topological errors"),
                    ("RESOLVE_ERRORS", "Resolve topological errors"),
                ],
            )),
            direction: ParameterDirection::Optional,
            default_value: Some("RESOLVE_ERRORS".to_owned()),
        });

        parameters.push(ToolParameter {
            name: "Keep Collapsed Points".to_owned(),
            flags: vec!["--collapsed_point_option".to_owned()],
            description:
                "Whether polygons collapsed below the minimum area become points in a derived output."
                    .to_owned(),
            parameter_type: ParameterType::Boolean,
            direction: ParameterDirection::Optional,
            default_value: Some("false".to_owned()),
        });

        parameters.push(ToolParameter {
            name: "Output Points".to_owned(),
            flags: vec![],
            description: "A point feature class holding collapsed polygons.".to_owned(),
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
            EnvironmentKey::ParallelProcessingFactor,
        ];

        let usage = example_usage(
            &name,
            "-i=soils -o=gis.gdb/soils_simplified --tolerance='100 Meters' --minimum_area='10000 SquareMeters'",
        );

        SimplifyPolygon {
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

impl GeoprocessingTool for SimplifyPolygon {
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
