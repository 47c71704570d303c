use crate::tools::*;

/// Smooths sharp angles in polygon outlines to improve their cartographic
/// appearance.
pub struct SmoothPolygon {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl SmoothPolygon {
    pub fn new() -> SmoothPolygon {
        // public constructor
        let name = "SmoothPolygon".to_string();
        let display_name = "Smooth Polygon".to_string();
        let toolbox = "Cartography".to_string();
        let alias = "cartography".to_string();
        let description =
            "Smooths sharp angles in polygon outlines to improve aesthetic or cartographic quality."
                .to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Features".to_owned(),
            flags: vec!["-i".to_owned(), "--in_features".to_owned()],
            description: "The polygon features to smooth.".to_owned(),
            parameter_type: ParameterType::FeatureLayer(GeometryType::Polygon),
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Output Feature Class".to_owned(),
            flags: vec!["-o".to_owned(), "--out_feature_class".to_owned()],
            description: "The smoothed polygon feature class to create.".to_owned(),
            parameter_type: ParameterType::FeatureClass(GeometryType::Polygon),
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Smoothing Algorithm".to_owned(),
            flags: vec!["--algorithm".to_owned()],
            description: "The smoothing algorithm.".to_owned(),
            parameter_type: ParameterType::CodedValue(CodedValueDomain::new(
                "algorithm",
                &[
                    ("PAEK", "Polynomial approximation with exponential kernel"),
                    ("BEZIER_INTERPOLATION", "Bezier curves fitted between vertices"),
                ],
            )),
            direction: ParameterDirection::Optional,
            default_value: Some("PAEK".to_owned()),
        });

        parameters.push(ToolParameter {
            name: "Smoothing Tolerance".to_owned(),
            flags: vec!["--tolerance".to_owned()],
            description:
                "The PAEK smoothing tolerance. Ignored by Bezier interpolation, pass zero."
                    .to_owned(),
            parameter_type: ParameterType::LinearUnit,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Topological Error Handling".to_owned(),
            flags: vec!["--error_option".to_owned()],
            description: "How topological errors introduced by smoothing are handled.".to_owned(),
            parameter_type: ParameterType::CodedValue(CodedValueDomain::new(
                "error_option",
                &[
                    ("NO_CHECK", "Do not check for topological errors"),
                    ("FLAG_ERRORS", "Flag topological errors"),
                    ("RESOLVE_ERRORS", "Resolve topological errors"),
                ],
            )),
            direction: ParameterDirection::Optional,
            default_value: Some("NO_CHECK".to_owned()),
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
            "-i=lakes -o=gis.gdb/lakes_smoothed --algorithm=BEZIER_INTERPOLATION --tolerance='0 Meters'",
        );

        SmoothPolygon {
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

impl GeoprocessingTool for SmoothPolygon {
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
