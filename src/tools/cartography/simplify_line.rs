use crate::tools::*;

/// Simplifies lines by removing extraneous bends and small intrusions while
/// preserving their essential shape.
pub struct SimplifyLine {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl SimplifyLine {
    pub fn new() -> SimplifyLine {
        // public constructor
        let name = "SimplifyLine".to_string();
        let display_name = "Simplify Line".to_string();
        let toolbox = "Cartography".to_string();
        let alias = "cartography".to_string();
        let description =
            "Simplifies lines by removing relatively extraneous vertices and bends.".to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Features".to_owned(),
            flags: vec!["-i".to_owned(), "--in_features".to_owned()],
            description: "The line features to simplify.".to_owned(),
            parameter_type: ParameterType::FeatureLayer(GeometryType::Line),
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Output Feature Class".to_owned(),
            flags: vec!["-o".to_owned(), "--out_feature_class".to_owned()],
            description: "The simplified line feature class to create.".to_owned(),
            parameter_type: ParameterType::FeatureClass(GeometryType::Line),
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
                "Whether lines collapsed to zero length become points in a derived output."
                    .to_owned(),
            parameter_type: ParameterType::Boolean,
            direction: ParameterDirection::Optional,
            default_value: Some("true".to_owned()),
        });

        parameters.push(ToolParameter {
            name: "Output Points".to_owned(),
            flags: vec![],
            description: "A point feature class holding collapsed zero-length lines.".to_owned(),
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
            "-i=contours -o=gis.gdb/contours_simplified --algorithm=BEND_SIMPLIFY --tolerance='50 Meters'",
        );

        SimplifyLine {
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

impl GeoprocessingTool for SimplifyLine {
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
