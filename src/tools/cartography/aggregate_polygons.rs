use crate::tools::*;

/// Combines polygons within a specified distance of each other into new
/// polygon features. A one-to-many relationship table linking the aggregated
/// polygons back to their sources is produced alongside the output.
pub struct AggregatePolygons {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl AggregatePolygons {
    pub fn new() -> AggregatePolygons {
        // public constructor
        let name = "AggregatePolygons".to_string();
        let display_name = "Aggregate Polygons".to_string();
        let toolbox = "Cartography".to_string();
        let alias = "cartography".to_string();
        let description =
            "Combines polygons within a specified distance of each other into new polygons."
                .to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Features".to_owned(),
            flags: vec!["-i".to_owned(), "--in_features".to_owned()],
            description: "The polygon features to aggregate.".to_owned(),
            parameter_type: ParameterType::FeatureLayer(GeometryType::Polygon),
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Output Feature Class".to_owned(),
            flags: vec!["-o".to_owned(), "--out_feature_class".to_owned()],
            description: "The aggregated polygon feature class to create.".to_owned(),
            parameter_type: ParameterType::FeatureClass(GeometryType::Polygon),
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Aggregation Distance".to_owned(),
            flags: vec!["--aggregation_distance".to_owned()],
            description: "The distance to be satisfied between polygon boundaries for aggregation."
                .to_owned(),
            parameter_type: ParameterType::LinearUnit,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Minimum Area".to_owned(),
            flags: vec!["--minimum_area".to_owned()],
            description: "The minimum area an aggregated polygon must have to be retained."
                .to_owned(),
            parameter_type: ParameterType::ArealUnit,
            direction: ParameterDirection::Optional,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Minimum Hole Size".to_owned(),
            flags: vec!["--minimum_hole_size".to_owned()],
            description: "The minimum area a polygon hole must have to be retained.".to_owned(),
            parameter_type: ParameterType::ArealUnit,
            direction: ParameterDirection::Optional,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Preserve Orthogonal Shape".to_owned(),
            flags: vec!["--orthogonality_option".to_owned()],
            description: "Controls the characteristic of output boundaries.".to_owned(),
            parameter_type: ParameterType::CodedValue(CodedValueDomain::new(
                "orthogonality_option",
                &[
                    ("NON_ORTHOGONAL", "Organically shaped output boundaries"),
                    ("ORTHOGONAL", "Orthogonally shaped output boundaries"),
                ],
            )),
            direction: ParameterDirection::Optional,
            default_value: Some("NON_ORTHOGONAL".to_owned()),
        });

        parameters.push(ToolParameter {
            name: "Barrier Features".to_owned(),
            flags: vec!["--barrier_features".to_owned()],
            description: "Line or polygon features that aggregation may not cross.".to_owned(),
            parameter_type: ParameterType::Composite(vec![
                ParameterType::FeatureLayer(GeometryType::Line),
                ParameterType::FeatureLayer(GeometryType::Polygon),
            ]),
            direction: ParameterDirection::Optional,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Output Table".to_owned(),
            flags: vec![],
            description:
                "A relationship table linking aggregated polygons to their source features."
                    .to_owned(),
            parameter_type: ParameterType::Table,
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
            "-i=buildings -o=gis.gdb/building_blocks --aggregation_distance='30 Meters' --orthogonality_option=ORTHOGONAL",
        );

        AggregatePolygons {
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

impl GeoprocessingTool for AggregatePolygons {
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
