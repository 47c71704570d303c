use crate::tools::*;

/// Derives centerlines from paired line features such as road casings.
pub struct CollapseDualLinesToCenterline {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl CollapseDualLinesToCenterline {
    pub fn new() -> CollapseDualLinesToCenterline {
        // public constructor
        let name = "CollapseDualLinesToCenterline".to_string();
        let display_name = "Collapse Dual Lines To Centerline".to_string();
        let toolbox = "Cartography".to_string();
        let alias = "cartography".to_string();
        let description =
            "Derives centerlines from dual-line features, such as road casings, within a width range."
                .to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Features".to_owned(),
            flags: vec!["-i".to_owned(), "--in_features".to_owned()],
            description: "The dual-line features to collapse.".to_owned(),
            parameter_type: ParameterType::FeatureLayer(GeometryType::Line),
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Output Feature Class".to_owned(),
            flags: vec!["-o".to_owned(), "--out_feature_class".to_owned()],
            description: "The centerline feature class to create.".to_owned(),
            parameter_type: ParameterType::FeatureClass(GeometryType::Line),
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Maximum Width".to_owned(),
            flags: vec!["--maximum_width".to_owned()],
            description: "The maximum separation of dual lines eligible for collapse.".to_owned(),
            parameter_type: ParameterType::LinearUnit,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Minimum Width".to_owned(),
            flags: vec!["--minimum_width".to_owned()],
            description: "The minimum separation of dual lines eligible for collapse.".to_owned(),
            parameter_type: ParameterType::LinearUnit,
            direction: ParameterDirection::Optional,
            default_value: Some("0 Unknown".to_owned()),
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
            "-i=road_casings -o=gis.gdb/road_centerlines --maximum_width='20 Meters'",
        );

        CollapseDualLinesToCenterline {
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

impl GeoprocessingTool for CollapseDualLinesToCenterline {
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
