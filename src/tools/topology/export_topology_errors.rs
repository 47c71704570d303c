use crate::tools::*;

/// Exports the recorded errors and exceptions of a topology to point, line,
/// and polygon feature classes.
pub struct ExportTopologyErrors {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl ExportTopologyErrors {
    pub fn new() -> ExportTopologyErrors {
        // public constructor
        let name = "ExportTopologyErrors".to_string();
        let display_name = "Export Topology Errors".to_string();
        let toolbox = "Topology".to_string();
        let alias = "management".to_string();
        let description =
            "Exports the errors and exceptions of a topology to feature classes.".to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Topology".to_owned(),
            flags: vec!["-i".to_owned(), "--in_topology".to_owned()],
            description: "The topology whose errors are exported.".to_owned(),
            parameter_type: ParameterType::Topology,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Output Workspace".to_owned(),
            flags: vec!["-o".to_owned(), "--out_path".to_owned()],
            description: "The workspace the error feature classes are written to.".to_owned(),
            parameter_type: ParameterType::Workspace,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Output Base Name".to_owned(),
            flags: vec!["--out_basename".to_owned()],
            description: "The prefix for the three output feature class names.".to_owned(),
            parameter_type: ParameterType::String,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Output Point Errors".to_owned(),
            flags: vec![],
            description: "Point errors, named basename_point.".to_owned(),
            parameter_type: ParameterType::FeatureClass(GeometryType::Point),
            direction: ParameterDirection::Derived,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Output Line Errors".to_owned(),
            flags: vec![],
            description: "Line errors, named basename_line.".to_owned(),
            parameter_type: ParameterType::FeatureClass(GeometryType::Line),
            direction: ParameterDirection::Derived,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Output Polygon Errors".to_owned(),
            flags: vec![],
            description: "Polygon errors, named basename_poly.".to_owned(),
            parameter_type: ParameterType::FeatureClass(GeometryType::Polygon),
            direction: ParameterDirection::Derived,
            default_value: None,
        });

        let valid_environments = vec![
            EnvironmentKey::Workspace,
            EnvironmentKey::ScratchWorkspace,
            EnvironmentKey::OutputCoordinateSystem,
            EnvironmentKey::ConfigKeyword,
            EnvironmentKey::AutoCommit,
        ];

        let usage = example_usage(
            &name,
            "-i=gis.gdb/landbase/landbase_topology -o=gis.gdb --out_basename=landbase_errors",
        );

        ExportTopologyErrors {
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

impl GeoprocessingTool for ExportTopologyErrors {
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
