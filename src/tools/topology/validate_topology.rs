use crate::tools::*;

/// Validates the dirty areas of a topology: snaps vertices within the
/// cluster tolerance and checks every rule, recording violations as errors.
pub struct ValidateTopology {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl ValidateTopology {
    pub fn new() -> ValidateTopology {
        // public constructor
        let name = "ValidateTopology".to_string();
        let display_name = "Validate Topology".to_string();
        let toolbox = "Topology".to_string();
        let alias = "management".to_string();
        let description =
            "Validates a topology's dirty areas, recording rule violations as errors.".to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Topology".to_owned(),
            flags: vec!["-i".to_owned(), "--in_topology".to_owned()],
            description: "The topology to validate.".to_owned(),
            parameter_type: ParameterType::Topology,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Visible Extent".to_owned(),
            flags: vec!["--visible_extent".to_owned()],
            description: "Whether to validate the full extent or only the analysis extent."
                .to_owned(),
            parameter_type: ParameterType::CodedValue(CodedValueDomain::new(
                "visible_extent",
                &[
                    ("Full_Extent", "Validate the entire topology extent"),
                    ("Visible_Extent", "Validate only the current analysis extent"),
                ],
            )),
            direction: ParameterDirection::Optional,
            default_value: Some("Full_Extent".to_owned()),
        });

        parameters.push(ToolParameter {
            name: "Updated Topology".to_owned(),
            flags: vec![],
            description: "The topology updated by the engine.".to_owned(),
            parameter_type: ParameterType::Topology,
            direction: ParameterDirection::Derived,
            default_value: None,
        });

        let valid_environments = vec![
            EnvironmentKey::Workspace,
            EnvironmentKey::ScratchWorkspace,
            EnvironmentKey::Extent,
            EnvironmentKey::AutoCommit,
        ];

        let usage = example_usage(
            &name,
            "-i=gis.gdb/landbase/landbase_topology --visible_extent=Full_Extent",
        );

        ValidateTopology {
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

impl GeoprocessingTool for ValidateTopology {
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
