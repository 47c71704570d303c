use crate::tools::*;

/// Sets the cluster tolerance of a topology. Existing dirty areas are
/// revalidated against the new tolerance on the next validation.
pub struct SetClusterTolerance {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl SetClusterTolerance {
    pub fn new() -> SetClusterTolerance {
        // public constructor
        let name = "SetClusterTolerance".to_string();
        let display_name = "Set Cluster Tolerance".to_string();
        let toolbox = "Topology".to_string();
        let alias = "management".to_string();
        let description = "Sets the cluster tolerance of a topology.".to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Topology".to_owned(),
            flags: vec!["-i".to_owned(), "--in_topology".to_owned()],
            description: "The topology whose cluster tolerance is changed.".to_owned(),
            parameter_type: ParameterType::Topology,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Cluster Tolerance".to_owned(),
            flags: vec!["--cluster_tolerance".to_owned()],
            description:
                "The new tolerance. Zero asks the engine for the minimum possible value."
                    .to_owned(),
            parameter_type: ParameterType::Double,
            direction: ParameterDirection::Required,
            default_value: None,
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
            EnvironmentKey::AutoCommit,
        ];

        let usage = example_usage(
            &name,
            "-i=gis.gdb/landbase/landbase_topology --cluster_tolerance=0.01",
        );

        SetClusterTolerance {
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

impl GeoprocessingTool for SetClusterTolerance {
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
