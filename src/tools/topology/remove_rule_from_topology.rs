use crate::tools::*;

/// Removes an integrity rule from a topology.
pub struct RemoveRuleFromTopology {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl RemoveRuleFromTopology {
    pub fn new() -> RemoveRuleFromTopology {
        // public constructor
        let name = "RemoveRuleFromTopology".to_string();
        let display_name = "Remove Rule From Topology".to_string();
        let toolbox = "Topology".to_string();
        let alias = "management".to_string();
        let description = "Removes an integrity rule from a topology.".to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Topology".to_owned(),
            flags: vec!["-i".to_owned(), "--in_topology".to_owned()],
            description: "The topology the rule is removed from.".to_owned(),
            parameter_type: ParameterType::Topology,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Rule".to_owned(),
            flags: vec!["--in_rule".to_owned()],
            description: "The rule to remove, as reported by the topology's rule listing."
                .to_owned(),
            parameter_type: ParameterType::String,
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
            "-i=gis.gdb/landbase/landbase_topology --in_rule='Must Not Overlap (Area) : parcels'",
        );

        RemoveRuleFromTopology {
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

impl GeoprocessingTool for RemoveRuleFromTopology {
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
