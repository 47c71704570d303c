use crate::tools::*;

/// Creates an empty topology in a feature dataset. Feature classes and rules
/// are added to it afterwards.
pub struct CreateTopology {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl CreateTopology {
    pub fn new() -> CreateTopology {
        // public constructor
        let name = "CreateTopology".to_string();
        let display_name = "Create Topology".to_string();
        let toolbox = "Topology".to_string();
        let alias = "management".to_string();
        let description = "Creates an empty topology in a feature dataset.".to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Feature Dataset".to_owned(),
            flags: vec!["-i".to_owned(), "--in_dataset".to_owned()],
            description: "The feature dataset the topology is created in.".to_owned(),
            parameter_type: ParameterType::FeatureDataset,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Output Topology Name".to_owned(),
            flags: vec!["--out_name".to_owned()],
            description: "The name of the topology to create.".to_owned(),
            parameter_type: ParameterType::String,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Cluster Tolerance".to_owned(),
            flags: vec!["--in_cluster_tolerance".to_owned()],
            description:
                "The distance within which vertices are snapped together during validation. When unset the engine derives a minimum from the dataset's XY tolerance."
                    .to_owned(),
            parameter_type: ParameterType::Double,
            direction: ParameterDirection::Optional,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Output Topology".to_owned(),
            flags: vec![],
            description: "The topology created by the engine.".to_owned(),
            parameter_type: ParameterType::Topology,
            direction: ParameterDirection::Derived,
            default_value: None,
        });

        let valid_environments = vec![
            EnvironmentKey::Workspace,
            EnvironmentKey::ScratchWorkspace,
            EnvironmentKey::AutoCommit,
            EnvironmentKey::ConfigKeyword,
        ];

        let usage = example_usage(
            &name,
            "-i=gis.gdb/landbase --out_name=landbase_topology --in_cluster_tolerance=0.001",
        );

        CreateTopology {
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

impl GeoprocessingTool for CreateTopology {
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
