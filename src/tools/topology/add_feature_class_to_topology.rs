use crate::tools::*;

/// Adds a feature class to a topology. Ranks control which features move
/// toward which during cluster snapping.
pub struct AddFeatureClassToTopology {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl AddFeatureClassToTopology {
    pub fn new() -> AddFeatureClassToTopology {
        // public constructor
        let name = "AddFeatureClassToTopology".to_string();
        let display_name = "Add Feature Class To Topology".to_string();
        let toolbox = "Topology".to_string();
        let alias = "management".to_string();
        let description = "Adds a feature class to a topology.".to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Topology".to_owned(),
            flags: vec!["-i".to_owned(), "--in_topology".to_owned()],
            description: "The topology the feature class is added to.".to_owned(),
            parameter_type: ParameterType::Topology,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Input Feature Class".to_owned(),
            flags: vec!["--in_featureclass".to_owned()],
            description:
                "The feature class to add. It must reside in the topology's feature dataset."
                    .to_owned(),
            parameter_type: ParameterType::FeatureClass(GeometryType::Any),
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "XY Rank".to_owned(),
            flags: vec!["--xy_rank".to_owned()],
            description: "The horizontal snapping rank, 1 being most accurate.".to_owned(),
            parameter_type: ParameterType::Long,
            direction: ParameterDirection::Optional,
            default_value: Some("1".to_owned()),
        });

        parameters.push(ToolParameter {
            name: "Z Rank".to_owned(),
            flags: vec!["--z_rank".to_owned()],
            description: "The vertical snapping rank, 1 being most accurate.".to_owned(),
            parameter_type: ParameterType::Long,
            direction: ParameterDirection::Optional,
            default_value: Some("1".to_owned()),
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
            "-i=gis.gdb/landbase/landbase_topology --in_featureclass=parcels --xy_rank=1",
        );

        AddFeatureClassToTopology {
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

impl GeoprocessingTool for AddFeatureClassToTopology {
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
