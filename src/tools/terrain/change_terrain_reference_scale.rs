use crate::tools::*;

/// Changes the reference scale associated with a terrain pyramid level.
pub struct ChangeTerrainReferenceScale {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl ChangeTerrainReferenceScale {
    pub fn new() -> ChangeTerrainReferenceScale {
        // public constructor
        let name = "ChangeTerrainReferenceScale".to_string();
        let display_name = "Change Terrain Reference Scale".to_string();
        let toolbox = "Terrain Dataset".to_string();
        let alias = "3d".to_string();
        let description =
            "Changes the reference scale associated with a terrain pyramid level.".to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Terrain".to_owned(),
            flags: vec!["-i".to_owned(), "--in_terrain".to_owned()],
            description: "The terrain dataset to modify.".to_owned(),
            parameter_type: ParameterType::TerrainDataset,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Old Reference Scale".to_owned(),
            flags: vec!["--old_refscale".to_owned()],
            description: "The reference scale of the pyramid level to change.".to_owned(),
            parameter_type: ParameterType::Long,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "New Reference Scale".to_owned(),
            flags: vec!["--new_refscale".to_owned()],
            description: "The new reference scale for the pyramid level.".to_owned(),
            parameter_type: ParameterType::Long,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Updated Terrain".to_owned(),
            flags: vec![],
            description: "The terrain dataset updated by the engine.".to_owned(),
            parameter_type: ParameterType::TerrainDataset,
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
            "--in_terrain=gis.gdb/elevation/terrain --old_refscale=24000 --new_refscale=12000",
        );

        ChangeTerrainReferenceScale {
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

impl GeoprocessingTool for ChangeTerrainReferenceScale {
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
