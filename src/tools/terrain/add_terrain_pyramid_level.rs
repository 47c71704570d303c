use crate::tools::*;

/// Adds one or more pyramid levels to an existing terrain dataset. Each level
/// definition pairs a thinning threshold (z-tolerance or window size,
/// matching the terrain's pyramid type) with the reference scale the level is
/// used at.
pub struct AddTerrainPyramidLevel {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl AddTerrainPyramidLevel {
    pub fn new() -> AddTerrainPyramidLevel {
        // public constructor
        let name = "AddTerrainPyramidLevel".to_string();
        let display_name = "Add Terrain Pyramid Level".to_string();
        let toolbox = "Terrain Dataset".to_string();
        let alias = "3d".to_string();
        let description = "Adds one or more pyramid levels to a terrain dataset.".to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Terrain".to_owned(),
            flags: vec!["-i".to_owned(), "--in_terrain".to_owned()],
            description: "The terrain dataset the pyramid levels are added to.".to_owned(),
            parameter_type: ParameterType::TerrainDataset,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Pyramid Level Definition".to_owned(),
            flags: vec!["--pyramid_level_definition".to_owned()],
            description:
                "Space-delimited '<resolution> <scale>' pairs, one per pyramid level to add."
                    .to_owned(),
            parameter_type: ParameterType::StringList,
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
            EnvironmentKey::TerrainMemoryUsage,
        ];

        let usage = example_usage(
            &name,
            "--in_terrain=gis.gdb/elevation/terrain --pyramid_level_definition=\"2.5 24000;5 100000\"",
        );

        AddTerrainPyramidLevel {
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

impl GeoprocessingTool for AddTerrainPyramidLevel {
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
