use crate::tools::*;

/// Performs the work needed to bring a terrain dataset up to date after its
/// definition or participating data sources have changed: pyramids are
/// (re)constructed and the dirty extent cleared. Most terrain edits leave the
/// dataset unusable until this runs.
pub struct BuildTerrain {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl BuildTerrain {
    pub fn new() -> BuildTerrain {
        // public constructor
        let name = "BuildTerrain".to_string();
        let display_name = "Build Terrain".to_string();
        let toolbox = "Terrain Dataset".to_string();
        let alias = "3d".to_string();
        let description =
            "Builds a terrain dataset so it can be analyzed and displayed.".to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Terrain".to_owned(),
            flags: vec!["-i".to_owned(), "--in_terrain".to_owned()],
            description: "The terrain dataset to build.".to_owned(),
            parameter_type: ParameterType::TerrainDataset,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Update Extent".to_owned(),
            flags: vec!["--update_extent".to_owned()],
            description:
                "Whether the terrain's data extent is recalculated from the participating sources."
                    .to_owned(),
            parameter_type: ParameterType::CodedValue(CodedValueDomain::new(
                "Update Extent",
                &[
                    ("NO_UPDATE_EXTENT", "Keep the stored extent"),
                    ("UPDATE_EXTENT", "Recalculate the extent"),
                ],
            )),
            direction: ParameterDirection::Optional,
            default_value: Some("NO_UPDATE_EXTENT".to_owned()),
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

        let usage = example_usage(&name, "--in_terrain=gis.gdb/elevation/terrain");

        BuildTerrain {
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

impl GeoprocessingTool for BuildTerrain {
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
