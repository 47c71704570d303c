use crate::tools::*;

/// Converts a terrain dataset into a triangulated irregular network.
pub struct TerrainToTin {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl TerrainToTin {
    pub fn new() -> TerrainToTin {
        // public constructor
        let name = "TerrainToTin".to_string();
        let display_name = "Terrain To TIN".to_string();
        let toolbox = "Terrain Dataset".to_string();
        let alias = "3d".to_string();
        let description =
            "Converts a terrain dataset into a triangulated irregular network.".to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Terrain".to_owned(),
            flags: vec!["-i".to_owned(), "--in_terrain".to_owned()],
            description: "The terrain dataset to convert.".to_owned(),
            parameter_type: ParameterType::TerrainDataset,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Output TIN".to_owned(),
            flags: vec!["-o".to_owned(), "--out_tin".to_owned()],
            description: "The TIN dataset to create.".to_owned(),
            parameter_type: ParameterType::TinDataset,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Pyramid Level Resolution".to_owned(),
            flags: vec!["--pyramid_level_resolution".to_owned()],
            description:
                "The resolution of the pyramid level to convert. Zero means full resolution."
                    .to_owned(),
            parameter_type: ParameterType::Double,
            direction: ParameterDirection::Optional,
            default_value: Some("0".to_owned()),
        });

        parameters.push(ToolParameter {
            name: "Maximum Number of Nodes".to_owned(),
            flags: vec!["--max_nodes".to_owned()],
            description: "The maximum number of nodes permitted in the output TIN.".to_owned(),
            parameter_type: ParameterType::Long,
            direction: ParameterDirection::Optional,
            default_value: Some("5000000".to_owned()),
        });

        parameters.push(ToolParameter {
            name: "Clip to Extent".to_owned(),
            flags: vec!["--clip_to_extent".to_owned()],
            description: "Clips the output TIN to the analysis extent.".to_owned(),
            parameter_type: ParameterType::Boolean,
            direction: ParameterDirection::Optional,
            default_value: Some("true".to_owned()),
        });

        let valid_environments = vec![
            EnvironmentKey::Workspace,
            EnvironmentKey::ScratchWorkspace,
            EnvironmentKey::Extent,
            EnvironmentKey::OutputCoordinateSystem,
            EnvironmentKey::XyResolution,
            EnvironmentKey::XyTolerance,
            EnvironmentKey::ZResolution,
            EnvironmentKey::ZTolerance,
            EnvironmentKey::AutoCommit,
        ];

        let usage = example_usage(
            &name,
            "--in_terrain=gis.gdb/elevation/terrain -o=elev_tin --pyramid_level_resolution=5 --max_nodes=1000000",
        );

        TerrainToTin {
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

impl GeoprocessingTool for TerrainToTin {
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
