use crate::tools::*;

/// Changes the pyramid resolution bounds at which a feature class
/// participates in a terrain dataset.
pub struct ChangeTerrainResolutionBounds {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl ChangeTerrainResolutionBounds {
    pub fn new() -> ChangeTerrainResolutionBounds {
        // public constructor
        let name = "ChangeTerrainResolutionBounds".to_string();
        let display_name = "Change Terrain Resolution Bounds".to_string();
        let toolbox = "Terrain Dataset".to_string();
        let alias = "3d".to_string();
        let description =
            "Changes the pyramid resolution bounds for a feature class participating in a terrain dataset."
                .to_string();

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
            name: "Feature Class".to_owned(),
            flags: vec!["--feature_class".to_owned()],
            description: "The name of the participating feature class whose bounds are changed."
                .to_owned(),
            parameter_type: ParameterType::String,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Lower Pyramid Resolution".to_owned(),
            flags: vec!["--lower_pyramid_resolution".to_owned()],
            description: "The new lower pyramid level resolution for the feature class."
                .to_owned(),
            parameter_type: ParameterType::Double,
            direction: ParameterDirection::Optional,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Upper Pyramid Resolution".to_owned(),
            flags: vec!["--upper_pyramid_resolution".to_owned()],
            description: "The new upper pyramid level resolution for the feature class."
                .to_owned(),
            parameter_type: ParameterType::Double,
            direction: ParameterDirection::Optional,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Overview".to_owned(),
            flags: vec!["--overview".to_owned()],
            description: "Indicates whether the feature class contributes to the terrain overview."
                .to_owned(),
            parameter_type: ParameterType::Boolean,
            direction: ParameterDirection::Optional,
            default_value: Some("true".to_owned()),
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
            "--in_terrain=gis.gdb/elevation/terrain --feature_class=breaklines --lower_pyramid_resolution=5 --upper_pyramid_resolution=20",
        );

        ChangeTerrainResolutionBounds {
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

impl GeoprocessingTool for ChangeTerrainResolutionBounds {
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
