use crate::tools::*;

/// Replaces points in a terrain point data source with points from another
/// feature class. Existing points inside the replacement features' extent
/// are removed first.
pub struct ReplaceTerrainPoints {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl ReplaceTerrainPoints {
    pub fn new() -> ReplaceTerrainPoints {
        // public constructor
        let name = "ReplaceTerrainPoints".to_string();
        let display_name = "Replace Terrain Points".to_string();
        let toolbox = "Terrain Dataset".to_string();
        let alias = "3d".to_string();
        let description =
            "Replaces points in a terrain point data source with a new collection of points."
                .to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Terrain".to_owned(),
            flags: vec!["-i".to_owned(), "--in_terrain".to_owned()],
            description: "The terrain dataset whose points are replaced.".to_owned(),
            parameter_type: ParameterType::TerrainDataset,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Terrain Feature Class".to_owned(),
            flags: vec!["--terrain_feature_class".to_owned()],
            description: "The name of the participating feature class whose points are replaced."
                .to_owned(),
            parameter_type: ParameterType::String,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Input Points".to_owned(),
            flags: vec!["--in_point_features".to_owned()],
            description: "The point or multipoint features providing the replacement points."
                .to_owned(),
            parameter_type: ParameterType::FeatureClass(GeometryType::Point),
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Area of Interest".to_owned(),
            flags: vec!["--polygon_features_or_extent".to_owned()],
            description:
                "A polygon feature class or an extent limiting where points are replaced."
                    .to_owned(),
            parameter_type: ParameterType::Composite(vec![
                ParameterType::FeatureClass(GeometryType::Polygon),
                ParameterType::Envelope,
            ]),
            direction: ParameterDirection::Optional,
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
            "--in_terrain=gis.gdb/elevation/terrain --terrain_feature_class=masspoints --in_point_features=resurvey",
        );

        ReplaceTerrainPoints {
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

impl GeoprocessingTool for ReplaceTerrainPoints {
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
