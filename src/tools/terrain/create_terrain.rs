use crate::tools::*;

/// Creates an empty terrain dataset inside a feature dataset. Participating
/// feature classes are added afterwards with `AddFeatureClassToTerrain`, and
/// pyramid levels with `AddTerrainPyramidLevel`, before the terrain is built.
///
/// # See Also
/// `AddFeatureClassToTerrain`, `AddTerrainPyramidLevel`, `BuildTerrain`
pub struct CreateTerrain {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl CreateTerrain {
    pub fn new() -> CreateTerrain {
        // public constructor
        let name = "CreateTerrain".to_string();
        let display_name = "Create Terrain".to_string();
        let toolbox = "Terrain Dataset".to_string();
        let alias = "3d".to_string();
        let description =
            "Creates a new terrain dataset inside a feature dataset.".to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Feature Dataset".to_owned(),
            flags: vec!["-i".to_owned(), "--in_feature_dataset".to_owned()],
            description: "The feature dataset the terrain is created in.".to_owned(),
            parameter_type: ParameterType::FeatureDataset,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Output Terrain Name".to_owned(),
            flags: vec!["--out_terrain_name".to_owned()],
            description: "The name of the terrain dataset.".to_owned(),
            parameter_type: ParameterType::String,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Average Point Spacing".to_owned(),
            flags: vec!["--average_point_spacing".to_owned()],
            description:
                "The average horizontal distance between the data points used to model the terrain."
                    .to_owned(),
            parameter_type: ParameterType::Double,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Maximum Overview Size".to_owned(),
            flags: vec!["--max_overview_size".to_owned()],
            description:
                "The maximum number of points sampled to create the coarsest terrain representation."
                    .to_owned(),
            parameter_type: ParameterType::Long,
            direction: ParameterDirection::Optional,
            default_value: Some("50000".to_owned()),
        });

        parameters.push(ToolParameter {
            name: "Pyramid Type".to_owned(),
            flags: vec!["--pyramid_type".to_owned()],
            description: "The point thinning method used to build the pyramid levels.".to_owned(),
            parameter_type: ParameterType::CodedValue(CodedValueDomain::new(
                "Pyramid Type",
                &[
                    ("WINDOWSIZE", "Window size"),
                    ("ZTOLERANCE", "Z-tolerance"),
                ],
            )),
            direction: ParameterDirection::Optional,
            default_value: Some("WINDOWSIZE".to_owned()),
        });

        parameters.push(ToolParameter {
            name: "Windowsize Method".to_owned(),
            flags: vec!["--windowsize_method".to_owned()],
            description:
                "How points are selected in each window area when window-size pyramids are used."
                    .to_owned(),
            parameter_type: ParameterType::CodedValue(CodedValueDomain::new(
                "Windowsize Method",
                &[
                    ("ZMIN", "Minimum Z"),
                    ("ZMAX", "Maximum Z"),
                    ("ZMEAN", "Closest to mean Z"),
                    ("ZMINMAX", "Minimum and maximum Z"),
                ],
            )),
            direction: ParameterDirection::Optional,
            default_value: Some("ZMIN".to_owned()),
        });

        parameters.push(ToolParameter {
            name: "Secondary Thinning Method".to_owned(),
            flags: vec!["--secondary_thinning_method".to_owned()],
            description:
                "Additional thinning applied over flat areas when window-size pyramids are used."
                    .to_owned(),
            parameter_type: ParameterType::CodedValue(CodedValueDomain::new(
                "Secondary Thinning Method",
                &[
                    ("NONE", "No secondary thinning"),
                    ("MILD", "Mild"),
                    ("MODERATE", "Moderate"),
                    ("STRONG", "Strong"),
                ],
            )),
            direction: ParameterDirection::Optional,
            default_value: Some("NONE".to_owned()),
        });

        parameters.push(ToolParameter {
            name: "Secondary Thinning Threshold".to_owned(),
            flags: vec!["--secondary_thinning_threshold".to_owned()],
            description: "The vertical threshold used to activate secondary thinning.".to_owned(),
            parameter_type: ParameterType::Double,
            direction: ParameterDirection::Optional,
            default_value: Some("1.0".to_owned()),
        });

        parameters.push(ToolParameter {
            name: "Output Terrain".to_owned(),
            flags: vec![],
            description: "The terrain dataset created by the engine.".to_owned(),
            parameter_type: ParameterType::TerrainDataset,
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
            "--in_feature_dataset=gis.gdb/elevation --out_terrain_name=terrain --average_point_spacing=1.5",
        );

        CreateTerrain {
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

impl GeoprocessingTool for CreateTerrain {
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
