use crate::tools::*;

/// Registers a feature class that resides in the same feature dataset as the
/// terrain as a participating data source. The surface feature type controls
/// how the geometry contributes to the surface (mass points, breaklines, or
/// clip/erase/replace polygons). The terrain must be rebuilt afterwards.
///
/// # See Also
/// `BuildTerrain`, `RemoveFeatureClassFromTerrain`
pub struct AddFeatureClassToTerrain {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl AddFeatureClassToTerrain {
    pub fn new() -> AddFeatureClassToTerrain {
        // public constructor
        let name = "AddFeatureClassToTerrain".to_string();
        let display_name = "Add Feature Class To Terrain".to_string();
        let toolbox = "Terrain Dataset".to_string();
        let alias = "3d".to_string();
        let description =
            "Adds a feature class to a terrain dataset as a participating data source."
                .to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Terrain".to_owned(),
            flags: vec!["-i".to_owned(), "--in_terrain".to_owned()],
            description: "The terrain dataset the feature class is added to.".to_owned(),
            parameter_type: ParameterType::TerrainDataset,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Input Features".to_owned(),
            flags: vec!["--in_features".to_owned()],
            description:
                "The feature class to add; it must reside in the same feature dataset as the terrain."
                    .to_owned(),
            parameter_type: ParameterType::FeatureClass(GeometryType::Any),
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Height Field".to_owned(),
            flags: vec!["--height_field".to_owned()],
            description:
                "The field supplying height values; geometry Z is used when unset.".to_owned(),
            parameter_type: ParameterType::Field(AttributeType::Number),
            direction: ParameterDirection::Optional,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Surface Feature Type".to_owned(),
            flags: vec!["--sf_type".to_owned()],
            description: "How the features contribute to the terrain surface.".to_owned(),
            parameter_type: ParameterType::CodedValue(CodedValueDomain::new(
                "Surface Feature Type",
                &[
                    ("MASS_POINTS", "Mass points"),
                    ("ON_SURFACE", "Draped on the surface"),
                    ("HARDLINE", "Hard breakline"),
                    ("SOFTLINE", "Soft breakline"),
                    ("HARDCLIP", "Hard clip polygon"),
                    ("SOFTCLIP", "Soft clip polygon"),
                    ("HARDERASE", "Hard erase polygon"),
                    ("SOFTERASE", "Soft erase polygon"),
                    ("HARDREPLACE", "Hard replace polygon"),
                    ("SOFTREPLACE", "Soft replace polygon"),
                    ("ANCHORPOINTS", "Anchor points"),
                ],
            )),
            direction: ParameterDirection::Optional,
            default_value: Some("MASS_POINTS".to_owned()),
        });

        parameters.push(ToolParameter {
            name: "Group".to_owned(),
            flags: vec!["--group".to_owned()],
            description:
                "Group number for data sources representing the same geography at different scales."
                    .to_owned(),
            parameter_type: ParameterType::Long,
            direction: ParameterDirection::Optional,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Minimum Resolution".to_owned(),
            flags: vec!["--min_resolution".to_owned()],
            description: "The coarsest pyramid resolution the features participate in.".to_owned(),
            parameter_type: ParameterType::Double,
            direction: ParameterDirection::Optional,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Maximum Resolution".to_owned(),
            flags: vec!["--max_resolution".to_owned()],
            description: "The finest pyramid resolution the features participate in.".to_owned(),
            parameter_type: ParameterType::Double,
            direction: ParameterDirection::Optional,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Overview".to_owned(),
            flags: vec!["--overview".to_owned()],
            description: "Whether the features participate in the coarsest overview.".to_owned(),
            parameter_type: ParameterType::Boolean,
            direction: ParameterDirection::Optional,
            default_value: Some("true".to_owned()),
        });

        parameters.push(ToolParameter {
            name: "Embed".to_owned(),
            flags: vec!["--embed".to_owned()],
            description:
                "Whether the source points are copied into a hidden, terrain-owned feature class."
                    .to_owned(),
            parameter_type: ParameterType::Boolean,
            direction: ParameterDirection::Optional,
            default_value: Some("false".to_owned()),
        });

        parameters.push(ToolParameter {
            name: "Anchor".to_owned(),
            flags: vec!["--anchor".to_owned()],
            description: "Whether the points are exempt from thinning across all pyramid levels."
                .to_owned(),
            parameter_type: ParameterType::Boolean,
            direction: ParameterDirection::Optional,
            default_value: Some("false".to_owned()),
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
            "--in_terrain=gis.gdb/elevation/terrain --in_features=gis.gdb/elevation/points --sf_type=MASS_POINTS",
        );

        AddFeatureClassToTerrain {
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

impl GeoprocessingTool for AddFeatureClassToTerrain {
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
