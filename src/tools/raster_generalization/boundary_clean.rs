use crate::tools::*;

/// Smooths the boundaries between zones by expanding and shrinking them.
pub struct BoundaryClean {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl BoundaryClean {
    pub fn new() -> BoundaryClean {
        // public constructor
        let name = "BoundaryClean".to_string();
        let display_name = "Boundary Clean".to_string();
        let toolbox = "Raster Generalization".to_string();
        let alias = "sa".to_string();
        let description =
            "Smooths the boundaries between raster zones by expanding and shrinking them."
                .to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Raster".to_owned(),
            flags: vec!["-i".to_owned(), "--in_raster".to_owned()],
            description: "The raster whose zone boundaries are smoothed.".to_owned(),
            parameter_type: ParameterType::RasterDataset,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Output Raster".to_owned(),
            flags: vec!["-o".to_owned(), "--out_raster".to_owned()],
            description: "The smoothed raster to create.".to_owned(),
            parameter_type: ParameterType::RasterDataset,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Sort Type".to_owned(),
            flags: vec!["--sort_type".to_owned()],
            description: "The priority zones expand with during smoothing.".to_owned(),
            parameter_type: ParameterType::CodedValue(CodedValueDomain::new(
                "sort_type",
                &[
                    ("NO_SORT", "Larger zone values have priority"),
                    ("DESCEND", "Larger zones have priority"),
                    ("ASCEND", "Smaller zones have priority"),
                ],
            )),
            direction: ParameterDirection::Optional,
            default_value: Some("NO_SORT".to_owned()),
        });

        parameters.push(ToolParameter {
            name: "Number of Runs".to_owned(),
            flags: vec!["--number_of_runs".to_owned()],
            description: "Whether the expand-shrink pass also runs in the reverse order."
                .to_owned(),
            parameter_type: ParameterType::CodedValue(CodedValueDomain::new(
                "number_of_runs",
                &[
                    ("TWO_WAY", "Run in both directions"),
                    ("ONE_WAY", "Run once in priority order"),
                ],
            )),
            direction: ParameterDirection::Optional,
            default_value: Some("TWO_WAY".to_owned()),
        });

        let valid_environments = vec![
            EnvironmentKey::Workspace,
            EnvironmentKey::ScratchWorkspace,
            EnvironmentKey::Extent,
            EnvironmentKey::CellSize,
            EnvironmentKey::SnapRaster,
            EnvironmentKey::Mask,
            EnvironmentKey::OutputCoordinateSystem,
            EnvironmentKey::Compression,
            EnvironmentKey::Pyramid,
            EnvironmentKey::Nodata,
            EnvironmentKey::TileSize,
            EnvironmentKey::ParallelProcessingFactor,
        ];

        let usage = example_usage(
            &name,
            "-i=landcover.tif -o=landcover_clean.tif --sort_type=DESCEND --number_of_runs=TWO_WAY",
        );

        BoundaryClean {
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

impl GeoprocessingTool for BoundaryClean {
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
