use crate::tools::*;

/// Thins rasterized linear features, such as scanned contour lines, down to a
/// one-cell-wide representation.
pub struct Thin {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl Thin {
    pub fn new() -> Thin {
        // public constructor
        let name = "Thin".to_string();
        let display_name = "Thin".to_string();
        let toolbox = "Raster Generalization".to_string();
        let alias = "sa".to_string();
        let description =
            "Thins rasterized linear features to a one-cell-wide representation.".to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Raster".to_owned(),
            flags: vec!["-i".to_owned(), "--in_raster".to_owned()],
            description: "The raster holding the linear features to thin.".to_owned(),
            parameter_type: ParameterType::RasterDataset,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Output Raster".to_owned(),
            flags: vec!["-o".to_owned(), "--out_raster".to_owned()],
            description: "The thinned raster to create.".to_owned(),
            parameter_type: ParameterType::RasterDataset,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Background Value".to_owned(),
            flags: vec!["--background_value".to_owned()],
            description: "Which cell values count as background rather than feature.".to_owned(),
            parameter_type: ParameterType::CodedValue(CodedValueDomain::new(
                "background_value",
                &[
                    ("ZERO", "Zero and negative cells are background"),
                    ("NODATA", "NoData cells are background"),
                ],
            )),
            direction: ParameterDirection::Optional,
            default_value: Some("ZERO".to_owned()),
        });

        parameters.push(ToolParameter {
            name: "Filter Input First".to_owned(),
            flags: vec!["--filter".to_owned()],
            description: "Whether a smoothing filter runs before thinning.".to_owned(),
            parameter_type: ParameterType::CodedValue(CodedValueDomain::new(
                "filter",
                &[
                    ("NO_FILTER", "Thin the raster as-is"),
                    ("FILTER", "Filter the raster before thinning"),
                ],
            )),
            direction: ParameterDirection::Optional,
            default_value: Some("NO_FILTER".to_owned()),
        });

        parameters.push(ToolParameter {
            name: "Shape for Corners".to_owned(),
            flags: vec!["--corners".to_owned()],
            description: "Whether turns and junctions are rounded or kept sharp.".to_owned(),
            parameter_type: ParameterType::CodedValue(CodedValueDomain::new(
                "corners",
                &[
                    ("ROUND", "Smooth corners, suited to contours"),
                    ("SHARP", "Rectangular corners, suited to street grids"),
                ],
            )),
            direction: ParameterDirection::Optional,
            default_value: Some("ROUND".to_owned()),
        });

        parameters.push(ToolParameter {
            name: "Maximum Thickness of Input Linear Features".to_owned(),
            flags: vec!["--maximum_thickness".to_owned()],
            description: "The widest feature, in map units, that is still thinned.".to_owned(),
            parameter_type: ParameterType::Double,
            direction: ParameterDirection::Optional,
            default_value: None,
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
            "-i=scanned_contours.tif -o=contours_thin.tif --corners=ROUND --maximum_thickness=10.0",
        );

        Thin {
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

impl GeoprocessingTool for Thin {
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
