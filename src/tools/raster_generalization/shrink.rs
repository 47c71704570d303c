use crate::tools::*;

/// Shrinks selected zones of a raster by replacing their edge cells with the
/// most frequent neighboring value.
pub struct Shrink {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl Shrink {
    pub fn new() -> Shrink {
        // public constructor
        let name = "Shrink".to_string();
        let display_name = "Shrink".to_string();
        let toolbox = "Raster Generalization".to_string();
        let alias = "sa".to_string();
        let description =
            "Shrinks selected zones of a raster by a number of cells.".to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Raster".to_owned(),
            flags: vec!["-i".to_owned(), "--in_raster".to_owned()],
            description: "The raster whose zones are shrunk.".to_owned(),
            parameter_type: ParameterType::RasterDataset,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Output Raster".to_owned(),
            flags: vec!["-o".to_owned(), "--out_raster".to_owned()],
            description: "The shrunken raster to create.".to_owned(),
            parameter_type: ParameterType::RasterDataset,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Number of Cells".to_owned(),
            flags: vec!["--number_cells".to_owned()],
            description: "How many cells each selected zone loses at its edge.".to_owned(),
            parameter_type: ParameterType::Long,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Zone Values".to_owned(),
            flags: vec!["--zone_values".to_owned()],
            description: "The zone values to shrink, e.g. '5;7'.".to_owned(),
            parameter_type: ParameterType::StringList,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Shrink Method".to_owned(),
            flags: vec!["--shrink_method".to_owned()],
            description: "How replacement values are chosen while shrinking.".to_owned(),
            parameter_type: ParameterType::CodedValue(CodedValueDomain::new(
                "shrink_method",
                &[
                    ("MORPHOLOGICAL", "Mathematical morphology shrinking"),
                    ("DISTANCE", "Distance-based shrinking"),
                ],
            )),
            direction: ParameterDirection::Optional,
            default_value: Some("MORPHOLOGICAL".to_owned()),
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
            "-i=landcover.tif -o=urban_shrunk.tif --number_cells=1 --zone_values='21;22'",
        );

        Shrink {
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

impl GeoprocessingTool for Shrink {
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
