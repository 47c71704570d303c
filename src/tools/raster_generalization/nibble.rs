use crate::tools::*;

/// Replaces cells under a mask with the values of their nearest neighbors.
pub struct Nibble {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl Nibble {
    pub fn new() -> Nibble {
        // public constructor
        let name = "Nibble".to_string();
        let display_name = "Nibble".to_string();
        let toolbox = "Raster Generalization".to_string();
        let alias = "sa".to_string();
        let description =
            "Replaces cells under a mask with the values of their nearest neighbors.".to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Raster".to_owned(),
            flags: vec!["-i".to_owned(), "--in_raster".to_owned()],
            description: "The raster to nibble.".to_owned(),
            parameter_type: ParameterType::RasterDataset,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Input Mask Raster".to_owned(),
            flags: vec!["--in_mask_raster".to_owned()],
            description: "NoData cells in this raster mark where nibbling happens.".to_owned(),
            parameter_type: ParameterType::RasterDataset,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Output Raster".to_owned(),
            flags: vec!["-o".to_owned(), "--out_raster".to_owned()],
            description: "The nibbled raster to create.".to_owned(),
            parameter_type: ParameterType::RasterDataset,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Use NoData Values if They Are the Nearest Neighbor".to_owned(),
            flags: vec!["--nibble_values".to_owned()],
            description: "Whether NoData cells in the input may be nibbled into masked areas."
                .to_owned(),
            parameter_type: ParameterType::CodedValue(CodedValueDomain::new(
                "nibble_values",
                &[
                    ("ALL_VALUES", "NoData values may spread into the mask"),
                    ("DATA_ONLY", "Only data values may spread into the mask"),
                ],
            )),
            direction: ParameterDirection::Optional,
            default_value: Some("ALL_VALUES".to_owned()),
        });

        parameters.push(ToolParameter {
            name: "Nibble NoData Cells".to_owned(),
            flags: vec!["--nibble_nodata".to_owned()],
            description: "Whether NoData cells in the input that fall inside the mask are nibbled."
                .to_owned(),
            parameter_type: ParameterType::CodedValue(CodedValueDomain::new(
                "nibble_nodata",
                &[
                    ("PRESERVE_NODATA", "NoData cells inside the mask stay NoData"),
                    ("PROCESS_NODATA", "NoData cells inside the mask are nibbled"),
                ],
            )),
            direction: ParameterDirection::Optional,
            default_value: Some("PRESERVE_NODATA".to_owned()),
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
            "-i=landcover.tif --in_mask_raster=clouds.tif -o=landcover_filled.tif --nibble_values=DATA_ONLY",
        );

        Nibble {
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

impl GeoprocessingTool for Nibble {
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
