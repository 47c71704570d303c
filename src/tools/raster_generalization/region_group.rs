use crate::tools::*;

/// Assigns a unique number to each connected region of cells in a raster.
///
/// Connectivity is evaluated over the four orthogonal neighbors or over all
/// eight; regions of the same zone value never merge across a zone boundary
/// unless CROSS connectivity is requested.
pub struct RegionGroup {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl RegionGroup {
    pub fn new() -> RegionGroup {
        // public constructor
        let name = "RegionGroup".to_string();
        let display_name = "Region Group".to_string();
        let toolbox = "Raster Generalization".to_string();
        let alias = "sa".to_string();
        let description =
            "Assigns a unique number to each connected region of cells in a raster.".to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Raster".to_owned(),
            flags: vec!["-i".to_owned(), "--in_raster".to_owned()],
            description: "The raster whose connected regions are numbered.".to_owned(),
            parameter_type: ParameterType::RasterDataset,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Output Raster".to_owned(),
            flags: vec!["-o".to_owned(), "--out_raster".to_owned()],
            description: "The region raster to create.".to_owned(),
            parameter_type: ParameterType::RasterDataset,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Number of Neighbors".to_owned(),
            flags: vec!["--number_neighbors".to_owned()],
            description: "The connectivity used when grouping cells.".to_owned(),
            parameter_type: ParameterType::CodedValue(CodedValueDomain::new(
                "number_neighbors",
                &[
                    ("FOUR", "The four orthogonal neighbors"),
                    ("EIGHT", "All eight neighbors"),
                ],
            )),
            direction: ParameterDirection::Optional,
            default_value: Some("FOUR".to_owned()),
        });

        parameters.push(ToolParameter {
            name: "Zone Connectivity".to_owned(),
            flags: vec!["--zone_connectivity".to_owned()],
            description: "Whether regions are bounded by zone values or only by data.".to_owned(),
            parameter_type: ParameterType::CodedValue(CodedValueDomain::new(
                "zone_connectivity",
                &[
                    ("WITHIN", "Neighbors must share the same zone value"),
                    ("CROSS", "Neighbors may have any zone value"),
                ],
            )),
            direction: ParameterDirection::Optional,
            default_value: Some("WITHIN".to_owned()),
        });

        parameters.push(ToolParameter {
            name: "Add Link Field to Output".to_owned(),
            flags: vec!["--add_link".to_owned()],
            description: "Whether a LINK field back to the original zone value is added."
                .to_owned(),
            parameter_type: ParameterType::Boolean,
            direction: ParameterDirection::Optional,
            default_value: Some("true".to_owned()),
        });

        parameters.push(ToolParameter {
            name: "Excluded Value".to_owned(),
            flags: vec!["--excluded_value".to_owned()],
            description: "A zone value left out of the connectivity evaluation.".to_owned(),
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
            "-i=landcover.tif -o=regions.tif --number_neighbors=EIGHT --zone_connectivity=WITHIN",
        );

        RegionGroup {
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

impl GeoprocessingTool for RegionGroup {
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
