use crate::tools::*;

/// Generates a reduced-resolution raster where each output cell summarizes a
/// block of input cells.
pub struct Aggregate {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl Aggregate {
    pub fn new() -> Aggregate {
        // public constructor
        let name = "Aggregate".to_string();
        let display_name = "Aggregate".to_string();
        let toolbox = "Raster Generalization".to_string();
        let alias = "sa".to_string();
        let description =
            "Generates a reduced-resolution raster by summarizing blocks of input cells."
                .to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Raster".to_owned(),
            flags: vec!["-i".to_owned(), "--in_raster".to_owned()],
            description: "The raster to aggregate.".to_owned(),
            parameter_type: ParameterType::RasterDataset,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Output Raster".to_owned(),
            flags: vec!["-o".to_owned(), "--out_raster".to_owned()],
            description: "The aggregated raster to create.".to_owned(),
            parameter_type: ParameterType::RasterDataset,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Cell Factor".to_owned(),
            flags: vec!["--cell_factor".to_owned()],
            description: "How many input cells, per side, make one output cell.".to_owned(),
            parameter_type: ParameterType::Long,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Aggregation Technique".to_owned(),
            flags: vec!["--aggregation_type".to_owned()],
            description: "The statistic summarizing each block.".to_owned(),
            parameter_type: ParameterType::CodedValue(CodedValueDomain::new(
                "aggregation_type",
                &[
                    ("SUM", "Sum of the block"),
                    ("MAXIMUM", "Largest value in the block"),
                    ("MEAN", "Average of the block"),
                    ("MEDIAN", "Median of the block"),
                    ("MINIMUM", "Smallest value in the block"),
                ],
            )),
            direction: ParameterDirection::Optional,
            default_value: Some("SUM".to_owned()),
        });

        parameters.push(ToolParameter {
            name: "Expand Extent if Needed".to_owned(),
            flags: vec!["--extent_handling".to_owned()],
            description: "How rows and columns not evenly divisible by the factor are handled."
                .to_owned(),
            parameter_type: ParameterType::CodedValue(CodedValueDomain::new(
                "extent_handling",
                &[
                    ("EXPAND", "Expand the extent to cover partial blocks"),
                    ("TRUNCATE", "Drop partial blocks at the bottom and right"),
                ],
            )),
            direction: ParameterDirection::Optional,
            default_value: Some("EXPAND".to_owned()),
        });

        parameters.push(ToolParameter {
            name: "Ignore NoData in Calculations".to_owned(),
            flags: vec!["--ignore_nodata".to_owned()],
            description: "Whether NoData cells in a block are ignored or poison the block."
                .to_owned(),
            parameter_type: ParameterType::CodedValue(CodedValueDomain::new(
                "ignore_nodata",
                &[
                    ("DATA", "Summarize the cells that have data"),
                    ("NODATA", "Any NoData cell makes the block NoData"),
                ],
            )),
            direction: ParameterDirection::Optional,
            default_value: Some("DATA".to_owned()),
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
            "-i=landcover.tif -o=landcover_90m.tif --cell_factor=3 --aggregation_type=MEDIAN",
        );

        Aggregate {
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

impl GeoprocessingTool for Aggregate {
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
