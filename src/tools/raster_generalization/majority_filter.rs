use crate::tools::*;

/// Replaces cells based on the majority value of their contiguous neighbors.
pub struct MajorityFilter {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl MajorityFilter {
    pub fn new() -> MajorityFilter {
        // public constructor
        let name = "MajorityFilter".to_string();
        let display_name = "Majority Filter".to_string();
        let toolbox = "Raster Generalization".to_string();
        let alias = "sa".to_string();
        let description =
            "Replaces cells based on the majority value of their contiguous neighbors.".to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Raster".to_owned(),
            flags: vec!["-i".to_owned(), "--in_raster".to_owned()],
            description: "The raster to filter.".to_owned(),
            parameter_type: ParameterType::RasterDataset,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Output Raster".to_owned(),
            flags: vec!["-o".to_owned(), "--out_raster".to_owned()],
            description: "The filtered raster to create.".to_owned(),
            parameter_type: ParameterType::RasterDataset,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Number of Neighbors".to_owned(),
            flags: vec!["--number_neighbors".to_owned()],
            description: "How many neighboring cells participate in the vote.".to_owned(),
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
            name: "Replacement Threshold".to_owned(),
            flags: vec!["--majority_definition".to_owned()],
            description: "How many neighbors must agree before a cell is replaced.".to_owned(),
            parameter_type: ParameterType::CodedValue(CodedValueDomain::new(
                "majority_definition",
                &[
                    ("MAJORITY", "A strict majority of neighbors"),
                    ("HALF", "Half of the neighbors"),
                ],
            )),
            direction: ParameterDirection::Optional,
            default_value: Some("MAJORITY".to_owned()),
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
            "-i=landcover.tif -o=landcover_filtered.tif --number_neighbors=EIGHT --majority_definition=HALF",
        );

        MajorityFilter {
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

impl GeoprocessingTool for MajorityFilter {
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
