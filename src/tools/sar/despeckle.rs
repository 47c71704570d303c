use crate::tools::*;

/// Reduces speckle noise in radar data with an adaptive filter.
pub struct Despeckle {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl Despeckle {
    pub fn new() -> Despeckle {
        // public constructor
        let name = "Despeckle".to_string();
        let display_name = "Despeckle".to_string();
        let toolbox = "Synthetic Aperture Radar".to_string();
        let alias = "ia".to_string();
        let description = "Reduces speckle noise in radar data with an adaptive filter.".to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Radar Data".to_owned(),
            flags: vec!["-i".to_owned(), "--in_radar_data".to_owned()],
            description: "The radar data to filter.".to_owned(),
            parameter_type: ParameterType::RasterDataset,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Output Radar Data".to_owned(),
            flags: vec!["-o".to_owned(), "--out_radar_data".to_owned()],
            description: "The filtered radar dataset to create.".to_owned(),
            parameter_type: ParameterType::RasterDataset,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Filter Type".to_owned(),
            flags: vec!["--filter_type".to_owned()],
            description: "The speckle filter.".to_owned(),
            parameter_type: ParameterType::CodedValue(CodedValueDomain::new(
                "filter_type",
                &[
                    ("LEE", "Lee filter"),
                    ("ENHANCED_LEE", "Enhanced Lee filter"),
                    ("REFINED_LEE", "Refined Lee filter"),
                    ("FROST", "Frost filter"),
                    ("KUAN", "Kuan filter"),
                    ("GAMMA_MAP", "Gamma maximum a posteriori filter"),
                ],
            )),
            direction: ParameterDirection::Optional,
            default_value: Some("LEE".to_owned()),
        });

        parameters.push(ToolParameter {
            name: "Filter Size".to_owned(),
            flags: vec!["--filter_size".to_owned()],
            description: "The kernel size of the filter, in pixels.".to_owned(),
            parameter_type: ParameterType::CodedValue(CodedValueDomain::new(
                "filter_size",
                &[
                    ("3x3", "3 by 3 kernel"),
                    ("5x5", "5 by 5 kernel"),
                    ("7x7", "7 by 7 kernel"),
                    ("9x9", "9 by 9 kernel"),
                    ("11x11", "11 by 11 kernel"),
                ],
            )),
            direction: ParameterDirection::Optional,
            default_value: Some("3x3".to_owned()),
        });

        parameters.push(ToolParameter {
            name: "Number of Looks".to_owned(),
            flags: vec!["--number_of_looks".to_owned()],
            description: "The effective number of looks in the input, controlling noise variance."
                .to_owned(),
            parameter_type: ParameterType::Long,
            direction: ParameterDirection::Optional,
            default_value: Some("1".to_owned()),
        });

        let valid_environments = vec![
            EnvironmentKey::Workspace,
            EnvironmentKey::ScratchWorkspace,
            EnvironmentKey::Extent,
            EnvironmentKey::Compression,
            EnvironmentKey::Pyramid,
            EnvironmentKey::Nodata,
            EnvironmentKey::ParallelProcessingFactor,
        ];

        let usage = example_usage(
            &name,
            "-i=s1_gamma_rtf.crf -o=s1_despeckled.crf --filter_type=REFINED_LEE --filter_size=5x5",
        );

        Despeckle {
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

impl GeoprocessingTool for Despeckle {
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
