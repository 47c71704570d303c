use crate::tools::*;

/// Converts radar data between amplitude, intensity, and decibel scalings.
pub struct ConvertSARUnits {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl ConvertSARUnits {
    pub fn new() -> ConvertSARUnits {
        // public constructor
        let name = "ConvertSARUnits".to_string();
        let display_name = "Convert SAR Units".to_string();
        let toolbox = "Synthetic Aperture Radar".to_string();
        let alias = "ia".to_string();
        let description =
            "Converts radar data between amplitude, intensity, and decibel scalings.".to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Radar Data".to_owned(),
            flags: vec!["-i".to_owned(), "--in_radar_data".to_owned()],
            description: "The radar data to convert.".to_owned(),
            parameter_type: ParameterType::RasterDataset,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Output Radar Data".to_owned(),
            flags: vec!["-o".to_owned(), "--out_radar_data".to_owned()],
            description: "The converted radar dataset to create.".to_owned(),
            parameter_type: ParameterType::RasterDataset,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Conversion Type".to_owned(),
            flags: vec!["--conversion_type".to_owned()],
            description: "The scaling conversion to apply.".to_owned(),
            parameter_type: ParameterType::CodedValue(CodedValueDomain::new(
                "conversion_type",
                &[
                    ("LINEAR_TO_DB", "Linear power to decibels"),
                    ("DB_TO_LINEAR", "Decibels to linear power"),
                    ("AMPLITUDE_TO_INTENSITY", "Amplitude to intensity"),
                    ("INTENSITY_TO_AMPLITUDE", "Intensity to amplitude"),
                ],
            )),
            direction: ParameterDirection::Optional,
            default_value: Some("LINEAR_TO_DB".to_owned()),
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
            "-i=s1_gamma_rtf.crf -o=s1_gamma_db.crf --conversion_type=LINEAR_TO_DB",
        );

        ConvertSARUnits {
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

impl GeoprocessingTool for ConvertSARUnits {
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
