use crate::tools::*;

/// Converts radar reflectivity into calibrated backscatter.
pub struct ApplyRadiometricCalibration {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl ApplyRadiometricCalibration {
    pub fn new() -> ApplyRadiometricCalibration {
        // public constructor
        let name = "ApplyRadiometricCalibration".to_string();
        let display_name = "Apply Radiometric Calibration".to_string();
        let toolbox = "Synthetic Aperture Radar".to_string();
        let alias = "ia".to_string();
        let description = "Converts radar reflectivity into calibrated backscatter.".to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Radar Data".to_owned(),
            flags: vec!["-i".to_owned(), "--in_radar_data".to_owned()],
            description: "The radar data to calibrate.".to_owned(),
            parameter_type: ParameterType::RasterDataset,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Output Radar Data".to_owned(),
            flags: vec!["-o".to_owned(), "--out_radar_data".to_owned()],
            description: "The calibrated radar dataset to create.".to_owned(),
            parameter_type: ParameterType::RasterDataset,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Calibration Type".to_owned(),
            flags: vec!["--calibration_type".to_owned()],
            description: "The backscatter convention of the output.".to_owned(),
            parameter_type: ParameterType::CodedValue(CodedValueDomain::new(
                "calibration_type",
                &[
                    ("BETA_NOUGHT", "Radar brightness in slant range"),
                    ("SIGMA_NOUGHT", "Backscatter per unit ground area"),
                    ("GAMMA_NOUGHT", "Backscatter normalized by incidence angle"),
                    ("NONE", "No calibration applied"),
                ],
            )),
            direction: ParameterDirection::Optional,
            default_value: Some("BETA_NOUGHT".to_owned()),
        });

        let valid_environments = vec![
            EnvironmentKey::Workspace,
            EnvironmentKey::ScratchWorkspace,
            EnvironmentKey::Extent,
            EnvironmentKey::CellSize,
            EnvironmentKey::Compression,
            EnvironmentKey::Pyramid,
            EnvironmentKey::Nodata,
            EnvironmentKey::ParallelProcessingFactor,
        ];

        let usage = example_usage(
            &name,
            "-i=s1_grd.crf -o=s1_beta.crf --calibration_type=BETA_NOUGHT",
        );

        ApplyRadiometricCalibration {
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

impl GeoprocessingTool for ApplyRadiometricCalibration {
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
