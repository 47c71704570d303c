use crate::tools::*;

/// Corrects backscatter distortions caused by topography, using an
/// elevation model.
pub struct ApplyRadiometricTerrainFlattening {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl ApplyRadiometricTerrainFlattening {
    pub fn new() -> ApplyRadiometricTerrainFlattening {
        // public constructor
        let name = "ApplyRadiometricTerrainFlattening".to_string();
        let display_name = "Apply Radiometric Terrain Flattening".to_string();
        let toolbox = "Synthetic Aperture Radar".to_string();
        let alias = "ia".to_string();
        let description =
            "Corrects radiometric distortions caused by topography using an elevation model."
                .to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Radar Data".to_owned(),
            flags: vec!["-i".to_owned(), "--in_radar_data".to_owned()],
            description: "Calibrated beta nought radar data to flatten.".to_owned(),
            parameter_type: ParameterType::RasterDataset,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Output Radar Data".to_owned(),
            flags: vec!["-o".to_owned(), "--out_radar_data".to_owned()],
            description: "The terrain-flattened radar dataset to create.".to_owned(),
            parameter_type: ParameterType::RasterDataset,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "DEM Raster".to_owned(),
            flags: vec!["--in_dem_raster".to_owned()],
            description: "The elevation model used for the flattening.".to_owned(),
            parameter_type: ParameterType::RasterDataset,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Apply Geoid Correction".to_owned(),
            flags: vec!["--geoid".to_owned()],
            description:
                "Converts orthometric DEM heights to ellipsoidal heights before flattening."
                    .to_owned(),
            parameter_type: ParameterType::Boolean,
            direction: ParameterDirection::Optional,
            default_value: Some("true".to_owned()),
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
            "-i=s1_beta.crf -o=s1_gamma_rtf.crf --in_dem_raster=glo30.crf",
        );

        ApplyRadiometricTerrainFlattening {
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

impl GeoprocessingTool for ApplyRadiometricTerrainFlattening {
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
