use crate::tools::*;

/// Orthorectifies radar data using a range-Doppler approach so it aligns
/// with other geographic data.
pub struct ApplyGeometricTerrainCorrection {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl ApplyGeometricTerrainCorrection {
    pub fn new() -> ApplyGeometricTerrainCorrection {
        // public constructor
        let name = "ApplyGeometricTerrainCorrection".to_string();
        let display_name = "Apply Geometric Terrain Correction".to_string();
        let toolbox = "Synthetic Aperture Radar".to_string();
        let alias = "ia".to_string();
        let description =
            "Orthorectifies radar data using a digital elevation model, or the ellipsoid when none is given."
                .to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Radar Data".to_owned(),
            flags: vec!["-i".to_owned(), "--in_radar_data".to_owned()],
            description: "The radar data to correct.".to_owned(),
            parameter_type: ParameterType::RasterDataset,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Output Radar Data".to_owned(),
            flags: vec!["-o".to_owned(), "--out_radar_data".to_owned()],
            description: "The corrected radar dataset to create.".to_owned(),
            parameter_type: ParameterType::RasterDataset,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "DEM Raster".to_owned(),
            flags: vec!["--in_dem_raster".to_owned()],
            description: "The elevation model used for the correction.".to_owned(),
            parameter_type: ParameterType::RasterDataset,
            direction: ParameterDirection::Optional,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Apply Geoid Correction".to_owned(),
            flags: vec!["--geoid".to_owned()],
            description:
                "Converts orthometric DEM heights to ellipsoidal heights before correction."
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
            EnvironmentKey::SnapRaster,
            EnvironmentKey::OutputCoordinateSystem,
            EnvironmentKey::Compression,
            EnvironmentKey::Pyramid,
            EnvironmentKey::Nodata,
            EnvironmentKey::ParallelProcessingFactor,
        ];

        let usage = example_usage(
            &name,
            "-i=s1_grd.crf -o=s1_gtc.crf --in_dem_raster=glo30.crf --geoid=true",
        );

        ApplyGeometricTerrainCorrection {
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

impl GeoprocessingTool for ApplyGeometricTerrainCorrection {
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
