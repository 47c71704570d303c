use crate::tools::*;

/// Interpolates a raster surface from a terrain dataset. The pyramid level
/// used for interpolation controls the trade-off between fidelity and speed.
pub struct TerrainToRaster {
    name: String,
    display_name: String,
    description: String,
    toolbox: String,
    alias: String,
    parameters: Vec<ToolParameter>,
    valid_environments: Vec<EnvironmentKey>,
    example_usage: String,
}

impl TerrainToRaster {
    pub fn new() -> TerrainToRaster {
        // public constructor
        let name = "TerrainToRaster".to_string();
        let display_name = "Terrain To Raster".to_string();
        let toolbox = "Terrain Dataset".to_string();
        let alias = "3d".to_string();
        let description = "Interpolates a raster surface from a terrain dataset.".to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input Terrain".to_owned(),
            flags: vec!["-i".to_owned(), "--in_terrain".to_owned()],
            description: "The terrain dataset to rasterize.".to_owned(),
            parameter_type: ParameterType::TerrainDataset,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Output Raster".to_owned(),
            flags: vec!["-o".to_owned(), "--out_raster".to_owned()],
            description: "The raster dataset to create.".to_owned(),
            parameter_type: ParameterType::RasterDataset,
            direction: ParameterDirection::Required,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Output Data Type".to_owned(),
            flags: vec!["--data_type".to_owned()],
            description: "The cell value type of the output raster.".to_owned(),
            parameter_type: ParameterType::CodedValue(CodedValueDomain::new(
                "data_type",
                &[
                    ("FLOAT", "32-bit floating point cells"),
                    ("INT", "32-bit integer cells"),
                ],
            )),
            direction: ParameterDirection::Optional,
            default_value: Some("FLOAT".to_owned()),
        });

        parameters.push(ToolParameter {
            name: "Method".to_owned(),
            flags: vec!["--method".to_owned()],
            description: "The interpolation method used to derive cell values.".to_owned(),
            parameter_type: ParameterType::CodedValue(CodedValueDomain::new(
                "method",
                &[
                    ("LINEAR", "Linear interpolation across triangles"),
                    ("NATURAL_NEIGHBORS", "Natural neighbors interpolation"),
                ],
            )),
            direction: ParameterDirection::Optional,
            default_value: Some("LINEAR".to_owned()),
        });

        parameters.push(ToolParameter {
            name: "Sampling Distance".to_owned(),
            flags: vec!["--sample_distance".to_owned()],
            description:
                "The sampling method and cell size, for example 'CELLSIZE 10' or 'OBSERVATIONS 250'."
                    .to_owned(),
            parameter_type: ParameterType::String,
            direction: ParameterDirection::Optional,
            default_value: None,
        });

        parameters.push(ToolParameter {
            name: "Pyramid Level Resolution".to_owned(),
            flags: vec!["--pyramid_level_resolution".to_owned()],
            description:
                "The resolution of the pyramid level to interpolate from. Zero means full resolution."
                    .to_owned(),
            parameter_type: ParameterType::Double,
            direction: ParameterDirection::Optional,
            default_value: Some("0".to_owned()),
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
            EnvironmentKey::TileSize,
            EnvironmentKey::ParallelProcessingFactor,
        ];

        let usage = example_usage(
            &name,
            "--in_terrain=gis.gdb/elevation/terrain -o=elev10m.tif --method=NATURAL_NEIGHBORS --sample_distance='CELLSIZE 10'",
        );

        TerrainToRaster {
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

impl GeoprocessingTool for TerrainToRaster {
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
